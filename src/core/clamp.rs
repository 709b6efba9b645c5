//! Clamped (saturating) accumulation.
//!
//! Every place where a finite distance is combined with an edge weight goes
//! through a clamp with an "infinity" ceiling, so that the sum can never wrap
//! past the numeric representation's limits when one operand is near the
//! ceiling. Saturation is a deliberate arithmetic policy here, not an error
//! condition.

use super::weight::Weight;

/// An accumulate operator paired with a strictly-below compare operator and a
/// ceiling.
///
/// [`Clamped::combine`] returns `accumulate(a, b)` when the result stays
/// strictly below the ceiling, and the ceiling otherwise. A ceiling operand
/// is absorbing: combining anything with the ceiling yields the ceiling,
/// which is what makes "unreachable + weight = unreachable" hold for integer
/// representations where the ceiling is the maximum value.
pub struct Clamped<A, C, W> {
    accumulate: A,
    compare: C,
    ceiling: W,
}

impl<A, C, W> Clamped<A, C, W>
where
    A: Fn(&W, &W) -> Option<W>,
    C: Fn(&W, &W) -> bool,
    W: Clone,
{
    /// Creates a clamp. `accumulate` returns `None` when the sum is not
    /// representable; `compare(a, b)` holds when `a` is strictly below `b`.
    pub fn new(accumulate: A, compare: C, ceiling: W) -> Self {
        Self {
            accumulate,
            compare,
            ceiling,
        }
    }

    pub fn ceiling(&self) -> &W {
        &self.ceiling
    }

    /// Returns `true` when `a` is strictly better (below) `b`.
    pub fn better(&self, a: &W, b: &W) -> bool {
        (self.compare)(a, b)
    }

    /// Accumulates `a` and `b`, clamping the result at the ceiling.
    pub fn combine(&self, a: &W, b: &W) -> W {
        if !self.better(a, &self.ceiling) || !self.better(b, &self.ceiling) {
            return self.ceiling.clone();
        }

        match (self.accumulate)(a, b) {
            Some(sum) if self.better(&sum, &self.ceiling) => sum,
            _ => self.ceiling.clone(),
        }
    }
}

/// Adds two weights, clamping the sum at [`Weight::inf`].
///
/// An infinite operand is absorbing. This is the accumulation used by all
/// shortest-path engines in this crate.
pub fn clamped_add<W: Weight>(a: &W, b: &W) -> W {
    if !(*a < W::inf()) || !(*b < W::inf()) {
        return W::inf();
    }

    match a.checked_add(b) {
        Some(sum) if sum < W::inf() => sum,
        _ => W::inf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_ceiling() {
        assert_eq!(clamped_add(&(u32::MAX - 1), &1_000_000), u32::MAX);
        assert_eq!(clamped_add(&(i32::MAX - 1), &i32::MAX), i32::MAX);
    }

    #[test]
    fn never_wraps_negative() {
        let near_inf = i64::MAX - 1;
        let sum = clamped_add(&near_inf, &near_inf);
        assert!(sum >= near_inf);
        assert_eq!(sum, i64::MAX);
    }

    #[test]
    fn infinity_absorbs() {
        assert_eq!(clamped_add(&i32::MAX, &-1), i32::MAX);
        assert_eq!(clamped_add(&f64::INFINITY, &-1.0), f64::INFINITY);
    }

    #[test]
    fn finite_sums_pass_through() {
        assert_eq!(clamped_add(&3u32, &4), 7);
        assert_eq!(clamped_add(&3i32, &-4), -1);
        assert_eq!(clamped_add(&1.5f64, &2.25), 3.75);
    }

    #[test]
    fn custom_operators() {
        // Multiplication with a ceiling of 100.
        let clamp = Clamped::new(|a: &u32, b: &u32| a.checked_mul(*b), |a, b| a < b, 100u32);

        assert_eq!(clamp.combine(&7, &9), 63);
        assert_eq!(clamp.combine(&20, &30), 100);
        assert_eq!(clamp.combine(&100, &0), 100);
    }
}
