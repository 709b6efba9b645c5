use std::{cmp::Ordering, ops::Add};

use super::id::IdType;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// A distance or edge weight usable by the shortest-path engines.
///
/// The value space is totally ordered through the [`Weight::Ord`] proxy and
/// has a maximum "infinity" sentinel ([`Weight::inf`]) that compares greater
/// than every finite, representable path weight. The additive identity
/// ([`Weight::zero`]) is the start distance.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered proxy for use in ordered collections such as
    /// [`BinaryHeap`](std::collections::BinaryHeap).
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;

    /// Adds two weights, returning `None` when the sum is not representable.
    ///
    /// This is the raw accumulate operator behind
    /// [`clamped_add`](crate::core::clamp::clamped_add); algorithms never
    /// call it directly.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;
}

/// Read-only lookup of the weight associated with a handle.
///
/// Implemented for any `Fn(&I) -> W` closure, which makes both label-backed
/// and attribute-backed weights usable without adapters.
pub trait GetWeight<I, W>
where
    I: IdType,
    W: Weight,
{
    fn get(&self, id: &I) -> W;

    fn get_const(&self) -> Option<W> {
        None
    }

    fn is_const(&self) -> bool {
        self.get_const().is_some()
    }
}

impl<F, I, W> GetWeight<I, W> for F
where
    F: Fn(&I) -> W,
    I: IdType,
    W: Weight,
{
    fn get(&self, id: &I) -> W {
        (self)(id)
    }
}

/// Constant weight 1 for every edge; turns a shortest-path run into hop
/// counting.
#[derive(Debug)]
pub struct Unit;

impl<I: IdType> GetWeight<I, u64> for Unit {
    fn get(&self, _id: &I) -> u64 {
        1
    }

    fn get_const(&self) -> Option<u64> {
        Some(1)
    }
}

/// A value ordered by its attached weight. Useful for priority queues keyed
/// by tentative distance.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *rhs)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                // Floats saturate to their own infinity on overflow, which
                // the clamp maps onto the ceiling.
                Some(self + rhs)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
