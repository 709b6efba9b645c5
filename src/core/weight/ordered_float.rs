use std::cmp::Ordering;

/// Totally ordered wrapper over a float, using `total_cmp`. NaN is ordered
/// consistently instead of poisoning comparisons, so the wrapper can live in
/// ordered collections.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedFloat<T>(T);

macro_rules! impl_ordered_float {
    ($ty:ty) => {
        impl PartialEq for OrderedFloat<$ty> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for OrderedFloat<$ty> {}

        impl PartialOrd for OrderedFloat<$ty> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for OrderedFloat<$ty> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl From<$ty> for OrderedFloat<$ty> {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }

        impl From<OrderedFloat<$ty>> for $ty {
            fn from(value: OrderedFloat<$ty>) -> Self {
                value.0
            }
        }
    };
}

impl_ordered_float!(f32);
impl_ordered_float!(f64);
