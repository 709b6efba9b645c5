//! Traits and types used for identifying vertices and edges in graphs.
//!
//! All types that are supposed to be used as vertex/edge handles must
//! implement [`IdType`]. For better performance and more functionality (dense
//! labels, distance matrices), they should also implement [`IntegerIdType`]
//! if possible.
//!
//! The default handle types are [`VertexId`] and [`EdgeId`]. They are of size
//! `u64` by default, but this can be changed via their generic parameter `N`.

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

/// A unique identification of a vertex or edge in a graph.
///
/// Handles are opaque ordinal values. They never carry ownership of graph
/// data; they are lookup keys into the graph and into [labels](crate::label).
///
/// Any handle type must have a representation for a
/// "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)" value meaning
/// "no handle". For integers, we use the maximum value of the corresponding
/// type for the sentinel, so we don't introduce the overhead of using
/// `Option<int>` and can use 0 as the first index as is natural.
pub trait IdType: Clone + Ord + Hash + Debug {
    /// Conceptually `None` in `Option<ID>`, but without using `Option`.
    fn sentinel() -> Self;

    /// Determines if the handle type is representable by an integer. See
    /// [`IntegerIdType`] for more details.
    fn is_integer() -> bool;

    /// Converts a handle into the corresponding `usize`.
    ///
    /// # Panics
    ///
    /// Types for which [`IdType::is_integer`] returns `false` should panic.
    fn as_usize(&self) -> usize;

    /// Converts a `usize` into the corresponding handle.
    ///
    /// # Panics
    ///
    /// Types for which [`IdType::is_integer`] returns `false` should panic.
    fn from_usize(index: usize) -> Self;

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }
}

/// Type-level specification that a handle type is representable by integer.
///
/// All integer values up to some upper bound should be valid handles and
/// there should be no discontinuity, so that algorithms can treat the handle
/// as an index into a contiguous array.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {}

/// The default representation of an integer handle for vertices. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<N = u64>(N);

/// The default representation of an integer handle for edges. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId<N = u64>(N);

/// Specification of vertex and edge handle types pair.
///
/// The main purpose is a reduction of the number of generic parameters from
/// two to one (accepting the increase of associated types).
pub trait IdPair {
    /// Handle type for vertices.
    type VertexId: IdType;

    /// Handle type for edges.
    type EdgeId: IdType;
}

/// Default indexing using [`VertexId`] and [`EdgeId`] as the handle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefaultId {}

impl IdPair for DefaultId {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

/// Custom indexing using `VI` and `EI` generic types as the handle pair.
pub struct CustomId<VI, EI> {
    ty: PhantomData<fn() -> (VI, EI)>,
}

impl<VI: IdType, EI: IdType> IdPair for CustomId<VI, EI> {
    type VertexId = VI;
    type EdgeId = EI;
}

macro_rules! impl_int_id {
    ($id_ty:ident, $int_ty:ty) => {
        impl IdType for $id_ty<$int_ty> {
            fn sentinel() -> Self {
                Self(<$int_ty>::MAX)
            }

            fn is_integer() -> bool {
                true
            }

            fn as_usize(&self) -> usize {
                self.0.try_into().expect("id type overflow")
            }

            fn from_usize(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }
        }

        impl From<usize> for $id_ty<$int_ty> {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty<$int_ty>> for usize {
            fn from(id: $id_ty<$int_ty>) -> Self {
                id.as_usize()
            }
        }

        impl IntegerIdType for $id_ty<$int_ty> {}
    };
}

impl_int_id!(VertexId, usize);
impl_int_id!(VertexId, u64);
impl_int_id!(VertexId, u32);
impl_int_id!(VertexId, u16);
impl_int_id!(VertexId, u8);

impl_int_id!(EdgeId, usize);
impl_int_id!(EdgeId, u64);
impl_int_id!(EdgeId, u32);
impl_int_id!(EdgeId, u16);
impl_int_id!(EdgeId, u8);
