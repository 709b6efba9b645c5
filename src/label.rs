//! Labels (property maps): external mutable mappings from a handle to an
//! associated value.
//!
//! All algorithm state that outlives a call — distances, predecessors, colors
//! — is stored in caller-supplied labels, never in the graph. Two backings
//! satisfy the same contract: [`DenseMap`] (contiguous array indexed by the
//! handle's ordinal value, requires a compact handle space and pre-sizing by
//! the caller) and [`SparseMap`] (hash map with a default value, no density
//! requirement). There is no caching or staleness: every read observes the
//! most recent write for that handle.

use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::core::id::{IdType, IntegerIdType};

/// A pure mapping from a handle to a mutable reference of an associated
/// value.
pub trait PropertyMap<I: IdType> {
    type Value;

    fn get(&self, id: &I) -> &Self::Value;
    fn get_mut(&mut self, id: &I) -> &mut Self::Value;
}

/// Dense, array-backed label with O(1) access.
///
/// The caller pre-sizes the backing to the graph's
/// [`vertex_bound`](crate::core::VertexSet::vertex_bound) (or edge bound);
/// accessing a handle beyond the pre-sized bound panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMap<I, V> {
    values: Vec<V>,
    ty: PhantomData<fn() -> I>,
}

impl<I: IntegerIdType, V> DenseMap<I, V> {
    /// Creates a label for handles `0..bound`, every slot holding a clone of
    /// `value`.
    pub fn with_value(bound: usize, value: V) -> Self
    where
        V: Clone,
    {
        Self {
            values: vec![value; bound],
            ty: PhantomData,
        }
    }

    pub fn with_default(bound: usize) -> Self
    where
        V: Default + Clone,
    {
        Self::with_value(bound, V::default())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(handle, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &V)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (I::from_usize(index), value))
    }

    /// Re-establishes `value` in every slot so the label can be reused for
    /// another call.
    pub fn reset(&mut self, value: V)
    where
        V: Clone,
    {
        self.values.fill(value);
    }
}

impl<I: IntegerIdType, V> PropertyMap<I> for DenseMap<I, V> {
    type Value = V;

    fn get(&self, id: &I) -> &V {
        &self.values[id.as_usize()]
    }

    fn get_mut(&mut self, id: &I) -> &mut V {
        &mut self.values[id.as_usize()]
    }
}

impl<I: IntegerIdType, V> std::ops::Index<&I> for DenseMap<I, V> {
    type Output = V;

    fn index(&self, id: &I) -> &V {
        self.get(id)
    }
}

impl<I: IntegerIdType, V> FromIterator<V> for DenseMap<I, V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
            ty: PhantomData,
        }
    }
}

/// Hash-backed label with O(1) amortized access and no density requirement on
/// the handle space.
///
/// Handles that were never written read as the default value; the first
/// mutable access of such a handle materializes the slot.
#[derive(Debug, Clone)]
pub struct SparseMap<I, V> {
    values: FxHashMap<I, V>,
    default: V,
}

impl<I: IdType, V: Clone> SparseMap<I, V> {
    pub fn new(default: V) -> Self {
        Self {
            values: FxHashMap::default(),
            default,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }
}

impl<I: IdType, V: Clone> PropertyMap<I> for SparseMap<I, V> {
    type Value = V;

    fn get(&self, id: &I) -> &V {
        self.values.get(id).unwrap_or(&self.default)
    }

    fn get_mut(&mut self, id: &I) -> &mut V {
        self.values
            .entry(id.clone())
            .or_insert_with(|| self.default.clone())
    }
}

impl<I: IdType, V: Clone> std::ops::Index<&I> for SparseMap<I, V> {
    type Output = V;

    fn index(&self, id: &I) -> &V {
        self.get(id)
    }
}
