//! Compact adjacency list storage.
//!
//! This is the in-tree implementation of the [graph
//! contract](crate::core::GraphBase) used by the tests and examples. It is
//! construction-only: the algorithms in this crate treat a graph as immutable
//! for the duration of a call, so no removal API is offered. All references
//! between slots are index-based, never pointers.

use std::marker::PhantomData;

use thiserror::Error;

use crate::core::{
    id::{DefaultId, IdPair, IdType, IntegerIdType},
    marker::{Direction, EdgeType},
    GraphBase, EdgeSet, NeighborRef, Neighbors, VertexSet,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct VertexSlot<Id: IdPair, A> {
    attr: A,
    // Outgoing and incoming edge lists; undirected graphs use only the first.
    edges: [Vec<Id::EdgeId>; 2],
}

impl<Id: IdPair, A> VertexSlot<Id, A> {
    fn new(attr: A) -> Self {
        Self {
            attr,
            edges: [Vec::new(), Vec::new()],
        }
    }
}

/// The error returned when adding an edge with a missing endpoint.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddEdgeError {
    #[error("source does not exist")]
    SourceAbsent,

    #[error("destination does not exist")]
    DestinationAbsent,
}

/// Adjacency list with contiguous vertex and edge handle spaces.
///
/// `V` and `E` are vertex and edge attributes, `Ty` is
/// [`Directed`](crate::core::marker::Directed) or
/// [`Undirected`](crate::core::marker::Undirected) and `Id` chooses the
/// handle types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, E, Ty, Id: IdPair = DefaultId> {
    vertices: Vec<VertexSlot<Id, V>>,
    edges: Vec<E>,
    endpoints: Vec<[Id::VertexId; 2]>,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, E, Ty: EdgeType, Id: IdPair> AdjList<V, E, Ty, Id> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
            ty: PhantomData,
        }
    }
}

impl<V, E, Ty: EdgeType> Default for AdjList<V, E, Ty, DefaultId> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Ty: EdgeType, Id: IdPair> AdjList<V, E, Ty, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    pub fn add_vertex(&mut self, attr: V) -> Id::VertexId {
        let index = self.vertices.len();
        self.vertices.push(VertexSlot::new(attr));
        Id::VertexId::from_usize(index)
    }

    pub fn try_add_edge(
        &mut self,
        from: &Id::VertexId,
        to: &Id::VertexId,
        attr: E,
    ) -> Result<Id::EdgeId, AddEdgeError> {
        if from.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::SourceAbsent);
        }

        if to.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::DestinationAbsent);
        }

        let id = Id::EdgeId::from_usize(self.edges.len());
        self.edges.push(attr);
        self.endpoints.push([*from, *to]);

        if Ty::is_directed() {
            self.vertices[from.as_usize()].edges[Direction::Outgoing.index()].push(id);
            self.vertices[to.as_usize()].edges[Direction::Incoming.index()].push(id);
        } else {
            self.vertices[from.as_usize()].edges[Direction::Outgoing.index()].push(id);
            if from != to {
                self.vertices[to.as_usize()].edges[Direction::Outgoing.index()].push(id);
            }
        }

        Ok(id)
    }

    /// Adds an edge between existing vertices.
    ///
    /// # Panics
    ///
    /// Panics when an endpoint does not exist. Use
    /// [`try_add_edge`](Self::try_add_edge) for a fallible variant.
    pub fn add_edge(&mut self, from: &Id::VertexId, to: &Id::VertexId, attr: E) -> Id::EdgeId {
        match self.try_add_edge(from, to, attr) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I) -> Vec<Id::VertexId>
    where
        I: IntoIterator<Item = V>,
    {
        iter.into_iter().map(|attr| self.add_vertex(attr)).collect()
    }

    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (usize, usize, E)>,
    {
        for (from, to, attr) in iter {
            self.add_edge(
                &Id::VertexId::from_usize(from),
                &Id::VertexId::from_usize(to),
                attr,
            );
        }
    }

    pub fn vertex(&self, id: &Id::VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|slot| &slot.attr)
    }

    pub fn edge(&self, id: &Id::EdgeId) -> Option<&E> {
        self.edges.get(id.as_usize())
    }
}

impl<V, E, Ty: EdgeType, Id: IdPair> GraphBase for AdjList<V, E, Ty, Id> {
    type VertexId = Id::VertexId;
    type EdgeId = Id::EdgeId;
    type EdgeType = Ty;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }

    fn edge_count_hint(&self) -> Option<usize> {
        Some(self.edges.len())
    }
}

/// Iterator over a contiguous range of handles.
pub struct RangeIds<I> {
    range: std::ops::Range<usize>,
    ty: PhantomData<fn() -> I>,
}

impl<I> From<std::ops::Range<usize>> for RangeIds<I> {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            range,
            ty: PhantomData,
        }
    }
}

impl<I: IntegerIdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<V, E, Ty: EdgeType, Id: IdPair> VertexSet for AdjList<V, E, Ty, Id>
where
    Id::VertexId: IntegerIdType,
{
    type VerticesByIdIter<'a>
        = RangeIds<Id::VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertices.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }
}

impl<V, E, Ty: EdgeType, Id: IdPair> EdgeSet for AdjList<V, E, Ty, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type EdgesByIdIter<'a>
        = RangeIds<Id::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        (0..self.edges.len()).into()
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.endpoints
            .get(id.as_usize())
            .map(|[from, to]| (*from, *to))
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    fn contains_edge(&self, id: &Self::EdgeId) -> bool {
        id.as_usize() < self.edges.len()
    }
}

/// Iterator over the edges incident to a vertex.
pub struct NeighborsIter<'a, Id: IdPair> {
    edges: std::slice::Iter<'a, Id::EdgeId>,
    endpoints: &'a [[Id::VertexId; 2]],
    from: Id::VertexId,
}

impl<'a, Id: IdPair> Iterator for NeighborsIter<'a, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type Item = NeighborRef<Id::VertexId, Id::EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.edges.next()?;
        let [u, v] = self.endpoints[edge.as_usize()];

        Some(NeighborRef {
            id: if u == self.from { v } else { u },
            edge,
        })
    }
}

impl<V, E, Ty: EdgeType, Id: IdPair> Neighbors for AdjList<V, E, Ty, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type NeighborsIter<'a>
        = NeighborsIter<'a, Id>
    where
        Self: 'a;

    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        let dir = if Ty::is_directed() {
            dir
        } else {
            Direction::Outgoing
        };

        let edges = match self.vertices.get(from.as_usize()) {
            Some(slot) => slot.edges[dir.index()].iter(),
            None => [].iter(),
        };

        NeighborsIter {
            edges,
            endpoints: &self.endpoints,
            from: *from,
        }
    }
}
