//! The graph contract consumed by all algorithms in this crate.
//!
//! The concrete storage of a graph is an external concern; the traversal and
//! shortest-path engines only require the capability traits below. A graph is
//! expected to be immutable for the duration of one algorithm call.

use super::{
    id::{IdType, IntegerIdType},
    marker::{Direction, EdgeType},
};

/// An edge as seen from one of its endpoints during neighbor iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRef<VI: IdType, EI: IdType> {
    /// The vertex on the other side of the edge.
    pub id: VI,

    /// The connecting edge.
    pub edge: EI,
}

pub trait GraphBase {
    type VertexId: IdType;
    type EdgeId: IdType;
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    // Upper bound, if known.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }

    // Upper bound, if known.
    fn edge_count_hint(&self) -> Option<usize> {
        None
    }
}

pub trait VertexSet: GraphBase {
    type VerticesByIdIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertices_by_id().count()
    }

    /// One past the maximum valid vertex handle. Dense structures (labels,
    /// distance matrices) are sized by this bound.
    fn vertex_bound(&self) -> usize
    where
        Self::VertexId: IntegerIdType,
    {
        self.vertices_by_id()
            .map(|v| v.as_usize() + 1)
            .max()
            .unwrap_or_default()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices_by_id().any(|v| &v == id)
    }
}

pub trait EdgeSet: GraphBase {
    type EdgesByIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_>;

    /// Returns the `(source, target)` pair of the edge, or `None` if the edge
    /// does not exist. For undirected graphs the order is the insertion
    /// order of the endpoints.
    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    fn source(&self, id: &Self::EdgeId) -> Option<Self::VertexId> {
        self.endpoints(id).map(|(from, _)| from)
    }

    fn target(&self, id: &Self::EdgeId) -> Option<Self::VertexId> {
        self.endpoints(id).map(|(_, to)| to)
    }

    fn edge_count(&self) -> usize {
        self.edges_by_id().count()
    }

    /// One past the maximum valid edge handle.
    fn edge_bound(&self) -> usize
    where
        Self::EdgeId: IntegerIdType,
    {
        self.edges_by_id()
            .map(|e| e.as_usize() + 1)
            .max()
            .unwrap_or_default()
    }

    fn contains_edge(&self, id: &Self::EdgeId) -> bool {
        self.edges_by_id().any(|e| &e == id)
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = NeighborRef<Self::VertexId, Self::EdgeId>>
    where
        Self: 'a;

    /// Iterates over the edges incident to `from` in the given direction.
    ///
    /// For undirected graphs, the direction is ignored and all incident edges
    /// are reported.
    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn out_degree(&self, id: &Self::VertexId) -> usize {
        self.neighbors_directed(id, Direction::Outgoing).count()
    }
}
