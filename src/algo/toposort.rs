//! Topological sorting of directed acyclic graphs.

use thiserror::Error;

use crate::{
    core::{
        id::IntegerIdType,
        marker::Directed,
        GraphBase, Neighbors, VertexSet,
    },
    label::DenseMap,
    visit::{dfs, Color, EdgeEvent, Visitor},
};

/// The error returned when the graph contains a cycle and therefore has no
/// topological order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("graph is not acyclic")]
pub struct Cycle;

/// Vertices in reverse depth-first finish order; a back edge interrupts with
/// [`Cycle`].
struct ReversePostOrder<I> {
    order: Vec<I>,
}

impl<G> Visitor<G> for ReversePostOrder<G::VertexId>
where
    G: GraphBase,
{
    type Interrupt = Cycle;

    fn finished_vertex(
        &mut self,
        _graph: &G,
        vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        self.order.push(vertex.clone());
        Ok(())
    }

    fn back_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        Err(Cycle)
    }
}

/// Orders the vertices of a directed graph such that every edge points from
/// an earlier vertex to a later one.
///
/// The order is the reverse of the depth-first finish order, so it is
/// deterministic for a fixed graph iteration order. Ties between independent
/// vertices are broken arbitrarily but reproducibly.
pub fn toposort<G>(graph: &G) -> Result<Vec<G::VertexId>, Cycle>
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Directed>,
    G::VertexId: IntegerIdType,
{
    let mut colors = DenseMap::<_, Color>::with_default(graph.vertex_bound());
    let mut visitor = ReversePostOrder {
        order: Vec::with_capacity(graph.vertex_count()),
    };

    dfs(graph, &mut colors, &mut visitor)?;

    visitor.order.reverse();
    Ok(visitor.order)
}

/// Checks whether a directed graph contains a cycle.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Directed>,
    G::VertexId: IntegerIdType,
{
    struct FindBackEdge;

    impl<G: GraphBase> Visitor<G> for FindBackEdge {
        type Interrupt = Cycle;

        fn back_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
            Err(Cycle)
        }
    }

    let mut colors = DenseMap::<_, Color>::with_default(graph.vertex_bound());
    dfs(graph, &mut colors, &mut FindBackEdge).is_err()
}
