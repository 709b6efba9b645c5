//! Two-coloring and bipartiteness testing of undirected graphs.

use thiserror::Error;

use crate::{
    core::{
        id::IntegerIdType,
        marker::Undirected,
        GraphBase, Neighbors, VertexSet,
    },
    label::{DenseMap, PropertyMap},
    visit::{bfs, Color, EdgeEvent, Visitor},
};

/// The error returned when the graph contains an odd cycle and therefore
/// admits no two-coloring.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("graph is not bipartite")]
pub struct NotBipartite;

/// One of the two sides of a bipartition, named by the hop-distance parity
/// from the traversal root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parity {
    #[default]
    Even,
    Odd,
}

impl Parity {
    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

struct TwoColoring<'a, M> {
    parity: &'a mut M,
}

impl<'a, G, M> Visitor<G> for TwoColoring<'a, M>
where
    G: GraphBase,
    M: PropertyMap<G::VertexId, Value = Parity>,
{
    type Interrupt = NotBipartite;

    fn root_vertex(&mut self, _graph: &G, vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
        *self.parity.get_mut(vertex) = Parity::Even;
        Ok(())
    }

    fn tree_edge(&mut self, _graph: &G, event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        *self.parity.get_mut(&event.to) = self.parity.get(&event.from).flip();
        Ok(())
    }

    fn nontree_edge(&mut self, _graph: &G, event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        // Both endpoints already have their final parity. Equal parities
        // close an odd cycle.
        if self.parity.get(&event.from) == self.parity.get(&event.to) {
            Err(NotBipartite)
        } else {
            Ok(())
        }
    }
}

/// Splits the vertices of an undirected graph into two sides such that every
/// edge connects vertices of opposite sides, or fails with [`NotBipartite`]
/// when an odd cycle makes that impossible.
///
/// Disconnected graphs are fine; every component is colored from its own
/// root. A self-loop makes the graph trivially non-bipartite.
pub fn two_coloring<G>(graph: &G) -> Result<DenseMap<G::VertexId, Parity>, NotBipartite>
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Undirected>,
    G::VertexId: IntegerIdType,
{
    let mut parity = DenseMap::with_default(graph.vertex_bound());
    let mut colors = DenseMap::<_, Color>::with_default(graph.vertex_bound());
    let mut visitor = TwoColoring {
        parity: &mut parity,
    };

    bfs(graph, &mut colors, &mut visitor)?;
    Ok(parity)
}

/// Checks whether an undirected graph is bipartite.
pub fn is_bipartite<G>(graph: &G) -> bool
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Undirected>,
    G::VertexId: IntegerIdType,
{
    two_coloring(graph).is_ok()
}
