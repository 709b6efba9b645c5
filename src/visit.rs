//! Visitor-driven graph traversal.
//!
//! Both traversal engines in this module are **iterative**, that is, they
//! don't use recursion, so traversal is not limited by the size of the
//! program stack. They share the white/gray/black [`Color`] state machine and
//! notify a caller-supplied [`Visitor`] of traversal events. The visitor
//! protocol is the sole extension point of the engines: two-coloring,
//! connected components, topological sorting and distance/predecessor
//! labeling are all plain visitors (see [`record`] and [`crate::algo`]).
//!
//! A hook returning `Err` aborts the in-progress search immediately; labels
//! already written are not rolled back, so callers must re-establish labels
//! before retrying.

pub mod bfs;
pub mod dfs;
pub mod record;

#[doc(inline)]
pub use self::{
    bfs::{bfs, bfs_rooted},
    dfs::{dfs, dfs_rooted},
    record::{DistanceRecorder, PredecessorRecorder},
};

use crate::core::GraphBase;

/// Traversal state of a vertex.
///
/// Transitions are strictly white → gray → black, never backward: white means
/// undiscovered, gray means discovered but with unexamined out-edges, black
/// means all out-edges examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    White,
    Gray,
    Black,
}

/// An edge examination event passed to the edge hooks of [`Visitor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEvent<G>
where
    G: GraphBase,
{
    /// Source endpoint, from which the edge was examined.
    pub from: G::VertexId,

    /// Target endpoint.
    pub to: G::VertexId,

    /// Edge handle.
    pub edge: G::EdgeId,
}

/// A set of named callbacks invoked at traversal events, all defaulted to
/// no-ops.
///
/// A visitor never owns graph or label state beyond the call; it writes into
/// caller-supplied [labels](crate::label) if it needs to publish results.
/// Composition is achieved by delegation — wrap another visitor and call
/// through (see [`Chain`]) — not by dynamic polymorphism over unrelated
/// types.
///
/// Returning `Err` from any hook aborts the traversal and propagates the
/// interrupt value to the caller of the engine.
pub trait Visitor<G>
where
    G: GraphBase,
{
    /// The value carried out of an aborted traversal. Use
    /// [`Infallible`](std::convert::Infallible) for visitors that never
    /// interrupt.
    type Interrupt;

    /// The vertex was reset to white during engine initialization.
    fn initialized_vertex(
        &mut self,
        _graph: &G,
        _vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// The vertex starts a new traversal tree.
    fn root_vertex(&mut self, _graph: &G, _vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// The vertex was encountered for the first time (colored gray). Fires
    /// exactly once per reachable vertex per rooted search.
    fn discovered_vertex(
        &mut self,
        _graph: &G,
        _vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// The examination of the vertex's out-edges begins.
    fn started_vertex(&mut self, _graph: &G, _vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// All out-edges of the vertex were examined (colored black). For DFS
    /// this fires in post-order.
    fn finished_vertex(
        &mut self,
        _graph: &G,
        _vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// An out-edge is about to be classified.
    fn started_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// The edge's traversal first discovered its target. Fires exactly once
    /// per discovered vertex other than roots.
    fn tree_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// The edge's target was already discovered. In DFS this means the
    /// target is black; a gray target is reported as [`Visitor::back_edge`]
    /// instead. Forward and cross edges are deliberately not distinguished.
    fn nontree_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        Ok(())
    }

    /// DFS only: the edge's target is a currently in-progress (gray)
    /// ancestor, which indicates a cycle. BFS never fires this hook.
    fn back_edge(&mut self, _graph: &G, _event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        Ok(())
    }
}

/// Delegating composition of two visitors with the same interrupt type.
///
/// For every event, the first visitor is called through before the second;
/// an interrupt from either aborts the traversal.
pub struct Chain<A, B>(pub A, pub B);

macro_rules! chain_vertex_hook {
    ($hook:ident) => {
        fn $hook(&mut self, graph: &G, vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
            self.0.$hook(graph, vertex)?;
            self.1.$hook(graph, vertex)
        }
    };
}

macro_rules! chain_edge_hook {
    ($hook:ident) => {
        fn $hook(&mut self, graph: &G, event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
            self.0.$hook(graph, event)?;
            self.1.$hook(graph, event)
        }
    };
}

impl<G, A, B, E> Visitor<G> for Chain<A, B>
where
    G: GraphBase,
    A: Visitor<G, Interrupt = E>,
    B: Visitor<G, Interrupt = E>,
{
    type Interrupt = E;

    chain_vertex_hook!(initialized_vertex);
    chain_vertex_hook!(root_vertex);
    chain_vertex_hook!(discovered_vertex);
    chain_vertex_hook!(started_vertex);
    chain_vertex_hook!(finished_vertex);

    chain_edge_hook!(started_edge);
    chain_edge_hook!(tree_edge);
    chain_edge_hook!(nontree_edge);
    chain_edge_hook!(back_edge);
}
