//! Connected components of undirected graphs.

use std::convert::Infallible;

use crate::{
    core::{
        id::IntegerIdType,
        marker::Undirected,
        GraphBase, Neighbors, VertexSet,
    },
    label::{DenseMap, PropertyMap},
    visit::{bfs, Color, Visitor},
};

struct ComponentLabeler<'a, M> {
    component: &'a mut M,
    count: usize,
}

impl<'a, G, M> Visitor<G> for ComponentLabeler<'a, M>
where
    G: GraphBase,
    M: PropertyMap<G::VertexId, Value = usize>,
{
    type Interrupt = Infallible;

    fn root_vertex(&mut self, _graph: &G, _vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
        self.count += 1;
        Ok(())
    }

    fn discovered_vertex(
        &mut self,
        _graph: &G,
        vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        *self.component.get_mut(vertex) = self.count - 1;
        Ok(())
    }
}

/// Labels every vertex of an undirected graph with its connected component
/// index and returns the number of components.
///
/// Components are numbered `0..count` in the order their first vertex appears
/// in the graph's iteration order.
pub fn connected_components<G>(graph: &G) -> (usize, DenseMap<G::VertexId, usize>)
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Undirected>,
    G::VertexId: IntegerIdType,
{
    let mut component = DenseMap::with_default(graph.vertex_bound());
    let mut colors = DenseMap::<_, Color>::with_default(graph.vertex_bound());
    let mut visitor = ComponentLabeler {
        component: &mut component,
        count: 0,
    };

    match bfs(graph, &mut colors, &mut visitor) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    let count = visitor.count;
    (count, component)
}

/// Checks whether an undirected graph consists of at most one connected
/// component. The empty graph is connected.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: VertexSet + Neighbors + GraphBase<EdgeType = Undirected>,
    G::VertexId: IntegerIdType,
{
    connected_components(graph).0 <= 1
}
