use crate::{
    core::{
        id::{IdType, IntegerIdType},
        weight::Weight,
        Neighbors, VertexSet,
    },
    label::{DenseMap, PropertyMap},
    visit::{bfs_rooted, Chain, Color, DistanceRecorder, PredecessorRecorder},
};

/// Shortest paths by breadth-first search, for graphs where every edge costs
/// the same `step`.
///
/// Equivalent to [`dijkstra`](super::dijkstra) with a constant weight, but
/// with a plain queue instead of a priority queue. Unreachable vertices keep
/// [`Weight::inf`] distance and the sentinel predecessor.
pub fn bfs_shortest_paths<G, W, D, P>(
    graph: &G,
    start: G::VertexId,
    step: W,
    dist: &mut D,
    pred: &mut P,
) where
    G: VertexSet + Neighbors,
    G::VertexId: IntegerIdType,
    W: Weight,
    D: PropertyMap<G::VertexId, Value = W>,
    P: PropertyMap<G::VertexId, Value = G::VertexId>,
{
    for vertex in graph.vertices_by_id() {
        *dist.get_mut(&vertex) = W::inf();
        *pred.get_mut(&vertex) = G::VertexId::sentinel();
    }

    let mut colors = DenseMap::<_, Color>::with_default(graph.vertex_bound());
    let mut visitor = Chain(
        DistanceRecorder::new(dist, step),
        PredecessorRecorder::new(pred),
    );

    match bfs_rooted(graph, start, &mut colors, &mut visitor) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
