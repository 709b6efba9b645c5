use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    core::{
        clamp::clamped_add,
        id::IdType,
        marker::Direction,
        weight::{GetWeight, Weight, Weighted},
        Neighbors, VertexSet,
    },
    label::PropertyMap,
    visit::EdgeEvent,
};

use super::{Error, NoVisitor, RelaxVisitor};

/// Dijkstra's single-source shortest paths.
///
/// Requires all edge weights to be non-negative; a negative weight on an
/// examined edge fails fast with [`Error::NegativeWeight`]. Once a vertex is
/// extracted from the priority queue with an up-to-date key, its distance is
/// final for the remainder of the call.
pub fn dijkstra<G, W, F, D, P>(
    graph: &G,
    start: G::VertexId,
    dist: &mut D,
    pred: &mut P,
    edge_weight: F,
) -> Result<(), Error>
where
    G: VertexSet + Neighbors,
    W: Weight,
    F: GetWeight<G::EdgeId, W>,
    D: PropertyMap<G::VertexId, Value = W>,
    P: PropertyMap<G::VertexId, Value = G::VertexId>,
{
    dijkstra_visit(graph, start, dist, pred, edge_weight, &mut NoVisitor)
}

/// [`dijkstra`] with a [`RelaxVisitor`] observing the relaxations.
pub fn dijkstra_visit<G, W, F, D, P, R>(
    graph: &G,
    start: G::VertexId,
    dist: &mut D,
    pred: &mut P,
    edge_weight: F,
    visitor: &mut R,
) -> Result<(), Error>
where
    G: VertexSet + Neighbors,
    W: Weight,
    F: GetWeight<G::EdgeId, W>,
    D: PropertyMap<G::VertexId, Value = W>,
    P: PropertyMap<G::VertexId, Value = G::VertexId>,
    R: RelaxVisitor<G>,
{
    for vertex in graph.vertices_by_id() {
        *dist.get_mut(&vertex) = W::inf();
        *pred.get_mut(&vertex) = G::VertexId::sentinel();
    }

    *dist.get_mut(&start) = W::zero();

    // A constant weight (hop counting) avoids the per-edge lookup entirely.
    let const_dist = edge_weight.get_const();

    let mut queue = BinaryHeap::new();
    queue.push(Reverse(Weighted(start, W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // A later relaxation may have improved the distance after this entry
        // was pushed. Such stale entries are lazily skipped; the first pop of
        // a vertex with a matching key finalizes it.
        if vertex_dist > *dist.get(&vertex) {
            continue;
        }

        for neighbor in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            let edge_dist = match &const_dist {
                Some(edge_dist) => edge_dist.clone(),
                None => edge_weight.get(&neighbor.edge),
            };

            // The check for unsignedness should eliminate the negativity
            // check entirely, because `is_unsigned` is a constant boolean in
            // practice.
            if !W::is_unsigned() && edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let event = EdgeEvent {
                from: vertex.clone(),
                to: neighbor.id,
                edge: neighbor.edge,
            };

            let next_dist = clamped_add(&vertex_dist, &edge_dist);

            if next_dist < *dist.get(&event.to) {
                *dist.get_mut(&event.to) = next_dist.clone();
                *pred.get_mut(&event.to) = vertex.clone();
                visitor.edge_relaxed(graph, &event);

                // A textbook version of the algorithm would update the
                // priority of the target in place. Pushing a duplicate and
                // skipping stale pops is cheaper with a binary heap.
                queue.push(Reverse(Weighted(event.to, W::Ord::from(next_dist))));
            } else {
                visitor.edge_not_relaxed(graph, &event);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        algo::shortest_paths::reconstruct_path,
        core::{id::VertexId, marker::Directed},
        label::DenseMap,
        storage::AdjList,
    };

    use super::*;

    fn labels<W: Weight>(graph: &AdjList<(), W, Directed>) -> (DenseMap<VertexId, W>, DenseMap<VertexId, VertexId>) {
        (
            DenseMap::with_value(graph.vertex_bound(), W::inf()),
            DenseMap::with_value(graph.vertex_bound(), VertexId::sentinel()),
        )
    }

    #[test]
    fn float_weights() {
        let mut graph = AdjList::<(), f64, Directed>::default();
        let v = graph.extend_with_vertices([(), (), (), ()]);
        let (a, b, c, d) = (v[0], v[1], v[2], v[3]);

        graph.add_edge(&a, &b, 1.0);
        graph.add_edge(&a, &c, 2.0);
        graph.add_edge(&b, &c, 0.2);
        graph.add_edge(&c, &b, 0.1);
        graph.add_edge(&b, &d, 3.0);
        graph.add_edge(&c, &d, 1.0);

        let (mut dist, mut pred) = labels(&graph);
        dijkstra(&graph, a, &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        // a -> b -> c -> d, 1.0 + 0.2 + 1.0.
        assert!((dist[&d] - 2.2).abs() < 1e-9);
        assert!((dist[&c] - 1.2).abs() < 1e-9);
        assert_eq!(reconstruct_path(&pred, &d), vec![a, b, c, d]);
    }

    #[test]
    fn unreachable_stays_infinite() {
        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 1);

        let (mut dist, mut pred) = labels(&graph);
        dijkstra(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        assert_eq!(dist[&v[2]], u32::MAX);
        assert!(pred[&v[2]].is_sentinel());
        assert_eq!(reconstruct_path(&pred, &v[2]), vec![v[2]]);
    }

    #[test]
    fn negative_weight_is_error() {
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), ()]);

        graph.add_edge(&v[0], &v[1], -1);

        let (mut dist, mut pred) = labels(&graph);

        assert_matches!(
            dijkstra(&graph, v[0], &mut dist, &mut pred, |e: &_| *graph
                .edge(e)
                .unwrap()),
            Err(Error::NegativeWeight)
        );
    }

    #[test]
    fn agrees_with_bellman_ford() {
        let mut rng = fastrand::Rng::with_seed(7);
        let n = 30;

        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices((0..n).map(|_| ()));

        for _ in 0..4 * n {
            let from = v[rng.usize(0..n)];
            let to = v[rng.usize(0..n)];
            graph.add_edge(&from, &to, rng.u32(0..100));
        }

        let (mut dist, mut pred) = labels(&graph);
        dijkstra(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        let (mut bf_dist, mut bf_pred) = labels(&graph);
        crate::algo::shortest_paths::bellman_ford(&graph, v[0], &mut bf_dist, &mut bf_pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        for vertex in graph.vertices_by_id() {
            assert_eq!(dist[&vertex], bf_dist[&vertex]);
        }
    }

    #[test]
    fn deterministic_across_reruns() {
        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), (), ()]);

        graph.add_edge(&v[0], &v[1], 2);
        graph.add_edge(&v[0], &v[2], 2);
        graph.add_edge(&v[1], &v[3], 1);
        graph.add_edge(&v[2], &v[3], 1);

        let (mut dist, mut pred) = labels(&graph);
        dijkstra(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        let (mut dist2, mut pred2) = labels(&graph);
        dijkstra(&graph, v[0], &mut dist2, &mut pred2, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        // Ties included, the same input yields the same labels.
        assert_eq!(dist, dist2);
        assert_eq!(pred, pred2);
    }
}
