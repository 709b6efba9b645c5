use crate::{
    core::{
        clamp::clamped_add,
        id::IdType,
        weight::{GetWeight, Weight},
        EdgeSet, VertexSet,
    },
    label::PropertyMap,
    visit::EdgeEvent,
};

use super::{Error, NoVisitor, RelaxVisitor};

/// Bellman-Ford single-source shortest paths.
///
/// Handles negative edge weights. When a negative cycle is reachable from
/// `start`, the run fails with [`Error::NegativeCycle`] and the contents of
/// the distance and predecessor labels are unspecified.
pub fn bellman_ford<G, W, F, D, P>(
    graph: &G,
    start: G::VertexId,
    dist: &mut D,
    pred: &mut P,
    edge_weight: F,
) -> Result<(), Error>
where
    G: VertexSet + EdgeSet,
    W: Weight,
    F: GetWeight<G::EdgeId, W>,
    D: PropertyMap<G::VertexId, Value = W>,
    P: PropertyMap<G::VertexId, Value = G::VertexId>,
{
    bellman_ford_visit(graph, start, dist, pred, edge_weight, &mut NoVisitor)
}

/// [`bellman_ford`] with a [`RelaxVisitor`] observing the relaxations.
pub fn bellman_ford_visit<G, W, F, D, P, R>(
    graph: &G,
    start: G::VertexId,
    dist: &mut D,
    pred: &mut P,
    edge_weight: F,
    visitor: &mut R,
) -> Result<(), Error>
where
    G: VertexSet + EdgeSet,
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

    // A shortest path has at most |V| - 1 edges, so |V| - 1 rounds of
    // relaxing every edge converge. A round with no relaxation means the
    // distances are already final and further rounds are pointless.
    for _ in 1..graph.vertex_count() {
        let mut terminated_early = true;

        for edge in graph.edges_by_id() {
            let Some((u, v)) = graph.endpoints(&edge) else {
                continue;
            };
            let edge_dist = edge_weight.get(&edge);

            if relax(graph, dist, pred, visitor, &u, &v, &edge, &edge_dist) {
                terminated_early = false;
            }

            // An undirected edge relaxes in both orientations.
            if !graph.is_directed()
                && u != v
                && relax(graph, dist, pred, visitor, &v, &u, &edge, &edge_dist)
            {
                terminated_early = false;
            }
        }

        if terminated_early {
            return Ok(());
        }
    }

    // If an edge still relaxes after |V| - 1 rounds, it is part of or
    // reachable from a negative cycle. The scan runs to completion so that
    // every such edge is reported before the error is returned.
    let mut negative_cycle = false;

    for edge in graph.edges_by_id() {
        let Some((u, v)) = graph.endpoints(&edge) else {
            continue;
        };
        let edge_dist = edge_weight.get(&edge);

        if still_relaxes(graph, dist, visitor, &u, &v, &edge, &edge_dist) {
            negative_cycle = true;
        }

        if !graph.is_directed()
            && u != v
            && still_relaxes(graph, dist, visitor, &v, &u, &edge, &edge_dist)
        {
            negative_cycle = true;
        }
    }

    if negative_cycle {
        return Err(Error::NegativeCycle);
    }

    Ok(())
}

fn still_relaxes<G, W, D, R>(
    graph: &G,
    dist: &D,
    visitor: &mut R,
    from: &G::VertexId,
    to: &G::VertexId,
    edge: &G::EdgeId,
    edge_dist: &W,
) -> bool
where
    G: EdgeSet,
    W: Weight,
    D: PropertyMap<G::VertexId, Value = W>,
    R: RelaxVisitor<G>,
{
    let next_dist = clamped_add(dist.get(from), edge_dist);

    if next_dist < *dist.get(to) {
        visitor.edge_not_minimized(
            graph,
            &EdgeEvent {
                from: from.clone(),
                to: to.clone(),
                edge: edge.clone(),
            },
        );
        true
    } else {
        false
    }
}

fn relax<G, W, D, P, R>(
    graph: &G,
    dist: &mut D,
    pred: &mut P,
    visitor: &mut R,
    from: &G::VertexId,
    to: &G::VertexId,
    edge: &G::EdgeId,
    edge_dist: &W,
) -> bool
where
    G: EdgeSet,
    W: Weight,
    D: PropertyMap<G::VertexId, Value = W>,
    P: PropertyMap<G::VertexId, Value = G::VertexId>,
    R: RelaxVisitor<G>,
{
    // An infinite source distance absorbs the edge weight, so edges out of
    // not-yet-reached vertices never relax, even with negative weights on
    // integer representations.
    let next_dist = clamped_add(dist.get(from), edge_dist);

    let event = EdgeEvent {
        from: from.clone(),
        to: to.clone(),
        edge: edge.clone(),
    };

    if next_dist < *dist.get(to) {
        *dist.get_mut(to) = next_dist;
        *pred.get_mut(to) = from.clone();
        visitor.edge_relaxed(graph, &event);
        true
    } else {
        visitor.edge_not_relaxed(graph, &event);
        false
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        algo::shortest_paths::reconstruct_path,
        core::{id::VertexId, marker::{Directed, Undirected}},
        label::DenseMap,
        storage::AdjList,
    };

    use super::*;

    #[test]
    fn negative_edges_without_cycle() {
        let mut graph = AdjList::<(), i64, Directed>::default();
        let v = graph.extend_with_vertices([(), (), (), ()]);

        graph.add_edge(&v[0], &v[1], 4);
        graph.add_edge(&v[0], &v[2], 6);
        graph.add_edge(&v[2], &v[1], -3);
        graph.add_edge(&v[1], &v[3], 2);

        let mut dist = DenseMap::with_value(4, i64::MAX);
        let mut pred = DenseMap::with_value(4, VertexId::sentinel());

        bellman_ford(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        assert_eq!(dist[&v[1]], 3);
        assert_eq!(dist[&v[3]], 5);
        assert_eq!(reconstruct_path(&pred, &v[3]), vec![v[0], v[2], v[1], v[3]]);
    }

    #[test]
    fn negative_cycle_is_error() {
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 1);
        graph.add_edge(&v[1], &v[2], -1);
        graph.add_edge(&v[2], &v[1], -1);

        let mut dist = DenseMap::with_value(3, i32::MAX);
        let mut pred = DenseMap::with_value(3, VertexId::sentinel());

        assert_matches!(
            bellman_ford(&graph, v[0], &mut dist, &mut pred, |e: &_| *graph
                .edge(e)
                .unwrap()),
            Err(Error::NegativeCycle)
        );
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        // The negative cycle exists but cannot be reached from the start, so
        // distances of reachable vertices are well-defined.
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), (), ()]);

        graph.add_edge(&v[0], &v[1], 7);
        graph.add_edge(&v[2], &v[3], -1);
        graph.add_edge(&v[3], &v[2], -1);

        let mut dist = DenseMap::with_value(4, i32::MAX);
        let mut pred = DenseMap::with_value(4, VertexId::sentinel());

        bellman_ford(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        assert_eq!(dist[&v[1]], 7);
        assert_eq!(dist[&v[2]], i32::MAX);
    }

    #[test]
    fn undirected_negative_edge_is_cycle() {
        // An undirected negative edge can be traversed back and forth.
        let mut graph = AdjList::<(), i32, Undirected>::default();
        let v = graph.extend_with_vertices([(), ()]);

        graph.add_edge(&v[0], &v[1], -2);

        let mut dist = DenseMap::with_value(2, i32::MAX);
        let mut pred = DenseMap::with_value(2, VertexId::sentinel());

        assert_matches!(
            bellman_ford(&graph, v[0], &mut dist, &mut pred, |e: &_| *graph
                .edge(e)
                .unwrap()),
            Err(Error::NegativeCycle)
        );
    }

    #[test]
    fn undirected_relaxes_both_orientations() {
        let mut graph = AdjList::<(), u32, Undirected>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        // Edges inserted pointing away from the last vertex; the start still
        // reaches everything.
        graph.add_edge(&v[2], &v[1], 3);
        graph.add_edge(&v[1], &v[0], 2);

        let mut dist = DenseMap::with_value(3, u32::MAX);
        let mut pred = DenseMap::with_value(3, VertexId::sentinel());

        bellman_ford(&graph, v[0], &mut dist, &mut pred, |e: &_| {
            *graph.edge(e).unwrap()
        })
        .unwrap();

        assert_eq!(dist[&v[2]], 5);
        assert_eq!(reconstruct_path(&pred, &v[2]), vec![v[0], v[1], v[2]]);
    }

    #[test]
    fn counts_relaxations() {
        struct Counter {
            relaxed: usize,
            not_relaxed: usize,
        }

        impl<G: crate::core::GraphBase> RelaxVisitor<G> for Counter {
            fn edge_relaxed(&mut self, _graph: &G, _event: &EdgeEvent<G>) {
                self.relaxed += 1;
            }

            fn edge_not_relaxed(&mut self, _graph: &G, _event: &EdgeEvent<G>) {
                self.not_relaxed += 1;
            }
        }

        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);
        graph.add_edge(&v[0], &v[1], 1);
        graph.add_edge(&v[1], &v[2], 1);

        let mut dist = DenseMap::with_value(3, u32::MAX);
        let mut pred = DenseMap::with_value(3, VertexId::sentinel());
        let mut counter = Counter {
            relaxed: 0,
            not_relaxed: 0,
        };

        bellman_ford_visit(
            &graph,
            v[0],
            &mut dist,
            &mut pred,
            |e: &_| *graph.edge(e).unwrap(),
            &mut counter,
        )
        .unwrap();

        // Both edges relax in the first round (edges are iterated in
        // insertion order) and none in the second, which terminates the run.
        assert_eq!(counter.relaxed, 2);
        assert_eq!(counter.not_relaxed, 2);
    }

    #[test]
    fn reports_every_non_minimized_edge() {
        struct NotMinimized(usize);

        impl<G: crate::core::GraphBase> RelaxVisitor<G> for NotMinimized {
            fn edge_not_minimized(&mut self, _graph: &G, _event: &EdgeEvent<G>) {
                self.0 += 1;
            }
        }

        // Two independent negative self-loops, both reachable from the
        // start; the final scan must report both before failing.
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 1);
        graph.add_edge(&v[0], &v[2], 1);
        graph.add_edge(&v[1], &v[1], -1);
        graph.add_edge(&v[2], &v[2], -1);

        let mut dist = DenseMap::with_value(3, i32::MAX);
        let mut pred = DenseMap::with_value(3, VertexId::sentinel());
        let mut not_minimized = NotMinimized(0);

        assert_matches!(
            bellman_ford_visit(
                &graph,
                v[0],
                &mut dist,
                &mut pred,
                |e: &_| *graph.edge(e).unwrap(),
                &mut not_minimized,
            ),
            Err(Error::NegativeCycle)
        );

        assert_eq!(not_minimized.0, 2);
    }
}
