use std::marker::PhantomData;

use crate::core::{
    clamp::Clamped,
    id::{IdType, IntegerIdType},
    weight::{GetWeight, Weight},
    EdgeSet, VertexSet,
};

use super::Error;

/// Dense all-pairs distance matrix produced by [`floyd_warshall`].
///
/// Row-major storage with one row and column per handle in `0..order`, where
/// `order` is the graph's [vertex bound](crate::core::VertexSet::vertex_bound).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<I, W> {
    order: usize,
    values: Vec<W>,
    ty: PhantomData<fn() -> I>,
}

impl<I: IntegerIdType, W> DistanceMatrix<I, W> {
    fn new(order: usize, values: Vec<W>) -> Self {
        debug_assert_eq!(values.len(), order * order);

        Self {
            order,
            values,
            ty: PhantomData,
        }
    }

    /// The number of rows (and columns) of the matrix.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The distance of the shortest path from `from` to `to`. Equal to the
    /// clamp's ceiling when no path exists.
    pub fn get(&self, from: &I, to: &I) -> &W {
        &self.values[from.as_usize() * self.order + to.as_usize()]
    }
}

impl<I: IntegerIdType, W> std::ops::Index<(I, I)> for DistanceMatrix<I, W> {
    type Output = W;

    fn index(&self, (from, to): (I, I)) -> &W {
        self.get(&from, &to)
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Handles negative edge weights; a negative cycle fails the run with
/// [`Error::NegativeCycle`]. Parallel edges collapse to the lower weight, and
/// on undirected graphs every edge contributes in both orientations.
///
/// Time and space are quadratic-plus in the vertex bound, so this pays off on
/// dense graphs or when all pairs are genuinely needed.
pub fn floyd_warshall<G, W, F>(
    graph: &G,
    edge_weight: F,
) -> Result<DistanceMatrix<G::VertexId, W>, Error>
where
    G: VertexSet + EdgeSet,
    G::VertexId: IntegerIdType,
    W: Weight,
    F: GetWeight<G::EdgeId, W>,
{
    floyd_warshall_with(
        graph,
        |edge: &G::EdgeId| edge_weight.get(edge),
        |a: &W, b: &W| a.checked_add(b),
        |a: &W, b: &W| a < b,
        W::zero(),
        W::inf(),
    )
}

/// [`floyd_warshall`] generalized over the accumulation semiring.
///
/// `accumulate` extends a path (returning `None` when not representable),
/// `compare(a, b)` holds when `a` is strictly better than `b`, `identity` is
/// the weight of the empty path and `ceiling` the "no path" value. With
/// `max`/`min` operators this computes widest paths instead of shortest ones.
pub fn floyd_warshall_with<G, T, F, A, C>(
    graph: &G,
    edge_weight: F,
    accumulate: A,
    compare: C,
    identity: T,
    ceiling: T,
) -> Result<DistanceMatrix<G::VertexId, T>, Error>
where
    G: VertexSet + EdgeSet,
    G::VertexId: IntegerIdType,
    T: Clone,
    F: Fn(&G::EdgeId) -> T,
    A: Fn(&T, &T) -> Option<T>,
    C: Fn(&T, &T) -> bool,
{
    let n = graph.vertex_bound();
    let clamp = Clamped::new(accumulate, compare, ceiling);

    let mut values = vec![clamp.ceiling().clone(); n * n];

    for i in 0..n {
        values[i * n + i] = identity.clone();
    }

    for edge in graph.edges_by_id() {
        let Some((u, v)) = graph.endpoints(&edge) else {
            continue;
        };
        let weight = edge_weight(&edge);
        let (ui, vi) = (u.as_usize(), v.as_usize());

        // Parallel edges collapse to the better weight. A negative self-loop
        // lands on the diagonal here and is caught by the final check.
        if clamp.better(&weight, &values[ui * n + vi]) {
            values[ui * n + vi] = weight.clone();
        }

        if !graph.is_directed() && clamp.better(&weight, &values[vi * n + ui]) {
            values[vi * n + ui] = weight;
        }
    }

    // The through vertex must be the outermost loop. After its i-th round,
    // values[j][k] is the best path weight from j to k using only vertices
    // 0..=i as intermediates.
    for i in 0..n {
        for j in 0..n {
            let to_through = values[j * n + i].clone();

            // No path into the through vertex, nothing to improve on this
            // row.
            if !clamp.better(&to_through, clamp.ceiling()) {
                continue;
            }

            for k in 0..n {
                let through = clamp.combine(&to_through, &values[i * n + k]);

                if clamp.better(&through, &values[j * n + k]) {
                    values[j * n + k] = through;
                }
            }
        }
    }

    // A diagonal entry better than the empty path proves a negative cycle
    // through that vertex.
    for i in 0..n {
        if clamp.better(&values[i * n + i], &identity) {
            return Err(Error::NegativeCycle);
        }
    }

    Ok(DistanceMatrix::new(n, values))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::marker::{Directed, Undirected},
        storage::AdjList,
    };

    use super::*;

    #[test]
    fn directed_all_pairs() {
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), (), ()]);

        graph.add_edge(&v[0], &v[1], 4);
        graph.add_edge(&v[0], &v[2], 1);
        graph.add_edge(&v[2], &v[1], 2);
        graph.add_edge(&v[1], &v[3], 1);

        let matrix = floyd_warshall(&graph, |e: &_| *graph.edge(e).unwrap()).unwrap();

        assert_eq!(matrix[(v[0], v[1])], 3);
        assert_eq!(matrix[(v[0], v[3])], 4);
        assert_eq!(matrix[(v[2], v[3])], 3);
        assert_eq!(matrix[(v[0], v[0])], 0);

        // No edge back into v0.
        assert_eq!(matrix[(v[3], v[0])], i32::MAX);
    }

    #[test]
    fn negative_edges_without_cycle() {
        let mut graph = AdjList::<(), i64, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 5);
        graph.add_edge(&v[1], &v[2], -3);

        let matrix = floyd_warshall(&graph, |e: &_| *graph.edge(e).unwrap()).unwrap();

        assert_eq!(matrix[(v[0], v[2])], 2);
        assert_eq!(matrix[(v[1], v[2])], -3);
    }

    #[test]
    fn negative_cycle_is_error() {
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.extend_with_vertices([(), ()]);

        graph.add_edge(&v[0], &v[1], -1);
        graph.add_edge(&v[1], &v[0], -1);

        assert_matches!(
            floyd_warshall::<_, i32, _>(&graph, |e: &_| *graph.edge(e).unwrap()),
            Err(Error::NegativeCycle)
        );
    }

    #[test]
    fn negative_self_loop_is_error() {
        let mut graph = AdjList::<(), i32, Directed>::default();
        let v = graph.add_vertex(());

        graph.add_edge(&v, &v, -1);

        assert_matches!(
            floyd_warshall::<_, i32, _>(&graph, |e: &_| *graph.edge(e).unwrap()),
            Err(Error::NegativeCycle)
        );
    }

    #[test]
    fn undirected_edges_count_both_ways() {
        let mut graph = AdjList::<(), u32, Undirected>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 2);
        graph.add_edge(&v[1], &v[2], 3);

        let matrix = floyd_warshall(&graph, |e: &_| *graph.edge(e).unwrap()).unwrap();

        assert_eq!(matrix[(v[2], v[0])], 5);
        assert_eq!(matrix[(v[0], v[2])], 5);
    }

    #[test]
    fn parallel_edges_collapse_to_minimum() {
        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices([(), ()]);

        graph.add_edge(&v[0], &v[1], 9);
        graph.add_edge(&v[0], &v[1], 4);

        let matrix = floyd_warshall(&graph, |e: &_| *graph.edge(e).unwrap()).unwrap();

        assert_eq!(matrix[(v[0], v[1])], 4);
    }

    #[test]
    fn agrees_with_dijkstra_and_bellman_ford() {
        use crate::{
            algo::shortest_paths::{bellman_ford, dijkstra},
            core::id::VertexId,
            label::{DenseMap, PropertyMap},
        };

        let mut rng = fastrand::Rng::with_seed(13);
        let n = 12;

        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices((0..n).map(|_| ()));

        for _ in 0..4 * n {
            let from = v[rng.usize(0..n)];
            let to = v[rng.usize(0..n)];
            graph.add_edge(&from, &to, rng.u32(0..100));
        }

        let matrix = floyd_warshall(&graph, |e: &_| *graph.edge(e).unwrap()).unwrap();

        for source in graph.vertices_by_id() {
            let mut dist = DenseMap::with_value(graph.vertex_bound(), u32::MAX);
            let mut pred = DenseMap::with_value(graph.vertex_bound(), VertexId::sentinel());
            dijkstra(&graph, source, &mut dist, &mut pred, |e: &_| {
                *graph.edge(e).unwrap()
            })
            .unwrap();

            let mut bf_dist = DenseMap::with_value(graph.vertex_bound(), u32::MAX);
            let mut bf_pred = DenseMap::with_value(graph.vertex_bound(), VertexId::sentinel());
            bellman_ford(&graph, source, &mut bf_dist, &mut bf_pred, |e: &_| {
                *graph.edge(e).unwrap()
            })
            .unwrap();

            for target in graph.vertices_by_id() {
                assert_eq!(*matrix.get(&source, &target), *dist.get(&target));
                assert_eq!(*matrix.get(&source, &target), *bf_dist.get(&target));
            }
        }
    }

    #[test]
    fn widest_path_semiring() {
        // Maximize the bottleneck capacity instead of minimizing length.
        let mut graph = AdjList::<(), u32, Directed>::default();
        let v = graph.extend_with_vertices([(), (), ()]);

        graph.add_edge(&v[0], &v[1], 7);
        graph.add_edge(&v[1], &v[2], 4);
        graph.add_edge(&v[0], &v[2], 3);

        let matrix = floyd_warshall_with(
            &graph,
            |e: &_| *graph.edge(e).unwrap(),
            |a: &u32, b: &u32| Some(std::cmp::min(*a, *b)),
            |a: &u32, b: &u32| a > b,
            u32::MAX,
            0u32,
        )
        .unwrap();

        assert_eq!(matrix[(v[0], v[2])], 4);
    }
}
