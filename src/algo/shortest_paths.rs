//! Single-source and all-pairs shortest paths.
//!
//! All engines here share the same conventions:
//!
//! * Distances and predecessors are written into caller-supplied
//!   [labels](crate::label); the distance of an unreachable vertex stays at
//!   [`Weight::inf`](crate::core::Weight::inf) and its predecessor at the
//!   [sentinel](crate::core::id::IdType::sentinel) handle.
//! * Every combination of a distance with an edge weight goes through
//!   [clamped accumulation](crate::core::clamp), so sums saturate at infinity
//!   instead of wrapping.
//! * Negative-weight failures are reported as error values, not panics.
//!
//! Use [`dijkstra`] on graphs with non-negative weights, [`bellman_ford`]
//! when weights may be negative (it detects negative cycles), and
//! [`floyd_warshall`] for dense all-pairs distances.
//!
//! # Examples
//!
//! ```
//! use waygraph::{
//!     algo::shortest_paths::{dijkstra, reconstruct_path},
//!     core::{id::{IdType, VertexId}, marker::Undirected},
//!     label::DenseMap,
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<_, u32, Undirected>::new();
//!
//! let prague = graph.add_vertex("Prague");
//! let bratislava = graph.add_vertex("Bratislava");
//! let vienna = graph.add_vertex("Vienna");
//! let munich = graph.add_vertex("Munich");
//!
//! graph.add_edge(&prague, &bratislava, 328);
//! graph.add_edge(&prague, &vienna, 293);
//! graph.add_edge(&bratislava, &vienna, 79);
//! graph.add_edge(&vienna, &munich, 402);
//!
//! let mut dist = DenseMap::with_value(4, u32::MAX);
//! let mut pred = DenseMap::with_value(4, VertexId::sentinel());
//!
//! dijkstra(&graph, prague, &mut dist, &mut pred, |e: &_| *graph.edge(e).unwrap()).unwrap();
//!
//! assert_eq!(dist[&munich], 695);
//! assert_eq!(reconstruct_path(&pred, &munich), vec![prague, vienna, munich]);
//! ```

use thiserror::Error;

use crate::{
    core::{id::IdType, GraphBase},
    label::PropertyMap,
    visit::EdgeEvent,
};

mod bellman_ford;
mod bfs;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::{bellman_ford, bellman_ford_visit};
pub use bfs::bfs_shortest_paths;
pub use dijkstra::{dijkstra, dijkstra_visit};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with, DistanceMatrix};

/// The error encountered during a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered where the algorithm requires
    /// non-negative weights. This is a caller error: Dijkstra's finalized
    /// distances would be silently wrong, so the run fails fast instead.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A negative cycle encountered. Shortest distances are undefined; the
    /// distance label contents are unspecified.
    #[error("negative cycle encountered")]
    NegativeCycle,
}

/// Relaxation observer with default-no-op hooks, the shortest-path
/// counterpart of the traversal [`Visitor`](crate::visit::Visitor).
///
/// Unlike traversal hooks, relaxation hooks cannot interrupt the run; the
/// engines own their termination conditions.
pub trait RelaxVisitor<G>
where
    G: GraphBase,
{
    /// The edge improved the tentative distance of its target.
    fn edge_relaxed(&mut self, _graph: &G, _event: &EdgeEvent<G>) {}

    /// The edge did not improve the tentative distance of its target.
    fn edge_not_relaxed(&mut self, _graph: &G, _event: &EdgeEvent<G>) {}

    /// Bellman-Ford final scan: the edge would still relax, which proves a
    /// reachable negative cycle.
    fn edge_not_minimized(&mut self, _graph: &G, _event: &EdgeEvent<G>) {}
}

/// The no-op [`RelaxVisitor`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisitor;

impl<G: GraphBase> RelaxVisitor<G> for NoVisitor {}

/// Walks a predecessor label from `to` back to the search source and returns
/// the path as source-first vertex sequence, `to` included.
///
/// For an unreachable `to` (predecessor chain immediately hits the sentinel),
/// the result contains only `to` itself; callers distinguish that case by the
/// distance label.
pub fn reconstruct_path<M, I>(pred: &M, to: &I) -> Vec<I>
where
    M: PropertyMap<I, Value = I>,
    I: IdType,
{
    let mut path = vec![to.clone()];
    let mut curr = to.clone();

    loop {
        let parent = pred.get(&curr).clone();
        if parent.is_sentinel() {
            break;
        }

        path.push(parent.clone());
        curr = parent;
    }

    path.reverse();
    path
}
