//! Breadth-first search.

use std::collections::VecDeque;

use crate::{
    core::{marker::Direction, Neighbors, VertexSet},
    label::PropertyMap,
};

use super::{Color, EdgeEvent, Visitor};

/// Breadth-first search over the whole graph.
///
/// Every vertex is first reset to white (firing
/// [`initialized_vertex`](Visitor::initialized_vertex)); then every
/// still-white vertex in the graph's iteration order becomes the root of a
/// new traversal tree. Vertices are discovered in non-decreasing hop distance
/// from their root; edge examination order follows the graph's own
/// per-vertex iteration order.
pub fn bfs<G, C, V>(graph: &G, colors: &mut C, visitor: &mut V) -> Result<(), V::Interrupt>
where
    G: Neighbors + VertexSet,
    C: PropertyMap<G::VertexId, Value = Color>,
    V: Visitor<G>,
{
    for vertex in graph.vertices_by_id() {
        *colors.get_mut(&vertex) = Color::White;
        visitor.initialized_vertex(graph, &vertex)?;
    }

    for root in graph.vertices_by_id() {
        if *colors.get(&root) == Color::White {
            bfs_rooted(graph, root, colors, visitor)?;
        }
    }

    Ok(())
}

/// Breadth-first search of the single component reachable from `root`.
///
/// The caller is responsible for having established white color for every
/// vertex reachable from `root` (the whole-graph [`bfs`] does this
/// initialization itself).
pub fn bfs_rooted<G, C, V>(
    graph: &G,
    root: G::VertexId,
    colors: &mut C,
    visitor: &mut V,
) -> Result<(), V::Interrupt>
where
    G: Neighbors,
    C: PropertyMap<G::VertexId, Value = Color>,
    V: Visitor<G>,
{
    let mut queue = VecDeque::new();

    *colors.get_mut(&root) = Color::Gray;
    visitor.root_vertex(graph, &root)?;
    visitor.discovered_vertex(graph, &root)?;
    queue.push_back(root);

    while let Some(vertex) = queue.pop_front() {
        visitor.started_vertex(graph, &vertex)?;

        for neighbor in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            let event = EdgeEvent {
                from: vertex.clone(),
                to: neighbor.id,
                edge: neighbor.edge,
            };

            visitor.started_edge(graph, &event)?;

            if *colors.get(&event.to) == Color::White {
                visitor.tree_edge(graph, &event)?;
                *colors.get_mut(&event.to) = Color::Gray;
                visitor.discovered_vertex(graph, &event.to)?;
                queue.push_back(event.to);
            } else {
                visitor.nontree_edge(graph, &event)?;
            }
        }

        *colors.get_mut(&vertex) = Color::Black;
        visitor.finished_vertex(graph, &vertex)?;
    }

    Ok(())
}
