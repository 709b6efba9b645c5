//! Depth-first search.

use crate::{
    core::{marker::Direction, Neighbors, VertexSet},
    label::PropertyMap,
};

use super::{Color, EdgeEvent, Visitor};

/// Depth-first search over the whole graph.
///
/// Initialization and root selection behave as in [`bfs`](super::bfs); the
/// traversal itself uses a stack of neighbor iterators, which is equivalent
/// to the recursive formulation: [`finished_vertex`](Visitor::finished_vertex)
/// fires in post-order, so the reverse of the finish order is a topological
/// order whenever no [`back_edge`](Visitor::back_edge) fires.
///
/// Edges are classified by the color of their target: white is a tree edge,
/// gray a back edge (an in-progress ancestor, hence a cycle), black a
/// nontree edge. Forward and cross edges are deliberately not distinguished.
pub fn dfs<G, C, V>(graph: &G, colors: &mut C, visitor: &mut V) -> Result<(), V::Interrupt>
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
            dfs_rooted(graph, root, colors, visitor)?;
        }
    }

    Ok(())
}

/// Depth-first search of the single component reachable from `root`.
///
/// The caller is responsible for having established white color for every
/// vertex reachable from `root` (the whole-graph [`dfs`] does this
/// initialization itself).
pub fn dfs_rooted<G, C, V>(
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
    let mut stack: Vec<(G::VertexId, G::NeighborsIter<'_>)> = Vec::new();

    *colors.get_mut(&root) = Color::Gray;
    visitor.root_vertex(graph, &root)?;
    visitor.discovered_vertex(graph, &root)?;
    visitor.started_vertex(graph, &root)?;
    stack.push((
        root.clone(),
        graph.neighbors_directed(&root, Direction::Outgoing),
    ));

    loop {
        // Take the next unexamined edge of the vertex on top of the stack,
        // ending the mutable borrow before the stack can grow below.
        let next = match stack.last_mut() {
            Some((vertex, neighbors)) => neighbors.next().map(|n| (vertex.clone(), n)),
            None => break,
        };

        match next {
            Some((vertex, neighbor)) => {
                let event = EdgeEvent {
                    from: vertex,
                    to: neighbor.id,
                    edge: neighbor.edge,
                };

                visitor.started_edge(graph, &event)?;

                match *colors.get(&event.to) {
                    Color::White => {
                        visitor.tree_edge(graph, &event)?;
                        *colors.get_mut(&event.to) = Color::Gray;
                        visitor.discovered_vertex(graph, &event.to)?;
                        visitor.started_vertex(graph, &event.to)?;
                        stack.push((
                            event.to.clone(),
                            graph.neighbors_directed(&event.to, Direction::Outgoing),
                        ));
                    }
                    Color::Gray => visitor.back_edge(graph, &event)?,
                    Color::Black => visitor.nontree_edge(graph, &event)?,
                }
            }
            None => {
                // All out-edges exhausted; close the vertex.
                let (vertex, _) = stack.pop().expect("stack is non-empty");
                *colors.get_mut(&vertex) = Color::Black;
                visitor.finished_vertex(graph, &vertex)?;
            }
        }
    }

    Ok(())
}
