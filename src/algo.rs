//! Ready-made graph algorithms.
//!
//! The algorithms in this module are either plain [visitors](crate::visit)
//! over the traversal engines (components, two-coloring, topological sorting)
//! or relaxation engines sharing the labeling and clamping conventions of
//! [`shortest_paths`].

pub mod connected_components;
pub mod shortest_paths;
pub mod toposort;
pub mod two_coloring;

#[doc(inline)]
pub use self::{
    connected_components::{connected_components, is_connected},
    toposort::{is_cyclic, toposort},
    two_coloring::{is_bipartite, two_coloring, Parity},
};
