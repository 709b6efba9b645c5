pub mod algo;
pub mod core;
pub mod label;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{
            id::{EdgeId, IdType, IntegerIdType, VertexId},
            marker::{Directed, Direction, Undirected},
            EdgeSet, GraphBase, NeighborRef, Neighbors, VertexSet, Weight,
        },
        label::{DenseMap, PropertyMap, SparseMap},
        storage::AdjList,
        visit::Visitor,
    };
}
