pub mod clamp;
pub mod id;
pub mod marker;
pub mod weight;

mod graph;

pub use graph::*;
pub use weight::{GetWeight, Weight};
