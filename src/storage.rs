pub mod adj_list;

#[doc(inline)]
pub use adj_list::AdjList;
