pub mod mst;
pub mod union_find;
pub mod weighted;

pub use mst::{build_mst, kruskal, prim, MstStrategy};
pub use weighted::{Weight, WeightedGraph};
