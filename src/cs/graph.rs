pub mod disjoint_set;
pub mod generator;
pub mod kruskal;

pub use disjoint_set::DisjointSet;
pub use generator::{dense_prefix_graph, random_connected_graph};
pub use kruskal::{build_mst, build_mst_batch, validate, Edge, MinimumSpanningForest};
