//! 图算法模块
//!
//! 包含排序、广度优先搜索和最小生成树

pub mod mst;
pub mod sort;
pub mod traversal;

pub use mst::{min_spanning_tree, MinSpanningTree, MstOptions};
pub use sort::SortAlgorithm;
pub use traversal::breadth_first_search;
