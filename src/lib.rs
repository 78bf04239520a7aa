//! GraphKit - 图模型与经典算法
//!
//! 提供：
//! - 以 ID 区分身份的顶点，有向/无向带权边
//! - 邻接表表示与广度优先搜索
//! - 贪心扩展的最小生成树
//! - 七种经典排序算法
//! - 文本边列表导入

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{MinSpanningTree, MstOptions, SortAlgorithm};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, Edge, EdgeKind, Graph, Vertex, VertexId};
pub use import::{EdgeList, EdgeListLoader, LoaderConfig};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
