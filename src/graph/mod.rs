//! 图核心模块
//!
//! 定义顶点、边、邻接表和边列表图

mod adjacency;
mod edge;
mod graph;
mod vertex;

pub use adjacency::{AdjacencyList, AdjacencySnapshot, NeighborMap};
pub use edge::{Edge, EdgeKind, DEFAULT_EDGE_WEIGHT};
pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
