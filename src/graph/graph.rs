//! 图数据结构
//!
//! 只保存顶点数和边列表，用于最小生成树计算

use super::edge::Edge;
use crate::algorithm::mst::{self, MinSpanningTree, MstOptions};
use crate::error::{Error, Result};
use std::fmt;

/// 边列表表示的图
///
/// 顶点 ID 约定为 1..=vertex_count，不单独维护顶点集和邻居映射。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点数（构造后固定）
    vertex_count: usize,
    /// 边列表（只追加）
    edges: Vec<Edge>,
}

impl Graph {
    /// 创建图，顶点数必须为正
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidArgument("顶点数必须大于 0".to_string()));
        }
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
        })
    }

    /// 添加边
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 获取边数量
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 边列表（只读）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 以顶点 1 为种子计算最小生成树
    pub fn min_spanning_tree(&self) -> Result<MinSpanningTree> {
        self.min_spanning_tree_with(&MstOptions::default())
    }

    /// 按配置计算最小生成树
    pub fn min_spanning_tree_with(&self, options: &MstOptions) -> Result<MinSpanningTree> {
        mst::min_spanning_tree(self.vertex_count, &self.edges, options)
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}", self.vertex_count)?;
        for e in &self.edges {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sort::SortAlgorithm;
    use crate::graph::{Vertex, VertexId};

    fn e(a: u64, b: u64, w: f64) -> Edge {
        Edge::undirected(Vertex::new(a), Vertex::new(b)).with_weight(w)
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(e(1, 2, 2.3));
        graph.add_edge(e(1, 3, 3.677));
        graph.add_edge(e(1, 4, 7.213));

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.num_edges(), 3);

        let tree = graph.min_spanning_tree().unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.truncated_cost(), 12);
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert!(matches!(Graph::new(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_no_edges_disconnected() {
        let graph = Graph::new(3).unwrap();
        assert!(matches!(
            graph.min_spanning_tree(),
            Err(Error::Disconnected(_))
        ));
    }

    #[test]
    fn test_min_spanning_tree_with_options() {
        let mut graph = Graph::new(3).unwrap();
        graph.extend([e(0, 1, 1.0), e(1, 2, 2.0), e(0, 2, 5.0)]);

        let options = MstOptions {
            seed: VertexId::new(0),
            sort: SortAlgorithm::Heap,
        };
        let tree = graph.min_spanning_tree_with(&options).unwrap();
        assert_eq!(tree.total_weight, 3.0);
    }

    #[test]
    fn test_graph_display() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(e(1, 2, 4.0));
        assert_eq!(graph.to_string(), "Vertices: 2\n[1]-[2] 4\n");
    }
}
