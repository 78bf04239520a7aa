//! 最小生成树
//!
//! 贪心地从种子顶点向外扩展（Prim 风格），但每轮都重新扫描全部边，
//! 而不是维护优先队列。复杂度 O(V · E log E)，只适合小图。

use crate::algorithm::sort::SortAlgorithm;
use crate::error::{Error, Result};
use crate::graph::{Edge, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// 最小生成树配置
#[derive(Debug, Clone)]
pub struct MstOptions {
    /// 种子顶点，树从该顶点开始生长
    pub seed: VertexId,
    /// 候选边排序算法，稳定算法保证同权重时按扫描顺序选边
    pub sort: SortAlgorithm,
}

impl Default for MstOptions {
    fn default() -> Self {
        Self {
            seed: VertexId::new(1),
            sort: SortAlgorithm::Merge,
        }
    }
}

/// 最小生成树结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinSpanningTree {
    /// 树边，按选中顺序
    pub edges: Vec<Edge>,
    /// 树边权重之和（浮点累加）
    pub total_weight: f64,
}

impl MinSpanningTree {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 整数累加的总权重
    ///
    /// 按选中顺序累加，每加一条边就把累计值截断为整数，
    /// 小数部分因此逐条丢失。
    pub fn truncated_cost(&self) -> i64 {
        self.edges
            .iter()
            .fold(0i64, |acc, e| (acc as f64 + e.weight()).trunc() as i64)
    }
}

/// 计算最小生成树
///
/// 每轮收集恰有一个端点 ID 在树内的边（不区分方向），按权重升序排序后
/// 选第一条，把两个端点并入树，直到树内顶点数达到 `vertex_count`。
/// 某轮没有候选边时返回 [`Error::Disconnected`]。
///
/// 种子检查先于选边循环：只要边列表非空且没有边接触种子顶点，就返回
/// [`Error::InvalidArgument`]，即使 `vertex_count == 1` 也不返回空树。
pub fn min_spanning_tree(
    vertex_count: usize,
    edges: &[Edge],
    options: &MstOptions,
) -> Result<MinSpanningTree> {
    let seed = options.seed;
    if !edges.is_empty()
        && !edges
            .iter()
            .any(|e| e.first().id() == seed || e.second().id() == seed)
    {
        return Err(Error::InvalidArgument(format!(
            "种子顶点 {} 不在任何边上",
            seed
        )));
    }

    let mut tree = MinSpanningTree::new();
    let mut tree_vertices: HashSet<VertexId> = HashSet::new();
    tree_vertices.insert(seed);

    while tree_vertices.len() < vertex_count {
        let mut candidates: Vec<Edge> = edges
            .iter()
            .filter(|e| e.spans(&tree_vertices))
            .cloned()
            .collect();

        if candidates.is_empty() {
            return Err(Error::Disconnected(format!(
                "树内 {} 个顶点（共 {} 个）之外没有可连接的边",
                tree_vertices.len(),
                vertex_count
            )));
        }

        options.sort.sort_by(&mut candidates, Edge::compare_weight);
        trace!(round = tree.len(), candidates = candidates.len(), "候选边已排序");

        let lowest = candidates.swap_remove(0);
        debug!(edge = %lowest, tree_size = tree_vertices.len(), "选中最小跨越边");

        tree_vertices.insert(lowest.first().id());
        tree_vertices.insert(lowest.second().id());
        tree.push(lowest);
    }

    debug!(
        edges = tree.len(),
        total_weight = tree.total_weight,
        "最小生成树完成"
    );
    Ok(tree)
}
