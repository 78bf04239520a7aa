//! 边定义
//!
//! 有向边和无向边共用一个结构体，方向性由 [`EdgeKind`] 携带。
//! 相等性、哈希和“跨越顶点集”判定都按 `EdgeKind` 分派。

use crate::error::{Error, Result};
use crate::graph::vertex::{Vertex, VertexId};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// 未指定权重时的默认值
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// 边的方向性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// 有向边：tail -> head
    Directed,
    /// 无向边：端点无序
    Undirected,
}

impl EdgeKind {
    /// 用于相等性和哈希的端点键
    ///
    /// 有向边保持顺序；无向边按 ID 归一化，使 (a, b) 与 (b, a) 得到同一个键。
    pub fn endpoint_key(self, first: VertexId, second: VertexId) -> (VertexId, VertexId) {
        match self {
            EdgeKind::Directed => (first, second),
            EdgeKind::Undirected if second < first => (second, first),
            EdgeKind::Undirected => (first, second),
        }
    }

    /// 给定两个端点是否在集合内，判断边是否跨越集合边界
    pub fn crosses(self, first_inside: bool, second_inside: bool) -> bool {
        match self {
            EdgeKind::Directed => first_inside && !second_inside,
            EdgeKind::Undirected => first_inside != second_inside,
        }
    }

    /// 邻接表中应写入的 (from, to) 方向
    pub fn links<'a>(
        self,
        first: &'a Vertex,
        second: &'a Vertex,
    ) -> SmallVec<[(&'a Vertex, &'a Vertex); 2]> {
        match self {
            EdgeKind::Directed => smallvec![(first, second)],
            EdgeKind::Undirected => smallvec![(first, second), (second, first)],
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => write!(f, "directed"),
            EdgeKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// 带权边
///
/// 相等性与哈希只看方向性和端点，不看权重；排序只看权重，
/// 因此没有实现 `PartialOrd`，请使用 [`Edge::compare_weight`]。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 方向性
    kind: EdgeKind,
    /// 第一个端点（有向边的 tail）
    first: Vertex,
    /// 第二个端点（有向边的 head）
    second: Vertex,
    /// 权重
    weight: f64,
}

impl Edge {
    /// 创建指定方向性的边，权重为默认值
    pub fn new(kind: EdgeKind, first: Vertex, second: Vertex) -> Self {
        Self {
            kind,
            first,
            second,
            weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    /// 创建有向边 tail -> head
    pub fn directed(tail: Vertex, head: Vertex) -> Self {
        Self::new(EdgeKind::Directed, tail, head)
    }

    /// 创建无向边
    pub fn undirected(a: Vertex, b: Vertex) -> Self {
        Self::new(EdgeKind::Undirected, a, b)
    }

    /// 设置权重
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == EdgeKind::Directed
    }

    pub fn first(&self) -> &Vertex {
        &self.first
    }

    pub fn second(&self) -> &Vertex {
        &self.second
    }

    /// 有向路径的起点
    pub fn tail(&self) -> &Vertex {
        &self.first
    }

    /// 有向路径的终点
    pub fn head(&self) -> &Vertex {
        &self.second
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 按权重升序比较；权重相等（含 NaN）时视为相等，不考虑端点
    pub fn compare_weight(&self, other: &Edge) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
    }

    /// 返回与 `v` 相对的另一个端点
    pub fn other(&self, v: &Vertex) -> Result<&Vertex> {
        if *v == self.first {
            Ok(&self.second)
        } else if *v == self.second {
            Ok(&self.first)
        } else {
            Err(Error::InvalidArgument(format!(
                "顶点 {} 不是边 {} 的端点",
                v, self
            )))
        }
    }

    /// 边是否跨越顶点集边界
    ///
    /// 无向边：恰有一个端点在集合内。
    /// 有向边：tail 在集合内且 head 不在。
    pub fn crosses<S: BuildHasher>(&self, vertices: &HashSet<Vertex, S>) -> bool {
        self.kind.crosses(
            vertices.contains(&self.first),
            vertices.contains(&self.second),
        )
    }

    /// 端点 ID 是否恰有一个在集合内（不区分方向）
    pub fn spans<S: BuildHasher>(&self, ids: &HashSet<VertexId, S>) -> bool {
        ids.contains(&self.first.id()) != ids.contains(&self.second.id())
    }

    fn key(&self) -> (VertexId, VertexId) {
        self.kind.endpoint_key(self.first.id(), self.second.id())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            EdgeKind::Directed => "->",
            EdgeKind::Undirected => "-",
        };
        write!(f, "{}{}{} {}", self.first, arrow, self.second, self.weight)
    }
}
