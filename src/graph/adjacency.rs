//! 邻接表
//!
//! 保存顶点集、边列表以及由边列表推导出的邻居映射。
//! 边列表是唯一的事实来源：邻居映射只通过 `link` 增量更新，
//! 反序列化时从边列表重建。

use crate::algorithm::traversal;
use crate::error::{Error, Result};
use crate::graph::edge::{Edge, EdgeKind};
use crate::graph::vertex::Vertex;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 邻居映射：顶点 -> 可达的相邻顶点集合
pub type NeighborMap = IndexMap<Vertex, IndexSet<Vertex>>;

/// 邻接表
///
/// 不拒绝平行边，调用方自行保证唯一性。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AdjacencySnapshot", into = "AdjacencySnapshot")]
pub struct AdjacencyList {
    /// 接受的边方向性
    kind: EdgeKind,
    /// 顶点集（按插入顺序）
    vertices: IndexSet<Vertex>,
    /// 边列表（按插入顺序）
    edges: Vec<Edge>,
    /// 推导出的邻居映射
    neighbors: NeighborMap,
}

/// 序列化形式，不包含邻居映射
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencySnapshot {
    pub kind: EdgeKind,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl AdjacencyList {
    /// 创建指定方向性的空邻接表
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            vertices: IndexSet::new(),
            edges: Vec::new(),
            neighbors: IndexMap::new(),
        }
    }

    /// 创建有向邻接表
    pub fn directed() -> Self {
        Self::new(EdgeKind::Directed)
    }

    /// 创建无向邻接表
    pub fn undirected() -> Self {
        Self::new(EdgeKind::Undirected)
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    // ==================== 修改 ====================

    /// 添加顶点，重复添加无影响
    pub fn add_vertex(&mut self, v: Vertex) {
        self.vertices.insert(v);
    }

    /// 添加边
    ///
    /// 两个端点加入顶点集，边追加到边列表，并更新邻居映射：
    /// 有向边只写 tail -> head，无向边写两个方向。
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if edge.kind() != self.kind {
            return Err(Error::InvalidArgument(format!(
                "{} 邻接表不接受 {} 边: {}",
                self.kind,
                edge.kind(),
                edge
            )));
        }
        self.vertices.insert(edge.first().clone());
        self.vertices.insert(edge.second().clone());
        Self::link(&mut self.neighbors, &edge);
        self.edges.push(edge);
        Ok(())
    }

    /// 添加有向边 tail -> head
    pub fn add_directed_edge(&mut self, tail: Vertex, head: Vertex, weight: f64) -> Result<()> {
        self.add_edge(Edge::directed(tail, head).with_weight(weight))
    }

    /// 邻居映射的唯一写入路径
    fn link(neighbors: &mut NeighborMap, edge: &Edge) {
        for (from, to) in edge.kind().links(edge.first(), edge.second()) {
            neighbors
                .entry(from.clone())
                .or_insert_with(IndexSet::new)
                .insert(to.clone());
        }
    }

    /// 从边列表重建邻居映射
    fn rebuild_neighbors(edges: &[Edge]) -> NeighborMap {
        let mut neighbors = IndexMap::new();
        for edge in edges {
            Self::link(&mut neighbors, edge);
        }
        neighbors
    }

    /// 邻居映射是否与边列表一致
    pub fn neighbors_consistent(&self) -> bool {
        Self::rebuild_neighbors(&self.edges) == self.neighbors
    }

    // ==================== 查询 ====================

    /// 出现在邻居映射中的顶点数
    ///
    /// 只通过 `add_vertex` 加入的孤立顶点不计入；有向邻接表中
    /// 没有出边的顶点同样不计入。
    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }

    /// 顶点集（只读）
    pub fn vertices(&self) -> &IndexSet<Vertex> {
        &self.vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 边列表（只读）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 顶点的相邻顶点
    pub fn neighbors(&self, v: &Vertex) -> impl Iterator<Item = &Vertex> + '_ {
        self.neighbors.get(v).into_iter().flatten()
    }

    /// 所有边权重之和
    pub fn total_edge_cost(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// 顶点的邻居数量
    pub fn degree(&self, v: &Vertex) -> Result<usize> {
        self.neighbors
            .get(v)
            .map(IndexSet::len)
            .ok_or_else(|| Error::InvalidArgument(format!("顶点 {} 没有邻接记录", v)))
    }

    // ==================== 遍历 ====================

    /// 从 `start` 出发的广度优先搜索，返回按发现顺序排列的可达顶点
    pub fn breadth_first_search(&self, start: &Vertex) -> IndexSet<Vertex> {
        traversal::breadth_first_search(&self.neighbors, start)
    }

    /// 从顶点集中第一个顶点出发的广度优先搜索
    pub fn breadth_first_search_any(&self) -> Result<IndexSet<Vertex>> {
        let start = self
            .vertices
            .first()
            .ok_or_else(|| Error::InvalidState("邻接表中没有顶点".to_string()))?;
        Ok(self.breadth_first_search(start))
    }

    // ==================== 序列化 ====================

    /// 序列化为字节
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// 从字节反序列化
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// 从 JSON 反序列化
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

impl From<AdjacencyList> for AdjacencySnapshot {
    fn from(list: AdjacencyList) -> Self {
        Self {
            kind: list.kind,
            vertices: list.vertices.into_iter().collect(),
            edges: list.edges,
        }
    }
}

impl TryFrom<AdjacencySnapshot> for AdjacencyList {
    type Error = Error;

    fn try_from(snapshot: AdjacencySnapshot) -> Result<Self> {
        if let Some(edge) = snapshot.edges.iter().find(|e| e.kind() != snapshot.kind) {
            return Err(Error::InvalidArgument(format!(
                "{} 邻接表中出现 {} 边: {}",
                snapshot.kind,
                edge.kind(),
                edge
            )));
        }

        let mut vertices: IndexSet<Vertex> = snapshot.vertices.into_iter().collect();
        for edge in &snapshot.edges {
            vertices.insert(edge.first().clone());
            vertices.insert(edge.second().clone());
        }
        let neighbors = Self::rebuild_neighbors(&snapshot.edges);

        Ok(Self {
            kind: snapshot.kind,
            vertices,
            edges: snapshot.edges,
            neighbors,
        })
    }
}

impl PartialEq for AdjacencyList {
    fn eq(&self, other: &Self) -> bool {
        // 顶点集比较与顺序无关，边列表比较与顺序有关
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl Eq for AdjacencyList {}

impl Hash for AdjacencyList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut ids: Vec<_> = self.vertices.iter().map(Vertex::id).collect();
        ids.sort_unstable();
        ids.hash(state);
        self.edges.hash(state);
    }
}

impl Default for AdjacencyList {
    fn default() -> Self {
        Self::undirected()
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}", self.num_vertices())?;
        for v in &self.vertices {
            writeln!(f, "{}", v)?;
        }
        writeln!(f, "Edges: {}", self.num_edges())?;
        for e in &self.edges {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}
