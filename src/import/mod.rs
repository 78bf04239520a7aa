//! 数据导入模块
//!
//! 从文本边列表导入图。格式：
//!
//! ```text
//! 4 3          <- 顶点数 [边数]
//! 1 2 2.3      <- 端点 端点 权重
//! 1 3 3.677
//! 1 4 7.213
//! ```
//!
//! 以 `#` 开头的行视为注释。

use crate::error::{Error, Result};
use crate::graph::{AdjacencyList, Edge, EdgeKind, Graph, Vertex};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// 导入配置
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// 字段分隔符
    pub delimiter: u8,
    /// 生成的边的方向性
    pub kind: EdgeKind,
    /// 第一条记录是否为 “顶点数 [边数]” 头部
    pub header: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b' ',
            kind: EdgeKind::Undirected,
            header: true,
        }
    }
}

/// 导入结果
#[derive(Debug, Clone)]
pub struct EdgeList {
    /// 顶点数（头部声明，无头部时为不同端点数）
    pub vertex_count: usize,
    /// 头部声明的边数
    pub declared_edges: Option<usize>,
    /// 按文件顺序的边
    pub edges: Vec<Edge>,
    /// 边的方向性
    pub kind: EdgeKind,
}

impl EdgeList {
    /// 转换为边列表图
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count)?;
        graph.extend(self.edges);
        Ok(graph)
    }

    /// 转换为邻接表
    pub fn into_adjacency_list(self) -> Result<AdjacencyList> {
        let mut list = AdjacencyList::new(self.kind);
        for edge in self.edges {
            list.add_edge(edge)?;
        }
        Ok(list)
    }
}

/// 边列表导入器
pub struct EdgeListLoader {
    config: LoaderConfig,
}

impl EdgeListLoader {
    /// 创建导入器
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// 从文件导入
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        let path = path.as_ref();
        let file = File::open(path)?;
        info!(path = %path.display(), "开始导入边列表");
        self.load_reader(BufReader::new(file))
    }

    /// 从任意读取器导入
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<EdgeList> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.config.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut header: Option<(usize, Option<usize>)> = None;
        let mut edges = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|e| Error::ImportError(e.to_string()))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let fields = non_empty_fields(&record);
            if fields.is_empty() {
                continue;
            }

            if self.config.header && header.is_none() {
                header = Some(parse_header(&fields, line)?);
                continue;
            }
            edges.push(self.parse_edge(&fields, line)?);
        }

        let (vertex_count, declared_edges) = match header {
            Some(h) => h,
            None if self.config.header => {
                return Err(Error::MissingArgument("边列表缺少顶点数头部".to_string()))
            }
            None => (distinct_endpoints(&edges), None),
        };

        if let Some(declared) = declared_edges {
            if declared != edges.len() {
                warn!(declared, parsed = edges.len(), "声明的边数与实际不符");
            }
        }
        info!(vertex_count, edges = edges.len(), "边列表导入完成");

        Ok(EdgeList {
            vertex_count,
            declared_edges,
            edges,
            kind: self.config.kind,
        })
    }

    /// 解析一条边记录
    fn parse_edge(&self, fields: &[&str], line: u64) -> Result<Edge> {
        let first: i64 = parse_field(fields, 0, "起点", line)?;
        let second: i64 = parse_field(fields, 1, "终点", line)?;
        let weight: f64 = parse_field(fields, 2, "权重", line)?;

        let edge = Edge::new(
            self.config.kind,
            Vertex::try_from_raw(first)?,
            Vertex::try_from_raw(second)?,
        );
        Ok(edge.with_weight(weight))
    }
}

impl Default for EdgeListLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

/// 从文件导入（默认配置）
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    EdgeListLoader::default().load_path(path)
}

/// 连续分隔符会产生空字段，这里丢弃
fn non_empty_fields(record: &StringRecord) -> Vec<&str> {
    record.iter().filter(|f| !f.is_empty()).collect()
}

fn parse_header(fields: &[&str], line: u64) -> Result<(usize, Option<usize>)> {
    let vertex_count = parse_field(fields, 0, "顶点数", line)?;
    let declared_edges = if fields.len() > 1 {
        Some(parse_field(fields, 1, "边数", line)?)
    } else {
        None
    };
    Ok((vertex_count, declared_edges))
}

fn parse_field<T>(fields: &[&str], index: usize, name: &str, line: u64) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = fields
        .get(index)
        .ok_or_else(|| Error::MissingArgument(format!("第 {} 行缺少{}", line, name)))?;
    raw.parse()
        .map_err(|e| Error::ParseError(format!("第 {} 行{} '{}' 无效: {}", line, name, raw, e)))
}

fn distinct_endpoints(edges: &[Edge]) -> usize {
    edges
        .iter()
        .flat_map(|e| [e.first().id(), e.second().id()])
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const STAR: &str = "4 3\n1 2 2.3\n1 3 3.677\n1 4 7.213\n";

    #[test]
    fn test_import_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", STAR).unwrap();

        let list = load_edge_list(file.path()).unwrap();
        assert_eq!(list.vertex_count, 4);
        assert_eq!(list.declared_edges, Some(3));
        assert_eq!(list.edges.len(), 3);
        assert_eq!(list.edges[1].weight(), 3.677);

        let tree = list.into_graph().unwrap().min_spanning_tree().unwrap();
        assert_eq!(tree.truncated_cost(), 12);
    }

    #[test]
    fn test_import_missing_file() {
        let result = load_edge_list("/nonexistent/edges.txt");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_import_extra_spaces_and_comments() {
        let input = "# 测试图\n3  2\n\n1   2  1.5\n2 3   2.5\n";
        let list = EdgeListLoader::default()
            .load_reader(input.as_bytes())
            .unwrap();
        assert_eq!(list.vertex_count, 3);
        assert_eq!(list.edges.len(), 2);
        assert_eq!(list.edges[1].weight(), 2.5);
    }

    #[test]
    fn test_import_csv_without_header() {
        let config = LoaderConfig {
            delimiter: b',',
            kind: EdgeKind::Directed,
            header: false,
        };
        let input = "1,2,1.0\n2,3,1.0\n3,1,1.0\n";
        let list = EdgeListLoader::new(config).load_reader(input.as_bytes()).unwrap();

        assert_eq!(list.vertex_count, 3);
        assert!(list.edges.iter().all(Edge::is_directed));

        let adj = list.into_adjacency_list().unwrap();
        assert_eq!(adj.num_vertices(), 3);
        assert_eq!(adj.breadth_first_search(&Vertex::new(2)).len(), 3);
    }

    #[test]
    fn test_import_missing_weight() {
        let result = EdgeListLoader::default().load_reader("2 1\n1 2\n".as_bytes());
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }

    #[test]
    fn test_import_bad_number() {
        let result = EdgeListLoader::default().load_reader("2 1\n1 x 3\n".as_bytes());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_import_negative_id() {
        let result = EdgeListLoader::default().load_reader("2 1\n-1 2 3\n".as_bytes());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_import_empty_input() {
        let result = EdgeListLoader::default().load_reader("".as_bytes());
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }

    #[test]
    fn test_import_zero_vertices_graph_rejected() {
        let list = EdgeListLoader::default()
            .load_reader("0 0\n".as_bytes())
            .unwrap();
        assert!(matches!(list.into_graph(), Err(Error::InvalidArgument(_))));
    }
}
