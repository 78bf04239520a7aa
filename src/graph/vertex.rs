//! 顶点定义
//!
//! 顶点身份只由 ID 决定，标签不参与相等性比较

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 顶点 ID（非负整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
///
/// 创建后不可变。`PartialEq`、`Hash` 和 `Ord` 都只看 `id`。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawVertex")]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 可选标签
    label: Option<String>,
}

impl Vertex {
    /// 创建无标签顶点
    pub fn new(id: u64) -> Self {
        Self {
            id: VertexId::new(id),
            label: None,
        }
    }

    /// 从有符号整数创建顶点（导入路径使用），负数 ID 报错
    pub fn try_from_raw(id: i64) -> Result<Self> {
        if id < 0 {
            return Err(Error::InvalidArgument(format!("顶点 ID 不能为负数: {}", id)));
        }
        Ok(Self::new(id as u64))
    }

    /// 创建带标签的顶点，标签不能为空
    pub fn with_label(id: u64, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(Error::InvalidArgument("顶点标签不能为空".to_string()));
        }
        Ok(Self {
            id: VertexId::new(id),
            label: Some(label),
        })
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// 获取顶点标签
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// 反序列化的中间形式，经由构造函数校验标签
#[derive(Deserialize)]
struct RawVertex {
    id: VertexId,
    label: Option<String>,
}

impl TryFrom<RawVertex> for Vertex {
    type Error = Error;

    fn try_from(raw: RawVertex) -> Result<Self> {
        match raw.label {
            Some(label) => Self::with_label(raw.id.as_u64(), label),
            None => Ok(Self::from(raw.id)),
        }
    }
}

impl From<VertexId> for Vertex {
    fn from(id: VertexId) -> Self {
        Self { id, label: None }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{} ", label)?;
        }
        write!(f, "[{}]", self.id)
    }
}
