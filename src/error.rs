//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("缺少参数: {0}")]
    MissingArgument(String),

    #[error("无效状态: {0}")]
    InvalidState(String),

    #[error("图不连通: {0}")]
    Disconnected(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
