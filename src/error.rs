//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// 搜索网关错误
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query cannot be empty")]
    EmptyQuery,

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode search response: {0}")]
    Decode(String),
}

/// 工具调用错误
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid tool input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 模型最终输出无法解析为结构化报告，保留原始文本用于诊断
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub raw: String,
}

/// 单次分析请求的终止性错误
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("topic cannot be empty")]
    EmptyTopic,

    #[error("agent stopped after reaching the iteration cap ({max_iterations}) without a final answer")]
    AgentIterationExceeded { max_iterations: usize },

    #[error("agent finished without producing any output")]
    AgentNoOutput,

    #[error("reasoning backend failed: {0:#}")]
    Reasoner(anyhow::Error),

    #[error("failed to parse agent response: {message}")]
    SchemaValidation { message: String, raw: String },

    #[error("failed to encode report as JSON: {0}")]
    ReportEncoding(#[source] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ValidationError> for TrendError {
    fn from(err: ValidationError) -> Self {
        TrendError::SchemaValidation {
            message: err.message,
            raw: err.raw,
        }
    }
}
