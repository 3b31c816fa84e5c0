//! 搜索网关 - 外部检索后端的统一接口

use async_trait::async_trait;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;

pub mod duckduckgo;
pub mod wikipedia;

pub use duckduckgo::DuckDuckGoGateway;
pub use wikipedia::WikipediaGateway;

/// 给定子查询返回自由文本结果或错误
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// 后端名称
    fn name(&self) -> &str;

    /// 执行一次检索，不重试
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

/// 构建共享的HTTP客户端
pub fn build_http_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// 空白类控制字符视为分隔符，其余控制字符丢弃，连续空白合并；空查询视为错误
pub(crate) fn sanitize_query(query: &str) -> Result<String, SearchError> {
    let cleaned: String = query
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    let query = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(query)
}

/// 按字符数截断，保证不切断UTF-8字符
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// 检查HTTP状态码，非成功时带上响应体
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, SearchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SearchError::Status {
        status: status.as_u16(),
        body,
    })
}
