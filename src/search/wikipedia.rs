//! Wikipedia 百科检索后端

use async_trait::async_trait;
use serde_json::Value;

use super::{SearchGateway, ensure_success, sanitize_query, truncate_chars};
use crate::error::SearchError;

const ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

pub const NO_RESULT: &str = "No good Wikipedia Search Result was found";

pub struct WikipediaGateway {
    client: reqwest::Client,
    top_k: usize,
    max_chars: usize,
}

impl WikipediaGateway {
    pub fn new(client: reqwest::Client, top_k: usize, max_chars: usize) -> Self {
        Self {
            client,
            top_k,
            max_chars,
        }
    }

    async fn get_json(&self, params: &[(&str, &str)]) -> Result<Value, SearchError> {
        let response = self.client.get(ENDPOINT).query(params).send().await?;
        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))
    }

    async fn search_titles(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let limit = self.top_k.to_string();
        let data = self
            .get_json(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("format", "json"),
            ])
            .await?;
        Ok(Self::parse_titles(&data))
    }

    async fn fetch_summary(&self, title: &str) -> Result<Option<String>, SearchError> {
        let data = self
            .get_json(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
            ])
            .await?;
        Ok(Self::parse_extract(&data))
    }

    pub(crate) fn parse_titles(data: &Value) -> Vec<String> {
        data.pointer("/query/search")
            .and_then(|s| s.as_array())
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("title").and_then(|t| t.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn parse_extract(data: &Value) -> Option<String> {
        data.pointer("/query/pages")
            .and_then(|p| p.as_object())
            .and_then(|pages| {
                pages
                    .values()
                    .find_map(|page| page.get("extract").and_then(|e| e.as_str()))
            })
            .map(|extract| extract.trim().to_string())
            .filter(|extract| !extract.is_empty())
    }
}

#[async_trait]
impl SearchGateway for WikipediaGateway {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let query = sanitize_query(query)?;
        tracing::debug!(query = %query, "wikipedia lookup");

        let mut pages = Vec::new();
        for title in self.search_titles(&query).await? {
            if let Some(summary) = self.fetch_summary(&title).await? {
                pages.push(format!("Page: {}\nSummary: {}", title, summary));
            }
        }

        if pages.is_empty() {
            return Ok(NO_RESULT.to_string());
        }
        Ok(truncate_chars(&pages.join("\n\n"), self.max_chars))
    }
}
