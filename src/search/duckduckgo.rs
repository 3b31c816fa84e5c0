//! DuckDuckGo 网页检索后端（HTML结果页，无需API KEY）

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::{SearchGateway, ensure_success, sanitize_query};
use crate::error::SearchError;

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";

pub const NO_RESULT: &str = "No good DuckDuckGo Search Result was found";

// 广告结果带有 result--ad 类
static RESULT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.result:not(.result--ad)").expect("valid result selector")
});
static SNIPPET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result__snippet").expect("valid snippet selector"));

pub struct DuckDuckGoGateway {
    client: reqwest::Client,
    max_results: usize,
}

impl DuckDuckGoGateway {
    pub fn new(client: reqwest::Client, max_results: usize) -> Self {
        Self {
            client,
            max_results,
        }
    }

    /// 将结果页中的摘要按出现顺序拼成单段文本
    pub(crate) fn render(html: &str, max_results: usize) -> String {
        let document = Html::parse_document(html);

        let snippets: Vec<String> = document
            .select(&RESULT_SELECTOR)
            .filter_map(|result| result.select(&SNIPPET_SELECTOR).next())
            .map(element_text)
            .filter(|text| !text.is_empty())
            .take(max_results.max(1))
            .collect();

        if snippets.is_empty() {
            return NO_RESULT.to_string();
        }
        snippets.join(" ")
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl SearchGateway for DuckDuckGoGateway {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let query = sanitize_query(query)?;
        tracing::debug!(query = %query, "duckduckgo search");

        let response = self
            .client
            .get(ENDPOINT)
            .query(&[("q", query.as_str())])
            .send()
            .await?;

        let html = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(Self::render(&html, self.max_results))
    }
}
