//! 扇出聚合 - 顺序执行子查询，单个失败不会中断整批

use crate::search::SearchGateway;
use crate::types::{AggregatedReport, SearchRecord};

pub struct FanOutAggregator<'a> {
    gateway: &'a dyn SearchGateway,
    /// 最多实际发出的子查询数，None 表示全部发出
    limit: Option<usize>,
}

impl<'a> FanOutAggregator<'a> {
    pub fn new(gateway: &'a dyn SearchGateway) -> Self {
        Self {
            gateway,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// 依次执行子查询，每个子查询只尝试一次，结果与输入顺序一致
    pub async fn run(&self, queries: &[String]) -> AggregatedReport {
        let attempted = self.limit.unwrap_or(queries.len()).min(queries.len());
        let mut records = Vec::with_capacity(attempted);

        for query in &queries[..attempted] {
            match self.gateway.search(query).await {
                Ok(text) => {
                    tracing::debug!(gateway = self.gateway.name(), query = %query, "sub-query succeeded");
                    records.push(SearchRecord::success(query, text));
                }
                Err(e) => {
                    tracing::warn!(gateway = self.gateway.name(), query = %query, error = %e, "sub-query failed");
                    records.push(SearchRecord::failure(query, e.to_string()));
                }
            }
        }

        AggregatedReport::new(records)
    }
}
