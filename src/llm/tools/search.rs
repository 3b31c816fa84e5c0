//! 直接检索工具 - 将单个查询原样交给搜索网关

use async_trait::async_trait;
use std::sync::Arc;

use crate::agent::{Tool, ToolArgs};
use crate::error::ToolError;
use crate::search::SearchGateway;

pub const WEB_SEARCH_NAME: &str = "search_instagram";
pub const WEB_SEARCH_DESCRIPTION: &str = "Search for general information on any topic";

pub const WIKIPEDIA_NAME: &str = "wikipedia";
pub const WIKIPEDIA_DESCRIPTION: &str = "A wrapper around Wikipedia. Useful for when you need to answer general questions about people, places, companies, facts, historical events, or other subjects. Input should be a search query.";

pub struct AgentToolSearch {
    name: &'static str,
    description: &'static str,
    gateway: Arc<dyn SearchGateway>,
}

impl AgentToolSearch {
    pub fn web(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            name: WEB_SEARCH_NAME,
            description: WEB_SEARCH_DESCRIPTION,
            gateway,
        }
    }

    pub fn wikipedia(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            name: WIKIPEDIA_NAME,
            description: WIKIPEDIA_DESCRIPTION,
            gateway,
        }
    }
}

#[async_trait]
impl Tool for AgentToolSearch {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn call(&self, args: ToolArgs) -> Result<String, ToolError> {
        Ok(self.gateway.search(&args.input).await?)
    }
}
