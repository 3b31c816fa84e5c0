//! 扇出分析工具 - 每种分析类型一个工具

use async_trait::async_trait;
use std::sync::Arc;

use crate::agent::{Tool, ToolArgs};
use crate::analysis::AnalysisKind;
use crate::config::SearchConfig;
use crate::error::ToolError;
use crate::search::SearchGateway;

pub struct AgentToolAnalysis {
    kind: AnalysisKind,
    gateway: Arc<dyn SearchGateway>,
    config: SearchConfig,
}

impl AgentToolAnalysis {
    pub fn new(kind: AnalysisKind, gateway: Arc<dyn SearchGateway>, config: SearchConfig) -> Self {
        Self {
            kind,
            gateway,
            config,
        }
    }
}

#[async_trait]
impl Tool for AgentToolAnalysis {
    fn name(&self) -> &str {
        self.kind.tool_name()
    }

    fn description(&self) -> &str {
        self.kind.description()
    }

    /// 子查询失败已记录在输出文本中，这里不会返回错误
    async fn call(&self, args: ToolArgs) -> Result<String, ToolError> {
        let topic = args.input.trim();
        if topic.is_empty() {
            return Err(ToolError::InvalidInput(format!(
                "{} requires a non-empty topic",
                self.name()
            )));
        }
        Ok(self.kind.run(topic, self.gateway.as_ref(), &self.config).await)
    }
}
