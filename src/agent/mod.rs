//! Agent - 工具注册表与推理驱动循环
//!
//! 推理后端只负责决定下一步（调用哪个工具或给出最终答案），
//! 工具执行、迭代上限与失败语义都在这里控制，与具体模型无关。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ToolError;

mod driver;

pub use driver::{AgentDriver, AgentOutcome};

/// 工具调用参数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolArgs {
    pub input: String,
    /// 仅 save_to_txt 使用
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ToolArgs {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            filename: None,
        }
    }
}

/// 暴露给Agent的命名能力
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn call(&self, args: ToolArgs) -> Result<String, ToolError>;
}

/// 提供给推理后端的工具说明
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
}

/// 固定的工具注册表，按注册顺序保存
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名工具后注册者覆盖先注册者
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .map(|t| ToolSpec {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// 一次工具调用及其观察结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolExchange {
    pub tool: String,
    pub args: ToolArgs,
    pub observation: String,
}

/// 推理后端给出的下一步
#[derive(Debug, Clone, PartialEq)]
pub enum AgentStep {
    CallTool { tool: String, args: ToolArgs },
    Finish { output: String },
}

/// 单步决策的上下文
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub topic: &'a str,
    pub tools: &'a [ToolSpec],
    pub scratchpad: &'a [ToolExchange],
    /// 从1开始
    pub iteration: usize,
    pub max_iterations: usize,
}

/// 决策后端（模型或测试桩）
#[async_trait]
pub trait Reasoner: Send + Sync {
    async fn next_step(&self, ctx: StepContext<'_>) -> anyhow::Result<AgentStep>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// 按脚本依次返回决策的推理桩
    pub struct ScriptedReasoner {
        steps: Mutex<VecDeque<AgentStep>>,
        pub seen_scratchpads: Mutex<Vec<Vec<ToolExchange>>>,
    }

    impl ScriptedReasoner {
        pub fn new(steps: Vec<AgentStep>) -> Self {
            Self {
                steps: Mutex::new(steps.into()),
                seen_scratchpads: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Reasoner for ScriptedReasoner {
        async fn next_step(&self, ctx: StepContext<'_>) -> anyhow::Result<AgentStep> {
            self.seen_scratchpads
                .lock()
                .unwrap()
                .push(ctx.scratchpad.to_vec());
            self.steps
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }
    }

    /// 原样返回输入的工具
    pub struct EchoTool(pub &'static str);

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "Echo the input back."
        }

        async fn call(&self, args: ToolArgs) -> Result<String, ToolError> {
            if args.input.is_empty() {
                return Err(ToolError::InvalidInput("empty".to_string()));
            }
            Ok(format!("{} says {}", self.0, args.input))
        }
    }

    pub fn call(tool: &str, input: &str) -> AgentStep {
        AgentStep::CallTool {
            tool: tool.to_string(),
            args: ToolArgs::new(input),
        }
    }

    pub fn finish(output: &str) -> AgentStep {
        AgentStep::Finish {
            output: output.to_string(),
        }
    }
}
