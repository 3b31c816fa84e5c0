//! 基于LLM的决策后端：每一步通过一次结构化提取得到下一步动作

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::agent::{AgentStep, Reasoner, StepContext, ToolArgs};
use crate::llm::client::LLMClient;
use crate::llm::prompts;

/// 决策动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    /// 调用一个工具
    CallTool,
    /// 给出最终答案
    FinalAnswer,
}

/// 模型在单步中返回的决策
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentDecision {
    /// 简短说明为什么采取这个动作
    pub thought: String,
    /// 本步要执行的动作
    pub action: DecisionAction,
    /// 要调用的工具名称，仅在 call_tool 时填写
    #[serde(default)]
    pub tool: Option<String>,
    /// 传给工具的输入文本
    #[serde(default)]
    pub tool_input: Option<String>,
    /// 仅 save_to_txt 使用的目标文件名
    #[serde(default)]
    pub filename: Option<String>,
    /// 最终答案：符合报告格式的JSON文本，仅在 final_answer 时填写
    #[serde(default)]
    pub final_answer: Option<String>,
}

impl AgentDecision {
    /// 转换为驱动循环使用的步骤
    pub fn into_step(self) -> Result<AgentStep> {
        match self.action {
            DecisionAction::CallTool => {
                let tool = self
                    .tool
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| anyhow!("decision asked for a tool call without a tool name"))?;
                Ok(AgentStep::CallTool {
                    tool,
                    args: ToolArgs {
                        input: self.tool_input.unwrap_or_default(),
                        filename: self.filename,
                    },
                })
            }
            DecisionAction::FinalAnswer => Ok(AgentStep::Finish {
                output: self.final_answer.unwrap_or_default(),
            }),
        }
    }
}

pub struct LlmReasoner {
    client: LLMClient,
    system_prompt: String,
    verbose: bool,
}

impl LlmReasoner {
    pub fn new(client: LLMClient) -> Self {
        Self {
            client,
            system_prompt: prompts::system_prompt(),
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[async_trait]
impl Reasoner for LlmReasoner {
    async fn next_step(&self, ctx: StepContext<'_>) -> Result<AgentStep> {
        let user_prompt = prompts::step_prompt(&ctx);
        tracing::debug!(
            model = self.client.model(),
            iteration = ctx.iteration,
            prompt_chars = user_prompt.chars().count(),
            "requesting agent decision"
        );

        let decision: AgentDecision = self
            .client
            .extract(&self.system_prompt, &user_prompt)
            .await?;

        if self.verbose && !decision.thought.is_empty() {
            println!("   💭 {}", decision.thought);
        }

        decision.into_step()
    }
}
