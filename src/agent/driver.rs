//! 推理驱动循环 - 在迭代上限内反复向推理后端索取下一步并执行工具

use super::{AgentStep, Reasoner, StepContext, ToolExchange, ToolRegistry};
use crate::error::TrendError;

/// 推理循环的执行结果
#[derive(Debug, Clone)]
pub struct AgentOutcome {
    /// 最终文本
    pub output: String,
    pub iterations_used: usize,
    /// 依次调用过的工具名称
    pub tool_calls_history: Vec<String>,
    pub scratchpad: Vec<ToolExchange>,
}

pub struct AgentDriver<'a> {
    reasoner: &'a dyn Reasoner,
    registry: &'a ToolRegistry,
    max_iterations: usize,
    verbose: bool,
}

impl<'a> AgentDriver<'a> {
    pub fn new(reasoner: &'a dyn Reasoner, registry: &'a ToolRegistry, max_iterations: usize) -> Self {
        Self {
            reasoner,
            registry,
            max_iterations,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 执行推理循环，工具失败作为观察结果回传，不会中断循环
    pub async fn run(&self, topic: &str) -> Result<AgentOutcome, TrendError> {
        if self.verbose {
            println!(
                "   ♻️ Agent loop started, max iterations: {}",
                self.max_iterations
            );
        }

        let specs = self.registry.specs();
        let mut scratchpad: Vec<ToolExchange> = Vec::new();
        let mut tool_calls_history = Vec::new();

        for iteration in 1..=self.max_iterations {
            let ctx = StepContext {
                topic,
                tools: &specs,
                scratchpad: &scratchpad,
                iteration,
                max_iterations: self.max_iterations,
            };

            let step = self
                .reasoner
                .next_step(ctx)
                .await
                .map_err(TrendError::Reasoner)?;

            match step {
                AgentStep::Finish { output } => {
                    if output.trim().is_empty() {
                        return Err(TrendError::AgentNoOutput);
                    }
                    if self.verbose {
                        println!("   ✅ Agent finished after {} iteration(s)", iteration);
                    }
                    return Ok(AgentOutcome {
                        output,
                        iterations_used: iteration,
                        tool_calls_history,
                        scratchpad,
                    });
                }
                AgentStep::CallTool { tool, args } => {
                    if self.verbose {
                        println!("   🔧 tool called...{}@{:?}", tool, args.input);
                    }
                    tracing::debug!(iteration, tool = %tool, input = %args.input, "dispatching tool");

                    let observation = match self.registry.get(&tool) {
                        Some(handle) => match handle.call(args.clone()).await {
                            Ok(text) => text,
                            Err(e) => {
                                tracing::warn!(tool = %tool, error = %e, "tool call failed");
                                format!("Error: {}", e)
                            }
                        },
                        None => {
                            tracing::warn!(tool = %tool, "unknown tool requested");
                            format!(
                                "Error: {} is not a valid tool, try one of [{}].",
                                tool,
                                self.registry.names().join(", ")
                            )
                        }
                    };

                    tool_calls_history.push(tool.clone());
                    scratchpad.push(ToolExchange {
                        tool,
                        args,
                        observation,
                    });
                }
            }
        }

        if self.verbose {
            println!(
                "   ⚠️ Reached the iteration cap ({}), stopping",
                self.max_iterations
            );
        }
        Err(TrendError::AgentIterationExceeded {
            max_iterations: self.max_iterations,
        })
    }
}
