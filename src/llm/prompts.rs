//! 提示词构建

use crate::agent::StepContext;
use crate::search::truncate_chars;
use crate::types::{StructuredTrendReport, TrendCategory};

/// 回传给模型的单条工具结果最大字符数
const OBSERVATION_MAX_CHARS: usize = 6000;

const ANALYST_BRIEF: &str = r#"You are an expert fashion trend analyst with deep knowledge of the fashion industry, social media trends, and consumer behavior.

Your analysis should include:
1. Comprehensive trend identification across multiple platforms
2. Categorization of trends (streetwear, luxury, sustainable, vintage, etc.)
3. Assessment of trend lifecycle stage (emerging, peak, declining)
4. Identification of key influencers and brands driving the trend
5. Analysis of seasonal relevance and market positioning
6. Evaluation of sustainability aspects when applicable
7. Confidence scoring based on data quality and trend consistency

Use all available tools to gather comprehensive data from:
- Fashion blogs and magazines
- Social media platforms (Instagram, TikTok, Twitter)
- Fashion week reports
- Retail data and consumer behavior
- Celebrity and influencer fashion choices

Provide detailed, actionable insights that would be valuable for fashion professionals, retailers, and consumers."#;

/// 系统提示词：分析师设定 + 最终答案的JSON格式要求
pub fn system_prompt() -> String {
    let schema = serde_json::to_string_pretty(&schemars::schema_for!(StructuredTrendReport))
        .unwrap_or_default();
    let categories = TrendCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{brief}\n\nYou work step by step. At every step either call exactly one tool or give the final answer.\n\nThe final answer must be a single JSON object matching this JSON schema, with no other text:\n```json\n{schema}\n```\nAllowed trendCategory values: {categories}.\nconfidenceScore and sustainabilityScore are numbers between 0 and 1; omit sustainabilityScore when it cannot be assessed.\nList every tool you called in toolsUsed.",
        brief = ANALYST_BRIEF,
        schema = schema,
        categories = categories,
    )
}

/// 单步决策的用户提示词
pub fn step_prompt(ctx: &StepContext<'_>) -> String {
    let mut prompt = String::new();

    prompt.push_str("# Question\n");
    prompt.push_str(ctx.topic);
    prompt.push_str("\n\n");

    prompt.push_str("# Available tools\n");
    for spec in ctx.tools {
        prompt.push_str(&format!("- {}: {}\n", spec.name, spec.description));
    }
    prompt.push('\n');

    if !ctx.scratchpad.is_empty() {
        prompt.push_str("# Tool results so far\n");
        for (index, exchange) in ctx.scratchpad.iter().enumerate() {
            prompt.push_str(&format!(
                "## {}. {}({})\n{}\n\n",
                index + 1,
                exchange.tool,
                exchange.args.input,
                truncate_chars(&exchange.observation, OBSERVATION_MAX_CHARS)
            ));
        }
    }

    prompt.push_str(&format!(
        "# Step {} of {}\n",
        ctx.iteration, ctx.max_iterations
    ));
    if ctx.iteration >= ctx.max_iterations {
        prompt.push_str("This is the last step: you must give the final answer now.\n");
    } else {
        prompt.push_str(
            "Decide the next action: call one tool with its input, or give the final answer.\n",
        );
    }
    prompt
}
