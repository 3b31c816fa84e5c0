//! 分析工作流 - 从用户问题到结构化报告与持久化

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::agent::{AgentDriver, Reasoner, ToolRegistry};
use crate::config::Config;
use crate::error::TrendError;
use crate::llm::client::LLMClient;
use crate::llm::reasoner::LlmReasoner;
use crate::llm::tools::build_registry;
use crate::report::console::{RULE, format_report};
use crate::report::{ReportWriter, ResponseValidator};
use crate::search::{DuckDuckGoGateway, SearchGateway, WikipediaGateway, build_http_client};
use crate::types::StructuredTrendReport;

/// 一次成功分析的结果
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: StructuredTrendReport,
    /// 推理循环依次调用过的工具
    pub tool_calls_history: Vec<String>,
    /// 详细报告的写入结果，失败不影响报告本身
    pub persisted: Result<PathBuf, TrendError>,
}

/// 执行一次趋势分析请求
///
/// 报告要么完整产出要么整体失败；仅持久化失败会随报告一起返回。
pub async fn analyze_fashion_trend(
    config: &Config,
    reasoner: &dyn Reasoner,
    registry: &ToolRegistry,
    topic: &str,
) -> Result<AnalysisOutcome, TrendError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(TrendError::EmptyTopic);
    }

    println!("Analyzing: {}", topic);
    println!("{}", RULE);
    tracing::info!(topic, "analysis started");

    let outcome = AgentDriver::new(reasoner, registry, config.agent.max_iterations)
        .verbose(config.agent.verbose_tools)
        .run(topic)
        .await?;
    tracing::info!(
        iterations = outcome.iterations_used,
        tools = ?outcome.tool_calls_history,
        "agent finished"
    );

    let report = match ResponseValidator::validate(&outcome.output) {
        Ok(report) => report,
        Err(err) => {
            println!("Error parsing response: {}", err.message);
            println!("Raw response: {}", err.raw);
            return Err(err.into());
        }
    };

    println!("{}", format_report(&report));

    let persisted = persist_detailed_report(config, &report);
    if let Err(err) = &persisted {
        tracing::warn!(error = %err, "detailed report was not saved");
    }

    Ok(AnalysisOutcome {
        report,
        tool_calls_history: outcome.tool_calls_history,
        persisted,
    })
}

fn persist_detailed_report(
    config: &Config,
    report: &StructuredTrendReport,
) -> Result<PathBuf, TrendError> {
    let json = encode_pretty(report)?;
    ReportWriter::from_config(&config.output).append(&config.output.detailed_filename, &json)
}

fn encode_pretty<T: Serialize>(value: &T) -> Result<String, TrendError> {
    serde_json::to_string_pretty(value).map_err(TrendError::ReportEncoding)
}

/// 组装真实的检索后端与模型，执行一次分析
pub async fn launch(config: &Config, topic: &str) -> Result<()> {
    let started = Instant::now();

    let http = build_http_client(&config.search).context("Failed to build HTTP client")?;
    let web: Arc<dyn SearchGateway> = Arc::new(DuckDuckGoGateway::new(
        http.clone(),
        config.search.max_search_results,
    ));
    let encyclopedia: Arc<dyn SearchGateway> = Arc::new(WikipediaGateway::new(
        http,
        config.search.wiki_top_k,
        config.search.wiki_max_chars,
    ));
    let registry = build_registry(config, web, encyclopedia);

    let client = LLMClient::new(config.llm.clone())?;
    if config.verbose {
        println!(
            "🤖 Using {} model {} with {} tools",
            config.llm.provider,
            client.model(),
            registry.len()
        );
    }
    let reasoner = LlmReasoner::new(client).verbose(config.verbose);

    let outcome = analyze_fashion_trend(config, &reasoner, &registry, topic).await?;

    match &outcome.persisted {
        Ok(path) => println!("💾 Detailed report saved to {}", path.display()),
        Err(err) => eprintln!("❌ {}", err),
    }
    if config.verbose {
        println!(
            "⏱️ Analysis finished in {:.2}s",
            started.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
