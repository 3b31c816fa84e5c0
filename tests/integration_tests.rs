use std::collections::VecDeque;
use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use trend_scout::agent::{AgentStep, Reasoner, StepContext, ToolArgs, ToolExchange};
use trend_scout::config::Config;
use trend_scout::error::{SearchError, TrendError};
use trend_scout::llm::tools::build_registry;
use trend_scout::search::SearchGateway;
use trend_scout::types::{MarketPotential, TrendCategory};
use trend_scout::workflow::analyze_fashion_trend;

const BLOCK_HEADER: &str = "Trend Analysis Report\nTimestamp: ";

/// 固定文本的检索后端，记录收到的子查询
struct StubGateway {
    answer: String,
    queries: Mutex<Vec<String>>,
}

impl StubGateway {
    fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchGateway for StubGateway {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search(&self, query: &str) -> Result<String, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.answer.clone())
    }
}

/// 按脚本返回步骤的推理后端，记录每一步看到的工具结果
struct StubReasoner {
    steps: Mutex<VecDeque<AgentStep>>,
    observed: Mutex<Vec<Vec<ToolExchange>>>,
}

impl StubReasoner {
    fn new(steps: Vec<AgentStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            observed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Reasoner for StubReasoner {
    async fn next_step(&self, ctx: StepContext<'_>) -> anyhow::Result<AgentStep> {
        self.observed.lock().unwrap().push(ctx.scratchpad.to_vec());
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted step left"))
    }
}

fn config_in(dir: &TempDir, max_iterations: usize) -> Config {
    let mut config = Config::default();
    config.output.output_dir = dir.path().join("reports");
    config.agent.max_iterations = max_iterations;
    config.agent.verbose_tools = false;
    config
}

fn lifecycle_call(input: &str) -> AgentStep {
    AgentStep::CallTool {
        tool: "trend_lifecycle_analysis".to_string(),
        args: ToolArgs::new(input),
    }
}

const Y2K_PAYLOAD: &str = r#"Here is the final report:
{
  "topic": "Y2K fashion revival",
  "summary": "Low-rise denim and butterfly clips are back, driven by TikTok nostalgia.",
  "sources": ["vogue.com", "tiktok.com"],
  "toolsUsed": ["trend_lifecycle_analysis"],
  "trendCategory": "y2k",
  "confidenceScore": 0.82,
  "keyInfluencers": ["Bella Hadid", "Dua Lipa"],
  "trendingKeywords": ["low-rise jeans", "baby tee"],
  "seasonRelevance": "year-round",
  "priceRange": "budget",
  "sustainabilityScore": 0.35,
  "marketPotential": "emerging"
}"#;

#[tokio::test]
async fn test_y2k_revival_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, 10);

    // 已有一个块，验证只追加一个新块
    fs::create_dir_all(&config.output.output_dir).unwrap();
    fs::write(
        config.detailed_report_path(),
        format!("{}2024-01-01 00:00:00\n\nolder report\n\n", BLOCK_HEADER),
    )
    .unwrap();

    let gateway = Arc::new(StubGateway::new(
        "Y2K looks show growing demand and rising popularity",
    ));
    let registry = build_registry(&config, gateway.clone(), gateway.clone());
    let reasoner = StubReasoner::new(vec![
        lifecycle_call("Y2K fashion revival"),
        AgentStep::Finish {
            output: Y2K_PAYLOAD.to_string(),
        },
    ]);

    let outcome = analyze_fashion_trend(&config, &reasoner, &registry, "Y2K fashion revival")
        .await
        .unwrap();

    assert_eq!(outcome.report.market_potential, MarketPotential::Emerging);
    assert_eq!(outcome.report.trend_category, TrendCategory::Y2k);
    assert_eq!(outcome.report.sustainability_score, Some(0.35));
    assert_eq!(outcome.tool_calls_history, vec!["trend_lifecycle_analysis"]);

    // 生命周期工具执行了五个子查询，结果回传给推理后端
    assert_eq!(gateway.queries.lock().unwrap().len(), 5);
    let observed = reasoner.observed.lock().unwrap();
    assert_eq!(observed.len(), 2);
    let exchange = &observed[1][0];
    assert!(
        exchange
            .observation
            .starts_with("Trend Lifecycle Analysis for 'Y2K fashion revival':\nStage: emerging or peak\n")
    );

    let path = outcome.persisted.unwrap();
    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.matches(BLOCK_HEADER).count(), 2);
    let serialized = serde_json::to_string_pretty(&outcome.report).unwrap();
    let new_block = content.rsplit(BLOCK_HEADER).next().unwrap();
    assert!(new_block.contains(&serialized));
    assert!(new_block.contains("\"marketPotential\": \"emerging\""));
}

#[tokio::test]
async fn test_schema_failure_surfaces_raw_text() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, 10);
    let gateway = Arc::new(StubGateway::new("nothing"));
    let registry = build_registry(&config, gateway.clone(), gateway);
    let raw = r#"{"topic": "Y2K", "summary": "s", "trendCategory": "spacecore"}"#;
    let reasoner = StubReasoner::new(vec![AgentStep::Finish {
        output: raw.to_string(),
    }]);

    let err = analyze_fashion_trend(&config, &reasoner, &registry, "Y2K")
        .await
        .unwrap_err();

    match err {
        TrendError::SchemaValidation { raw: kept, .. } => assert_eq!(kept, raw),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!config.detailed_report_path().exists());
}

#[tokio::test]
async fn test_iteration_cap_is_terminal() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, 3);
    let gateway = Arc::new(StubGateway::new("denim"));
    let registry = build_registry(&config, gateway.clone(), gateway);
    let reasoner = StubReasoner::new(vec![
        lifecycle_call("denim"),
        lifecycle_call("denim"),
        lifecycle_call("denim"),
        lifecycle_call("denim"),
    ]);

    let err = analyze_fashion_trend(&config, &reasoner, &registry, "denim")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TrendError::AgentIterationExceeded { max_iterations: 3 }
    ));
    assert_eq!(reasoner.observed.lock().unwrap().len(), 3);
    assert!(!config.detailed_report_path().exists());
}

#[tokio::test]
async fn test_unknown_tool_is_fed_back_to_reasoner() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, 5);
    let gateway = Arc::new(StubGateway::new("denim"));
    let registry = build_registry(&config, gateway.clone(), gateway);
    let reasoner = StubReasoner::new(vec![
        AgentStep::CallTool {
            tool: "google".to_string(),
            args: ToolArgs::new("denim"),
        },
        AgentStep::Finish {
            output: "   ".to_string(),
        },
    ]);

    let err = analyze_fashion_trend(&config, &reasoner, &registry, "denim")
        .await
        .unwrap_err();

    assert!(matches!(err, TrendError::AgentNoOutput));
    let observed = reasoner.observed.lock().unwrap();
    assert!(
        observed[1][0]
            .observation
            .starts_with("Error: google is not a valid tool, try one of [search_instagram, wikipedia,")
    );
}
