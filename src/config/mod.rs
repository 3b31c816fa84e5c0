use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analysis::query_expander::QueryTemplate;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "trend-scout.toml";

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 用户未输入主题时使用的默认问题
    pub default_topic: String,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// Agent推理循环配置
    pub agent: AgentConfig,

    /// 搜索配置
    pub search: SearchConfig,

    /// 报告输出配置
    pub output: OutputConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 推理使用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,
}

/// Agent推理循环配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AgentConfig {
    /// 最大迭代次数，每次迭代对应一次模型决策
    pub max_iterations: usize,

    /// 是否在控制台打印每次工具调用
    pub verbose_tools: bool,
}

/// 站点限定的搜索来源
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceSite {
    pub domain: String,
    /// 附加在主题之后的关键词，如 "fashion trend"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl SourceSite {
    pub fn new(domain: &str, suffix: Option<&str>) -> Self {
        Self {
            domain: domain.to_string(),
            suffix: suffix.map(str::to_string),
        }
    }

    pub fn as_template(&self) -> QueryTemplate {
        QueryTemplate::Site {
            domain: self.domain.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

/// 搜索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// 时尚专项搜索最多发出的子查询数
    pub max_search_results: usize,

    /// HTTP User-Agent
    pub user_agent: String,

    /// 请求超时时间（秒）
    pub timeout_seconds: u64,

    /// 百科检索返回的条目数
    pub wiki_top_k: usize,

    /// 百科检索结果的最大字符数
    pub wiki_max_chars: usize,

    /// 时尚媒体来源
    pub fashion_sources: Vec<SourceSite>,

    /// 社交媒体平台
    pub social_platforms: Vec<SourceSite>,
}

/// 报告输出配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// 输出目录
    pub output_dir: PathBuf,

    /// save_to_txt 工具默认写入的文件
    pub default_filename: String,

    /// 结构化报告写入的文件
    pub detailed_filename: String,

    /// 每个报告块的标题行
    pub report_label: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 结构化报告的完整输出路径
    pub fn detailed_report_path(&self) -> PathBuf {
        self.output.output_dir.join(&self.output.detailed_filename)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_topic: String::from(
                "What are the current trending fashion styles and why are they popular?",
            ),
            llm: LLMConfig::default(),
            agent: AgentConfig::default(),
            search: SearchConfig::default(),
            output: OutputConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-4o-mini"),
            max_tokens: 4096,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            verbose_tools: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_search_results: 5,
            user_agent: format!("trend-scout/{}", env!("CARGO_PKG_VERSION")),
            timeout_seconds: 15,
            wiki_top_k: 1,
            wiki_max_chars: 1000,
            fashion_sources: vec![
                SourceSite::new("vogue.com", None),
                SourceSite::new("elle.com", None),
                SourceSite::new("wwd.com", None),
                SourceSite::new("fashionista.com", None),
                SourceSite::new("refinery29.com", None),
                SourceSite::new("whowhatwear.com", None),
                SourceSite::new("stylecaster.com", None),
                SourceSite::new("thecut.com", None),
                SourceSite::new("businessoffashion.com", None),
                SourceSite::new("instagram.com", Some("fashion")),
                SourceSite::new("tiktok.com", Some("fashion trend")),
            ],
            social_platforms: vec![
                SourceSite::new("instagram.com", Some("fashion")),
                SourceSite::new("tiktok.com", Some("fashion trend")),
                SourceSite::new("twitter.com", Some("fashion")),
                SourceSite::new("pinterest.com", Some("fashion")),
                SourceSite::new("youtube.com", Some("fashion trend")),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("trend_analysis_output"),
            default_filename: String::from("trend_analysis.txt"),
            detailed_filename: String::from("detailed_trend_analysis.txt"),
            report_label: String::from("Trend Analysis Report"),
        }
    }
}
