use crate::config::{Config, DEFAULT_CONFIG_FILE, LLMProvider};
use crate::report::console::RULE;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const EXAMPLE_QUESTIONS: [&str; 4] = [
    "What are the latest streetwear trends?",
    "How is sustainable fashion evolving?",
    "What's trending in luxury fashion this season?",
    "Tell me about vintage fashion trends",
];

/// Trend Scout - 由Rust与AI驱动的时尚趋势调研助手
#[derive(Parser, Debug)]
#[command(name = "trend-scout")]
#[command(
    about = "AI research assistant for fashion trends. It lets a language model call search and analysis tools, then prints and saves a structured trend report."
)]
#[command(version)]
pub struct Args {
    /// 要分析的问题，缺省时交互输入
    pub topic: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 报告输出目录
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// LLM Provider (openai, deepseek, openrouter, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Agent最大迭代次数
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// 时尚检索的子查询上限
    #[arg(long)]
    pub max_search_results: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，topic 不参与合并
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            // 显式指定的配置文件必须可读
            Some(config_path) => Config::from_file(config_path)?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);

                if default_config_path.exists() {
                    Config::from_file(&default_config_path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(output_dir) = self.output_dir {
            config.output.output_dir = output_dir;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ Warning: unknown provider: {}, keeping {}",
                    provider_str, config.llm.provider
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }

        if let Some(max_iterations) = self.max_iterations {
            config.agent.max_iterations = max_iterations;
        }
        if let Some(max_search_results) = self.max_search_results {
            config.search.max_search_results = max_search_results;
        }

        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}

/// 交互式获取问题；空输入回落到默认问题
pub fn prompt_topic<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_topic: &str,
) -> Result<String> {
    writeln!(output, "FASHION TREND ANALYZER")?;
    writeln!(output, "{}", RULE)?;
    writeln!(
        output,
        "Ask me about any fashion trend, style, or fashion-related topic!"
    )?;
    writeln!(output, "Examples:")?;
    for example in EXAMPLE_QUESTIONS {
        writeln!(output, "• {}", example)?;
    }
    writeln!(output, "{}", RULE)?;
    write!(output, "\nWhat would you like to analyze? ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read topic from stdin")?;

    let topic = line.trim();
    if topic.is_empty() {
        Ok(default_topic.to_string())
    } else {
        Ok(topic.to_string())
    }
}
