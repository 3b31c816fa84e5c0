//! LLM客户端 - 提供统一的结构化提取接口

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LLMConfig;

mod providers;

use providers::ProviderClient;

/// LLM客户端，每次调用只尝试一次
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)
            .with_context(|| format!("Failed to create {} client", config.provider))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// 数据提取方法
    pub async fn extract<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<T>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        let extractor =
            self.client
                .create_extractor::<T>(&self.config.model, system_prompt, &self.config);

        extractor.extract(user_prompt).await.with_context(|| {
            format!(
                "{} model {} failed to produce a structured response",
                self.config.provider, self.config.model
            )
        })
    }
}
