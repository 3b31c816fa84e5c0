//! 子查询展开 - 将主题代入模板生成有序的子查询列表

use serde::{Deserialize, Serialize};

/// 子查询模板
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryTemplate {
    /// `<topic> <suffix>`
    Suffix { suffix: String },
    /// `site:<domain> <topic>[ <suffix>]`
    Site {
        domain: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suffix: Option<String>,
    },
}

impl QueryTemplate {
    pub fn suffix(suffix: &str) -> Self {
        QueryTemplate::Suffix {
            suffix: suffix.to_string(),
        }
    }

    pub fn apply(&self, topic: &str) -> String {
        match self {
            QueryTemplate::Suffix { suffix } => format!("{} {}", topic, suffix),
            QueryTemplate::Site {
                domain,
                suffix: Some(suffix),
            } => format!("site:{} {} {}", domain, topic, suffix),
            QueryTemplate::Site {
                domain,
                suffix: None,
            } => format!("site:{} {}", domain, topic),
        }
    }
}

/// 按模板顺序生成子查询，不去重
pub fn expand(topic: &str, templates: &[QueryTemplate]) -> Vec<String> {
    templates.iter().map(|t| t.apply(topic)).collect()
}
