//! 响应校验 - 将Agent的最终文本解析为结构化趋势报告

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::types::StructuredTrendReport;

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json|JSON)?\s*\n?([\s\S]*?)```").expect("valid code fence pattern")
});

pub struct ResponseValidator;

impl ResponseValidator {
    /// 解析失败时返回错误信息并原样保留原始文本
    pub fn validate(raw: &str) -> Result<StructuredTrendReport, ValidationError> {
        let fail = |message: String| ValidationError {
            message,
            raw: raw.to_string(),
        };

        let json_text = Self::locate_json(raw)
            .ok_or_else(|| fail("no JSON object found in response".to_string()))?;

        let mut value: Value = serde_json::from_str(json_text)
            .map_err(|e| fail(format!("malformed JSON: {}", e)))?;
        if !value.is_object() {
            return Err(fail("expected a JSON object".to_string()));
        }
        Self::normalize_enum_fields(&mut value);

        let mut report: StructuredTrendReport = serde_json::from_value(value)
            .map_err(|e| fail(format!("schema mismatch: {}", e)))?;

        Self::check_unit_range("confidenceScore", Some(report.confidence_score)).map_err(fail)?;
        Self::check_unit_range("sustainabilityScore", report.sustainability_score).map_err(fail)?;

        dedup_preserving_order(&mut report.sources);
        dedup_preserving_order(&mut report.tools_used);

        Ok(report)
    }

    /// 优先取首个含有对象的代码块，否则在全文中截取首个 `{` 到最后一个 `}`
    fn locate_json(raw: &str) -> Option<&str> {
        CODE_FENCE_RE
            .captures_iter(raw)
            .filter_map(|cap| cap.get(1))
            .find_map(|m| brace_span(m.as_str()))
            .or_else(|| brace_span(raw))
    }

    fn normalize_enum_fields(value: &mut Value) {
        let Some(object) = value.as_object_mut() else {
            return;
        };
        for field in StructuredTrendReport::ENUM_FIELDS {
            if let Some(Value::String(text)) = object.get_mut(field) {
                *text = text.trim().to_lowercase();
            }
        }
    }

    fn check_unit_range(field: &str, value: Option<f64>) -> Result<(), String> {
        match value {
            Some(v) if !(0.0..=1.0).contains(&v) => {
                Err(format!("{} must be within [0, 1], got {}", field, v))
            }
            _ => Ok(()),
        }
    }
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}
