//! 社交信号提取 - 从聚合文本中提取话题标签与 "fashion" 相关词组

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 每类信号在去重前最多保留的原始匹配数
pub const MAX_RAW_MATCHES: usize = 10;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag pattern"));

static FASHION_BIGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\w+ fashion\b|\bfashion \w+\b").expect("valid bigram pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialSignals {
    pub hashtags: Vec<String>,
    pub trending_terms: Vec<String>,
}

/// 先截取前若干个原始匹配再去重，因此结果可能少于上限；去重后保留首次出现的顺序
pub fn extract(corpus: &str) -> SocialSignals {
    SocialSignals {
        hashtags: first_distinct(&HASHTAG_RE, corpus),
        trending_terms: first_distinct(&FASHION_BIGRAM_RE, corpus),
    }
}

fn first_distinct(pattern: &Regex, corpus: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(corpus)
        .take(MAX_RAW_MATCHES)
        .map(|m| m.as_str().to_string())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
