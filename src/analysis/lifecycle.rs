//! 趋势生命周期启发式 - 统计正负关键词命中的记录数

use std::fmt::{Display, Formatter};

pub const POSITIVE_KEYWORDS: [&str; 5] = ["trending", "popular", "viral", "hot", "new"];
pub const NEGATIVE_KEYWORDS: [&str; 5] = ["decline", "over", "passé", "old", "outdated"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleLabel {
    EmergingOrPeak,
    Declining,
    Stable,
}

impl Display for LifecycleLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleLabel::EmergingOrPeak => write!(f, "emerging or peak"),
            LifecycleLabel::Declining => write!(f, "declining"),
            LifecycleLabel::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleAssessment {
    pub label: LifecycleLabel,
    pub positive_count: usize,
    pub negative_count: usize,
}

pub struct LifecycleHeuristic<'a> {
    positive: &'a [&'a str],
    negative: &'a [&'a str],
}

impl Default for LifecycleHeuristic<'static> {
    fn default() -> Self {
        Self::new(&POSITIVE_KEYWORDS, &NEGATIVE_KEYWORDS)
    }
}

impl<'a> LifecycleHeuristic<'a> {
    pub fn new(positive: &'a [&'a str], negative: &'a [&'a str]) -> Self {
        Self { positive, negative }
    }

    /// 每条记录最多贡献一次正向命中和一次负向命中，两者可同时成立
    pub fn assess<S: AsRef<str>>(&self, records: &[S]) -> LifecycleAssessment {
        let mut positive_count = 0;
        let mut negative_count = 0;

        for record in records {
            let text = record.as_ref().to_lowercase();
            if self.positive.iter().any(|word| text.contains(word)) {
                positive_count += 1;
            }
            if self.negative.iter().any(|word| text.contains(word)) {
                negative_count += 1;
            }
        }

        let label = match positive_count.cmp(&negative_count) {
            std::cmp::Ordering::Greater => LifecycleLabel::EmergingOrPeak,
            std::cmp::Ordering::Less => LifecycleLabel::Declining,
            std::cmp::Ordering::Equal => LifecycleLabel::Stable,
        };

        LifecycleAssessment {
            label,
            positive_count,
            negative_count,
        }
    }
}
