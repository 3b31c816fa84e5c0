use serde::Serialize;

/// 单个子查询的执行记录，成功保存原始文本，失败保存错误信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRecord {
    /// 子查询字符串，用作来源标签
    pub source_label: String,
    pub outcome: Result<String, String>,
}

impl SearchRecord {
    pub fn success(source_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            outcome: Ok(text.into()),
        }
    }

    pub fn failure(source_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            outcome: Err(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 一次扇出搜索的聚合结果，顺序与子查询顺序一致
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedReport {
    records: Vec<SearchRecord>,
}

impl AggregatedReport {
    pub fn new(records: Vec<SearchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
}
