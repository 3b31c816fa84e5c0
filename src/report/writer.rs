//! 报告写入 - 以带时间戳的文本块追加到输出文件

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::TrendError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    label: String,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            label: label.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.output_dir, &config.report_label)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 只取文件名部分，保证写入位置在输出目录内
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let name = Path::new(filename.trim()).file_name()?;
        Some(self.output_dir.join(name))
    }

    pub fn format_block(&self, data: &str, timestamp: &str) -> String {
        format!("{}\nTimestamp: {}\n\n{}\n\n", self.label, timestamp, data)
    }

    /// 追加一个文本块，文件不存在时创建
    pub fn append(&self, filename: &str, data: &str) -> Result<PathBuf, TrendError> {
        let path = self.resolve(filename).ok_or_else(|| TrendError::FileWrite {
            path: PathBuf::from(filename),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file name"),
        })?;
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let block = self.format_block(data, &timestamp);

        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.output_dir)?;
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            file.write_all(block.as_bytes())
        };
        write().map_err(|source| TrendError::FileWrite {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = block.len(), "report block appended");
        Ok(path)
    }
}
