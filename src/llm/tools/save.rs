//! 保存工具 - 将文本以带时间戳的块追加到输出文件

use async_trait::async_trait;

use crate::agent::{Tool, ToolArgs};
use crate::error::{ToolError, TrendError};
use crate::report::ReportWriter;

pub const NAME: &str = "save_to_txt";

pub struct AgentToolSave {
    writer: ReportWriter,
    default_filename: String,
}

impl AgentToolSave {
    pub fn new(writer: ReportWriter, default_filename: impl Into<String>) -> Self {
        Self {
            writer,
            default_filename: default_filename.into(),
        }
    }
}

#[async_trait]
impl Tool for AgentToolSave {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Saves the trend analysis report to a text file with a timestamp."
    }

    async fn call(&self, args: ToolArgs) -> Result<String, ToolError> {
        let filename = args
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.default_filename);

        self.writer
            .append(filename, &args.input)
            .map_err(|err| match err {
                TrendError::FileWrite { path, source } => ToolError::Io { path, source },
                other => ToolError::InvalidInput(other.to_string()),
            })?;

        Ok(format!("Data successfully saved to {}", filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_saves_to_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let tool = AgentToolSave::new(
            ReportWriter::new(temp_dir.path(), "Trend Analysis Report"),
            "trend_analysis.txt",
        );

        let message = tool.call(ToolArgs::new("draft notes")).await.unwrap();

        assert_eq!(message, "Data successfully saved to trend_analysis.txt");
        let content =
            std::fs::read_to_string(temp_dir.path().join("trend_analysis.txt")).unwrap();
        assert!(content.contains("\n\ndraft notes\n\n"));
    }

    #[tokio::test]
    async fn test_saves_to_requested_file() {
        let temp_dir = TempDir::new().unwrap();
        let tool = AgentToolSave::new(
            ReportWriter::new(temp_dir.path(), "Trend Analysis Report"),
            "trend_analysis.txt",
        );

        let args = ToolArgs {
            input: "cottagecore".to_string(),
            filename: Some("cottagecore.txt".to_string()),
        };
        let message = tool.call(args).await.unwrap();

        assert_eq!(message, "Data successfully saved to cottagecore.txt");
        assert!(temp_dir.path().join("cottagecore.txt").exists());
        assert!(!temp_dir.path().join("trend_analysis.txt").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_tool_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let tool = AgentToolSave::new(ReportWriter::new(&blocker, "label"), "a.txt");

        let err = tool.call(ToolArgs::new("data")).await.unwrap_err();
        assert!(matches!(err, ToolError::Io { .. }));
    }
}
