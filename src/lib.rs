pub mod agent;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod report;
pub mod search;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use error::TrendError;
pub use workflow::{AnalysisOutcome, analyze_fashion_trend, launch};
