use std::sync::Arc;

use crate::agent::ToolRegistry;
use crate::analysis::AnalysisKind;
use crate::config::Config;
use crate::report::ReportWriter;
use crate::search::SearchGateway;

pub mod analysis;
pub mod save;
pub mod search;

pub use analysis::AgentToolAnalysis;
pub use save::AgentToolSave;
pub use search::AgentToolSearch;

/// 注册全部预置工具：直接检索、百科、五种扇出分析与保存
pub fn build_registry(
    config: &Config,
    web: Arc<dyn SearchGateway>,
    encyclopedia: Arc<dyn SearchGateway>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new()
        .register(Arc::new(AgentToolSearch::web(web.clone())))
        .register(Arc::new(AgentToolSearch::wikipedia(encyclopedia)));

    for kind in AnalysisKind::ALL {
        registry = registry.register(Arc::new(AgentToolAnalysis::new(
            kind,
            web.clone(),
            config.search.clone(),
        )));
    }

    registry.register(Arc::new(AgentToolSave::new(
        ReportWriter::from_config(&config.output),
        config.output.default_filename.clone(),
    )))
}
