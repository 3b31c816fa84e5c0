//! 趋势分析 - 多查询扇出 + 启发式聚合

use crate::config::SearchConfig;
use crate::search::SearchGateway;
use crate::types::{AggregatedReport, SearchRecord};

pub mod fan_out;
pub mod lifecycle;
pub mod query_expander;
pub mod social_signals;

pub use fan_out::FanOutAggregator;
pub use lifecycle::{LifecycleAssessment, LifecycleHeuristic, LifecycleLabel};
pub use query_expander::{QueryTemplate, expand};
pub use social_signals::SocialSignals;

const LIFECYCLE_SUFFIXES: [&str; 5] = [
    "trend analysis",
    "fashion week",
    "social media engagement",
    "retail sales data",
    "consumer interest decline",
];

const INFLUENCER_SUFFIXES: [&str; 5] = [
    "fashion influencers",
    "celebrity style",
    "fashion bloggers",
    "style icons",
    "fashion week celebrities",
];

const SUSTAINABILITY_SUFFIXES: [&str; 5] = [
    "sustainable fashion",
    "eco-friendly materials",
    "ethical fashion",
    "environmental impact",
    "circular fashion",
];

/// 分析类型，每种类型对应一套固定的子查询模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    FashionSearch,
    Lifecycle,
    SocialMedia,
    Influencer,
    Sustainability,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::FashionSearch,
        AnalysisKind::Lifecycle,
        AnalysisKind::SocialMedia,
        AnalysisKind::Influencer,
        AnalysisKind::Sustainability,
    ];

    pub fn tool_name(&self) -> &'static str {
        match self {
            AnalysisKind::FashionSearch => "fashion_specific_search",
            AnalysisKind::Lifecycle => "trend_lifecycle_analysis",
            AnalysisKind::SocialMedia => "social_media_trend_analysis",
            AnalysisKind::Influencer => "fashion_influencer_analysis",
            AnalysisKind::Sustainability => "sustainability_analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::FashionSearch => {
                "Search for fashion-specific information across major fashion publications and platforms including Vogue, Elle, WWD, and social media."
            }
            AnalysisKind::Lifecycle => {
                "Analyze the lifecycle stage of a fashion trend (emerging, peak, declining) based on current data and market indicators."
            }
            AnalysisKind::SocialMedia => {
                "Analyze social media trends, engagement, and viral content related to fashion topics across Instagram, TikTok, Twitter, Pinterest, and YouTube."
            }
            AnalysisKind::Influencer => {
                "Identify key fashion influencers, celebrities, and style icons driving current trends."
            }
            AnalysisKind::Sustainability => {
                "Analyze sustainability and environmental aspects of fashion trends and practices."
            }
        }
    }

    pub fn templates(&self, config: &SearchConfig) -> Vec<QueryTemplate> {
        match self {
            AnalysisKind::FashionSearch => config
                .fashion_sources
                .iter()
                .map(|site| site.as_template())
                .collect(),
            AnalysisKind::SocialMedia => config
                .social_platforms
                .iter()
                .map(|site| site.as_template())
                .collect(),
            AnalysisKind::Lifecycle => suffix_templates(&LIFECYCLE_SUFFIXES),
            AnalysisKind::Influencer => suffix_templates(&INFLUENCER_SUFFIXES),
            AnalysisKind::Sustainability => suffix_templates(&SUSTAINABILITY_SUFFIXES),
        }
    }

    /// 只有时尚专项搜索限制子查询数量，避免触发限流
    pub fn query_limit(&self, config: &SearchConfig) -> Option<usize> {
        match self {
            AnalysisKind::FashionSearch => Some(config.max_search_results),
            _ => None,
        }
    }

    /// 展开、扇出并渲染为交给Agent的文本
    pub async fn run(
        &self,
        topic: &str,
        gateway: &dyn SearchGateway,
        config: &SearchConfig,
    ) -> String {
        let queries = expand(topic, &self.templates(config));
        let report = FanOutAggregator::new(gateway)
            .with_limit(self.query_limit(config))
            .run(&queries)
            .await;
        tracing::info!(
            analysis = self.tool_name(),
            attempted = report.len(),
            failed = report.failure_count(),
            "fan-out finished"
        );
        self.render(topic, &report)
    }

    pub fn render(&self, topic: &str, report: &AggregatedReport) -> String {
        match self {
            AnalysisKind::FashionSearch => {
                render_records(report, |label, outcome| match outcome {
                    Ok(text) => format!("Source: {}\nResult: {}\n", label, text),
                    Err(e) => format!("Source: {}\nError: {}\n", label, e),
                })
                .join("\n")
            }
            AnalysisKind::Lifecycle => {
                let lines = render_records(report, |label, outcome| match outcome {
                    Ok(text) => format!("Analysis for '{}': {}", label, text),
                    Err(e) => format!("Error analyzing '{}': {}", label, e),
                });
                let assessment = LifecycleHeuristic::default().assess(&lines);
                format!(
                    "Trend Lifecycle Analysis for '{}':\nStage: {}\nPositive indicators: {}\nNegative indicators: {}\n\nDetailed data:\n{}",
                    topic,
                    assessment.label,
                    assessment.positive_count,
                    assessment.negative_count,
                    lines.join("\n")
                )
            }
            AnalysisKind::SocialMedia => {
                let blocks = render_records(report, |label, outcome| match outcome {
                    Ok(text) => format!("Platform: {}\nData: {}\n", label, text),
                    Err(e) => format!("Platform: {}\nError: {}\n", label, e),
                });
                let signals = social_signals::extract(&blocks.join(" "));
                format!(
                    "Social Media Trend Analysis for '{}':\nPopular hashtags: {}\nTrending terms: {}\n\nPlatform-specific data:\n{}",
                    topic,
                    signals.hashtags.join(", "),
                    signals.trending_terms.join(", "),
                    blocks.join("\n")
                )
            }
            AnalysisKind::Influencer => format!(
                "Fashion Influencer Analysis for '{}':\n{}",
                topic,
                query_result_blocks(report).join("\n")
            ),
            AnalysisKind::Sustainability => format!(
                "Sustainability Analysis for '{}':\n{}",
                topic,
                query_result_blocks(report).join("\n")
            ),
        }
    }
}

fn suffix_templates(suffixes: &[&str]) -> Vec<QueryTemplate> {
    suffixes.iter().map(|s| QueryTemplate::suffix(s)).collect()
}

fn render_records<F>(report: &AggregatedReport, render: F) -> Vec<String>
where
    F: Fn(&str, Result<&str, &str>) -> String,
{
    report
        .records()
        .iter()
        .map(|SearchRecord { source_label, outcome }| {
            render(source_label, outcome.as_deref().map_err(String::as_str))
        })
        .collect()
}

fn query_result_blocks(report: &AggregatedReport) -> Vec<String> {
    render_records(report, |label, outcome| match outcome {
        Ok(text) => format!("Query: {}\nResult: {}\n", label, text),
        Err(e) => format!("Query: {}\nError: {}\n", label, e),
    })
}

#[cfg(test)]
mod tests {
    use super::fan_out::test_support::ScriptedGateway;
    use super::*;

    fn report(records: Vec<SearchRecord>) -> AggregatedReport {
        AggregatedReport::new(records)
    }

    #[test]
    fn test_templates_per_kind() {
        let config = SearchConfig::default();

        assert_eq!(AnalysisKind::FashionSearch.templates(&config).len(), 11);
        for kind in [
            AnalysisKind::Lifecycle,
            AnalysisKind::SocialMedia,
            AnalysisKind::Influencer,
            AnalysisKind::Sustainability,
        ] {
            assert_eq!(kind.templates(&config).len(), 5);
            assert_eq!(kind.query_limit(&config), None);
        }
        assert_eq!(AnalysisKind::FashionSearch.query_limit(&config), Some(5));
    }

    #[test]
    fn test_lifecycle_queries() {
        let queries = expand(
            "Y2K fashion revival",
            &AnalysisKind::Lifecycle.templates(&SearchConfig::default()),
        );
        assert_eq!(queries[0], "Y2K fashion revival trend analysis");
        assert_eq!(queries[4], "Y2K fashion revival consumer interest decline");
    }

    #[test]
    fn test_social_queries_use_site_restriction() {
        let queries = expand(
            "mesh flats",
            &AnalysisKind::SocialMedia.templates(&SearchConfig::default()),
        );
        assert_eq!(queries[0], "site:instagram.com mesh flats fashion");
        assert_eq!(queries[1], "site:tiktok.com mesh flats fashion trend");
    }

    #[test]
    fn test_render_fashion_search() {
        let text = AnalysisKind::FashionSearch.render(
            "denim",
            &report(vec![
                SearchRecord::success("site:vogue.com denim", "Denim is back"),
                SearchRecord::failure("site:elle.com denim", "timeout"),
            ]),
        );

        assert_eq!(
            text,
            "Source: site:vogue.com denim\nResult: Denim is back\n\nSource: site:elle.com denim\nError: timeout\n"
        );
    }

    #[test]
    fn test_render_lifecycle_scans_rendered_lines() {
        let text = AnalysisKind::Lifecycle.render(
            "clogs",
            &report(vec![
                SearchRecord::success("clogs trend analysis", "Clogs are viral"),
                SearchRecord::success("clogs fashion week", "Seen on runways"),
                SearchRecord::failure("clogs retail sales data", "boom"),
            ]),
        );

        assert!(text.starts_with("Trend Lifecycle Analysis for 'clogs':\nStage: emerging or peak\n"));
        assert!(text.contains("Positive indicators: 1\nNegative indicators: 0\n"));
        assert!(text.contains("Analysis for 'clogs trend analysis': Clogs are viral"));
        assert!(text.contains("Error analyzing 'clogs retail sales data': boom"));
    }

    #[test]
    fn test_render_social_media_signals() {
        let text = AnalysisKind::SocialMedia.render(
            "capes",
            &report(vec![SearchRecord::success(
                "site:instagram.com capes fashion",
                "#capeseason is everywhere, street fashion loves it #ootd",
            )]),
        );

        assert!(text.starts_with("Social Media Trend Analysis for 'capes':\n"));
        let hashtags_line = text.lines().nth(1).unwrap();
        assert!(hashtags_line.starts_with("Popular hashtags: "));
        assert!(hashtags_line.contains("#capeseason"));
        assert!(hashtags_line.contains("#ootd"));
        assert!(text.contains("Platform-specific data:\nPlatform: site:instagram.com capes fashion\nData: "));
    }

    #[test]
    fn test_render_influencer_and_sustainability_headers() {
        let records = report(vec![SearchRecord::success("linen style icons", "Jane Birkin")]);

        assert_eq!(
            AnalysisKind::Influencer.render("linen", &records),
            "Fashion Influencer Analysis for 'linen':\nQuery: linen style icons\nResult: Jane Birkin\n"
        );
        assert!(
            AnalysisKind::Sustainability
                .render("linen", &records)
                .starts_with("Sustainability Analysis for 'linen':\nQuery: ")
        );
    }

    #[tokio::test]
    async fn test_run_fashion_search_caps_queries() {
        let gateway = ScriptedGateway::answering("snippet");
        let config = SearchConfig::default();

        let text = AnalysisKind::FashionSearch
            .run("ballet flats", &gateway, &config)
            .await;

        let calls = gateway.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0], "site:vogue.com ballet flats");
        assert_eq!(text.matches("Result: snippet").count(), 5);
    }

    #[tokio::test]
    async fn test_run_lifecycle_with_failure() {
        let gateway = ScriptedGateway::answering("steady interest")
            .with_answer("loafers trend analysis", "popular and trending")
            .failing_on("loafers fashion week");
        let config = SearchConfig::default();

        let text = AnalysisKind::Lifecycle.run("loafers", &gateway, &config).await;

        assert_eq!(gateway.calls().len(), 5);
        assert!(text.contains("Error analyzing 'loafers fashion week'"));
        // "consumer interest decline" 子查询本身带有负向关键词
        assert!(text.contains("Positive indicators: 1\nNegative indicators: 1\n"));
        assert!(text.contains("Stage: stable"));
    }
}
