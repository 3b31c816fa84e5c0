//! 控制台报告格式化

use crate::types::StructuredTrendReport;

pub const RULE: &str = "==================================================";

/// 渲染人类可读的趋势分析报告
pub fn format_report(report: &StructuredTrendReport) -> String {
    let mut out = String::new();
    out.push_str("\nFASHION TREND ANALYSIS REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Topic: {}\n", report.topic));
    out.push_str(&format!("Summary: {}\n", report.summary));
    out.push_str(&format!("Category: {}\n", report.trend_category));
    out.push_str(&format!("Confidence: {:.2}\n", report.confidence_score));
    match report.sustainability_score {
        Some(score) => out.push_str(&format!("Sustainability Score: {:.2}\n", score)),
        None => out.push_str("Sustainability Score: N/A\n"),
    }
    out.push_str(&format!("Season: {}\n", report.season_relevance));
    out.push_str(&format!("Price Range: {}\n", report.price_range));
    out.push_str(&format!("Market Potential: {}\n", report.market_potential));

    push_bullets(&mut out, "Key Influencers", &report.key_influencers);
    push_bullets(&mut out, "Trending Keywords", &report.trending_keywords);
    push_bullets(&mut out, "Sources", &report.sources);
    push_bullets(&mut out, "Tools Used", &report.tools_used);
    out
}

fn push_bullets(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("\n{}:\n", title));
    for item in items {
        out.push_str(&format!("  • {}\n", item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketPotential, PriceRange, Season, TrendCategory};

    fn sample() -> StructuredTrendReport {
        StructuredTrendReport {
            topic: "Quiet luxury".to_string(),
            summary: "Understated, logo-free pieces.".to_string(),
            sources: vec!["wwd.com".to_string()],
            tools_used: vec!["fashion_specific_search".to_string()],
            trend_category: TrendCategory::Luxury,
            confidence_score: 0.756,
            key_influencers: vec!["The Row".to_string(), "Sofia Richie".to_string()],
            trending_keywords: vec!["stealth wealth".to_string()],
            season_relevance: Season::YearRound,
            price_range: PriceRange::Luxury,
            sustainability_score: None,
            market_potential: MarketPotential::Peak,
        }
    }

    #[test]
    fn test_format_report_fields() {
        let text = format_report(&sample());

        assert!(text.contains("FASHION TREND ANALYSIS REPORT\n"));
        assert!(text.contains("Category: luxury\n"));
        assert!(text.contains("Confidence: 0.76\n"));
        assert!(text.contains("Sustainability Score: N/A\n"));
        assert!(text.contains("Season: year-round\n"));
        assert!(text.contains("Price Range: luxury\n"));
        assert!(text.contains("Market Potential: peak\n"));
        assert!(text.contains("\nKey Influencers:\n  • The Row\n  • Sofia Richie\n"));
        assert!(text.contains("\nTools Used:\n  • fashion_specific_search\n"));
    }

    #[test]
    fn test_format_report_with_sustainability() {
        let mut report = sample();
        report.sustainability_score = Some(0.3);

        assert!(format_report(&report).contains("Sustainability Score: 0.30\n"));
    }
}
