use std::fmt::{Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 趋势类别词表
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    Streetwear,
    Luxury,
    Sustainable,
    Vintage,
    Athleisure,
    Minimalist,
    Bohemian,
    Preppy,
    Gothic,
    Cyberpunk,
    Cottagecore,
    Y2k,
    Grunge,
}

impl TrendCategory {
    pub const ALL: [TrendCategory; 13] = [
        TrendCategory::Streetwear,
        TrendCategory::Luxury,
        TrendCategory::Sustainable,
        TrendCategory::Vintage,
        TrendCategory::Athleisure,
        TrendCategory::Minimalist,
        TrendCategory::Bohemian,
        TrendCategory::Preppy,
        TrendCategory::Gothic,
        TrendCategory::Cyberpunk,
        TrendCategory::Cottagecore,
        TrendCategory::Y2k,
        TrendCategory::Grunge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendCategory::Streetwear => "streetwear",
            TrendCategory::Luxury => "luxury",
            TrendCategory::Sustainable => "sustainable",
            TrendCategory::Vintage => "vintage",
            TrendCategory::Athleisure => "athleisure",
            TrendCategory::Minimalist => "minimalist",
            TrendCategory::Bohemian => "bohemian",
            TrendCategory::Preppy => "preppy",
            TrendCategory::Gothic => "gothic",
            TrendCategory::Cyberpunk => "cyberpunk",
            TrendCategory::Cottagecore => "cottagecore",
            TrendCategory::Y2k => "y2k",
            TrendCategory::Grunge => "grunge",
        }
    }
}

impl Display for TrendCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 季节相关性
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub enum Season {
    #[serde(rename = "spring")]
    Spring,
    #[serde(rename = "summer")]
    Summer,
    #[serde(rename = "fall")]
    Fall,
    #[serde(rename = "winter")]
    Winter,
    #[serde(rename = "year-round")]
    YearRound,
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
            Season::YearRound => write!(f, "year-round"),
        }
    }
}

/// 价格区间
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub enum PriceRange {
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "luxury")]
    Luxury,
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceRange::Budget => write!(f, "budget"),
            PriceRange::MidRange => write!(f, "mid-range"),
            PriceRange::Luxury => write!(f, "luxury"),
        }
    }
}

/// 市场阶段
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarketPotential {
    Emerging,
    Peak,
    Declining,
}

impl Display for MarketPotential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketPotential::Emerging => write!(f, "emerging"),
            MarketPotential::Peak => write!(f, "peak"),
            MarketPotential::Declining => write!(f, "declining"),
        }
    }
}

/// 结构化的趋势分析报告，由Agent的最终输出解析得到
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTrendReport {
    /// 分析主题
    pub topic: String,
    /// 趋势概述
    pub summary: String,
    /// 引用的信息来源
    pub sources: Vec<String>,
    /// 分析过程中调用过的工具名称
    pub tools_used: Vec<String>,
    pub trend_category: TrendCategory,
    /// 置信度，取值范围 0-1
    pub confidence_score: f64,
    /// 推动趋势的关键人物或品牌
    pub key_influencers: Vec<String>,
    pub trending_keywords: Vec<String>,
    pub season_relevance: Season,
    pub price_range: PriceRange,
    /// 可持续性评分，取值范围 0-1，无法评估时缺省
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_score: Option<f64>,
    pub market_potential: MarketPotential,
}

impl StructuredTrendReport {
    /// 字段名称与枚举字段，供校验器做归一化
    pub const ENUM_FIELDS: [&'static str; 4] = [
        "trendCategory",
        "seasonRelevance",
        "priceRange",
        "marketPotential",
    ];
}
