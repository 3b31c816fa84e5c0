pub mod search;
pub mod trend_report;

pub use search::{AggregatedReport, SearchRecord};
pub use trend_report::{
    MarketPotential, PriceRange, Season, StructuredTrendReport, TrendCategory,
};
