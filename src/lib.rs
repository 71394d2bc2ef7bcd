#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{MetricsConfig, MetricsEngine};
pub use data::{FetchError, FetchRequest, fetch, fetch_price_data};
pub use domain::{PriceBar, Symbol};
pub use models::{AugmentedSeries, PriceSeries};
pub use ui::{ChartRenderer, ChartSink, NativeChartSink};

// CLI argument parsing
use clap::Parser;

use crate::config::{ANALYSIS, PROVIDER};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to chart (Yahoo Finance notation)
    #[arg(long, default_value = PROVIDER.defaults.symbol)]
    pub symbol: String,

    /// First trading day to fetch, YYYY-MM-DD
    #[arg(long, default_value = PROVIDER.defaults.start_date)]
    pub start: String,

    /// Last day to fetch, YYYY-MM-DD (exclusive). Omit to fetch up to the latest day.
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long, default_value_t = ANALYSIS.windows.short_ma)]
    pub short_window: usize,

    #[arg(long, default_value_t = ANALYSIS.windows.long_ma)]
    pub long_window: usize,

    #[arg(long, default_value_t = ANALYSIS.windows.volatility)]
    pub volatility_window: usize,

    /// Read and write the local price cache
    #[arg(long, default_value_t = false)]
    pub use_cache: bool,

    /// Use API as primary source instead of the local cache
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,
}

impl Cli {
    pub fn fetch_request(&self) -> Result<FetchRequest, FetchError> {
        FetchRequest::parse(&self.symbol, &self.start, self.end.as_deref())
    }

    pub fn metrics_config(&self) -> MetricsConfig {
        MetricsConfig {
            short_window: self.short_window,
            long_window: self.long_window,
            volatility_window: self.volatility_window,
            ..MetricsConfig::default()
        }
    }
}
