use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::analysis::rolling;
use crate::config::{ANALYSIS, DEBUG_FLAGS};
use crate::models::{AugmentedSeries, DerivedColumn, PriceSeries};

/// Window sizes and annualization used to derive the metric columns
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub volatility_window: usize,
    pub trading_days_per_year: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            short_window: ANALYSIS.windows.short_ma,
            long_window: ANALYSIS.windows.long_ma,
            volatility_window: ANALYSIS.windows.volatility,
            trading_days_per_year: ANALYSIS.trading_days_per_year,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(MetricsError::InvalidWindow(
                "moving-average windows must be at least 1".to_string(),
            ));
        }
        if self.short_window >= self.long_window {
            return Err(MetricsError::InvalidWindow(format!(
                "short window ({}) must be smaller than long window ({})",
                self.short_window, self.long_window
            )));
        }
        // A sample std needs two observations
        if self.volatility_window < 2 {
            return Err(MetricsError::InvalidWindow(format!(
                "volatility window must be at least 2, got {}",
                self.volatility_window
            )));
        }
        if self.trading_days_per_year.is_nan() || self.trading_days_per_year <= 0.0 {
            return Err(MetricsError::InvalidWindow(format!(
                "trading days per year must be positive, got {}",
                self.trading_days_per_year
            )));
        }
        Ok(())
    }

    pub fn annualization_factor(&self) -> f64 {
        self.trading_days_per_year.sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    InvalidWindow(String),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetricsError::InvalidWindow(msg) => write!(f, "Invalid metrics window: {}", msg),
        }
    }
}

impl std::error::Error for MetricsError {}

/// Derives moving averages, daily returns and rolling volatility from `close`.
/// The input series is never modified; `augment` returns a new AugmentedSeries.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: MetricsConfig,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self {
            config: MetricsConfig::default(),
        }
    }
}

impl MetricsEngine {
    pub fn new(config: MetricsConfig) -> Result<Self, MetricsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub fn augment(&self, series: &PriceSeries) -> AugmentedSeries {
        let close = &series.close_prices;

        let (short_ma, long_ma) = self.moving_averages(close);
        let daily_return = Self::daily_returns(close);
        let volatility = self.volatility(&daily_return);

        let augmented = AugmentedSeries {
            series: series.clone(),
            config: self.config,
            short_ma,
            long_ma,
            daily_return,
            volatility,
        };

        if DEBUG_FLAGS.print_metrics_summary {
            log::info!("Metrics computed. {}", augmented.summary());
            for column in DerivedColumn::iter() {
                log::debug!(
                    "{}: {} of {} rows defined",
                    column,
                    augmented.defined_count(column),
                    augmented.len()
                );
            }
        }
        augmented
    }

    /// (short, long) simple moving averages of `close`
    pub fn moving_averages(&self, close: &[f64]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        (
            rolling::rolling_mean(close, self.config.short_window),
            rolling::rolling_mean(close, self.config.long_window),
        )
    }

    pub fn daily_returns(close: &[f64]) -> Vec<Option<f64>> {
        rolling::pct_change(close)
    }

    /// Rolling sample std of `daily_return`, annualized
    pub fn volatility(&self, daily_return: &[Option<f64>]) -> Vec<Option<f64>> {
        let factor = self.config.annualization_factor();
        rolling::rolling_std(daily_return, self.config.volatility_window)
            .into_iter()
            .map(|std| std.map(|s| s * factor))
            .collect()
    }
}
