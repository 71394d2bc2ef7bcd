use std::fmt;

use chrono::NaiveDate;
use strum_macros::{Display, EnumIter};

use crate::analysis::MetricsConfig;
use crate::models::price_series::PriceSeries;

/// The columns MetricsEngine appends to a PriceSeries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DerivedColumn {
    #[strum(to_string = "short_ma")]
    ShortMa,
    #[strum(to_string = "long_ma")]
    LongMa,
    #[strum(to_string = "daily_return")]
    DailyReturn,
    #[strum(to_string = "volatility")]
    Volatility,
}

/// A PriceSeries plus its derived columns.
/// Every derived column has exactly `series.len()` entries; `None` marks the
/// leading rows (or gaps) where the value is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSeries {
    pub series: PriceSeries,
    pub config: MetricsConfig,
    pub short_ma: Vec<Option<f64>>,
    pub long_ma: Vec<Option<f64>>,
    pub daily_return: Vec<Option<f64>>,
    pub volatility: Vec<Option<f64>>,
}

impl AugmentedSeries {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.series.dates
    }

    pub fn close(&self) -> &[f64] {
        &self.series.close_prices
    }

    pub fn column(&self, column: DerivedColumn) -> &[Option<f64>] {
        match column {
            DerivedColumn::ShortMa => &self.short_ma,
            DerivedColumn::LongMa => &self.long_ma,
            DerivedColumn::DailyReturn => &self.daily_return,
            DerivedColumn::Volatility => &self.volatility,
        }
    }

    pub fn defined_count(&self, column: DerivedColumn) -> usize {
        self.column(column).iter().flatten().count()
    }

    /// Most recent defined value of a derived column
    pub fn last_defined(&self, column: DerivedColumn) -> Option<f64> {
        self.column(column).iter().rev().flatten().next().copied()
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            symbol: self.series.symbol.to_string(),
            rows: self.len(),
            first_date: self.series.first_date(),
            last_date: self.series.last_date(),
            last_close: self.series.last_close(),
            last_short_ma: self.last_defined(DerivedColumn::ShortMa),
            last_long_ma: self.last_defined(DerivedColumn::LongMa),
            last_daily_return: self.last_defined(DerivedColumn::DailyReturn),
            last_volatility: self.last_defined(DerivedColumn::Volatility),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub symbol: String,
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub last_close: Option<f64>,
    pub last_short_ma: Option<f64>,
    pub last_long_ma: Option<f64>,
    pub last_daily_return: Option<f64>,
    pub last_volatility: Option<f64>,
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let span = match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => "no data".to_string(),
        };
        write!(
            f,
            "{}: {} rows ({}), close {}, short MA {}, long MA {}, last return {}, volatility {}",
            self.symbol,
            self.rows,
            span,
            fmt_opt(self.last_close, 2),
            fmt_opt(self.last_short_ma, 2),
            fmt_opt(self.last_long_ma, 2),
            self.last_daily_return
                .map(|r| format!("{:.2}%", r * 100.0))
                .unwrap_or_else(|| "n/a".to_string()),
            fmt_opt(self.last_volatility, 4),
        )
    }
}
