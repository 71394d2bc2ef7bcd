use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{PriceBar, Symbol};

// ============================================================================
// PriceSeries: Raw daily price data for one symbol
// ============================================================================

/// Columnar daily series, ascending by date with at most one row per date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub dates: Vec<NaiveDate>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    // Volumes
    pub volumes: Vec<u64>,
}

impl PriceSeries {
    pub fn empty(symbol: Symbol) -> Self {
        Self::from_bars(symbol, Vec::new())
    }

    /// Build a series from provider bars in any order.
    /// Bars are sorted by date; when a date repeats, the last bar supplied for it wins.
    pub fn from_bars(symbol: Symbol, mut bars: Vec<PriceBar>) -> Self {
        // Stable sort so "last supplied" is still last within each date
        bars.sort_by_key(|bar| bar.date);

        let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }

        let mut series = PriceSeries {
            symbol,
            dates: Vec::with_capacity(deduped.len()),
            open_prices: Vec::with_capacity(deduped.len()),
            high_prices: Vec::with_capacity(deduped.len()),
            low_prices: Vec::with_capacity(deduped.len()),
            close_prices: Vec::with_capacity(deduped.len()),
            volumes: Vec::with_capacity(deduped.len()),
        };
        for bar in deduped {
            series.dates.push(bar.date);
            series.open_prices.push(bar.open_price);
            series.high_prices.push(bar.high_price);
            series.low_prices.push(bar.low_price);
            series.close_prices.push(bar.close_price);
            series.volumes.push(bar.volume);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.close_prices.last().copied()
    }
}
