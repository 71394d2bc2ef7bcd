//! Daily bars from the Yahoo Finance chart API.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::config::{DEBUG_FLAGS, PROVIDER};
use crate::data::error::FetchError;
use crate::data::price_source::CreatePriceSeries;
use crate::data::request::FetchRequest;
use crate::domain::{PriceBar, Symbol};
use crate::models::PriceSeries;
use crate::utils::time_utils::epoch_sec_to_exchange_date;

pub const YAHOO_SIGNATURE: &str = "Yahoo Finance API";

// Response structures. Only the fields we read are declared.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    // Absent when the range holds no trading days
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteData>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Clone)]
pub struct YahooVersion {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for YahooVersion {
    fn default() -> Self {
        Self {
            base_url: PROVIDER.base_url.to_string(),
            user_agent: PROVIDER.client.user_agent.to_string(),
            timeout: Duration::from_millis(PROVIDER.client.timeout_ms),
        }
    }
}

#[async_trait]
impl CreatePriceSeries for YahooVersion {
    fn signature(&self) -> &'static str {
        YAHOO_SIGNATURE
    }

    async fn create_price_series(&self, request: &FetchRequest) -> Result<PriceSeries> {
        Ok(self.fetch(request).await?)
    }
}

impl YahooVersion {
    pub fn build_url(&self, symbol: &Symbol, period1: i64, period2: i64) -> String {
        format!(
            "{}/{}?period1={}&period2={}&interval={}&events=history",
            self.base_url,
            symbol.url_segment(),
            period1,
            period2,
            PROVIDER.defaults.interval
        )
    }

    /// One outbound request for the whole range
    pub async fn fetch(&self, request: &FetchRequest) -> Result<PriceSeries, FetchError> {
        let (period1, period2) = request.period_secs(Utc::now().timestamp());
        let url = self.build_url(&request.symbol, period1, period2);
        log::info!("Requesting daily bars for {} ...", request.symbol);
        log::debug!("GET {}", url);

        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        // Unknown symbols come back as a 404 that still carries a chart error payload
        match Self::parse_response(&request.symbol, &text) {
            Err(FetchError::Parse(msg)) if !status.is_success() => Err(
                FetchError::RequestFailed(format!("HTTP {} ({})", status, msg)),
            ),
            other => other,
        }
    }

    pub fn parse_response(symbol: &Symbol, json: &str) -> Result<PriceSeries, FetchError> {
        let response: ChartResponse =
            serde_json::from_str(json).map_err(|e| FetchError::Parse(e.to_string()))?;

        if let Some(error) = response.chart.error {
            return Err(FetchError::Api {
                code: error.code,
                description: error.description,
            });
        }

        let data = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| FetchError::DataUnavailable(format!("empty result for {}", symbol)))?;

        let gmt_offset = data.meta.map(|m| m.gmtoffset).unwrap_or_default();
        let quote = data.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(data.timestamp.len());
        let mut dropped = 0usize;
        for (i, &timestamp) in data.timestamp.iter().enumerate() {
            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);
            let date = epoch_sec_to_exchange_date(timestamp, gmt_offset);

            match (date, open, high, low, close) {
                (Some(date), Some(o), Some(h), Some(l), Some(c)) => {
                    bars.push(PriceBar::new(date, o, h, l, c, volume));
                }
                _ => {
                    dropped += 1;
                    if DEBUG_FLAGS.print_dropped_rows {
                        log::info!("Dropping incomplete row at timestamp {}", timestamp);
                    }
                }
            }
        }

        if dropped > 0 {
            log::info!("{}: dropped {} incomplete rows", symbol, dropped);
        }
        if bars.is_empty() {
            return Err(FetchError::DataUnavailable(format!(
                "no complete daily bars for {}",
                symbol
            )));
        }

        Ok(PriceSeries::from_bars(symbol.clone(), bars))
    }
}

/// Fetch the daily series for `symbol` from `start_date` up to `end_date`
/// (exclusive) or, when `end_date` is None, up to the latest available day.
pub async fn fetch(
    symbol: &str,
    start_date: &str,
    end_date: Option<&str>,
) -> Result<PriceSeries, FetchError> {
    let request = FetchRequest::parse(symbol, start_date, end_date)?;
    YahooVersion::default().fetch(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nsei() -> Symbol {
        Symbol::new("^NSEI")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_url() {
        let url = YahooVersion::default().build_url(&nsei(), 1_112_227_200, 1_733_011_200);
        assert!(url.starts_with("https://query1.finance.yahoo.com/v8/finance/chart/%5ENSEI?"));
        assert!(url.contains("period1=1112227200"));
        assert!(url.contains("period2=1733011200"));
        assert!(url.contains("interval=1d"));
    }

    #[test]
    fn test_parse_response_valid() {
        // 09:15 IST session opens, gmtoffset 19800
        let json = r#"{"chart":{"result":[{"meta":{"symbol":"^NSEI","gmtoffset":19800},
            "timestamp":[1704080700,1704167100,1704253500],
            "indicators":{"quote":[{"open":[21727.75,21751.35,21661.1],
            "high":[21834.35,21755.6,21677.0],"low":[21680.85,21555.65,21500.35],
            "close":[21741.9,21665.8,21517.35],"volume":[154000,288100,null]}]}}],"error":null}}"#;

        let series = YahooVersion::parse_response(&nsei(), json).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
        assert_eq!(series.close_prices[0], 21741.9);
        // Missing index volume reads as zero rather than dropping the row
        assert_eq!(series.volumes, vec![154000, 288100, 0]);
    }

    #[test]
    fn test_parse_response_drops_rows_with_nulls() {
        let json = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},
            "timestamp":[1704067200,1704153600,1704240000],
            "indicators":{"quote":[{"open":[185.0,null,187.0],"high":[186.0,null,188.0],
            "low":[184.0,null,186.0],"close":[185.5,null,187.5],"volume":[1,null,3]}]}}],"error":null}}"#;

        let series = YahooVersion::parse_response(&nsei(), json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.dates, vec![date(2024, 1, 1), date(2024, 1, 3)]);
    }

    #[test]
    fn test_parse_response_sorts_and_dedups() {
        let json = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},
            "timestamp":[1704153600,1704067200,1704160800],
            "indicators":{"quote":[{"open":[2.0,1.0,3.0],"high":[2.0,1.0,3.0],
            "low":[2.0,1.0,3.0],"close":[2.0,1.0,3.0],"volume":[0,0,0]}]}}],"error":null}}"#;

        let series = YahooVersion::parse_response(&nsei(), json).unwrap();
        // The intraday duplicate of Jan 2nd (last supplied) replaces the earlier one
        assert_eq!(series.close_prices, vec![1.0, 3.0]);
    }

    #[test]
    fn test_parse_response_api_error() {
        let json = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = YahooVersion::parse_response(&nsei(), json).unwrap_err();
        assert!(matches!(err, FetchError::Api { .. }));
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_parse_response_empty_is_data_unavailable() {
        let empty_result = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(matches!(
            YahooVersion::parse_response(&nsei(), empty_result),
            Err(FetchError::DataUnavailable(_))
        ));

        let no_rows = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},"indicators":{"quote":[{}]}}],"error":null}}"#;
        assert!(matches!(
            YahooVersion::parse_response(&nsei(), no_rows),
            Err(FetchError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        assert!(matches!(
            YahooVersion::parse_response(&nsei(), "<html>rate limited</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_dates_before_any_request() {
        let err = fetch("^NSEI", "not-a-date", None).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidDate(_)));
    }
}
