pub mod cache_file;
pub mod serde_version;
pub mod yahoo_version;

use anyhow::Result;
use async_trait::async_trait;

use crate::data::error::FetchError;
use crate::data::request::FetchRequest;
use crate::models::PriceSeries;

#[async_trait]
pub trait CreatePriceSeries {
    // Either create a price series OR return an anyhow::error
    async fn create_price_series(&self, request: &FetchRequest) -> Result<PriceSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order and return the first series produced, with the
/// signature of the provider that produced it.
pub async fn get_price_series_async(
    implementations: &[Box<dyn CreatePriceSeries>],
    request: &FetchRequest,
) -> Result<(PriceSeries, &'static str)> {
    let mut failures = Vec::new();
    for imp in implementations {
        match imp.create_price_series(request).await {
            Ok(series) => {
                let signature = imp.signature();
                return Ok((series, signature));
            }
            Err(e) => {
                log::warn!("⚠️  {} failed for {}: {:#}", imp.signature(), request.symbol, e);
                failures.push(format!("{}: {:#}", imp.signature(), e));
                // Continue to the next implementation
            }
        }
    }
    Err(FetchError::DataUnavailable(format!(
        "no provider returned data for {} ({})",
        request.symbol,
        failures.join("; ")
    ))
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceBar, Symbol};
    use anyhow::bail;
    use chrono::NaiveDate;

    struct Failing;
    struct Fixed(f64);

    #[async_trait]
    impl CreatePriceSeries for Failing {
        async fn create_price_series(&self, _request: &FetchRequest) -> Result<PriceSeries> {
            bail!("offline")
        }
        fn signature(&self) -> &'static str {
            "Failing"
        }
    }

    #[async_trait]
    impl CreatePriceSeries for Fixed {
        async fn create_price_series(&self, request: &FetchRequest) -> Result<PriceSeries> {
            let bar = PriceBar::new(request.start_date, self.0, self.0, self.0, self.0, 0);
            Ok(PriceSeries::from_bars(request.symbol.clone(), vec![bar]))
        }
        fn signature(&self) -> &'static str {
            "Fixed"
        }
    }

    fn request() -> FetchRequest {
        FetchRequest {
            symbol: Symbol::new("^NSEI"),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_next_provider() {
        let providers: Vec<Box<dyn CreatePriceSeries>> =
            vec![Box::new(Failing), Box::new(Fixed(42.0)), Box::new(Fixed(7.0))];
        let (series, signature) = get_price_series_async(&providers, &request()).await.unwrap();
        assert_eq!(signature, "Fixed");
        assert_eq!(series.close_prices, vec![42.0]);
    }

    #[tokio::test]
    async fn test_all_failing_is_data_unavailable() {
        let providers: Vec<Box<dyn CreatePriceSeries>> = vec![Box::new(Failing)];
        let err = get_price_series_async(&providers, &request()).await.unwrap_err();
        let fetch_error = err.downcast_ref::<FetchError>().expect("typed error");
        assert!(matches!(fetch_error, FetchError::DataUnavailable(_)));
        assert!(fetch_error.to_string().contains("offline"));

        let none: Vec<Box<dyn CreatePriceSeries>> = Vec::new();
        assert!(get_price_series_async(&none, &request()).await.is_err());
    }
}
