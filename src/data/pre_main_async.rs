// Async code to run in main before any chart window opens

use std::path::Path;

use anyhow::Result;

use crate::Cli;
use crate::config::PERSISTENCE;
use crate::data::price_source::serde_version::{
    SerdeVersion, check_local_data_validity, write_price_series_locally,
};
use crate::data::price_source::yahoo_version::YahooVersion;
use crate::data::price_source::{CreatePriceSeries, get_price_series_async};
use crate::data::request::FetchRequest;
use crate::models::PriceSeries;

/// Resolve the request from the CLI, then pull the series from the first provider that can serve it.
pub async fn fetch_price_data(args: &Cli) -> Result<(PriceSeries, &'static str)> {
    fetch_price_data_with_cache(args, Path::new(PERSISTENCE.cache.directory)).await
}

/// As `fetch_price_data`, with the cache kept under `cache_dir`
pub async fn fetch_price_data_with_cache(
    args: &Cli,
    cache_dir: &Path,
) -> Result<(PriceSeries, &'static str)> {
    let request = args.fetch_request()?;
    let providers = select_providers(args, &request, cache_dir);

    let (series, series_signature) = get_price_series_async(&providers, &request).await?;

    log::info!(
        "Retrieved {} daily rows for {} ({} to {}) using: {}.",
        series.len(),
        series.symbol,
        series.first_date().map(|d| d.to_string()).unwrap_or_default(),
        series.last_date().map(|d| d.to_string()).unwrap_or_default(),
        series_signature
    );

    if args.use_cache {
        if let Err(e) = write_price_series_locally(series_signature, &series, &request, cache_dir)
        {
            log::error!("⚠️  Failed to write cache: {:#}", e);
        }
    }

    Ok((series, series_signature))
}

/// Provider chain for this run, in the order they will be tried.
/// Without --use-cache nothing touches the disk: one request to the API, no fallback.
pub fn select_providers(
    args: &Cli,
    request: &FetchRequest,
    cache_dir: &Path,
) -> Vec<Box<dyn CreatePriceSeries>> {
    if !args.use_cache {
        return vec![Box::new(YahooVersion::default())];
    }

    let cache_provider = || -> Box<dyn CreatePriceSeries> {
        Box::new(SerdeVersion {
            directory: cache_dir.to_path_buf(),
        })
    };
    match (
        args.prefer_api,
        check_local_data_validity(
            cache_dir,
            request,
            PERSISTENCE.cache.max_age_secs,
            PERSISTENCE.cache.version,
        ),
    ) {
        (false, Ok(_)) => vec![cache_provider(), Box::new(YahooVersion::default())], // local first
        (true, Ok(_)) => vec![Box::new(YahooVersion::default()), cache_provider()], // API first
        (_, Err(e)) => {
            log::warn!("⚠️  Local cache validation failed: {:#}", e);
            log::warn!("⚠️  Falling back to the provider API...");
            vec![Box::new(YahooVersion::default())] // API only
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::price_source::cache_file::CacheFile;
    use crate::data::price_source::serde_version::CACHE_SIGNATURE;
    use crate::data::price_source::yahoo_version::YAHOO_SIGNATURE;
    use crate::domain::{PriceBar, Symbol};
    use chrono::NaiveDate;
    use clap::Parser;
    use tempfile::tempdir;

    fn args(flags: &[&str]) -> Cli {
        let mut argv = vec!["index-trend", "--symbol", "^NSEI", "--start", "2024-01-01"];
        argv.extend_from_slice(flags);
        Cli::parse_from(argv)
    }

    fn signatures(providers: &[Box<dyn CreatePriceSeries>]) -> Vec<&'static str> {
        providers.iter().map(|p| p.signature()).collect()
    }

    fn write_valid_cache(dir: &Path, args: &Cli) -> CacheFile {
        let request = args.fetch_request().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let series = PriceSeries::from_bars(
            Symbol::new("^NSEI"),
            vec![PriceBar::new(date, 21_700.0, 21_800.0, 21_600.0, 21_750.0, 0)],
        );
        write_price_series_locally(YAHOO_SIGNATURE, &series, &request, dir).unwrap();
        CacheFile::load_from_path(&CacheFile::cache_path(dir, &request.symbol)).unwrap()
    }

    #[test]
    fn test_no_cache_flag_uses_api_only() {
        let dir = tempdir().unwrap();
        let args = args(&[]);
        // Even a valid cache on disk is ignored
        write_valid_cache(dir.path(), &self::args(&["--use-cache"]));
        let request = args.fetch_request().unwrap();
        assert_eq!(
            signatures(&select_providers(&args, &request, dir.path())),
            vec![YAHOO_SIGNATURE]
        );
    }

    #[test]
    fn test_valid_cache_is_tried_first() {
        let dir = tempdir().unwrap();
        let args = args(&["--use-cache"]);
        write_valid_cache(dir.path(), &args);
        let request = args.fetch_request().unwrap();
        assert_eq!(
            signatures(&select_providers(&args, &request, dir.path())),
            vec![CACHE_SIGNATURE, YAHOO_SIGNATURE]
        );
    }

    #[test]
    fn test_prefer_api_puts_api_first() {
        let dir = tempdir().unwrap();
        let args = args(&["--use-cache", "--prefer-api"]);
        write_valid_cache(dir.path(), &args);
        let request = args.fetch_request().unwrap();
        assert_eq!(
            signatures(&select_providers(&args, &request, dir.path())),
            vec![YAHOO_SIGNATURE, CACHE_SIGNATURE]
        );
    }

    #[test]
    fn test_invalid_cache_falls_back_to_api_only() {
        let dir = tempdir().unwrap();
        let args = args(&["--use-cache"]);
        let request = args.fetch_request().unwrap();
        // Nothing written yet
        assert_eq!(
            signatures(&select_providers(&args, &request, dir.path())),
            vec![YAHOO_SIGNATURE]
        );

        // Cache for another start date does not count
        let older = Cli::parse_from(["index-trend", "--use-cache", "--start", "2023-01-01"]);
        write_valid_cache(dir.path(), &older);
        assert_eq!(
            signatures(&select_providers(&args, &request, dir.path())),
            vec![YAHOO_SIGNATURE]
        );
    }

    #[tokio::test]
    async fn test_cache_hit_is_not_written_back() {
        let dir = tempdir().unwrap();
        let args = args(&["--use-cache"]);
        let before = write_valid_cache(dir.path(), &args);

        let (series, signature) = fetch_price_data_with_cache(&args, dir.path()).await.unwrap();
        assert_eq!(signature, CACHE_SIGNATURE);
        assert_eq!(series, before.data);

        let request = args.fetch_request().unwrap();
        let after = CacheFile::load_from_path(&CacheFile::cache_path(dir.path(), &request.symbol))
            .unwrap();
        assert_eq!(after.timestamp_ms, before.timestamp_ms);
    }
}
