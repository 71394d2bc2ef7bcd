use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::config::{DEBUG_FLAGS, PERSISTENCE};
use crate::data::price_source::cache_file::CacheFile;
use crate::data::price_source::yahoo_version::YAHOO_SIGNATURE;
use crate::data::price_source::CreatePriceSeries;
use crate::data::request::FetchRequest;
use crate::models::PriceSeries;
use crate::utils::time_utils::how_many_seconds_ago;

pub const CACHE_SIGNATURE: &str = "Local Cache";

/// Load the cache for `request` and check it can stand in for a fresh fetch.
pub fn check_local_data_validity(
    directory: &Path,
    request: &FetchRequest,
    recency_required_secs: i64,
    version_required: f64,
) -> Result<CacheFile> {
    let full_path = CacheFile::cache_path(directory, &request.symbol);

    if DEBUG_FLAGS.print_serde {
        log::info!("Checking validity of local cache at {:?}...", full_path);
    }
    let cache = CacheFile::load_from_path(&full_path)?;

    // Check version
    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }

    // Check the cached range is the one asked for
    if cache.request != *request {
        bail!(
            "Cache holds {} from {} (end {:?}), but {} from {} (end {:?}) was requested",
            cache.request.symbol,
            cache.request.start_date,
            cache.request.end_date,
            request.symbol,
            request.start_date,
            request.end_date
        );
    }

    // Check recency
    let seconds_ago = how_many_seconds_ago(cache.timestamp_ms);
    if seconds_ago > recency_required_secs {
        bail!(
            "Cache too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            recency_required_secs
        );
    }

    if DEBUG_FLAGS.print_serde {
        log::info!(
            "✅ Cache valid: v{}, {}s old (limit {}s), {} rows",
            cache.version,
            seconds_ago,
            recency_required_secs,
            cache.data.len()
        );
    }

    Ok(cache)
}

/// Write a freshly fetched series to the binary cache.
/// Series that did not come from the API are not written back.
pub fn write_price_series_locally(
    series_signature: &'static str,
    series: &PriceSeries,
    request: &FetchRequest,
    directory: &Path,
) -> Result<()> {
    if series_signature != YAHOO_SIGNATURE {
        if DEBUG_FLAGS.print_serde {
            log::info!("Skipping cache write (data not from {})", YAHOO_SIGNATURE);
        }
        return Ok(());
    }

    let full_path = CacheFile::cache_path(directory, &request.symbol);
    let cache = CacheFile::new(request.clone(), series.clone(), PERSISTENCE.cache.version);
    cache.save_to_path(&full_path)?;

    log::info!("Cache written: {:?} ({} rows)", full_path, series.len());
    Ok(())
}

pub struct SerdeVersion {
    pub directory: PathBuf,
}

impl Default for SerdeVersion {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(PERSISTENCE.cache.directory),
        }
    }
}

#[async_trait]
impl CreatePriceSeries for SerdeVersion {
    fn signature(&self) -> &'static str {
        CACHE_SIGNATURE
    }

    async fn create_price_series(&self, request: &FetchRequest) -> Result<PriceSeries> {
        let cache = check_local_data_validity(
            &self.directory,
            request,
            PERSISTENCE.cache.max_age_secs,
            PERSISTENCE.cache.version,
        )
        .context("Failed to load cache file")?;

        if cache.data.is_empty() {
            bail!("Cache file for {} holds no rows", request.symbol);
        }
        Ok(cache.data)
    }
}
