use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::price_cache_filename;
use crate::data::request::FetchRequest;
use crate::domain::Symbol;
use crate::models::PriceSeries;

/// On-disk price cache: one series and the request it answers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    /// Creation time, epoch milliseconds
    pub timestamp_ms: i64,
    pub request: FetchRequest,
    pub data: PriceSeries,
}

impl CacheFile {
    pub fn new(request: FetchRequest, data: PriceSeries, version: f64) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            request,
            data,
        }
    }

    pub fn cache_path(directory: &Path, symbol: &Symbol) -> PathBuf {
        directory.join(price_cache_filename(symbol))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let reader = File::open(path)
            .map(BufReader::new)
            .with_context(|| format!("No cache at {}", path.display()))?;
        bincode::deserialize_from(reader)
            .with_context(|| format!("Unreadable cache at {}", path.display()))
    }

    /// Written to a `.partial` sibling first, then renamed into place.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create cache directory {}", parent.display()))?;
        }

        let partial = path.with_extension("partial");
        let mut writer = File::create(&partial)
            .map(BufWriter::new)
            .with_context(|| format!("Cannot create {}", partial.display()))?;
        bincode::serialize_into(&mut writer, self)
            .with_context(|| format!("Cannot encode cache for {}", self.request.symbol))?;
        writer
            .flush()
            .with_context(|| format!("Cannot flush {}", partial.display()))?;
        drop(writer);

        fs::rename(&partial, path)
            .with_context(|| format!("Cannot move cache into place at {}", path.display()))
    }
}
