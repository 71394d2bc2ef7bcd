//! File persistence and serialization configuration

use crate::domain::Symbol;

/// Settings for the optional local price cache
pub struct CacheSettings {
    /// Directory path for storing cached price series
    pub directory: &'static str,
    /// Base filename (without symbol, interval or extension)
    pub filename_prefix: &'static str,
    /// Current version of the cache serialization format
    pub version: f64,
    /// Maximum age of a cache file before it is refetched (seconds)
    pub max_age_secs: i64,
}

pub struct PersistenceConfig {
    pub cache: CacheSettings,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    cache: CacheSettings {
        directory: "price_data",
        filename_prefix: "prices",
        version: 1.0,
        // 24 hours (60 * 60 * 24)
        max_age_secs: 86_400,
    },
};

/// Generate a symbol-specific cache filename
/// Example: "prices_NSEI_1d_v1.bin"
pub fn price_cache_filename(symbol: &Symbol) -> String {
    format!(
        "{}_{}_{}_v{}.bin",
        PERSISTENCE.cache.filename_prefix,
        symbol.cache_key(),
        crate::config::PROVIDER.defaults.interval,
        PERSISTENCE.cache.version
    )
}
