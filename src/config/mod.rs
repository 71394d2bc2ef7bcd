//! Configuration module for the index-trend application.

pub mod analysis;
pub mod persistence;
pub mod plot;
pub mod provider;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use persistence::{PERSISTENCE, price_cache_filename};
pub use plot::PLOT_CONFIG;
pub use provider::PROVIDER;
