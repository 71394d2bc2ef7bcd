// Domain models for index analysis
// These modules contain pure data independent of fetching/visualization

pub mod augmented_series;
pub mod price_series;

// Re-export key types for convenience
pub use augmented_series::{AugmentedSeries, DerivedColumn, MetricsSummary};
pub use price_series::PriceSeries;
