// Pure computations over price series
pub mod metrics_engine;
pub mod rolling;

pub use metrics_engine::{MetricsConfig, MetricsEngine, MetricsError};
