// Data loading and caching
pub mod error;
pub mod pre_main_async;
pub mod price_source;
pub mod request;

// Re-export commonly used types
pub use error::FetchError;
pub use pre_main_async::{fetch_price_data, fetch_price_data_with_cache};
pub use price_source::yahoo_version::fetch;
pub use request::FetchRequest;
