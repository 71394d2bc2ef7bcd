use std::error::Error;
use std::fmt;

/// Why a price series could not be produced
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    InvalidSymbol(String),
    InvalidDate(String),
    RequestFailed(String),
    Parse(String),
    Api { code: String, description: String },
    DataUnavailable(String),
}

impl FetchError {
    /// True for every failure of the provider itself (network, payload, empty result),
    /// false for bad input that no provider could satisfy.
    pub fn is_data_unavailable(&self) -> bool {
        !matches!(
            self,
            FetchError::InvalidSymbol(_) | FetchError::InvalidDate(_)
        )
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::InvalidSymbol(symbol) => write!(f, "Invalid symbol: {:?}", symbol),
            FetchError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            FetchError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            FetchError::Parse(msg) => write!(f, "Failed to parse provider response: {}", msg),
            FetchError::Api { code, description } => {
                write!(f, "Provider error [{}]: {}", code, description)
            }
            FetchError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
        }
    }
}

impl Error for FetchError {}
