//! Market-data provider configuration.

/// Default values for the HTTP client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    /// The chart endpoint rejects requests without a browser-like agent
    pub user_agent: &'static str,
}

/// What gets fetched when the user supplies nothing on the command line
pub struct RequestDefaults {
    pub symbol: &'static str,
    /// Format: YYYY-MM-DD
    pub start_date: &'static str,
    /// Bar size understood by the provider
    pub interval: &'static str,
}

/// The Master Provider Configuration Struct
pub struct ProviderConfig {
    pub base_url: &'static str,
    pub client: ClientDefaults,
    pub defaults: RequestDefaults,
}

pub const PROVIDER: ProviderConfig = ProviderConfig {
    base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    client: ClientDefaults {
        timeout_ms: 30_000,
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    },
    defaults: RequestDefaults {
        symbol: "^NSEI", // Nifty 50
        start_date: "2005-03-31",
        interval: "1d",
    },
};
