use serde::{Deserialize, Serialize};

// Friendly names for the tickers we chart most often
static KNOWN_INDICES: &[(&str, &str)] = &[
    ("^NSEI", "Nifty 50"),
    ("^BSESN", "Sensex"),
    ("^NSEBANK", "Nifty Bank"),
    ("^GSPC", "S&P 500"),
    ("^DJI", "Dow Jones"),
    ("^IXIC", "Nasdaq Composite"),
];

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct Symbol {
    ticker: String,
}

impl Symbol {
    pub fn new(ticker: &str) -> Self {
        Symbol {
            ticker: ticker.trim().to_uppercase(),
        }
    }

    // The name we pass to the provider (not necessarily display name)
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Used in chart titles. Unknown tickers are shown as-is.
    pub fn display_name(&self) -> &str {
        KNOWN_INDICES
            .iter()
            .find(|(ticker, _)| *ticker == self.ticker)
            .map(|(_, name)| *name)
            .unwrap_or(&self.ticker)
    }

    /// Ticker as a URL path segment. Index tickers start with `^`.
    pub fn url_segment(&self) -> String {
        self.ticker.replace('^', "%5E")
    }

    /// Filesystem-safe form of the ticker
    pub fn cache_key(&self) -> String {
        self.ticker
            .chars()
            .filter(|c| *c != '^')
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.display_name() == self.ticker {
            write!(f, "{}", self.ticker)
        } else {
            write!(f, "{} ({})", self.display_name(), self.ticker)
        }
    }
}
