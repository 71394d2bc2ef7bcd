//! Analysis and computation configuration

/// Rolling window sizes, counted in trading days (rows), not calendar days
pub struct WindowSettings {
    pub short_ma: usize,
    pub long_ma: usize,
    pub volatility: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub windows: WindowSettings,
    // Annualization: volatility is scaled by sqrt(trading_days_per_year)
    pub trading_days_per_year: f64,
    // Number of equal-width bins in the return distribution chart
    pub histogram_bins: usize,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    windows: WindowSettings {
        short_ma: 20,
        long_ma: 50,
        volatility: 21,
    },
    trading_days_per_year: 252.0,
    histogram_bins: 50,
};
