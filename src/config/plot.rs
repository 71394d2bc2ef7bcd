//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_color: Color32,
    /// Opacity of the close line so the averages stay readable on top of it
    pub close_alpha: f32,
    pub short_ma_color: Color32,
    pub long_ma_color: Color32,
    pub daily_return_color: Color32,
    pub daily_return_alpha: f32,
    pub zero_line_color: Color32,
    pub volatility_color: Color32,
    pub histogram_color: Color32,
    pub histogram_alpha: f32,
    /// Width of every data line
    pub line_width: f32,
    /// Width of dashed reference lines (e.g. zero return)
    pub reference_line_width: f32,
    /// Initial chart window size in logical pixels (width, height)
    pub window_size: [f32; 2],
}

// Colors follow the usual named web colors (blue, green, red, purple, orange)
pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_color: Color32::from_rgb(0, 0, 255),
    close_alpha: 0.5,
    short_ma_color: Color32::from_rgb(0, 128, 0),
    long_ma_color: Color32::from_rgb(255, 0, 0),
    daily_return_color: Color32::from_rgb(128, 0, 128),
    daily_return_alpha: 0.6,
    zero_line_color: Color32::BLACK,
    volatility_color: Color32::from_rgb(255, 165, 0),
    histogram_color: Color32::from_rgb(128, 0, 128),
    histogram_alpha: 0.7,
    line_width: 1.5,
    reference_line_width: 1.0,
    window_size: [1200.0, 600.0],
};
