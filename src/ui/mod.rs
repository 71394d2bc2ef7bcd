// Chart rendering
pub mod chart_spec;
pub mod chart_window;
pub mod renderer;
pub mod ui_text;
pub mod utils;

// Re-export main entry points
pub use chart_spec::{ChartKind, ChartSpec};
pub use renderer::{ChartRenderer, ChartSink, NativeChartSink};
pub use ui_text::UI_TEXT;
