//! Pure descriptions of the four charts.
//!
//! Nothing here touches a window: a ChartSpec is built from an AugmentedSeries
//! and handed to a ChartSink, which decides how to display it.

use eframe::egui::Color32;
use strum_macros::{Display, EnumIter};

use crate::config::{ANALYSIS, PLOT_CONFIG};
use crate::models::{AugmentedSeries, DerivedColumn};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::maths_utils::{self, HistogramBin};
use crate::utils::time_utils::date_to_plot_x;

/// The charts shown per run, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ChartKind {
    PriceWithAverages,
    DailyReturns,
    Volatility,
    /// Histogram of the daily return column; the fourth chart of every run
    ReturnDistribution,
}

/// How x values should be labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    /// x is whole days since the Unix epoch
    Date,
    Value,
}

/// One named series. Undefined rows split it into separate segments so no
/// line is drawn across a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub segments: Vec<Vec<[f64; 2]>>,
    pub color: Color32,
    pub width: f32,
}

impl LineSeries {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub name: String,
    pub y: f64,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub name: String,
    pub bins: Vec<HistogramBin>,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: XAxis,
    pub lines: Vec<LineSeries>,
    pub reference_lines: Vec<ReferenceLine>,
    pub histogram: Option<Histogram>,
    pub show_legend: bool,
}

impl ChartSpec {
    fn empty(kind: ChartKind, title: String, x_label: &str, y_label: &str, x_axis: XAxis) -> Self {
        ChartSpec {
            kind,
            title,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_axis,
            lines: Vec::new(),
            reference_lines: Vec::new(),
            histogram: None,
            show_legend: false,
        }
    }

    pub fn build(kind: ChartKind, data: &AugmentedSeries) -> Self {
        let name = data.series.symbol.display_name();
        match kind {
            ChartKind::PriceWithAverages => {
                let mut spec = Self::empty(
                    kind,
                    format!("{} {}", name, UI_TEXT.title_price),
                    UI_TEXT.label_date,
                    UI_TEXT.label_price,
                    XAxis::Date,
                );
                let close: Vec<Option<f64>> = data.close().iter().copied().map(Some).collect();
                spec.lines = vec![
                    dated_line(
                        data,
                        UI_TEXT.legend_close,
                        &close,
                        PLOT_CONFIG.close_color.gamma_multiply(PLOT_CONFIG.close_alpha),
                    ),
                    dated_line(
                        data,
                        &format!("{}-day MA", data.config.short_window),
                        data.column(DerivedColumn::ShortMa),
                        PLOT_CONFIG.short_ma_color,
                    ),
                    dated_line(
                        data,
                        &format!("{}-day MA", data.config.long_window),
                        data.column(DerivedColumn::LongMa),
                        PLOT_CONFIG.long_ma_color,
                    ),
                ];
                spec.show_legend = true;
                spec
            }
            ChartKind::DailyReturns => {
                let mut spec = Self::empty(
                    kind,
                    format!("{} {}", name, UI_TEXT.title_daily_returns),
                    UI_TEXT.label_date,
                    UI_TEXT.label_daily_return,
                    XAxis::Date,
                );
                spec.lines = vec![dated_line(
                    data,
                    UI_TEXT.label_daily_return,
                    data.column(DerivedColumn::DailyReturn),
                    PLOT_CONFIG
                        .daily_return_color
                        .gamma_multiply(PLOT_CONFIG.daily_return_alpha),
                )];
                spec.reference_lines = vec![ReferenceLine {
                    name: UI_TEXT.legend_zero.to_string(),
                    y: 0.0,
                    color: PLOT_CONFIG.zero_line_color,
                    width: PLOT_CONFIG.reference_line_width,
                    dashed: true,
                }];
                spec
            }
            ChartKind::Volatility => {
                let mut spec = Self::empty(
                    kind,
                    format!(
                        "{} Volatility ({}-day Rolling)",
                        name, data.config.volatility_window
                    ),
                    UI_TEXT.label_date,
                    UI_TEXT.label_volatility,
                    XAxis::Date,
                );
                spec.lines = vec![dated_line(
                    data,
                    UI_TEXT.label_volatility,
                    data.column(DerivedColumn::Volatility),
                    PLOT_CONFIG.volatility_color,
                )];
                spec
            }
            ChartKind::ReturnDistribution => {
                let mut spec = Self::empty(
                    kind,
                    format!("{} {}", name, UI_TEXT.title_return_distribution),
                    UI_TEXT.label_daily_return,
                    UI_TEXT.label_frequency,
                    XAxis::Value,
                );
                let returns = maths_utils::defined_values(data.column(DerivedColumn::DailyReturn));
                spec.histogram = Some(Histogram {
                    name: UI_TEXT.label_daily_return.to_string(),
                    bins: maths_utils::histogram(&returns, ANALYSIS.histogram_bins),
                    color: PLOT_CONFIG
                        .histogram_color
                        .gamma_multiply(PLOT_CONFIG.histogram_alpha),
                });
                spec
            }
        }
    }
}

/// Pair a column with the series dates, splitting at undefined rows
fn dated_line(
    data: &AugmentedSeries,
    name: &str,
    values: &[Option<f64>],
    color: Color32,
) -> LineSeries {
    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (date, value) in data.dates().iter().zip(values) {
        match value.filter(|v| v.is_finite()) {
            Some(v) => current.push([date_to_plot_x(*date), v]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    LineSeries {
        name: name.to_string(),
        segments,
        color,
        width: PLOT_CONFIG.line_width,
    }
}
