use anyhow::{Result, anyhow};
use strum::IntoEnumIterator;

use crate::config::{DEBUG_FLAGS, PLOT_CONFIG};
use crate::models::AugmentedSeries;
use crate::ui::chart_spec::{ChartKind, ChartSpec};
use crate::ui::chart_window::ChartWindow;
use crate::ui::ui_text::UI_TEXT;

/// Receives each chart to display. Implementations decide whether that means a
/// window, a file, or (in tests) a recording.
pub trait ChartSink {
    /// Display `spec` and return once the viewer is done with it
    fn show(&mut self, spec: &ChartSpec) -> Result<()>;
}

/// Opens one native window per chart and blocks until it is closed
#[derive(Debug, Default)]
pub struct NativeChartSink;

impl ChartSink for NativeChartSink {
    fn show(&mut self, spec: &ChartSpec) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size(PLOT_CONFIG.window_size)
                .with_title(spec.title.as_str()),
            ..Default::default()
        };

        let window_spec = spec.clone();
        eframe::run_native(
            UI_TEXT.app_name,
            options,
            Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, window_spec)))),
        )
        .map_err(|e| anyhow!("Chart window '{}' failed: {}", spec.title, e))
    }
}

/// Builds the configured charts in order and hands each to a sink
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    kinds: Vec<ChartKind>,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            kinds: ChartKind::iter().collect(),
        }
    }
}

impl ChartRenderer {
    pub fn new(kinds: Vec<ChartKind>) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &[ChartKind] {
        &self.kinds
    }

    /// Show every configured chart, one at a time. Stops at the first sink error.
    pub fn render_all(&self, data: &AugmentedSeries, sink: &mut dyn ChartSink) -> Result<()> {
        for kind in &self.kinds {
            self.render(*kind, data, sink)?;
        }
        Ok(())
    }

    pub fn render(
        &self,
        kind: ChartKind,
        data: &AugmentedSeries,
        sink: &mut dyn ChartSink,
    ) -> Result<()> {
        let spec = ChartSpec::build(kind, data);
        if DEBUG_FLAGS.print_chart_events {
            log::info!("Showing chart: {}", spec.title);
        }
        sink.show(&spec)?;
        if DEBUG_FLAGS.print_chart_events {
            log::info!("Chart closed: {}", spec.title);
        }
        Ok(())
    }

    pub fn render_price_with_averages(
        &self,
        data: &AugmentedSeries,
        sink: &mut dyn ChartSink,
    ) -> Result<()> {
        self.render(ChartKind::PriceWithAverages, data, sink)
    }

    pub fn render_daily_returns(&self, data: &AugmentedSeries, sink: &mut dyn ChartSink) -> Result<()> {
        self.render(ChartKind::DailyReturns, data, sink)
    }

    pub fn render_volatility(&self, data: &AugmentedSeries, sink: &mut dyn ChartSink) -> Result<()> {
        self.render(ChartKind::Volatility, data, sink)
    }

    pub fn render_return_distribution(
        &self,
        data: &AugmentedSeries,
        sink: &mut dyn ChartSink,
    ) -> Result<()> {
        self.render(ChartKind::ReturnDistribution, data, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MetricsEngine;
    use crate::domain::{PriceBar, Symbol};
    use crate::models::PriceSeries;
    use anyhow::bail;
    use chrono::{Duration, NaiveDate};

    #[derive(Default)]
    struct RecordingSink {
        shown: Vec<ChartSpec>,
    }

    impl ChartSink for RecordingSink {
        fn show(&mut self, spec: &ChartSpec) -> Result<()> {
            self.shown.push(spec.clone());
            Ok(())
        }
    }

    /// Fails on the chart with the given position
    struct FailingSink {
        fail_at: usize,
        calls: usize,
    }

    impl ChartSink for FailingSink {
        fn show(&mut self, _spec: &ChartSpec) -> Result<()> {
            self.calls += 1;
            if self.calls == self.fail_at {
                bail!("viewer crashed");
            }
            Ok(())
        }
    }

    fn data() -> AugmentedSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..60)
            .map(|i| {
                let c = 200.0 + (i % 5) as f64;
                PriceBar::new(start + Duration::days(i), c, c, c, c, 0)
            })
            .collect();
        MetricsEngine::default().augment(&PriceSeries::from_bars(Symbol::new("AAPL"), bars))
    }

    #[test]
    fn test_render_all_shows_four_charts_in_order() {
        let mut sink = RecordingSink::default();
        ChartRenderer::default().render_all(&data(), &mut sink).unwrap();

        let kinds: Vec<ChartKind> = sink.shown.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::PriceWithAverages,
                ChartKind::DailyReturns,
                ChartKind::Volatility,
                ChartKind::ReturnDistribution,
            ]
        );
        assert_eq!(sink.shown[0].title, "AAPL Stock Price Analysis");
    }

    #[test]
    fn test_individual_operations() {
        let renderer = ChartRenderer::default();
        let data = data();
        let mut sink = RecordingSink::default();
        renderer.render_volatility(&data, &mut sink).unwrap();
        renderer.render_price_with_averages(&data, &mut sink).unwrap();
        renderer.render_return_distribution(&data, &mut sink).unwrap();
        renderer.render_daily_returns(&data, &mut sink).unwrap();
        let kinds: Vec<ChartKind> = sink.shown.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Volatility,
                ChartKind::PriceWithAverages,
                ChartKind::ReturnDistribution,
                ChartKind::DailyReturns,
            ]
        );
    }

    #[test]
    fn test_sink_error_stops_rendering() {
        let mut sink = FailingSink {
            fail_at: 2,
            calls: 0,
        };
        let err = ChartRenderer::default()
            .render_all(&data(), &mut sink)
            .unwrap_err();
        assert!(err.to_string().contains("viewer crashed"));
        assert_eq!(sink.calls, 2);
    }

    #[test]
    fn test_custom_selection() {
        let renderer = ChartRenderer::new(vec![ChartKind::DailyReturns]);
        assert_eq!(renderer.kinds(), &[ChartKind::DailyReturns]);
        let mut sink = RecordingSink::default();
        renderer.render_all(&data(), &mut sink).unwrap();
        assert_eq!(sink.shown.len(), 1);
    }
}
