use eframe::egui::{self, RichText};
use egui_plot::{AxisHints, Bar, BarChart, Corner, HLine, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::ui::chart_spec::{ChartSpec, XAxis};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_number, format_x_value, setup_chart_visuals};

/// A single-chart eframe app. Closing the window ends `eframe::run_native`.
pub struct ChartWindow {
    spec: ChartSpec,
}

impl ChartWindow {
    pub fn new(cc: &eframe::CreationContext, spec: ChartSpec) -> Self {
        setup_chart_visuals(&cc.egui_ctx);
        Self { spec }
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let spec = &self.spec;
        let x_axis = spec.x_axis;

        let mut plot = Plot::new(spec.kind.to_string())
            .show_grid(true)
            .custom_x_axes(vec![create_x_axis(&spec.x_label, x_axis)])
            .custom_y_axes(vec![create_y_axis(&spec.y_label)])
            .label_formatter(move |name, point| {
                let x = format_x_value(x_axis, point.x);
                let y = format_number(point.y);
                if name.is_empty() {
                    format!("{}\n{}", x, y)
                } else {
                    format!("{}\n{}\n{}", name, x, y)
                }
            });
        if spec.show_legend {
            plot = plot.legend(Legend::default().position(Corner::LeftTop));
        }

        plot.show(ui, |plot_ui| {
            // Back to front: histogram, reference lines, data lines
            if let Some(histogram) = &spec.histogram {
                let bars: Vec<Bar> = histogram
                    .bins
                    .iter()
                    .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
                    .collect();
                plot_ui.bar_chart(BarChart::new(histogram.name.as_str(), bars).color(histogram.color));
            }

            for reference in &spec.reference_lines {
                let mut hline = HLine::new(reference.name.as_str(), reference.y)
                    .color(reference.color)
                    .width(reference.width);
                if reference.dashed {
                    hline = hline.style(LineStyle::dashed_loose());
                }
                plot_ui.hline(hline);
            }

            for line in &spec.lines {
                // Segments share a name so the legend shows one entry per series
                for segment in &line.segments {
                    plot_ui.line(
                        Line::new(line.name.as_str(), PlotPoints::new(segment.clone()))
                            .color(line.color)
                            .width(line.width),
                    );
                }
            }
        });
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&self.spec.title).strong());
                ui.label(RichText::new(UI_TEXT.hint_close_window).small().weak());
            });
            self.show_plot(ui);
        });
    }
}

fn create_x_axis(label: &str, x_axis: XAxis) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label.to_string())
        .formatter(move |grid_mark, _range| format_x_value(x_axis, grid_mark.value))
}

fn create_y_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|grid_mark, _range| format_number(grid_mark.value))
        .placement(HPlacement::Left)
}
