use eframe::egui::{Context, Visuals};

use crate::ui::chart_spec::XAxis;
use crate::utils::time_utils::plot_x_to_date_string;

/// Charts are drawn on a light background so black reference lines stay visible
pub fn setup_chart_visuals(ctx: &Context) {
    ctx.set_visuals(Visuals::light());
}

/// Tick label for an x grid mark
pub fn format_x_value(x_axis: XAxis, value: f64) -> String {
    match x_axis {
        XAxis::Date => plot_x_to_date_string(value),
        XAxis::Value => format_number(value),
    }
}

/// Compact label: fixed decimals for small magnitudes, thousands separators for large
pub fn format_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1000.0 {
        let whole = value.round() as i64;
        let digits = whole.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if whole < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    } else if abs >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}
