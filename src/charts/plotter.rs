//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::stats::{CorrelationMatrix, FeatureSpread, GroupRate, LabelCounts, ValueCount};
use egui::{Color32, RichText};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoints, Points,
};
use std::ops::RangeInclusive;

pub const LEGIT_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const FRAUD_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const CLICK_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
];

const CHART_HEIGHT: f32 = 280.0;

/// Axis formatter naming integer positions `0..labels.len()`.
fn index_labels(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if idx >= 0.0 && (idx as usize) < labels.len() && (mark.value - idx).abs() < 1e-6 {
            labels[idx as usize].clone()
        } else {
            String::new()
        }
    }
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Linear blend between two colors, `t` in 0..=1.
    pub fn blend(from: Color32, to: Color32, t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0) as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            mix(from.r(), to.r()),
            mix(from.g(), to.g()),
            mix(from.b(), to.b()),
        )
    }

    /// Diverging red/blue scale for correlation values in -1..=1.
    pub fn correlation_color(value: f64) -> Color32 {
        if value.is_nan() {
            return Color32::from_gray(160);
        }
        let neutral = Color32::from_rgb(247, 247, 247);
        if value >= 0.0 {
            Self::blend(neutral, Color32::from_rgb(178, 24, 43), value)
        } else {
            Self::blend(neutral, Color32::from_rgb(33, 102, 172), -value)
        }
    }

    /// Legitimate vs attributed click counts.
    pub fn draw_label_chart(ui: &mut egui::Ui, labels: &LabelCounts) {
        let bars = vec![
            Bar::new(0.0, labels.legitimate as f64)
                .name("Legitimate (0)")
                .fill(LEGIT_COLOR)
                .width(0.6),
            Bar::new(1.0, labels.attributed as f64)
                .name("Fraud (1)")
                .fill(FRAUD_COLOR)
                .width(0.6),
        ];

        Plot::new("label_distribution")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| match mark.value.round() as i64 {
                0 => "Legitimate (0)".to_string(),
                1 => "Fraud (1)".to_string(),
                _ => String::new(),
            })
            .y_axis_label("Clicks")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Click Attribution Distribution"));
            });
    }

    /// Frequency of the most common ids for one feature.
    pub fn draw_value_counts(ui: &mut egui::Ui, feature: &str, counts: &[ValueCount]) {
        let max = counts.iter().map(|vc| vc.count).max().unwrap_or(1).max(1) as f64;
        let labels: Vec<String> = counts.iter().map(|vc| vc.value.to_string()).collect();
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, vc)| {
                let shade = vc.count as f64 / max;
                Bar::new(i as f64, vc.count as f64)
                    .name(format!("{} {}", feature.to_uppercase(), vc.value))
                    .fill(Self::blend(Color32::from_rgb(198, 219, 239), CLICK_COLOR, shade))
                    .width(0.7)
            })
            .collect();

        Plot::new(format!("value_counts_{}", feature))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(format!("{} ID", feature.to_uppercase()))
            .y_axis_label("Frequency")
            .x_axis_formatter(index_labels(labels))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Box plots for several features from precomputed spreads.
    pub fn draw_spreads(ui: &mut egui::Ui, spreads: &[FeatureSpread]) {
        let names: Vec<String> = spreads.iter().map(|s| s.feature.to_uppercase()).collect();

        Plot::new("feature_spreads")
            .height(CHART_HEIGHT + 60.0)
            .allow_scroll(false)
            .y_axis_label("Value")
            .x_axis_formatter(index_labels(names))
            .show(ui, |plot_ui| {
                let mut means: Vec<[f64; 2]> = Vec::new();
                for (i, spread) in spreads.iter().enumerate() {
                    if spread.count == 0 {
                        continue;
                    }
                    let color = PALETTE[i % PALETTE.len()];
                    let elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            spread.whisker_low,
                            spread.q1,
                            spread.median,
                            spread.q3,
                            spread.whisker_high,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(BoxPlot::new(vec![elem]).name(spread.feature.to_uppercase()));
                    means.push([i as f64, spread.mean]);
                }

                if !means.is_empty() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(means))
                            .radius(4.0)
                            .color(Color32::BLACK)
                            .name("Mean"),
                    );
                }
            });
    }

    /// Clicks per group as a line with markers.
    pub fn draw_click_line(ui: &mut egui::Ui, id: &str, x_label: &str, groups: &[GroupRate]) {
        let points: Vec<[f64; 2]> = groups
            .iter()
            .map(|g| [g.key as f64, g.clicks as f64])
            .collect();
        Self::draw_line(ui, id, x_label, "Number of Clicks", points, CLICK_COLOR);
    }

    /// Attribution rate (percent) per group as a line with markers.
    pub fn draw_rate_line(ui: &mut egui::Ui, id: &str, x_label: &str, groups: &[GroupRate]) {
        let points: Vec<[f64; 2]> = groups
            .iter()
            .map(|g| [g.key as f64, g.rate * 100.0])
            .collect();
        Self::draw_line(ui, id, x_label, "Fraud Rate (%)", points, FRAUD_COLOR);
    }

    fn draw_line(
        ui: &mut egui::Ui,
        id: &str,
        x_label: &str,
        y_label: &str,
        points: Vec<[f64; 2]>,
        color: Color32,
    ) {
        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(color)
                        .width(3.0),
                );
                plot_ui.points(Points::new(PlotPoints::from(points)).radius(4.0).color(color));
            });
    }

    /// Bars keyed by group id, height taken from `value`.
    pub fn draw_group_bars(
        ui: &mut egui::Ui,
        id: &str,
        x_label: &str,
        y_label: &str,
        groups: &[GroupRate],
        value: impl Fn(&GroupRate) -> f64,
        color: Color32,
    ) {
        let max = groups.iter().map(&value).fold(0.0_f64, f64::max);
        let labels: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();

        let bars: Vec<Bar> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let shade = if max > 0.0 { value(g) / max } else { 0.0 };
                Bar::new(i as f64, value(g))
                    .name(format!("{} {}", x_label, g.key))
                    .fill(Self::blend(color.gamma_multiply(0.25), color, shade))
                    .width(0.7)
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .x_axis_formatter(index_labels(labels))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Correlation heatmap as a colored grid.
    pub fn draw_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix) {
        let n = matrix.features.len();
        egui::Grid::new("correlation_heatmap")
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                ui.label("");
                for name in &matrix.features {
                    ui.label(RichText::new(name).strong().size(11.0));
                }
                ui.end_row();

                for row in 0..n {
                    ui.label(RichText::new(&matrix.features[row]).strong().size(11.0));
                    for col in 0..n {
                        let value = matrix.get(row, col);
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(64.0, 28.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, 2.0, Self::correlation_color(value));
                        let text = if value.is_nan() {
                            "-".to_string()
                        } else {
                            format!("{:.2}", value)
                        };
                        let text_color = if value.abs() > 0.6 {
                            Color32::WHITE
                        } else {
                            Color32::BLACK
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            text,
                            egui::FontId::proportional(11.0),
                            text_color,
                        );
                        response.on_hover_text(format!(
                            "{} vs {}: {:.4}",
                            matrix.features[row], matrix.features[col], value
                        ));
                    }
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(ChartPlotter::blend(a, b, 0.0), a);
        assert_eq!(ChartPlotter::blend(a, b, 1.0), b);
        assert_eq!(ChartPlotter::blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
        assert_eq!(ChartPlotter::blend(a, b, 7.0), b);
    }

    #[test]
    fn correlation_color_is_diverging() {
        let pos = ChartPlotter::correlation_color(1.0);
        let neg = ChartPlotter::correlation_color(-1.0);
        assert!(pos.r() > pos.b());
        assert!(neg.b() > neg.r());
        assert_eq!(ChartPlotter::correlation_color(f64::NAN), Color32::from_gray(160));
    }
}
