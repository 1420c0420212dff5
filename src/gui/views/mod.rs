//! Dashboard pages and the small widgets they share.

mod conclusion;
mod dataset;
mod eda;
mod modeling;
mod overview;
mod references;

pub use conclusion::show_conclusion;
pub use dataset::show_dataset;
pub use eda::{show_eda, EdaMode, EdaState, EdaTab};
pub use modeling::show_modeling;
pub use overview::show_overview;
pub use references::show_references;

use crate::content::narrative::{blocks, Block};
use egui::{Color32, RichText};

pub(crate) const ACCENT: Color32 = Color32::from_rgb(31, 119, 180);

/// Centered page title.
pub(crate) fn page_header(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(28.0).strong().color(ACCENT));
    });
    ui.add_space(6.0);
    ui.separator();
}

pub(crate) fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(title).size(20.0).strong());
    ui.add_space(4.0);
}

pub(crate) fn sub_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).size(16.0).strong());
    ui.add_space(2.0);
}

/// Render prose with `- ` bullet lines.
pub(crate) fn text(ui: &mut egui::Ui, body: &str) {
    for block in blocks(body) {
        match block {
            Block::Paragraph(paragraph) => {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
            Block::Bullets(items) => {
                for item in items {
                    ui.horizontal_wrapped(|ui| {
                        ui.add_space(18.0 * item.depth as f32);
                        ui.label(if item.depth == 0 { "•" } else { "◦" });
                        ui.label(item.text);
                    });
                }
                ui.add_space(4.0);
            }
        }
    }
}

pub(crate) fn bullets(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(*item);
        });
    }
}

/// Light blue callout box.
pub(crate) fn info_box(ui: &mut egui::Ui, body: &str) {
    callout(ui, body, Color32::from_rgb(23, 162, 184));
}

/// Red error box shown when the click table cannot be loaded.
pub fn error_panel(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(Color32::from_rgb(248, 215, 218))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(220, 53, 69)))
        .rounding(5.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Error loading data")
                    .strong()
                    .color(Color32::from_rgb(114, 28, 36)),
            );
            ui.label(RichText::new(message).color(Color32::from_rgb(114, 28, 36)));
        });
}

fn callout(ui: &mut egui::Ui, body: &str, color: Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(5.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            text(ui, body);
        });
}

/// Headline number with a small label above it.
pub(crate) fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
        ui.label(RichText::new(value).size(24.0).strong());
    });
}

/// Row of equally spaced metrics.
pub(crate) fn metric_row(ui: &mut egui::Ui, metrics: &[(&str, String)]) {
    ui.columns(metrics.len().max(1), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(metrics) {
            metric(col, label, value);
        }
    });
}

/// Striped text table.
pub(crate) fn table<S: AsRef<str>>(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<S>]) {
    egui::ScrollArea::horizontal()
        .id_salt(format!("{}_scroll", id))
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for header in headers {
                        ui.label(RichText::new(*header).strong());
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            ui.label(cell.as_ref());
                        }
                        ui.end_row();
                    }
                });
        });
}

pub(crate) fn footer(ui: &mut egui::Ui, page: &str) {
    ui.add_space(12.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("{} | Click Fraud Detection Analysis", page))
                .size(11.0)
                .color(Color32::GRAY),
        );
    });
}
