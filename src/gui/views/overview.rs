use super::{footer, info_box, metric_row, page_header, section_header, text};
use crate::config::{team_line, PROJECT_TITLE};
use crate::content::narrative::{PROJECT_BACKGROUND, PROJECT_OVERVIEW, SAMPLE_NOTE};
use crate::gui::group_thousands;
use crate::stats::DashboardSnapshot;
use egui::{Color32, RichText};

/// Landing page: project framing plus quick stats for the loaded table.
pub fn show_overview(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    page_header(ui, PROJECT_TITLE);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(team_line()).size(14.0).color(Color32::GRAY));
    });
    ui.separator();

    section_header(ui, "Project Overview");
    text(ui, PROJECT_OVERVIEW);

    egui::CollapsingHeader::new("Detailed Project Background")
        .default_open(false)
        .show(ui, |ui| {
            for section in &PROJECT_BACKGROUND {
                ui.label(RichText::new(section.heading).size(16.0).strong());
                text(ui, section.body);
            }
        });

    ui.separator();
    section_header(ui, "Dataset Quick Stats");
    quick_stats(ui, snapshot);
    ui.add_space(6.0);
    info_box(ui, &format!("Note: {}", SAMPLE_NOTE));

    footer(ui, "USC Applied Data Science");
}

/// Sample size, feature count, fraud rate and date range.
fn quick_stats(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let summary = &snapshot.summary;
    metric_row(
        ui,
        &[
            ("Current Sample Size", group_thousands(summary.rows)),
            ("Total Features", summary.columns.to_string()),
            (
                "Fraud Rate",
                format!("{:.3}%", summary.attribution_rate * 100.0),
            ),
            ("Date Range", format!("{} days", summary.date_span_days)),
        ],
    );
}
