//! Control Panel Widget
//! Left side panel with page navigation, data settings and load status.

use crate::config::{
    SamplingConfig, APP_TITLE, MAX_SAMPLE_SIZE, MIN_SAMPLE_SIZE, SAMPLE_STEP,
};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Dataset,
    Exploratory,
    Modeling,
    Conclusion,
    References,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Overview,
        Page::Dataset,
        Page::Exploratory,
        Page::Modeling,
        Page::Conclusion,
        Page::References,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "🏠 Project Overview",
            Page::Dataset => "📋 Dataset Details",
            Page::Exploratory => "🔍 Exploratory Analysis",
            Page::Modeling => "🤖 Modeling",
            Page::Conclusion => "📝 Conclusions",
            Page::References => "📚 References",
        }
    }

    /// Whether the page renders the loaded click table.
    pub fn needs_data(&self) -> bool {
        matches!(self, Page::Overview | Page::Dataset | Page::Exploratory)
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub page: Page,
    pub sampling: SamplingConfig,
    pub data_path: PathBuf,
    /// Rows in the currently displayed table, once loaded.
    pub loaded_rows: Option<usize>,
    pub status: String,
}

impl ControlPanel {
    pub fn new(sampling: SamplingConfig, data_path: PathBuf) -> Self {
        Self {
            page: Page::default(),
            sampling: sampling.normalized(),
            data_path,
            loaded_rows: None,
            status: "Ready".to_string(),
        }
    }

    /// Sidebar line describing how many records are in use.
    ///
    /// Reports the loaded table's height once there is one; the requested
    /// sample size stands in only until then.
    pub fn records_line(&self) -> String {
        match (self.sampling.use_sample, self.loaded_rows) {
            (true, Some(rows)) => format!("Using {} records", group_thousands(rows)),
            (true, None) => format!("Using {} records", group_thousands(self.sampling.sample_size)),
            (false, Some(rows)) => format!("Using full dataset: {} records", group_thousands(rows)),
            (false, None) => "Using full dataset".to_string(),
        }
    }

    /// Switch to `page`, reporting a change only when it differs.
    pub fn select_page(&mut self, page: Page) -> ControlPanelAction {
        if self.page == page {
            return ControlPanelAction::None;
        }
        self.page = page;
        ControlPanelAction::PageChanged(page)
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, is_loading: bool) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("🛡 {}", APP_TITLE))
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new("Navigation").size(14.0).strong());
        ui.add_space(5.0);
        for page in Page::ALL {
            if ui
                .selectable_label(self.page == page, page.label())
                .clicked()
            {
                action = self.select_page(page);
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Settings =====
        ui.label(RichText::new("⚙️ Data Settings").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_text = self
                        .data_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(file_text).size(12.0))
                        .on_hover_text(self.data_path.display().to_string());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!is_loading, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });

        ui.add_space(8.0);

        if ui
            .checkbox(&mut self.sampling.use_sample, "Use sample data")
            .changed()
        {
            action = ControlPanelAction::SamplingChanged(self.sampling);
        }

        if self.sampling.use_sample {
            ui.label("Sample size");
            let slider = egui::Slider::new(
                &mut self.sampling.sample_size,
                MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE,
            )
            .step_by(SAMPLE_STEP as f64);
            let response = ui.add(slider);
            // Reload once the value settles, not on every drag step.
            if response.drag_stopped() || (response.changed() && !response.dragged()) {
                self.sampling = self.sampling.normalized();
                action = ControlPanelAction::SamplingChanged(self.sampling);
            }
        }

        ui.add_space(5.0);
        ui.label(
            RichText::new(self.records_line())
                .size(12.0)
                .color(Color32::from_rgb(23, 162, 184)),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        if is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0));
            });
        } else {
            let status_color = if self.status.starts_with("Error") {
                Color32::from_rgb(220, 53, 69)
            } else if self.status.starts_with("Loaded") {
                Color32::from_rgb(40, 167, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    PageChanged(Page),
    BrowseCsv,
    SamplingChanged(SamplingConfig),
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn records_line_follows_sampling() {
        let mut panel = ControlPanel::new(SamplingConfig::default(), PathBuf::from("x.csv"));
        assert_eq!(panel.records_line(), "Using 10,000 records");

        panel.sampling = SamplingConfig::full();
        assert_eq!(panel.records_line(), "Using full dataset");
        panel.loaded_rows = Some(100_000);
        assert_eq!(panel.records_line(), "Using full dataset: 100,000 records");
    }

    #[test]
    fn records_line_reports_loaded_rows_over_requested_sample() {
        // A 3,000-row file cannot fill the default 10,000-row sample.
        let mut panel = ControlPanel::new(SamplingConfig::default(), PathBuf::from("small.csv"));
        panel.loaded_rows = Some(3_000);
        assert_eq!(panel.records_line(), "Using 3,000 records");

        panel.loaded_rows = None;
        assert_eq!(panel.records_line(), "Using 10,000 records");
    }

    #[test]
    fn select_page_reports_only_real_changes() {
        let mut panel = ControlPanel::new(SamplingConfig::default(), PathBuf::from("x.csv"));
        assert_eq!(panel.select_page(Page::Overview), ControlPanelAction::None);

        assert_eq!(
            panel.select_page(Page::Modeling),
            ControlPanelAction::PageChanged(Page::Modeling)
        );
        assert_eq!(panel.page, Page::Modeling);
        assert_eq!(panel.select_page(Page::Modeling), ControlPanelAction::None);
    }

    #[test]
    fn data_pages() {
        assert!(Page::Overview.needs_data());
        assert!(Page::Exploratory.needs_data());
        assert!(!Page::Modeling.needs_data());
        assert!(!Page::References.needs_data());
        assert_eq!(Page::ALL.len(), 6);
    }
}
