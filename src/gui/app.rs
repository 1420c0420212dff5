//! Click Fraud Dashboard Main Application
//! Main window with the navigation sidebar and the selected page.

use crate::charts::ArtifactStore;
use crate::config::AppConfig;
use crate::data::{ClickStore, CsvClickSource, SampleKey};
use crate::gui::views::{self, EdaState};
use crate::gui::{ControlPanel, ControlPanelAction, Page};
use crate::stats::DashboardSnapshot;
use egui::{RichText, SidePanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

/// Table load result from background thread
enum LoadResult {
    Complete {
        key: SampleKey,
        snapshot: DashboardSnapshot,
    },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    config: AppConfig,
    store: Arc<ClickStore<CsvClickSource>>,
    control_panel: ControlPanel,
    artifacts: ArtifactStore,
    eda: EdaState,

    snapshot: Option<DashboardSnapshot>,
    error: Option<String>,

    // Async table loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let store = Arc::new(ClickStore::new(CsvClickSource::new(config.data_path.clone())));
        let control_panel = ControlPanel::new(config.sampling, config.data_path.clone());

        let mut app = Self {
            config,
            store,
            control_panel,
            artifacts: ArtifactStore::new(),
            eda: EdaState::default(),
            snapshot: None,
            error: None,
            load_rx: None,
            is_loading: false,
        };
        app.request_load();
        app
    }

    /// Load the table for the current sampling choice on a background thread.
    ///
    /// Replacing `load_rx` drops the previous receiver, so a superseded
    /// request's result is discarded.
    fn request_load(&mut self) {
        let sample_size = self.control_panel.sampling.requested_rows();
        let key = SampleKey::from(sample_size);
        let store = Arc::clone(&self.store);
        let viz_max_rows = self.config.viz_max_rows;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;
        self.control_panel
            .set_status(&format!("Loading {} ...", key));
        info!(%key, "requesting click table");

        thread::spawn(move || {
            let result = store
                .load(sample_size)
                .map_err(|e| e.to_string())
                .and_then(|df| {
                    DashboardSnapshot::compute(&df, viz_max_rows).map_err(|e| e.to_string())
                });

            let message = match result {
                Ok(snapshot) => LoadResult::Complete { key, snapshot },
                Err(e) => {
                    error!(%key, error = %e, "click table load failed");
                    LoadResult::Error(e)
                }
            };
            // Receiver is gone when a newer request superseded this one.
            let _ = tx.send(message);
        });
    }

    /// Check for table loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { key, snapshot }) => {
                let rows = snapshot.summary.rows;
                self.control_panel.loaded_rows = Some(rows);
                self.control_panel
                    .set_status(&format!("Loaded {} rows ({})", rows, key));
                self.snapshot = Some(snapshot);
                self.error = None;
                self.is_loading = false;
            }
            Ok(LoadResult::Error(message)) => {
                self.control_panel.loaded_rows = None;
                self.control_panel.set_status(&format!("Error: {}", message));
                self.snapshot = None;
                self.error = Some(message);
                self.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel.set_status("Error: loader stopped unexpectedly");
                self.is_loading = false;
            }
        }
    }

    /// Handle CSV file selection: point the store at a different dataset.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.switch_dataset(path);
        }
    }

    fn switch_dataset(&mut self, path: PathBuf) {
        info!(path = %path.display(), "switching dataset");
        self.config.data_path = path.clone();
        self.control_panel.data_path = path.clone();
        self.control_panel.loaded_rows = None;
        self.store = Arc::new(ClickStore::new(CsvClickSource::new(path)));
        self.snapshot = None;
        self.error = None;
        self.request_load();
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        let page = self.control_panel.page;

        if page.needs_data() {
            let Some(snapshot) = self.snapshot.as_ref() else {
                if let Some(message) = &self.error {
                    views::error_panel(ui, message);
                } else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.label(RichText::new("Loading data...").size(14.0));
                    });
                }
                return;
            };

            match page {
                Page::Overview => views::show_overview(ui, snapshot),
                Page::Dataset => views::show_dataset(ui, snapshot),
                Page::Exploratory => views::show_eda(
                    ui,
                    &mut self.eda,
                    snapshot,
                    &self.config,
                    &mut self.artifacts,
                ),
                _ => {}
            }
            return;
        }

        match page {
            Page::Modeling => views::show_modeling(ui, &self.config, &mut self.artifacts),
            Page::Conclusion => views::show_conclusion(ui),
            Page::References => views::show_references(ui),
            _ => {}
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, self.is_loading);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::SamplingChanged(sampling) => {
                            info!(?sampling, "sampling changed");
                            self.request_load();
                        }
                        ControlPanelAction::PageChanged(page) => {
                            info!(page = page.label(), "page changed");
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - selected page
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_page(ui);
                });
        });
    }
}
