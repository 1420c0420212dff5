//! Click Fraud Dashboard - desktop entry point

use anyhow::Context;
use clap::Parser;
use click_fraud_dashboard::config::{AppConfig, SamplingConfig, APP_TITLE};
use click_fraud_dashboard::gui::DashboardApp;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "click-fraud-dashboard", about = "Click fraud detection analysis dashboard")]
struct Cli {
    /// Config file (JSON)
    #[arg(long, default_value = AppConfig::DEFAULT_FILE)]
    config: PathBuf,

    /// Click CSV to analyse
    #[arg(long)]
    data: Option<PathBuf>,

    /// Directory holding the EDA chart images
    #[arg(long)]
    outputs: Option<PathBuf>,

    /// Directory holding the model curve images
    #[arg(long)]
    images: Option<PathBuf>,

    /// Start with the full dataset instead of a sample
    #[arg(long)]
    full: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("click_fraud_dashboard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(outputs) = cli.outputs {
        config.outputs_dir = outputs;
    }
    if let Some(images) = cli.images {
        config.image_dir = images;
    }
    if cli.full {
        config.sampling = SamplingConfig {
            use_sample: false,
            ..config.sampling
        };
    }

    info!(
        data = %config.data_path.display(),
        sampling = ?config.sampling,
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
