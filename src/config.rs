//! Dashboard configuration: file locations, sampling controls and project info.

use crate::data::DEFAULT_VIZ_MAX_ROWS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROJECT_TITLE: &str = "TalkingData AdTracking Fraud Detection";
pub const APP_TITLE: &str = "Click Fraud Detection Analysis";
pub const TEAM_MEMBERS: [&str; 3] = ["Ching Chuang", "Jia-Ning Hu", "Yu-Chieh Chen"];

/// Slider bounds for the sample size control.
pub const MIN_SAMPLE_SIZE: usize = 1000;
pub const MAX_SAMPLE_SIZE: usize = 100_000;
pub const SAMPLE_STEP: usize = 1000;
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

pub fn team_line() -> String {
    TEAM_MEMBERS.join(" | ")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Sampling choice made in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub use_sample: bool,
    pub sample_size: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            use_sample: true,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SamplingConfig {
    pub fn full() -> Self {
        Self {
            use_sample: false,
            ..Self::default()
        }
    }

    pub fn sampled(sample_size: usize) -> Self {
        Self {
            use_sample: true,
            sample_size,
        }
        .normalized()
    }

    /// Clamp the size into the slider range and snap it to the step.
    pub fn normalized(self) -> Self {
        let clamped = self.sample_size.clamp(MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE);
        let snapped = ((clamped + SAMPLE_STEP / 2) / SAMPLE_STEP) * SAMPLE_STEP;
        Self {
            use_sample: self.use_sample,
            sample_size: snapped.clamp(MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE),
        }
    }

    /// Argument for the data store: `None` means the full table.
    pub fn requested_rows(&self) -> Option<usize> {
        if self.use_sample {
            Some(self.normalized().sample_size)
        } else {
            None
        }
    }
}

/// Settings loaded from `dashboard.json` and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Click CSV; the full export is far larger than the shipped sample.
    pub data_path: PathBuf,
    /// Pre-rendered EDA charts.
    pub outputs_dir: PathBuf,
    /// Pre-rendered model curves and feature importance.
    pub image_dir: PathBuf,
    pub viz_max_rows: usize,
    pub sampling: SamplingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/train_sample.csv"),
            outputs_dir: PathBuf::from("outputs"),
            image_dir: PathBuf::from("image"),
            viz_max_rows: DEFAULT_VIZ_MAX_ROWS,
            sampling: SamplingConfig::default(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_FILE: &'static str = "dashboard.json";

    /// Read the config file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(content)?;
        config.sampling = config.sampling.normalized();
        if config.viz_max_rows == 0 {
            config.viz_max_rows = DEFAULT_VIZ_MAX_ROWS;
        }
        Ok(config)
    }

    pub fn artifact_path(&self, artifact: &crate::content::Artifact) -> PathBuf {
        let base = match artifact.location {
            crate::content::ArtifactDir::Outputs => &self.outputs_dir,
            crate::content::ArtifactDir::Images => &self.image_dir,
        };
        base.join(artifact.file_name)
    }
}
