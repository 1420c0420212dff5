//! Charts module - interactive plots and static chart images

mod images;
mod plotter;

pub use images::{decode_artifact, ArtifactError, ArtifactStore};
pub use plotter::{ChartPlotter, CLICK_COLOR, FRAUD_COLOR, LEGIT_COLOR, PALETTE};
