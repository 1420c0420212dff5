//! Content module - static text, model results and chart artifacts

mod artifacts;
pub mod narrative;
mod results;

pub use artifacts::{
    Artifact, ArtifactDir, CurvePair, FindingPanel, BOXPLOTS, ENGINEERED_FEATURE_CURVES,
    FEATURE_IMPORTANCE, RAW_FEATURE_CURVES, TARGET_DISTRIBUTION, TEMPORAL_PANELS,
    UNIVARIATE_PANELS,
};
pub use results::{ModelResult, Recommendation, MODEL_RESULTS, RECOMMENDATIONS};
