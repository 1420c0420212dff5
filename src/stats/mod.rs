//! Stats module - descriptive statistics over the click table

mod calculator;
mod snapshot;

pub use calculator::{
    CategoricalProfile, CorrelationMatrix, DatasetSummary, FeatureSpread, GroupRate, LabelCounts,
    MissingCount, StatsCalculator, StatsError, ValueCount, CATEGORICAL_FEATURES,
    CORRELATION_FEATURES, SPREAD_FEATURES,
};
pub use snapshot::{DashboardSnapshot, TablePreview, MIN_GROUP_CLICKS, PREVIEW_ROWS, TOP_RATE_GROUPS};
