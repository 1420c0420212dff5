//! Dashboard Snapshot
//! Every aggregate the views need, computed once per loaded table.

use crate::data::DataProcessor;
use crate::stats::calculator::{
    CategoricalProfile, CorrelationMatrix, DatasetSummary, FeatureSpread, GroupRate, LabelCounts,
    MissingCount, StatsCalculator, StatsError, CATEGORICAL_FEATURES, CORRELATION_FEATURES,
    SPREAD_FEATURES,
};
use polars::prelude::*;
use rayon::prelude::*;
use tracing::debug;

pub const PREVIEW_ROWS: usize = 20;
pub const MIN_GROUP_CLICKS: usize = 10;
pub const TOP_RATE_GROUPS: usize = 15;

/// First rows of the table rendered as text.
#[derive(Debug, Clone, Default)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TablePreview {
    pub fn from_frame(df: &DataFrame, limit: usize) -> Self {
        let head = df.head(Some(limit));
        let columns: Vec<String> = head
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = (0..head.height())
            .map(|i| {
                head.get_columns()
                    .iter()
                    .map(|column| match column.get(i) {
                        Ok(AnyValue::Null) => String::new(),
                        Ok(value) => value.to_string().trim_matches('"').to_string(),
                        Err(_) => String::new(),
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

/// Aggregates behind every data-driven view.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub summary: DatasetSummary,
    pub labels: LabelCounts,
    pub profiles: Vec<CategoricalProfile>,
    pub missing: Vec<MissingCount>,
    pub preview: TablePreview,
    pub hourly: Vec<GroupRate>,
    pub daily: Vec<GroupRate>,
    pub correlations: CorrelationMatrix,
    pub app_rates: Vec<GroupRate>,
    pub channel_rates: Vec<GroupRate>,
    pub spreads: Vec<FeatureSpread>,
    pub viz_rows: usize,
}

impl DashboardSnapshot {
    /// Compute all aggregates. Box plot spreads use a visualization sample
    /// of at most `viz_max_rows` rows; everything else uses the whole table.
    pub fn compute(df: &DataFrame, viz_max_rows: usize) -> Result<Self, StatsError> {
        let viz = DataProcessor::visualization_sample(df, viz_max_rows)?;

        let profiles = CATEGORICAL_FEATURES
            .par_iter()
            .map(|feature| StatsCalculator::categorical_profile(df, feature))
            .collect::<Result<Vec<_>, _>>()?;

        let snapshot = Self {
            summary: StatsCalculator::summary(df)?,
            labels: StatsCalculator::label_counts(df)?,
            profiles,
            missing: StatsCalculator::missing_values(df),
            preview: TablePreview::from_frame(df, PREVIEW_ROWS),
            hourly: StatsCalculator::attribution_by(df, "hour")?,
            daily: StatsCalculator::attribution_by(df, "day")?,
            correlations: StatsCalculator::correlation_matrix(df, &CORRELATION_FEATURES)?,
            app_rates: StatsCalculator::top_attribution(
                df,
                "app",
                MIN_GROUP_CLICKS,
                TOP_RATE_GROUPS,
            )?,
            channel_rates: StatsCalculator::top_attribution(
                df,
                "channel",
                MIN_GROUP_CLICKS,
                TOP_RATE_GROUPS,
            )?,
            spreads: StatsCalculator::feature_spreads(&viz, &SPREAD_FEATURES)?,
            viz_rows: viz.height(),
        };

        debug!(
            rows = snapshot.summary.rows,
            viz_rows = snapshot.viz_rows,
            "dashboard snapshot computed"
        );
        Ok(snapshot)
    }

    pub fn profile(&self, feature: &str) -> Option<&CategoricalProfile> {
        self.profiles.iter().find(|p| p.feature == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::prepare_clicks;

    fn clicks(n: usize) -> DataFrame {
        let ids: Vec<i64> = (0..n as i64).map(|i| i % 7).collect();
        let times: Vec<String> = (0..n)
            .map(|i| format!("2017-11-{:02} {:02}:00:00", 6 + (i % 4), i % 24))
            .collect();
        let labels: Vec<i64> = (0..n).map(|i| i64::from(i % 50 == 0)).collect();
        let attributed: Vec<Option<String>> = (0..n)
            .map(|i| (i % 50 == 0).then(|| times[i].clone()))
            .collect();
        let raw = df!(
            "ip" => ids.clone(),
            "app" => ids.clone(),
            "device" => ids.clone(),
            "os" => ids.clone(),
            "channel" => ids,
            "click_time" => times,
            "attributed_time" => attributed,
            "is_attributed" => labels,
        )
        .unwrap();
        prepare_clicks(raw).unwrap()
    }

    #[test]
    fn snapshot_covers_every_view() {
        let df = clicks(400);
        let snapshot = DashboardSnapshot::compute(&df, 100).unwrap();

        assert_eq!(snapshot.summary.rows, 400);
        assert_eq!(snapshot.labels.attributed, 8);
        assert_eq!(snapshot.profiles.len(), CATEGORICAL_FEATURES.len());
        assert_eq!(snapshot.profile("app").unwrap().unique, 7);
        assert_eq!(snapshot.preview.rows.len(), PREVIEW_ROWS);
        assert_eq!(snapshot.preview.columns.len(), df.width());
        assert_eq!(snapshot.hourly.len(), 24);
        assert_eq!(snapshot.daily.len(), 4);
        assert_eq!(snapshot.correlations.features.len(), CORRELATION_FEATURES.len());
        assert!(snapshot.app_rates.len() <= TOP_RATE_GROUPS);
        assert!(snapshot.app_rates.iter().all(|g| g.clicks >= MIN_GROUP_CLICKS));
        assert_eq!(snapshot.viz_rows, 100);
        assert!(snapshot.spreads.iter().all(|s| s.count == 100));
    }

    #[test]
    fn preview_renders_nulls_as_blank() {
        let df = clicks(3);
        let preview = TablePreview::from_frame(&df, PREVIEW_ROWS);
        let idx = preview
            .columns
            .iter()
            .position(|c| c == "attributed_time")
            .unwrap();
        // row 0 is attributed, rows 1 and 2 are not
        assert!(!preview.rows[0][idx].is_empty());
        assert!(preview.rows[1][idx].is_empty());
        assert_eq!(preview.rows.len(), 3);
    }
}
