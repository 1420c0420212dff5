use super::{bullets, footer, info_box, metric, page_header, section_header, sub_header, table, text};
use crate::charts::{ArtifactStore, ChartPlotter, CLICK_COLOR, FRAUD_COLOR};
use crate::config::AppConfig;
use crate::content::narrative::{CORRELATION_INSIGHT, TARGET_EXPLANATION, TEMPORAL_INSIGHT};
use crate::content::{FindingPanel, BOXPLOTS, TARGET_DISTRIBUTION, TEMPORAL_PANELS, UNIVARIATE_PANELS};
use crate::stats::{DashboardSnapshot, MIN_GROUP_CLICKS, SPREAD_FEATURES};
use egui::{Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdaMode {
    /// Pre-rendered charts from the offline analysis.
    #[default]
    Static,
    /// Charts computed from the loaded table.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdaTab {
    #[default]
    Target,
    Categorical,
    Temporal,
    Correlations,
}

impl EdaTab {
    const ALL: [EdaTab; 4] = [
        EdaTab::Target,
        EdaTab::Categorical,
        EdaTab::Temporal,
        EdaTab::Correlations,
    ];

    fn label(&self) -> &'static str {
        match self {
            EdaTab::Target => "Target Analysis",
            EdaTab::Categorical => "Categorical Features",
            EdaTab::Temporal => "Temporal Patterns",
            EdaTab::Correlations => "Correlations & Relationships",
        }
    }
}

/// Selections that persist across frames on the exploratory page.
#[derive(Debug, Clone, Default)]
pub struct EdaState {
    pub mode: EdaMode,
    pub tab: EdaTab,
    pub univariate: usize,
    pub temporal: usize,
}

pub fn show_eda(
    ui: &mut egui::Ui,
    state: &mut EdaState,
    snapshot: &DashboardSnapshot,
    config: &AppConfig,
    artifacts: &mut ArtifactStore,
) {
    page_header(ui, "📊 Exploratory Data Analysis");

    ui.horizontal(|ui| {
        ui.label("Select View Mode:");
        ui.radio_value(&mut state.mode, EdaMode::Static, "Full Analysis (Static)");
        ui.radio_value(
            &mut state.mode,
            EdaMode::Interactive,
            "Interactive Analysis (Live Data)",
        );
    });
    ui.separator();

    match state.mode {
        EdaMode::Static => show_static(ui, state, config, artifacts),
        EdaMode::Interactive => {
            ui.horizontal(|ui| {
                for tab in EdaTab::ALL {
                    ui.selectable_value(&mut state.tab, tab, tab.label());
                }
            });
            ui.separator();
            match state.tab {
                EdaTab::Target => target_tab(ui, snapshot),
                EdaTab::Categorical => categorical_tab(ui, snapshot),
                EdaTab::Temporal => temporal_tab(ui, snapshot),
                EdaTab::Correlations => correlation_tab(ui, snapshot),
            }
        }
    }

    footer(ui, "EDA");
}

fn show_static(
    ui: &mut egui::Ui,
    state: &mut EdaState,
    config: &AppConfig,
    artifacts: &mut ArtifactStore,
) {
    section_header(ui, "Complete EDA Results");

    sub_header(ui, "1. Target Variable Distribution");
    ui.columns(2, |cols| {
        let path = config.artifact_path(&TARGET_DISTRIBUTION.artifact);
        artifacts.show(&mut cols[0], &path, TARGET_DISTRIBUTION.artifact.caption);
        cols[1].label(RichText::new("Key Findings:").strong());
        bullets(&mut cols[1], TARGET_DISTRIBUTION.findings);
    });
    text(ui, TARGET_EXPLANATION);
    ui.separator();

    sub_header(ui, "2. Univariate Analysis: Numerical Features");
    state.univariate = panel_tabs(ui, &UNIVARIATE_PANELS, state.univariate);
    let panel = &UNIVARIATE_PANELS[state.univariate];
    ui.columns(2, |cols| {
        let path = config.artifact_path(&panel.artifact);
        artifacts.show(&mut cols[0], &path, panel.artifact.caption);
        cols[1].label(RichText::new("Observations:").strong());
        bullets(&mut cols[1], panel.findings);
    });

    ui.label(RichText::new(BOXPLOTS.caption).strong());
    artifacts.show(ui, &config.artifact_path(&BOXPLOTS), "");
    ui.separator();

    sub_header(ui, "3. Temporal Analysis");
    state.temporal = panel_tabs(ui, &TEMPORAL_PANELS, state.temporal);
    let panel = &TEMPORAL_PANELS[state.temporal];
    artifacts.show(ui, &config.artifact_path(&panel.artifact), panel.artifact.caption);
    ui.label(RichText::new("Observation:").strong());
    bullets(ui, panel.findings);
}

/// Tab strip over finding panels, returning the selected index.
fn panel_tabs(ui: &mut egui::Ui, panels: &[FindingPanel], selected: usize) -> usize {
    let mut selected = selected.min(panels.len().saturating_sub(1));
    ui.horizontal(|ui| {
        for (i, panel) in panels.iter().enumerate() {
            ui.selectable_value(&mut selected, i, panel.title);
        }
    });
    selected
}

fn target_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let labels = snapshot.labels;
    section_header(ui, "Target Variable Distribution");

    ui.columns(2, |cols| {
        ChartPlotter::draw_label_chart(&mut cols[0], &labels);

        let rows = vec![
            vec![
                "Legitimate Clicks".to_string(),
                labels.legitimate.to_string(),
                format!("{:.2}%", labels.percent(labels.legitimate)),
            ],
            vec![
                "Fraudulent Clicks".to_string(),
                labels.attributed.to_string(),
                format!("{:.2}%", labels.percent(labels.attributed)),
            ],
            vec![
                "Total Clicks".to_string(),
                labels.total().to_string(),
                "100.00%".to_string(),
            ],
        ];
        table(&mut cols[1], "label_stats", &["Category", "Count", "Percentage"], &rows);
    });

    info_box(
        ui,
        &format!(
            "Key Insight: Severe class imbalance detected with only {} fraud cases ({:.3}%) out of {} total records. This will require specialized techniques like SMOTE, class weighting, or adjusted evaluation metrics.",
            labels.attributed,
            snapshot.summary.attribution_rate * 100.0,
            crate::gui::group_thousands(labels.total())
        ),
    );
}

fn categorical_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    section_header(ui, "Categorical Feature Distributions");

    for feature in SPREAD_FEATURES {
        let Some(profile) = snapshot.profile(feature) else {
            continue;
        };
        sub_header(ui, &format!("{} Distribution", feature.to_uppercase()));
        ui.columns(2, |cols| {
            cols[0].label(format!("Top 20 {} IDs by Click Frequency", feature.to_uppercase()));
            ChartPlotter::draw_value_counts(&mut cols[0], feature, &profile.top_values);

            let (common_id, common_count) = profile
                .most_common
                .map(|vc| (vc.value.to_string(), vc.count.to_string()))
                .unwrap_or_default();
            let rows = vec![
                vec!["Unique Values".to_string(), profile.unique.to_string()],
                vec!["Most Common ID".to_string(), common_id],
                vec!["Most Common Count".to_string(), common_count],
                vec![
                    "Concentration %".to_string(),
                    format!("{:.2}%", profile.concentration_pct),
                ],
            ];
            table(&mut cols[1], &format!("{}_stats", feature), &["Metric", "Value"], &rows);
            cols[1].add_space(8.0);
            metric(
                &mut cols[1],
                "Top 10 Concentration",
                &format!("{:.1}%", profile.top10_concentration_pct),
            );
        });
        ui.separator();
    }

    sub_header(ui, "Distribution Comparison - Box Plots");
    ui.label(
        RichText::new(format!(
            "APP, DEVICE, OS, CHANNEL distribution over {} sampled rows",
            snapshot.viz_rows
        ))
        .size(12.0)
        .color(Color32::GRAY),
    );
    ChartPlotter::draw_spreads(ui, &snapshot.spreads);
}

fn temporal_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    section_header(ui, "Temporal Analysis");

    sub_header(ui, "Click Distribution by Hour of Day");
    ui.columns(2, |cols| {
        cols[0].label("Total Clicks by Hour");
        ChartPlotter::draw_click_line(&mut cols[0], "hourly_clicks", "Hour of Day", &snapshot.hourly);
        cols[1].label("Fraud Rate by Hour");
        ChartPlotter::draw_rate_line(&mut cols[1], "hourly_rate", "Hour of Day", &snapshot.hourly);
    });
    ui.separator();

    sub_header(ui, "Click Distribution by Day of Month");
    ui.columns(2, |cols| {
        cols[0].label("Total Clicks by Day");
        ChartPlotter::draw_group_bars(
            &mut cols[0],
            "daily_clicks",
            "Day of Month",
            "Number of Clicks",
            &snapshot.daily,
            |g| g.clicks as f64,
            CLICK_COLOR,
        );
        cols[1].label("Fraud Rate by Day");
        ChartPlotter::draw_group_bars(
            &mut cols[1],
            "daily_rate",
            "Day of Month",
            "Fraud Rate (%)",
            &snapshot.daily,
            |g| g.rate * 100.0,
            FRAUD_COLOR,
        );
    });

    info_box(ui, &format!("Temporal Insight: {}", TEMPORAL_INSIGHT));
}

fn correlation_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    section_header(ui, "Feature Correlations & Relationships");

    sub_header(ui, "Correlation Matrix");
    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui| {
            ChartPlotter::draw_heatmap(ui, &snapshot.correlations);
        });
    ui.separator();

    sub_header(ui, "Fraud Rate by Feature");
    ui.columns(2, |cols| {
        cols[0].label(format!("Fraud Rate by App (min {} clicks)", MIN_GROUP_CLICKS));
        ChartPlotter::draw_group_bars(
            &mut cols[0],
            "app_rate",
            "App ID",
            "Fraud Rate",
            &snapshot.app_rates,
            |g| g.rate,
            FRAUD_COLOR,
        );
        cols[1].label(format!("Fraud Rate by Channel (min {} clicks)", MIN_GROUP_CLICKS));
        ChartPlotter::draw_group_bars(
            &mut cols[1],
            "channel_rate",
            "Channel ID",
            "Fraud Rate",
            &snapshot.channel_rates,
            |g| g.rate,
            Color32::from_rgb(243, 156, 18),
        );
    });

    info_box(ui, &format!("Correlation Insight: {}", CORRELATION_INSIGHT));
}
