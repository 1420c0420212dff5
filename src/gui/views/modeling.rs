use super::{bullets, footer, info_box, page_header, section_header, sub_header, table, text};
use crate::charts::ArtifactStore;
use crate::config::AppConfig;
use crate::content::narrative::{
    EXPERIMENT_SETUP, FEATURE_IMPORTANCE_INTRO, FEATURE_IMPORTANCE_SUMMARY, METHODOLOGY,
    METRIC_DEFINITIONS, MODELING_INTRO, RESULTS_ANALYSIS, XGBOOST_SNIPPET,
};
use crate::content::{
    CurvePair, ModelResult, ENGINEERED_FEATURE_CURVES, FEATURE_IMPORTANCE, MODEL_RESULTS,
    RAW_FEATURE_CURVES, RECOMMENDATIONS,
};
use egui::{Color32, RichText};

/// Methodology, the fixed results table and the model curve images.
/// Nothing on this page depends on the loaded click table.
pub fn show_modeling(ui: &mut egui::Ui, config: &AppConfig, artifacts: &mut ArtifactStore) {
    page_header(ui, "Modeling & Results");
    text(ui, MODELING_INTRO);
    ui.separator();

    section_header(ui, "Methodology");
    for section in &METHODOLOGY {
        sub_header(ui, section.heading);
        text(ui, section.body);
    }
    egui::CollapsingHeader::new("View Code Snippet: XGBoost Configuration")
        .default_open(false)
        .show(ui, |ui| {
            let mut code = XGBOOST_SNIPPET.to_string();
            ui.add(
                egui::TextEdit::multiline(&mut code)
                    .code_editor()
                    .interactive(false)
                    .desired_width(f32::INFINITY),
            );
        });
    ui.separator();

    section_header(ui, "Experimental Results");
    text(ui, EXPERIMENT_SETUP);

    sub_header(ui, "Model Performance Comparison");
    let rows: Vec<Vec<String>> = MODEL_RESULTS.iter().map(ModelResult::cells).collect();
    table(ui, "model_results", &ModelResult::HEADERS, &rows);
    ui.add_space(6.0);
    info_box(ui, METRIC_DEFINITIONS);

    sub_header(ui, "Analysis of Results");
    for section in &RESULTS_ANALYSIS {
        ui.label(RichText::new(section.heading).strong());
        text(ui, section.body);
    }
    ui.separator();

    sub_header(ui, "ROC and Precision-Recall Curves");
    ui.label(RichText::new("Original Features").size(14.0).strong());
    curve_rows(ui, &RAW_FEATURE_CURVES, config, artifacts);
    ui.label(RichText::new("Feature Engineered Models").size(14.0).strong());
    curve_rows(ui, &ENGINEERED_FEATURE_CURVES, config, artifacts);
    ui.separator();

    sub_header(ui, "Feature Importance Analysis");
    text(ui, FEATURE_IMPORTANCE_INTRO);
    artifacts.show(
        ui,
        &config.artifact_path(&FEATURE_IMPORTANCE),
        FEATURE_IMPORTANCE.caption,
    );
    text(ui, FEATURE_IMPORTANCE_SUMMARY);
    ui.separator();

    sub_header(ui, "Model Selection Recommendation");
    ui.columns(RECOMMENDATIONS.len(), |cols| {
        for (col, rec) in cols.iter_mut().zip(RECOMMENDATIONS.iter()) {
            egui::Frame::none()
                .fill(Color32::from_rgb(40, 167, 69).gamma_multiply(0.15))
                .rounding(5.0)
                .inner_margin(10.0)
                .show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(rec.heading).strong());
                    ui.label(RichText::new(rec.model).size(15.0).strong());
                    bullets(ui, &rec.points);
                });
        }
    });

    footer(ui, "Modeling");
}

/// ROC on the left, PR on the right, one row per model.
fn curve_rows(
    ui: &mut egui::Ui,
    pairs: &[CurvePair],
    config: &AppConfig,
    artifacts: &mut ArtifactStore,
) {
    for pair in pairs {
        ui.columns(2, |cols| {
            artifacts.show(&mut cols[0], &config.artifact_path(&pair.roc), pair.roc.caption);
            artifacts.show(&mut cols[1], &config.artifact_path(&pair.pr), pair.pr.caption);
        });
        ui.add_space(6.0);
    }
}
