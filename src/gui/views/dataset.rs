use super::{footer, metric_row, page_header, section_header, table, text};
use crate::content::narrative::DATA_DICTIONARY;
use crate::gui::group_thousands;
use crate::stats::DashboardSnapshot;
use egui::RichText;

pub fn show_dataset(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let summary = &snapshot.summary;
    page_header(ui, "Dataset Details");

    section_header(ui, "Dataset Overview");
    metric_row(
        ui,
        &[
            ("Total Records", group_thousands(summary.rows)),
            ("Features", summary.columns.to_string()),
            (
                "Fraud Rate",
                format!("{:.3}%", summary.attribution_rate * 100.0),
            ),
            ("Date Range", format!("{} days", summary.date_span_days)),
        ],
    );
    ui.separator();

    section_header(ui, "Data Dictionary");
    let dictionary: Vec<Vec<&str>> = DATA_DICTIONARY
        .iter()
        .map(|(name, kind, description)| vec![*name, *kind, *description])
        .collect();
    table(ui, "data_dictionary", &["Feature", "Type", "Description"], &dictionary);
    ui.separator();

    section_header(ui, "Dataset Information");
    let period = match (&summary.first_date, &summary.last_date) {
        (Some(first), Some(last)) => format!("{} to {}", first, last),
        _ => "n/a".to_string(),
    };
    text(
        ui,
        &format!(
            "- Source: TalkingData Click Fraud Detection Dataset\n\
             - Size: ~{} records (sample)\n\
             - Period: {}\n\
             - Format: CSV\n\
             - Features: 8 columns (5 categorical IDs, 2 datetime, 1 binary target)\n\
             - Full Dataset: ~7GB (184+ million records)",
            group_thousands(summary.rows),
            period
        ),
    );
    ui.separator();

    section_header(ui, "Quick Statistics");
    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Categorical Features:").strong());
        let categorical: Vec<Vec<String>> = snapshot
            .profiles
            .iter()
            .map(|p| {
                let (value, count) = p
                    .most_common
                    .map(|vc| (vc.value.to_string(), vc.count.to_string()))
                    .unwrap_or_default();
                vec![p.feature.to_uppercase(), p.unique.to_string(), value, count]
            })
            .collect();
        table(
            &mut cols[0],
            "categorical_stats",
            &["Feature", "Unique Values", "Most Common", "Most Common Count"],
            &categorical,
        );

        cols[1].label(RichText::new("Missing Values:").strong());
        let missing: Vec<Vec<String>> = snapshot
            .missing
            .iter()
            .map(|m| vec![m.column.clone(), m.missing.to_string(), format!("{:.2}", m.percent)])
            .collect();
        table(
            &mut cols[1],
            "missing_values",
            &["Feature", "Missing Count", "Missing %"],
            &missing,
        );
    });
    ui.separator();

    section_header(ui, "Sample Data Preview");
    let headers: Vec<&str> = snapshot.preview.columns.iter().map(String::as_str).collect();
    table(ui, "sample_preview", &headers, &snapshot.preview.rows);

    footer(ui, "Dataset Details");
}
