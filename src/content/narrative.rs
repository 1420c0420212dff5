//! Written content for the dashboard pages.
//!
//! Blocks are plain text. Lines starting with `- ` render as bullets and
//! blank lines separate paragraphs.

pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const PROJECT_OVERVIEW: &str = "\
We examine the challenge of click fraud in mobile app advertising using TalkingData's extensive ad tracking dataset. We analyze click patterns, user behavior, and device characteristics to identify fraudulent ad traffic that generates clicks without genuine user interest. The most important part of this analysis is assessing how temporal patterns, channel characteristics, and user engagement metrics distinguish legitimate app downloads from fraudulent clicks. This can also reveal which advertising channels and user segments are most vulnerable to fraud. Combined with feature engineering and machine learning models, we develop predictive tools to protect advertisers from wasted ad spend and improve the integrity of mobile advertising ecosystems.";

pub const PROJECT_BACKGROUND: [Section; 3] = [
    Section {
        heading: "Problem Definition",
        body: "\
Mobile app advertisers lose billions of dollars annually to click fraud, where bots or malicious actors generate fake ad clicks that never result in actual app downloads. TalkingData processes 3 billion clicks per day, with approximately 90% potentially fraudulent. Current fraud detection methods rely primarily on IP blacklists, but fraudsters continuously evolve their tactics.",
    },
    Section {
        heading: "Prediction Task",
        body: "\
Given a mobile ad click event with associated features (IP address, device, OS, channel, timestamp), predict whether the user will download the app or if the click is fraudulent.

Accurate fraud detection enables advertisers to optimize ad spend by blocking fraudulent traffic sources in real time, improving return on investment and allowing legitimate publishers to demonstrate their value. For TalkingData's clients, even a 1 percent improvement in fraud detection accuracy could save millions in wasted advertising expenditure.",
    },
    Section {
        heading: "Related Work",
        body: "\
Click fraud detection relies heavily on machine learning due to its significant financial impact on advertisers. The challenge lies in the imbalanced nature of fraud datasets, where fraudulent clicks typically represent less than 1 percent of total traffic [1]. Balancing techniques like SMOTE and ADASYN can substantially improve model performance, particularly recall [1]. Tree-based ensemble methods such as Random Forest and XGBoost consistently outperform other approaches, achieving high precision and recall even with highly imbalanced datasets [1][3]. These models are preferred over neural networks because they provide interpretable decision rules critical for legal and regulatory compliance [1]. Behavioral features, including session duration, pages viewed, and click patterns, are strong indicators distinguishing bot activity from legitimate users [3]. The global cost remains substantial, with North America losing $180,000 per minute and Asia Pacific $147,000 per minute to fraudulent ad spending [2].",
    },
];

pub const SAMPLE_NOTE: &str = "\
These statistics are based on your current sample size. Adjust the sample size in the sidebar to explore different data subsets.";

/// Feature, type and description rows for the data dictionary.
pub const DATA_DICTIONARY: [(&str, &str, &str); 8] = [
    ("ip", "int", "IP address ID of the click"),
    ("app", "int", "Application ID for marketing"),
    ("device", "int", "Device type ID of user mobile phone"),
    ("os", "int", "Operating system version ID of user mobile phone"),
    ("channel", "int", "Channel ID of mobile ad publisher"),
    ("click_time", "datetime", "Timestamp of click (UTC)"),
    ("attributed_time", "datetime", "Timestamp of app download (if attributed)"),
    (
        "is_attributed",
        "int",
        "Target variable: 1 = app download attributed, 0 = not attributed",
    ),
];

pub const TARGET_EXPLANATION: &str = "\
The first step of data exploration is understanding the distribution of the target variable, is_attributed, which indicates whether a user downloaded the app after clicking the advertisement (1 = download, 0 = no download).

- The dataset is extremely dominated by negative cases
- Out of 100,000 click events in train_sample.csv:
  - 99,773, around 99.77%, did not lead to an app download
  - Only 227, around 0.23%, resulted in a download, fewer than 3 downloads per 1,000 clicks";

pub const TEMPORAL_INSIGHT: &str = "\
Clear patterns in click timing suggest different behavior between legitimate users and fraudulent activity. Temporal features will be valuable for modeling.";

pub const CORRELATION_INSIGHT: &str = "\
Weak individual correlations suggest that fraud detection will require feature engineering and interaction effects rather than relying on single features.";

pub const MODELING_INTRO: &str = "\
This section presents the modeling approaches and experimental results for click fraud detection. Multiple models are evaluated to identify the best performing approach for this highly imbalanced dataset.";

pub const METHODOLOGY: [Section; 3] = [
    Section {
        heading: "1.1 Data Cleaning and Preprocessing",
        body: "\
We remove the single duplicate row detected in the data and ensure that click_time is parsed into a proper datetime. No missing values are present in any column. The feature attributed_time is excluded because it is only available for positive cases, which would cause data leakage if used as a predictor.

Since the original features (ip, app, device, os, channel) are categorical ID-like integers, they are stored in numeric form without one-hot encoding. For logistic regression models these features are standardized using a ColumnTransformer. For tree-based models preprocessing passes the numeric features through, as boosting and bagging methods handle unscaled integer inputs.

The target variable is_attributed is extremely imbalanced (0.23% positives), so class weights are computed during training. Logistic regression uses class_weight=\"balanced\"; XGBoost uses scale_pos_weight = negatives / positives (about 438.55) from the training split.",
    },
    Section {
        heading: "1.2 Feature Engineering",
        body: "\
Time-based features:
- Extract hour, day, and weekday from click_time, reflecting that click behavior varies across the day and week
- next_click measures the seconds until the next click from the same IP after sorting each IP's history
- Short intervals often indicate automated activity
- Missing intervals (final click per IP) are filled with 24 hours (86,400 seconds)

Count-based behavior features:
- ip_count (total clicks per IP), ip_app_count (clicks per IP and app), ip_app_os_count (clicks per IP, app, and OS)
- These capture repeated or unusually frequent click patterns that indicate fraudulent behavior

Two final feature sets:
- RAW_FEATURES: only the five original features
- FE_FEATURES: all original fields plus the engineered time, count, and next_click features",
    },
    Section {
        heading: "1.3 Modeling Methods",
        body: "\
- Baseline Logistic Regression: raw features with scaling and class weighting
- Logistic Regression with Feature Engineering: the full engineered feature set
- Random Forest Classifier: nonlinear relationships and interactions, with class weighting
- XGBoost: histogram-based gradient-boosted trees, scale_pos_weight set to the negative/positive ratio, 400 estimators, maximum depth 6
- XGBoost with Undersampling: 1:5 undersampled training set (182 positives, 910 negatives), scale_pos_weight=1, evaluated on the original imbalanced test set",
    },
];

pub const XGBOOST_SNIPPET: &str = "\
# XGBoost with Imbalance Weighting
from xgboost import XGBClassifier

model = XGBClassifier(
    n_estimators=400,
    max_depth=6,
    scale_pos_weight=438.55,  # Ratio of negatives to positives
    random_state=42
)
model.fit(X_train, y_train)";

pub const EXPERIMENT_SETUP: &str = "\
The data is split into 80% training and 20% testing sets with stratification, giving 182 positives in the training set and 45 in the testing set. Each model is evaluated using predicted probabilities to compute ROC-AUC and PR-AUC, and classification metrics are reported at a threshold of 0.5.";

pub const METRIC_DEFINITIONS: &str = "\
- Class 0: Legitimate clicks (negative class)
- Class 1: Fraudulent clicks (positive class)
- ROC-AUC: Area under ROC curve
- PR-AUC: Area under Precision-Recall curve (most important for imbalanced data)";

pub const RESULTS_ANALYSIS: [Section; 3] = [
    Section {
        heading: "Baseline Models",
        body: "\
- The baseline logistic regression performs poorly, with ROC-AUC of 0.8486 and PR-AUC of only 0.0213
- The model struggles to identify rare fraud cases
- Feature engineering improves ROC-AUC to 0.8810 and PR-AUC to 0.0232, still inadequate for separating the positive class",
    },
    Section {
        heading: "Tree-Based Methods",
        body: "\
- Tree-based methods show substantial gains
- Random Forest achieves ROC-AUC of 0.9157 and PR-AUC of 0.3682
- XGBoost obtains the strongest overall performance with ROC-AUC of 0.9353 and PR-AUC of 0.3639
- XGBoost balances precision (0.4231) and recall (0.4889), indicating effective ranking and moderately effective detection",
    },
    Section {
        heading: "Undersampling Approach",
        body: "\
- Produces a different error profile
- ROC-AUC of 0.9382, but PR-AUC drops to 0.2764
- Recall increases to 0.8222 while precision falls to 0.1057
- The model favours sensitivity at the expense of many false positives on the original distribution",
    },
];

pub const FEATURE_IMPORTANCE_INTRO: &str = "\
Feature importance analysis reveals which features contribute most to the model's predictions, showing what patterns the model uses to identify fraudulent clicks.";

pub const FEATURE_IMPORTANCE_SUMMARY: &str = "\
app, ip_app_count, ip_count, and ip_app_os_count are the strongest predictors, confirming that behavioral repetition patterns dominate fraud signal detection.";

pub const CONCLUSION: &str = "\
Linear models, even with balanced class weights and engineered features, cannot capture the nonlinear and interaction-heavy patterns associated with fraudulent click behavior. Tree-based models, especially XGBoost, leverage count-based and temporal signals to achieve significant improvements in PR-AUC, the metric most aligned with rare-event prediction.

The engineered features significantly enhance model performance by encoding click frequency patterns and inter-click timing, both of which correlate strongly with automated or deceptive activity. XGBoost with imbalance-aware weighting provides the best trade-off between precision and recall on the true distribution, whereas undersampling shifts the model toward aggressive recall at the cost of many false alarms.

Overall, combining feature engineering with gradient-boosted tree models is an effective strategy for highly imbalanced fraud detection. Future work may explore alternative imbalance strategies (e.g. SMOTE), sequential models that analyze click order, or anomaly detection methods to further reduce false positives.";

/// Citation text and link.
pub const REFERENCES: [(&str, &str); 4] = [
    (
        "[1] A. Ravaglia, \"Imbalanced classification in Fraud Detection,\" Data Reply IT | DataTech, May 31, 2022.",
        "https://medium.com/data-reply-it-datatech/imbalanced-classification-in-fraud-detection-8f63474ff8c7",
    ),
    (
        "[2] \"Click Fraud Statistics 2026: Global Costs & Key Trends,\" Trafficguard.ai, 2025.",
        "https://www.trafficguard.ai/click-fraud-statistics",
    ),
    (
        "[3] M. Aljabri and R. M. A. Mohammad, \"Click fraud detection for online advertising using machine learning,\" Egyptian Informatics Journal, vol. 24, no. 2, pp. 341-350, Jul. 2023.",
        "https://doi.org/10.1016/j.eij.2023.05.006",
    ),
    (
        "[4] \"TalkingData AdTracking Fraud Detection Challenge,\" Kaggle, 2025.",
        "https://www.kaggle.com/competitions/talkingdata-adtracking-fraud-detection/overview",
    ),
];

pub const TOOLS: [&str; 6] = ["Rust", "Polars", "egui / egui_plot", "statrs", "rayon", "image"];

pub const MODELING_TOOLS: [&str; 5] = ["Python", "pandas", "scikit-learn", "XGBoost", "LightGBM"];

/// One bullet item; `depth` is 0 for top-level items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet<'a> {
    pub depth: usize,
    pub text: &'a str,
}

/// Split a text block into paragraphs and bullet runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Paragraph(String),
    Bullets(Vec<Bullet<'a>>),
}

/// Every two leading spaces before `- ` nest a bullet one level deeper.
pub fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut out: Vec<Block<'_>> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            out.push(Block::Paragraph(String::new()));
            continue;
        }
        let body = line.trim_start();
        if let Some(item) = body.strip_prefix("- ") {
            let bullet = Bullet {
                depth: (line.len() - body.len()) / 2,
                text: item,
            };
            if let Some(Block::Bullets(items)) = out.last_mut() {
                items.push(bullet);
            } else {
                out.push(Block::Bullets(vec![bullet]));
            }
            continue;
        }
        match out.last_mut() {
            Some(Block::Paragraph(p)) if !p.is_empty() => {
                p.push(' ');
                p.push_str(body);
            }
            _ => out.push(Block::Paragraph(body.to_string())),
        }
    }
    out.retain(|b| !matches!(b, Block::Paragraph(p) if p.is_empty()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_split_paragraphs_and_bullets() {
        let parsed = blocks("Intro line\ncontinues\n\n- one\n- two\nAfter");
        assert_eq!(
            parsed,
            vec![
                Block::Paragraph("Intro line continues".to_string()),
                Block::Bullets(vec![
                    Bullet { depth: 0, text: "one" },
                    Bullet { depth: 0, text: "two" },
                ]),
                Block::Paragraph("After".to_string()),
            ]
        );
    }

    #[test]
    fn indented_bullets_keep_their_depth() {
        let parsed = blocks("- top\n  - nested\n    - deeper\n- back");
        let depths: Vec<(usize, &str)> = match &parsed[..] {
            [Block::Bullets(items)] => items.iter().map(|b| (b.depth, b.text)).collect(),
            other => panic!("expected one bullet run, got {:?}", other),
        };
        assert_eq!(
            depths,
            vec![(0, "top"), (1, "nested"), (2, "deeper"), (0, "back")]
        );
    }

    #[test]
    fn target_explanation_nests_the_label_split() {
        let parsed = blocks(TARGET_EXPLANATION);
        let Some(Block::Bullets(items)) = parsed.last() else {
            panic!("expected trailing bullets");
        };
        assert_eq!(items.iter().filter(|b| b.depth == 1).count(), 2);
        assert!(items[1].text.starts_with("Out of 100,000"));
        assert_eq!(items[1].depth, 0);
    }

    #[test]
    fn dictionary_covers_required_columns() {
        let names: Vec<&str> = DATA_DICTIONARY.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, crate::data::REQUIRED_COLUMNS.to_vec());
    }
}
