//! Model evaluation results reported by the offline modeling notebooks.
//! Displayed verbatim; nothing here is recomputed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelResult {
    pub model: &'static str,
    pub roc_auc: f64,
    pub pr_auc: f64,
    pub accuracy: f64,
    pub precision_0: f64,
    pub recall_0: f64,
    pub f1_0: f64,
    pub precision_1: f64,
    pub recall_1: f64,
    pub f1_1: f64,
}

impl ModelResult {
    pub const HEADERS: [&'static str; 10] = [
        "Model",
        "ROC-AUC",
        "PR-AUC",
        "Accuracy",
        "Precision_0",
        "Recall_0",
        "F1_0",
        "Precision_1",
        "Recall_1",
        "F1_1",
    ];

    pub fn metrics(&self) -> [f64; 9] {
        [
            self.roc_auc,
            self.pr_auc,
            self.accuracy,
            self.precision_0,
            self.recall_0,
            self.f1_0,
            self.precision_1,
            self.recall_1,
            self.f1_1,
        ]
    }

    /// Table cells with metrics at four decimals.
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.model.to_string())
            .chain(self.metrics().iter().map(|v| format!("{:.4}", v)))
            .collect()
    }
}

pub const MODEL_RESULTS: [ModelResult; 5] = [
    ModelResult {
        model: "Logistic Regression (Raw)",
        roc_auc: 0.8486,
        pr_auc: 0.0213,
        accuracy: 0.8266,
        precision_0: 0.9993,
        recall_0: 0.8268,
        f1_0: 0.9048,
        precision_1: 0.0097,
        recall_1: 0.7556,
        f1_1: 0.0192,
    },
    ModelResult {
        model: "Logistic Regression (FE)",
        roc_auc: 0.8810,
        pr_auc: 0.0232,
        accuracy: 0.8267,
        precision_0: 0.9994,
        recall_0: 0.8268,
        f1_0: 0.9049,
        precision_1: 0.0100,
        recall_1: 0.7778,
        f1_1: 0.0198,
    },
    ModelResult {
        model: "Random Forest (FE)",
        roc_auc: 0.9157,
        pr_auc: 0.3682,
        accuracy: 0.9979,
        precision_0: 0.9979,
        recall_0: 0.9999,
        f1_0: 0.9989,
        precision_1: 0.6667,
        recall_1: 0.0889,
        f1_1: 0.1569,
    },
    ModelResult {
        model: "XGBoost (FE)",
        roc_auc: 0.9353,
        pr_auc: 0.3639,
        accuracy: 0.9974,
        precision_0: 0.9988,
        recall_0: 0.9985,
        f1_0: 0.9987,
        precision_1: 0.4231,
        recall_1: 0.4889,
        f1_1: 0.4536,
    },
    ModelResult {
        model: "XGBoost (Undersampled)",
        roc_auc: 0.9382,
        pr_auc: 0.2764,
        accuracy: 0.9840,
        precision_0: 0.9996,
        recall_0: 0.9843,
        f1_0: 0.9919,
        precision_1: 0.1057,
        recall_1: 0.8222,
        f1_1: 0.1873,
    },
];

/// Recommendation cards on the modeling page.
pub struct Recommendation {
    pub heading: &'static str,
    pub model: &'static str,
    pub points: [&'static str; 3],
}

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        heading: "Best Overall",
        model: "XGBoost (FE)",
        points: [
            "Highest PR-AUC (0.3639)",
            "Balanced precision/recall",
            "Robust to imbalance",
        ],
    },
    Recommendation {
        heading: "High Recall",
        model: "XGBoost (Undersampled)",
        points: [
            "Catches 82% of fraud",
            "Many false positives",
            "Use when missing fraud is costly",
        ],
    },
    Recommendation {
        heading: "Feature Engineering",
        model: "Random Forest (FE)",
        points: [
            "Strong performance",
            "Good interpretability",
            "Competitive alternative",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_line_up_with_headers() {
        for result in &MODEL_RESULTS {
            assert_eq!(result.cells().len(), ModelResult::HEADERS.len());
        }
    }

    #[test]
    fn cells_use_four_decimals() {
        let cells = MODEL_RESULTS[1].cells();
        assert_eq!(cells[0], "Logistic Regression (FE)");
        assert_eq!(cells[1], "0.8810");
        assert_eq!(cells[7], "0.0100");
    }

    #[test]
    fn recommended_models_exist_in_results() {
        for rec in &RECOMMENDATIONS {
            assert!(MODEL_RESULTS.iter().any(|r| r.model == rec.model));
        }
    }
}
