//! Catalog of pre-rendered chart images produced by the offline analysis.

/// Which configured directory an artifact lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactDir {
    Outputs,
    Images,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Artifact {
    pub location: ArtifactDir,
    pub file_name: &'static str,
    pub caption: &'static str,
}

const fn output(file_name: &'static str, caption: &'static str) -> Artifact {
    Artifact {
        location: ArtifactDir::Outputs,
        file_name,
        caption,
    }
}

const fn image(file_name: &'static str, caption: &'static str) -> Artifact {
    Artifact {
        location: ArtifactDir::Images,
        file_name,
        caption,
    }
}

/// A static chart with the observations written next to it.
pub struct FindingPanel {
    pub title: &'static str,
    pub artifact: Artifact,
    pub findings: &'static [&'static str],
}

pub const TARGET_DISTRIBUTION: FindingPanel = FindingPanel {
    title: "Target Variable Distribution",
    artifact: output("01_target_distribution.png", ""),
    findings: &["99.77% no download", "0.23% download", "Severe imbalance"],
};

pub const UNIVARIATE_PANELS: [FindingPanel; 4] = [
    FindingPanel {
        title: "IP",
        artifact: output("02_ip.png", "Right-skewed distribution, most IPs < 150,000"),
        findings: &[
            "The distribution of ip is highly right-skewed.",
            "Most IPs fall under 150,000 with dense concentration in the lower to mid ranges; a long tail extends past 350,000.",
        ],
    },
    FindingPanel {
        title: "App",
        artifact: output("02_app.png", "Values cluster under 40"),
        findings: &[
            "The app feature is extremely concentrated around a small set of app IDs.",
            "Mean and median are both 12, and most values cluster tightly under 40.",
            "A few outlier app IDs appear above 100 to 500 but occur rarely.",
        ],
    },
    FindingPanel {
        title: "Device",
        artifact: output("02_device.png", "Extreme skewed distribution with a few outliers"),
        findings: &[
            "The device distribution is extremely skewed.",
            "Nearly all rows have device ID = 1.",
            "A few outlier device IDs (hundreds or thousands) appear with extremely low frequency.",
        ],
    },
    FindingPanel {
        title: "OS",
        artifact: output("02_os.png", "Similar to the device distribution"),
        findings: &[
            "Very concentrated in the low-value OS versions (0 to 30).",
            "A few large OS values (200 to 700) appear rarely and create a long tail.",
        ],
    },
];

pub const BOXPLOTS: Artifact = output("03_boxplots_outliers.png", "Variable Boxplot");

pub const TEMPORAL_PANELS: [FindingPanel; 4] = [
    FindingPanel {
        title: "Clicks by Hour of Day",
        artifact: output("04_byhourofday.png", ""),
        findings: &[
            "Click activity stays high and stable from 0:00 to around 15:00, between ~4,500 and 6,000 clicks per hour.",
            "After 16:00 clicks drop sharply, from ~3,800 to fewer than 1,000 between 17:00 and 22:00.",
            "Activity rises again slightly at 23:00.",
        ],
    },
    FindingPanel {
        title: "Clicks by Date",
        artifact: output("04_bydate.png", ""),
        findings: &[
            "Traffic increases from Nov 6 to Nov 8, then slightly decreases on Nov 9.",
            "The highest click volume occurs on Nov 8, with over 34,000 clicks.",
            "The upward trend may reflect a campaign launch, more publisher exposure, or a surge in automated traffic.",
        ],
    },
    FindingPanel {
        title: "Clicks by Day of Week",
        artifact: output("04_bydayofweek.png", ""),
        findings: &[
            "Most clicks come from Tuesday, Wednesday and Thursday.",
            "Monday has fewer than 5,000 clicks, mostly because the collection starts late on Monday.",
            "Friday to Sunday have no data in this sample.",
        ],
    },
    FindingPanel {
        title: "Attribution Rate by Hour",
        artifact: output("04_byhour.png", ""),
        findings: &[
            "Attribution rate fluctuates between 0.15% and 0.34% across hours.",
            "Conversion stays relatively stable during the high-click hours.",
            "Conversions dip around 17 to 20, matching the drop in total clicks, with a small spike around 21 to 23.",
        ],
    },
];

/// ROC and PR curve pair for one model.
pub struct CurvePair {
    pub roc: Artifact,
    pub pr: Artifact,
}

pub const RAW_FEATURE_CURVES: [CurvePair; 1] = [CurvePair {
    roc: image("logreg_raw_roc.png", "Logistic Regression (Raw) - ROC Curve"),
    pr: image("logreg_raw_pr.png", "Logistic Regression (Raw) - PR Curve"),
}];

pub const ENGINEERED_FEATURE_CURVES: [CurvePair; 4] = [
    CurvePair {
        roc: image("logreg_fe_roc.png", "Logistic Regression (FE) - ROC Curve"),
        pr: image("logreg_fe_pr.png", "Logistic Regression (FE) - PR Curve"),
    },
    CurvePair {
        roc: image("rf_fe_roc.png", "Random Forest (FE) - ROC Curve"),
        pr: image("rf_fe_pr.png", "Random Forest (FE) - PR Curve"),
    },
    CurvePair {
        roc: image("xgb_fe_roc.png", "XGBoost (FE) - ROC Curve"),
        pr: image("xgb_fe_pr.png", "XGBoost (FE) - PR Curve"),
    },
    CurvePair {
        roc: image("xgb_undersample_roc.png", "XGBoost (Undersampled) - ROC Curve"),
        pr: image("xgb_undersample_pr.png", "XGBoost (Undersampled) - PR Curve"),
    },
];

pub const FEATURE_IMPORTANCE: Artifact =
    image("05_featureimp.png", "Feature Importance from XGBoost Model");
