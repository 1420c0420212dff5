//! Click Fraud Dashboard - TalkingData ad-click analysis
//!
//! Loads click telemetry from CSV, derives descriptive statistics and
//! presents them alongside the offline modeling results.

pub mod charts;
pub mod config;
pub mod content;
pub mod data;
pub mod gui;
pub mod stats;
