//! Aggregate snapshots published alongside the record set.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Offline evaluation metrics for the deployed risk model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub auroc: f64,
    pub auprc: f64,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub calibration_score: f64,
    pub last_updated: NaiveDateTime,
}

/// Monitored-population counters shown in the overview header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationStats {
    pub total_patients: u32,
    pub high_risk: u32,
    pub medium_risk: u32,
    pub low_risk: u32,
    pub active_alerts: u32,
    pub interventions_this_week: u32,
}
