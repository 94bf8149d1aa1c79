//! Landing view: one payload carrying everything the overview screen shows.

use serde::{Deserialize, Serialize};

use crate::alerts::{self, AlertCard};
use crate::config;
use crate::models::{AlertFilter, ModelPerformance, PatientFilter, PopulationStats, RiskLevel};
use crate::roster::{self, PatientCard};
use crate::store::RecordStore;

/// Overview payload, assembled in a single call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewData {
    pub population: PopulationStats,
    pub model: ModelPerformance,
    /// High-risk patients, highest score first.
    pub high_risk: Vec<PatientCard>,
    /// Most recent alerts, newest first, capped at
    /// [`config::RECENT_ALERT_COUNT`].
    pub recent_alerts: Vec<AlertCard>,
}

/// Assembles the overview from the current store state.
pub fn assemble(store: &RecordStore) -> OverviewData {
    let high_filter = PatientFilter {
        risk_level: Some(RiskLevel::High),
        ..Default::default()
    };
    let mut high_risk = roster::patient_cards(store, &high_filter);
    high_risk.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));

    let mut recent_alerts = alerts::alert_cards(store, &AlertFilter::default());
    recent_alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent_alerts.truncate(config::RECENT_ALERT_COUNT);

    OverviewData {
        population: store.population_stats().clone(),
        model: store.model_performance().clone(),
        high_risk,
        recent_alerts,
    }
}
