//! Chart data sources for the analytics and model performance screens.
//!
//! The risk distribution is computed from the population snapshot. The
//! trend series are fixed demo tables; their final points line up with
//! the snapshots the record set ships with.

use serde::{Deserialize, Serialize};

use crate::models::PopulationStats;
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Risk banding counts for the distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

/// One month of population risk counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTrendPoint {
    pub month: String,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Success rate of one intervention category, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionOutcome {
    pub label: String,
    pub success_rate: u32,
}

/// One week of model evaluation metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTrendPoint {
    pub week: String,
    pub auroc: f64,
    pub accuracy: f64,
    pub precision: f64,
}

/// Everything the analytics screens render, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub distribution: RiskDistribution,
    pub monthly_trend: Vec<RiskTrendPoint>,
    pub interventions: Vec<InterventionOutcome>,
    pub model_trend: Vec<ModelTrendPoint>,
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

const MONTHLY_RISK_TREND: [(&str, u32, u32, u32); 6] = [
    ("Jan", 75, 220, 500),
    ("Feb", 82, 235, 515),
    ("Mar", 89, 228, 508),
    ("Apr", 91, 241, 520),
    ("May", 87, 238, 518),
    ("Jun", 89, 234, 524),
];

const INTERVENTION_OUTCOMES: [(&str, u32); 5] = [
    ("Medication Adj.", 85),
    ("Monitoring", 78),
    ("Education", 92),
    ("Lifestyle", 67),
    ("Rehab", 89),
];

const MODEL_METRIC_TREND: [(&str, f64, f64, f64); 6] = [
    ("Week 1", 0.82, 0.78, 0.75),
    ("Week 2", 0.84, 0.80, 0.77),
    ("Week 3", 0.85, 0.81, 0.79),
    ("Week 4", 0.86, 0.82, 0.80),
    ("Week 5", 0.86, 0.83, 0.81),
    ("Week 6", 0.86, 0.83, 0.81),
];

/// Risk distribution from a population snapshot.
pub fn risk_distribution(stats: &PopulationStats) -> RiskDistribution {
    RiskDistribution {
        low: stats.low_risk,
        medium: stats.medium_risk,
        high: stats.high_risk,
    }
}

/// Six months of population risk counts.
pub fn monthly_risk_trend() -> Vec<RiskTrendPoint> {
    MONTHLY_RISK_TREND
        .iter()
        .map(|&(month, high, medium, low)| RiskTrendPoint {
            month: month.to_string(),
            high,
            medium,
            low,
        })
        .collect()
}

/// Success rates per intervention category.
pub fn intervention_outcomes() -> Vec<InterventionOutcome> {
    INTERVENTION_OUTCOMES
        .iter()
        .map(|&(label, success_rate)| InterventionOutcome {
            label: label.to_string(),
            success_rate,
        })
        .collect()
}

/// Six weeks of model evaluation metrics.
pub fn model_metric_trend() -> Vec<ModelTrendPoint> {
    MODEL_METRIC_TREND
        .iter()
        .map(|&(week, auroc, accuracy, precision)| ModelTrendPoint {
            week: week.to_string(),
            auroc,
            accuracy,
            precision,
        })
        .collect()
}

/// Assembles every analytics series in one call.
pub fn assemble(store: &RecordStore) -> AnalyticsData {
    AnalyticsData {
        distribution: risk_distribution(store.population_stats()),
        monthly_trend: monthly_risk_trend(),
        interventions: intervention_outcomes(),
        model_trend: model_metric_trend(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_mirrors_the_population_snapshot() {
        let store = RecordStore::sample().unwrap();
        let dist = risk_distribution(store.population_stats());
        assert_eq!(dist.low, 524);
        assert_eq!(dist.medium, 234);
        assert_eq!(dist.high, 89);
    }

    #[test]
    fn trend_series_end_at_the_current_snapshot() {
        let store = RecordStore::sample().unwrap();
        let stats = store.population_stats().clone();

        let trend = monthly_risk_trend();
        let last = trend.last().unwrap();
        assert_eq!(last.month, "Jun");
        assert_eq!(last.high, stats.high_risk);
        assert_eq!(last.medium, stats.medium_risk);
        assert_eq!(last.low, stats.low_risk);

        let metrics = model_metric_trend();
        let current = metrics.last().unwrap();
        assert_eq!(current.auroc, store.model_performance().auroc);
        assert_eq!(current.accuracy, store.model_performance().accuracy);
    }

    #[test]
    fn series_have_the_expected_shape() {
        assert_eq!(monthly_risk_trend().len(), 6);
        assert_eq!(model_metric_trend().len(), 6);

        let outcomes = intervention_outcomes();
        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(|o| o.success_rate <= 100));
        assert_eq!(outcomes[0].label, "Medication Adj.");
    }

    #[test]
    fn assemble_bundles_every_series() {
        let store = RecordStore::sample().unwrap();
        let data = assemble(&store);
        assert_eq!(data.distribution.high, 89);
        assert_eq!(data.monthly_trend.len(), 6);
        assert_eq!(data.interventions.len(), 5);
        assert_eq!(data.model_trend.len(), 6);
    }
}
