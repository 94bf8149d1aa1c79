//! In-memory record store, the single owner of all dashboard records.
//!
//! Collections keep their load order; every ordering guarantee made by the
//! view modules is relative to that order. The store exposes exactly one
//! mutation, [`RecordStore::advance_alert`], which steps an alert lifecycle
//! in place. Everything else is read-only borrowing.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Alert, AlertStatus, ModelPerformance, Patient, PopulationStats};

/// Bundled record set the dashboard ships with.
const SAMPLE_RECORDS: &str = include_str!("../resources/sample_records.json");

// ═══════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read record set {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed record set: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

// ═══════════════════════════════════════════════════════════════════════════
// Store
// ═══════════════════════════════════════════════════════════════════════════

/// The full record set: patients, alerts, and published snapshots.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordStore {
    patients: Vec<Patient>,
    alerts: Vec<Alert>,
    model_performance: ModelPerformance,
    population_stats: PopulationStats,
}

impl RecordStore {
    /// Builds a store from already-parsed records, checking id uniqueness.
    pub fn new(
        patients: Vec<Patient>,
        alerts: Vec<Alert>,
        model_performance: ModelPerformance,
        population_stats: PopulationStats,
    ) -> Result<Self, DataError> {
        let store = RecordStore {
            patients,
            alerts,
            model_performance,
            population_stats,
        };
        store.validate()?;
        Ok(store)
    }

    /// Parses a record set from JSON.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let store: RecordStore = serde_json::from_str(json)?;
        store.validate()?;
        tracing::debug!(
            patients = store.patients.len(),
            alerts = store.alerts.len(),
            "Loaded record set"
        );
        Ok(store)
    }

    /// Reads and parses a record set from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The bundled sample record set.
    pub fn sample() -> Result<Self, DataError> {
        Self::from_json(SAMPLE_RECORDS)
    }

    /// Ids must be unique per collection. An alert pointing at an unknown
    /// patient is tolerated; its card simply renders without a name.
    fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for patient in &self.patients {
            if !seen.insert(patient.id.as_str()) {
                return Err(DataError::DuplicateId {
                    entity: "patient",
                    id: patient.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for alert in &self.alerts {
            if !seen.insert(alert.id.as_str()) {
                return Err(DataError::DuplicateId {
                    entity: "alert",
                    id: alert.id.clone(),
                });
            }
            if self.patient(&alert.patient_id).is_none() {
                tracing::warn!(
                    alert = %alert.id,
                    patient = %alert.patient_id,
                    "Alert references unknown patient"
                );
            }
        }

        Ok(())
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn model_performance(&self) -> &ModelPerformance {
        &self.model_performance
    }

    pub fn population_stats(&self) -> &PopulationStats {
        &self.population_stats
    }

    /// Looks up a patient by id.
    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }

    /// Looks up an alert by id.
    pub fn alert(&self, alert_id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == alert_id)
    }

    // ── Mutation ───────────────────────────────────────────────────────────

    /// Steps the lifecycle of one alert, returning the new status.
    /// An unknown id is a silent no-op and returns `None`.
    pub fn advance_alert(&mut self, alert_id: &str) -> Option<AlertStatus> {
        let alert = self.alerts.iter_mut().find(|a| a.id == alert_id)?;
        let from = alert.status;
        alert.status = from.advanced();
        tracing::info!(
            alert = %alert.id,
            from = from.as_str(),
            to = alert.status.as_str(),
            "Alert status advanced"
        );
        Some(alert.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertPriority, RiskLevel, VitalSigns};
    use chrono::NaiveDate;
    use std::io::Write;

    fn sample_store() -> RecordStore {
        RecordStore::sample().unwrap()
    }

    fn test_patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            age: 50,
            gender: "Female".to_string(),
            primary_condition: "Hypertension".to_string(),
            risk_score: 0.5,
            risk_level: RiskLevel::Medium,
            last_prediction: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
            vitals: VitalSigns::default(),
            risk_factors: vec![],
            medication_adherence: 0.9,
            last_visit: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            interventions: vec![],
        }
    }

    fn test_alert(id: &str, patient_id: &str) -> Alert {
        Alert {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            priority: AlertPriority::Medium,
            alert_type: "Vital Signs Alert".to_string(),
            message: "Check readings".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2025, 9, 9)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            status: AlertStatus::Unacknowledged,
            actions: vec!["Contact Patient".to_string()],
        }
    }

    fn snapshots() -> (ModelPerformance, PopulationStats) {
        let performance = ModelPerformance {
            auroc: 0.86,
            auprc: 0.79,
            accuracy: 0.83,
            precision: 0.81,
            recall: 0.78,
            f1_score: 0.79,
            calibration_score: 0.92,
            last_updated: NaiveDate::from_ymd_opt(2025, 9, 9)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };
        let population = PopulationStats {
            total_patients: 2,
            high_risk: 0,
            medium_risk: 2,
            low_risk: 0,
            active_alerts: 1,
            interventions_this_week: 0,
        };
        (performance, population)
    }

    // ── Loading ────────────────────────────────────────────────────────────

    #[test]
    fn bundled_records_load() {
        let store = sample_store();
        assert_eq!(store.patients().len(), 4);
        assert_eq!(store.alerts().len(), 3);

        let robert = store.patient("P001").unwrap();
        assert_eq!(robert.name, "Robert Johnson");
        assert_eq!(robert.risk_level, RiskLevel::High);
        assert_eq!(robert.vitals.latest().blood_pressure, Some(145.0));

        let first = store.alert("A001").unwrap();
        assert_eq!(first.status, AlertStatus::Unacknowledged);
        assert_eq!(first.priority, AlertPriority::Critical);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_RECORDS.as_bytes()).unwrap();

        let store = RecordStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.patients().len(), 4);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RecordStore::from_json_file(Path::new("/no/such/records.json")).unwrap_err();
        match err {
            DataError::Read { path, .. } => assert!(path.contains("records.json")),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = RecordStore::from_json("{\"patients\": [").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    // ── Validation ─────────────────────────────────────────────────────────

    #[test]
    fn duplicate_patient_id_is_rejected() {
        let (performance, population) = snapshots();
        let err = RecordStore::new(
            vec![test_patient("P001", "One"), test_patient("P001", "Two")],
            vec![],
            performance,
            population,
        )
        .unwrap_err();
        match err {
            DataError::DuplicateId { entity, id } => {
                assert_eq!(entity, "patient");
                assert_eq!(id, "P001");
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_alert_id_is_rejected() {
        let (performance, population) = snapshots();
        let err = RecordStore::new(
            vec![test_patient("P001", "One")],
            vec![test_alert("A001", "P001"), test_alert("A001", "P001")],
            performance,
            population,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId {
                entity: "alert",
                ..
            }
        ));
    }

    #[test]
    fn alert_without_patient_is_tolerated() {
        let (performance, population) = snapshots();
        let store = RecordStore::new(
            vec![test_patient("P001", "One")],
            vec![test_alert("A001", "P999")],
            performance,
            population,
        )
        .unwrap();
        assert!(store.patient("P999").is_none());
        assert!(store.alert("A001").is_some());
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    #[test]
    fn advance_walks_the_full_lifecycle() {
        let mut store = sample_store();
        assert_eq!(
            store.advance_alert("A001"),
            Some(AlertStatus::Acknowledged)
        );
        assert_eq!(store.advance_alert("A001"), Some(AlertStatus::InProgress));
        assert_eq!(store.advance_alert("A001"), Some(AlertStatus::Completed));
        // Terminal state absorbs further steps.
        assert_eq!(store.advance_alert("A001"), Some(AlertStatus::Completed));
        assert_eq!(store.alert("A001").unwrap().status, AlertStatus::Completed);
    }

    #[test]
    fn advance_unknown_id_changes_nothing() {
        let mut store = sample_store();
        let before: Vec<AlertStatus> = store.alerts().iter().map(|a| a.status).collect();

        assert_eq!(store.advance_alert("A999"), None);

        let after: Vec<AlertStatus> = store.alerts().iter().map(|a| a.status).collect();
        assert_eq!(before, after);
    }
}
