//! Patient roster: filtering plus card and detail assembly.
//!
//! Filtering is a pure function of the records and the criteria. It never
//! reorders or duplicates, so the result is always a subsequence of the
//! roster; empty criteria hand the roster back unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LatestVitals, Patient, PatientFilter, RiskLevel};
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One roster grid entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCard {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub primary_condition: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub medication_adherence: f64,
    pub last_visit: NaiveDate,
}

/// Full profile for the patient detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDetail {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub primary_condition: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub latest_vitals: LatestVitals,
    pub risk_factors: Vec<String>,
    pub medication_adherence: f64,
    pub last_visit: NaiveDate,
    pub last_prediction: NaiveDate,
    pub interventions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Applies roster criteria, keeping the input order.
///
/// A patient matches when every active criterion holds: free-text search
/// against name or primary condition, exact risk level, and a condition
/// substring. Text matching is case-insensitive.
pub fn filter_patients<'a>(patients: &'a [Patient], filter: &PatientFilter) -> Vec<&'a Patient> {
    let search = filter.search.as_deref().unwrap_or("").to_lowercase();
    let condition = filter.condition.as_deref().unwrap_or("").to_lowercase();

    patients
        .iter()
        .filter(|p| {
            let name = p.name.to_lowercase();
            let primary = p.primary_condition.to_lowercase();

            let matches_search =
                search.is_empty() || name.contains(&search) || primary.contains(&search);
            let matches_level = filter.risk_level.map_or(true, |level| p.risk_level == level);
            let matches_condition = condition.is_empty() || primary.contains(&condition);

            matches_search && matches_level && matches_condition
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Roster cards for the given criteria.
pub fn patient_cards(store: &RecordStore, filter: &PatientFilter) -> Vec<PatientCard> {
    filter_patients(store.patients(), filter)
        .into_iter()
        .map(card_from)
        .collect()
}

/// Detail view for one patient. Unknown ids resolve to `None`.
pub fn patient_detail(store: &RecordStore, patient_id: &str) -> Option<PatientDetail> {
    let patient = store.patient(patient_id)?;
    Some(PatientDetail {
        id: patient.id.clone(),
        name: patient.name.clone(),
        age: patient.age,
        gender: patient.gender.clone(),
        primary_condition: patient.primary_condition.clone(),
        risk_score: patient.risk_score,
        risk_level: patient.risk_level,
        latest_vitals: patient.vitals.latest(),
        risk_factors: patient.risk_factors.clone(),
        medication_adherence: patient.medication_adherence,
        last_visit: patient.last_visit,
        last_prediction: patient.last_prediction,
        interventions: patient.interventions.clone(),
    })
}

fn card_from(patient: &Patient) -> PatientCard {
    PatientCard {
        id: patient.id.clone(),
        name: patient.name.clone(),
        age: patient.age,
        gender: patient.gender.clone(),
        primary_condition: patient.primary_condition.clone(),
        risk_score: patient.risk_score,
        risk_level: patient.risk_level,
        risk_factors: patient.risk_factors.clone(),
        medication_adherence: patient.medication_adherence,
        last_visit: patient.last_visit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VitalSigns;

    fn patient(id: &str, name: &str, condition: &str, level: RiskLevel, score: f64) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            age: 60,
            gender: "Male".to_string(),
            primary_condition: condition.to_string(),
            risk_score: score,
            risk_level: level,
            last_prediction: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
            vitals: VitalSigns::default(),
            risk_factors: vec![],
            medication_adherence: 0.8,
            last_visit: NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
            interventions: vec![],
        }
    }

    fn roster() -> Vec<Patient> {
        vec![
            patient("P001", "Robert Johnson", "Type 2 Diabetes + COPD", RiskLevel::High, 0.87),
            patient("P002", "Maria Garcia", "Hypertension + Heart Failure", RiskLevel::High, 0.72),
            patient("P003", "James Wilson", "Type 1 Diabetes", RiskLevel::Medium, 0.34),
            patient("P004", "Linda Brown", "COPD + Osteoporosis", RiskLevel::Low, 0.19),
        ]
    }

    fn ids(matched: &[&Patient]) -> Vec<String> {
        matched.iter().map(|p| p.id.clone()).collect()
    }

    // ── Filtering ──────────────────────────────────────────────────────────

    #[test]
    fn empty_criteria_return_everything_in_order() {
        let patients = roster();
        let matched = filter_patients(&patients, &PatientFilter::default());
        assert_eq!(ids(&matched), ["P001", "P002", "P003", "P004"]);
    }

    #[test]
    fn risk_level_matches_exactly() {
        let patients = roster();
        let filter = PatientFilter {
            risk_level: Some(RiskLevel::High),
            ..Default::default()
        };
        let matched = filter_patients(&patients, &filter);
        assert_eq!(ids(&matched), ["P001", "P002"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let patients = roster();
        let lower = PatientFilter {
            search: Some("robert".to_string()),
            ..Default::default()
        };
        let upper = PatientFilter {
            search: Some("ROBERT".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_patients(&patients, &lower)),
            ids(&filter_patients(&patients, &upper))
        );
        assert_eq!(ids(&filter_patients(&patients, &lower)), ["P001"]);
    }

    #[test]
    fn search_also_matches_the_condition() {
        let patients = roster();
        let filter = PatientFilter {
            search: Some("copd".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_patients(&patients, &filter)), ["P001", "P004"]);
    }

    #[test]
    fn condition_criterion_is_a_substring_match() {
        let patients = roster();
        let filter = PatientFilter {
            condition: Some("Diabetes".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_patients(&patients, &filter)), ["P001", "P003"]);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let patients = roster();
        let filter = PatientFilter {
            search: Some("diabetes".to_string()),
            risk_level: Some(RiskLevel::High),
            condition: None,
        };
        assert_eq!(ids(&filter_patients(&patients, &filter)), ["P001"]);
    }

    #[test]
    fn adding_criteria_never_grows_the_result() {
        let patients = roster();
        let loose = PatientFilter {
            search: Some("o".to_string()),
            ..Default::default()
        };
        let tight = PatientFilter {
            search: Some("o".to_string()),
            risk_level: Some(RiskLevel::High),
            condition: Some("copd".to_string()),
        };
        let loose_ids = ids(&filter_patients(&patients, &loose));
        let tight_ids = ids(&filter_patients(&patients, &tight));
        assert!(tight_ids.len() <= loose_ids.len());
        assert!(tight_ids.iter().all(|id| loose_ids.contains(id)));
    }

    #[test]
    fn unmatched_criteria_yield_an_empty_result() {
        let patients = roster();
        let filter = PatientFilter {
            search: Some("nobody".to_string()),
            ..Default::default()
        };
        assert!(filter_patients(&patients, &filter).is_empty());
    }

    // ── Assembly ───────────────────────────────────────────────────────────

    #[test]
    fn detail_resolves_latest_vitals() {
        let store = RecordStore::sample().unwrap();
        let detail = patient_detail(&store, "P001").unwrap();
        assert_eq!(detail.name, "Robert Johnson");
        assert_eq!(detail.latest_vitals.blood_pressure, Some(145.0));
        assert_eq!(detail.latest_vitals.glucose, Some(185.0));
        assert!(!detail.interventions.is_empty());
    }

    #[test]
    fn detail_for_unknown_patient_is_none() {
        let store = RecordStore::sample().unwrap();
        assert!(patient_detail(&store, "P999").is_none());
    }

    #[test]
    fn cards_mirror_the_filter_result() {
        let store = RecordStore::sample().unwrap();
        let filter = PatientFilter {
            risk_level: Some(RiskLevel::Medium),
            ..Default::default()
        };
        let cards = patient_cards(&store, &filter);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "P003");
        assert_eq!(cards[0].name, "James Wilson");
    }
}
