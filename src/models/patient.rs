//! Patient record and vital-sign series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::RiskLevel;

/// A patient under risk monitoring.
///
/// `risk_score` is the raw model output in `[0, 1]`; `risk_level` is the
/// banding assigned alongside it and is carried independently, not derived
/// from the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub primary_condition: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub last_prediction: NaiveDate,
    pub vitals: VitalSigns,
    pub risk_factors: Vec<String>,
    pub medication_adherence: f64,
    pub last_visit: NaiveDate,
    pub interventions: Vec<String>,
}

/// Recent samples per vital, oldest first. The last element of each
/// series is the current reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    pub blood_pressure: Vec<f64>,
    pub glucose: Vec<f64>,
    pub oxygen_sat: Vec<f64>,
    pub heart_rate: Vec<f64>,
}

impl VitalSigns {
    /// Current reading of each series; `None` where a series is empty.
    pub fn latest(&self) -> LatestVitals {
        LatestVitals {
            blood_pressure: self.blood_pressure.last().copied(),
            glucose: self.glucose.last().copied(),
            oxygen_sat: self.oxygen_sat.last().copied(),
            heart_rate: self.heart_rate.last().copied(),
        }
    }
}

/// Snapshot of the most recent reading per vital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestVitals {
    pub blood_pressure: Option<f64>,
    pub glucose: Option<f64>,
    pub oxygen_sat: Option<f64>,
    pub heart_rate: Option<f64>,
}
