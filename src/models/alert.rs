//! Care-team alert record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{AlertPriority, AlertStatus};

/// An alert raised against a patient.
///
/// Only `patient_id` is stored; the display name is resolved from the
/// roster when cards are assembled, so a record never carries a stale copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub patient_id: String,
    pub priority: AlertPriority,
    pub alert_type: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub status: AlertStatus,
    pub actions: Vec<String>,
}
