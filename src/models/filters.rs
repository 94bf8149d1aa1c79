//! Filter criteria for the roster and the alert queue.
//!
//! Every field is optional; `None` or an empty string means no constraint.
//! Active criteria combine conjunctively.

use serde::{Deserialize, Serialize};

use super::enums::{AlertPriority, AlertStatus, RiskLevel};

/// Roster criteria: free-text search, risk banding, condition substring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientFilter {
    /// Case-insensitive substring match against name or primary condition.
    pub search: Option<String>,
    /// Exact risk banding.
    pub risk_level: Option<RiskLevel>,
    /// Case-insensitive substring match against the primary condition.
    pub condition: Option<String>,
}

/// Alert queue criteria, both exact-match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    pub priority: Option<AlertPriority>,
    pub status: Option<AlertStatus>,
}
