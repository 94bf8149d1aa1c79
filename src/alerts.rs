//! Alert queue: filtering, card assembly, and operator actions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Alert, AlertFilter, AlertPriority, AlertStatus};
use crate::notify::Notification;
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One queue entry, with the patient name resolved from the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCard {
    pub id: String,
    pub patient_id: String,
    /// `None` when the alert references a patient not in the roster.
    pub patient_name: Option<String>,
    pub priority: AlertPriority,
    pub alert_type: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub status: AlertStatus,
    pub actions: Vec<String>,
    /// Label for the next lifecycle step button.
    pub action_label: String,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Applies queue criteria, keeping the input order. Both criteria are
/// exact matches; an unset criterion matches everything.
pub fn filter_alerts<'a>(alerts: &'a [Alert], filter: &AlertFilter) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|a| {
            let matches_priority = filter.priority.map_or(true, |p| a.priority == p);
            let matches_status = filter.status.map_or(true, |s| a.status == s);
            matches_priority && matches_status
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Assembly and actions
// ---------------------------------------------------------------------------

/// Queue cards for the given criteria.
pub fn alert_cards(store: &RecordStore, filter: &AlertFilter) -> Vec<AlertCard> {
    filter_alerts(store.alerts(), filter)
        .into_iter()
        .map(|alert| card_from(store, alert))
        .collect()
}

/// Handles an operator action button on an alert.
///
/// Actions have no backend here; the outcome is a notification for the
/// presentation layer. An unknown alert id produces no notification.
pub fn trigger_action(store: &RecordStore, alert_id: &str, action: &str) -> Option<Notification> {
    let alert = store.alert(alert_id)?;
    tracing::debug!(alert = %alert.id, action, "Alert action triggered");
    Some(Notification::success(format!(
        "Action \"{action}\" has been initiated."
    )))
}

fn card_from(store: &RecordStore, alert: &Alert) -> AlertCard {
    AlertCard {
        id: alert.id.clone(),
        patient_id: alert.patient_id.clone(),
        patient_name: store.patient(&alert.patient_id).map(|p| p.name.clone()),
        priority: alert.priority,
        alert_type: alert.alert_type.clone(),
        message: alert.message.clone(),
        timestamp: alert.timestamp,
        status: alert.status,
        actions: alert.actions.clone(),
        action_label: alert.status.action_label().to_string(),
    }
}
