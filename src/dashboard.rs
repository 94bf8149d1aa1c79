//! Explicit dashboard state: the record store plus the current view
//! criteria, owned by the caller and passed into every operation.
//!
//! Reads recompute from the store on every call, so results always
//! reflect the records and criteria at that moment. There is no cache
//! to invalidate and no global to reset.

use crate::alerts::{self, AlertCard};
use crate::analytics::{self, AnalyticsData};
use crate::models::{AlertFilter, AlertStatus, PatientFilter};
use crate::notify::Notification;
use crate::overview::{self, OverviewData};
use crate::roster::{self, PatientCard, PatientDetail};
use crate::store::{DataError, RecordStore};

#[derive(Debug)]
pub struct Dashboard {
    store: RecordStore,
    patient_filter: PatientFilter,
    alert_filter: AlertFilter,
}

impl Dashboard {
    /// Wraps a record store with unconstrained view criteria.
    pub fn new(store: RecordStore) -> Self {
        Dashboard {
            store,
            patient_filter: PatientFilter::default(),
            alert_filter: AlertFilter::default(),
        }
    }

    /// Dashboard over the bundled sample records.
    pub fn sample() -> Result<Self, DataError> {
        Ok(Self::new(RecordStore::sample()?))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Reads
    // ═══════════════════════════════════════════════════════════════════════

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The landing payload: snapshots, high-risk patients, recent alerts.
    pub fn overview(&self) -> OverviewData {
        overview::assemble(&self.store)
    }

    /// Chart series for the analytics screens.
    pub fn analytics(&self) -> AnalyticsData {
        analytics::assemble(&self.store)
    }

    /// Roster cards under the current criteria.
    pub fn patients(&self) -> Vec<PatientCard> {
        roster::patient_cards(&self.store, &self.patient_filter)
    }

    /// Queue cards under the current criteria.
    pub fn alerts(&self) -> Vec<AlertCard> {
        alerts::alert_cards(&self.store, &self.alert_filter)
    }

    /// Full detail for one patient. Unknown ids resolve to `None`.
    pub fn patient_detail(&self, patient_id: &str) -> Option<PatientDetail> {
        roster::patient_detail(&self.store, patient_id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════════

    /// Replaces the roster criteria and returns the cards they select.
    pub fn set_patient_filter(&mut self, filter: PatientFilter) -> Vec<PatientCard> {
        self.patient_filter = filter;
        let cards = self.patients();
        tracing::debug!(matched = cards.len(), filter = ?self.patient_filter, "Patient filter updated");
        cards
    }

    /// Replaces the queue criteria and returns the cards they select.
    pub fn set_alert_filter(&mut self, filter: AlertFilter) -> Vec<AlertCard> {
        self.alert_filter = filter;
        let cards = self.alerts();
        tracing::debug!(matched = cards.len(), filter = ?self.alert_filter, "Alert filter updated");
        cards
    }

    /// Global quick search: replaces the roster search term, keeping the
    /// other criteria. An empty term is a no-op and leaves the criteria
    /// untouched; any other term, whitespace included, is applied verbatim.
    pub fn quick_search(&mut self, term: &str) -> Option<Vec<PatientCard>> {
        if term.is_empty() {
            return None;
        }
        self.patient_filter.search = Some(term.to_string());
        let cards = self.patients();
        tracing::debug!(matched = cards.len(), term, "Quick search applied");
        Some(cards)
    }

    /// Advances an alert one lifecycle step. Unknown ids are ignored.
    pub fn acknowledge_alert(&mut self, alert_id: &str) -> Option<AlertStatus> {
        let status = self.store.advance_alert(alert_id);
        if status.is_none() {
            tracing::warn!(alert = alert_id, "Lifecycle step ignored: unknown alert id");
        }
        status
    }

    /// Triggers a named action on an alert, yielding a notification for
    /// the presentation layer. Unknown ids yield `None`.
    pub fn trigger_alert_action(&self, alert_id: &str, action: &str) -> Option<Notification> {
        let note = alerts::trigger_action(&self.store, alert_id, action);
        if note.is_none() {
            tracing::warn!(alert = alert_id, "Action ignored: unknown alert id");
        }
        note
    }
}
