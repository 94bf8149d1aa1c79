//! Record types shared across the dashboard.

pub mod alert;
pub mod enums;
pub mod filters;
pub mod patient;
pub mod stats;

pub use alert::Alert;
pub use enums::{AlertPriority, AlertStatus, RiskLevel};
pub use filters::{AlertFilter, PatientFilter};
pub use patient::{LatestVitals, Patient, VitalSigns};
pub use stats::{ModelPerformance, PopulationStats};
