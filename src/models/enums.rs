//! Label enums shared across the record set, with string conversion
//! matching the labels used in record JSON and the presentation layer.

use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + from_str pattern.
/// Serialized form is the display label itself.
macro_rules! label_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant
            ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::store::DataError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant)),+,
                    _ => Err(crate::store::DataError::InvalidEnum {
                        field: stringify!($name).to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

label_enum!(RiskLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

label_enum!(AlertPriority {
    Critical => "Critical",
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

label_enum!(AlertStatus {
    Unacknowledged => "Unacknowledged",
    Acknowledged => "Acknowledged",
    InProgress => "In Progress",
    Completed => "Completed",
});

impl AlertStatus {
    /// The status after one lifecycle step. `Completed` absorbs further
    /// steps, so repeated advancing is safe.
    pub fn advanced(self) -> AlertStatus {
        match self {
            AlertStatus::Unacknowledged => AlertStatus::Acknowledged,
            AlertStatus::Acknowledged => AlertStatus::InProgress,
            AlertStatus::InProgress | AlertStatus::Completed => AlertStatus::Completed,
        }
    }

    /// Button label offered for the next lifecycle step.
    pub fn action_label(self) -> &'static str {
        match self {
            AlertStatus::Unacknowledged => "Acknowledge",
            _ => "Mark Complete",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AlertStatus::Completed
    }
}
