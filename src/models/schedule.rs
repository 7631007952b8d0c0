use serde::{Deserialize, Serialize};

/// Contracted work pattern of an employee, fixed at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Full,
    Half,
}

impl ScheduleKind {
    pub fn sk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(Self::Full),
            "half" => Some(Self::Half),
            _ => None,
        }
    }

    pub fn sk_as_str(&self) -> &'static str {
        match self {
            ScheduleKind::Full => "full",
            ScheduleKind::Half => "half",
        }
    }

    /// Expected daily work duration in hours.
    pub fn expected_hours(&self) -> i64 {
        match self {
            ScheduleKind::Full => 8,
            ScheduleKind::Half => 4,
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleKind::Full => "Full time",
            ScheduleKind::Half => "Half time",
        }
    }
}
