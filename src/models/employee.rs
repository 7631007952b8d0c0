use super::schedule::ScheduleKind;
use serde::{Deserialize, Serialize};

/// Roster entry. Immutable once registered: historical sessions carry their
/// own snapshots of name and schedule, so there are no update operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub schedule: ScheduleKind,
}

impl Employee {
    pub fn new(id: String, name: String, schedule: ScheduleKind) -> Self {
        Self { id, name, schedule }
    }

    pub fn expected_hours(&self) -> i64 {
        self.schedule.expected_hours()
    }
}
