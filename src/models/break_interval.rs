use crate::errors::{AppError, AppResult};
use crate::utils::time::round_minutes;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A completed rest period inside a session. Created when a break ends and
/// immutable afterwards; `minutes` is rounded once here and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakInterval {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub minutes: i64,
}

impl BreakInterval {
    /// Build a completed break. Rejects `end < start` instead of storing a
    /// negative duration (clock skew must not reach persisted state).
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidTimeRange { start, end });
        }
        let ms = (end - start).num_milliseconds();
        Ok(Self {
            start,
            end,
            minutes: round_minutes(ms),
        })
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
