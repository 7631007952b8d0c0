use super::break_interval::BreakInterval;
use super::employee::Employee;
use super::schedule::ScheduleKind;
use crate::errors::{AppError, AppResult};
use crate::utils::time::round_minutes;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A work session still in progress. Employee fields are snapshots taken at
/// clock-in, so renaming an employee never rewrites historical records.
///
/// The legacy pair of fields `onBreak` + `currentBreakStart` collapses into
/// the single `current_break` option: the two can no longer disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenSession {
    pub employee_id: String,
    pub employee_name: String,
    pub schedule: ScheduleKind,
    pub expected_hours: i64,
    pub date: NaiveDate,
    pub clock_in: DateTime<Local>,
    pub breaks: Vec<BreakInterval>,
    pub current_break: Option<DateTime<Local>>,
}

/// A finalized session. Worked/break totals are computed exactly once, at
/// clock-out, and frozen here; redisplaying a closed record is field lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedSession {
    pub employee_id: String,
    pub employee_name: String,
    pub schedule: ScheduleKind,
    pub expected_hours: i64,
    pub date: NaiveDate,
    pub clock_in: DateTime<Local>,
    pub clock_out: DateTime<Local>,
    pub breaks: Vec<BreakInterval>,
    pub worked_minutes: i64,
    pub break_minutes: i64,
}

impl OpenSession {
    pub fn start(employee: &Employee, now: DateTime<Local>) -> Self {
        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            schedule: employee.schedule,
            expected_hours: employee.expected_hours(),
            date: now.date_naive(),
            clock_in: now,
            breaks: Vec::new(),
            current_break: None,
        }
    }

    pub fn on_break(&self) -> bool {
        self.current_break.is_some()
    }

    /// Sum of all completed break intervals, in milliseconds. Used by both
    /// the live projection and finalization so the two never diverge.
    pub fn break_time_ms(&self) -> i64 {
        self.breaks.iter().map(BreakInterval::duration_ms).sum()
    }

    /// Open a break at `now`. A break cannot begin before the session did or
    /// inside a previous break, so the intervals stay chronological and
    /// disjoint within the session span.
    pub fn start_break(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if let Some(since) = self.current_break {
            return Err(AppError::AlreadyOnBreak(since));
        }
        let floor = self.breaks.last().map(|b| b.end).unwrap_or(self.clock_in);
        if now < floor {
            return Err(AppError::InvalidTimeRange { start: floor, end: now });
        }
        self.current_break = Some(now);
        Ok(())
    }

    /// Close the running break, appending a completed interval. Rejects a
    /// `now` earlier than the break start without touching the session.
    pub fn end_break(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let since = self.current_break.ok_or(AppError::NotOnBreak)?;
        let interval = BreakInterval::new(since, now)?;
        self.breaks.push(interval);
        self.current_break = None;
        Ok(())
    }

    /// Compute the finalized form of this session without mutating it, so a
    /// failed validation leaves the open session untouched. A break still
    /// running is implicitly ended at `now` and counted as break time.
    pub fn finalized(&self, now: DateTime<Local>) -> AppResult<ClosedSession> {
        if now < self.clock_in {
            return Err(AppError::InvalidTimeRange {
                start: self.clock_in,
                end: now,
            });
        }
        // Closing before the last completed break ended would count more
        // break time than wall-clock span and store negative worked time.
        if let Some(last) = self.breaks.last() {
            if now < last.end {
                return Err(AppError::InvalidTimeRange {
                    start: last.end,
                    end: now,
                });
            }
        }

        let mut breaks = self.breaks.clone();
        if let Some(since) = self.current_break {
            breaks.push(BreakInterval::new(since, now)?);
        }

        let total_ms = (now - self.clock_in).num_milliseconds();
        let break_ms: i64 = breaks.iter().map(BreakInterval::duration_ms).sum();
        let worked_ms = total_ms - break_ms;

        Ok(ClosedSession {
            employee_id: self.employee_id.clone(),
            employee_name: self.employee_name.clone(),
            schedule: self.schedule,
            expected_hours: self.expected_hours,
            date: self.date,
            clock_in: self.clock_in,
            clock_out: now,
            breaks,
            worked_minutes: round_minutes(worked_ms),
            break_minutes: round_minutes(break_ms),
        })
    }

    /// Live worked-time projection in milliseconds: wall-clock span minus
    /// completed breaks, minus the running break if any. Recomputed on every
    /// query and never persisted.
    pub fn project_elapsed_ms(&self, now: DateTime<Local>) -> i64 {
        let mut elapsed = (now - self.clock_in).num_milliseconds() - self.break_time_ms();
        if let Some(since) = self.current_break {
            elapsed -= (now - since).num_milliseconds();
        }
        elapsed
    }
}

/// History element: a finalized session, or an open one parked there while
/// its employee is not the selected one (recovery/reconstitution path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionRecord {
    Open(OpenSession),
    Closed(ClosedSession),
}

impl SessionRecord {
    pub fn employee_id(&self) -> &str {
        match self {
            SessionRecord::Open(s) => &s.employee_id,
            SessionRecord::Closed(s) => &s.employee_id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            SessionRecord::Open(s) => s.date,
            SessionRecord::Closed(s) => s.date,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SessionRecord::Open(_))
    }

    pub fn as_closed(&self) -> Option<&ClosedSession> {
        match self {
            SessionRecord::Closed(s) => Some(s),
            SessionRecord::Open(_) => None,
        }
    }
}
