//! Ordered store of past sessions, most-recent-first.
//!
//! Closed records are the normal content. An open record appears only while
//! its session is parked (its employee is not the selected one, or the
//! process was interrupted); it is removed again on reconstitution and never
//! shows up in the grouped history.

use crate::models::session::{ClosedSession, OpenSession, SessionRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct History {
    records: Vec<SessionRecord>,
}

impl History {
    /// Prepend a finalized session.
    pub fn append_closed(&mut self, session: ClosedSession) {
        self.records.insert(0, SessionRecord::Closed(session));
    }

    /// Prepend a still-open session that is being detached from active state.
    pub fn park_open(&mut self, session: OpenSession) {
        self.records.insert(0, SessionRecord::Open(session));
    }

    /// Find and remove the at-most-one open record for an employee and date,
    /// handing it back so it can become the active session again.
    pub fn take_open_session(&mut self, employee_id: &str, date: NaiveDate) -> Option<OpenSession> {
        let idx = self
            .records
            .iter()
            .position(|r| r.is_open() && r.employee_id() == employee_id && r.date() == date)?;
        match self.records.remove(idx) {
            SessionRecord::Open(s) => Some(s),
            SessionRecord::Closed(_) => unreachable!("position matched an open record"),
        }
    }

    /// Find and remove an open record for the employee regardless of date.
    /// Fallback on selection: a session parked on an earlier date must still
    /// be resumable, otherwise nothing could ever finalize it.
    pub fn take_open_any(&mut self, employee_id: &str) -> Option<OpenSession> {
        let idx = self
            .records
            .iter()
            .position(|r| r.is_open() && r.employee_id() == employee_id)?;
        match self.records.remove(idx) {
            SessionRecord::Open(s) => Some(s),
            SessionRecord::Closed(_) => unreachable!("position matched an open record"),
        }
    }

    /// Any open record for the employee, regardless of date. Used to enforce
    /// the one-open-session-per-employee invariant at clock-in.
    pub fn find_open_any(&self, employee_id: &str) -> Option<&OpenSession> {
        self.records.iter().find_map(|r| match r {
            SessionRecord::Open(s) if s.employee_id == employee_id => Some(s),
            _ => None,
        })
    }

    /// Finalized sessions for one employee on one date, for the daily summary.
    pub fn closed_for(&self, employee_id: &str, date: NaiveDate) -> Vec<&ClosedSession> {
        self.records
            .iter()
            .filter_map(SessionRecord::as_closed)
            .filter(|s| s.employee_id == employee_id && s.date == date)
            .collect()
    }

    /// Partition all closed records by date key, most recent date first.
    /// Open records are excluded so an active session is never double-counted.
    pub fn group_by_date(&self) -> Vec<(NaiveDate, Vec<&ClosedSession>)> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&ClosedSession>> = BTreeMap::new();
        for s in self.records.iter().filter_map(SessionRecord::as_closed) {
            grouped.entry(s.date).or_default().push(s);
        }
        grouped.into_iter().rev().collect()
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
