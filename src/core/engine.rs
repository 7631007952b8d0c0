//! Session time-accounting engine.
//!
//! `Tracker` is the owned context object holding the roster, the selected
//! employee, the at-most-one active session and the history store. It is
//! pure logic: every lifecycle command takes `now` explicitly and performs no
//! I/O, so independent trackers can run side by side (and under test with
//! fixed clocks). Serializing a `Tracker` captures the whole persisted state.

use crate::core::history::History;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::schedule::ScheduleKind;
use crate::models::session::{ClosedSession, OpenSession};
use chrono::{DateTime, Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

/// Observable lifecycle state for the selected employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Working,
    OnBreak,
}

impl TrackerState {
    pub fn label(&self) -> &'static str {
        match self {
            TrackerState::Idle => "Idle",
            TrackerState::Working => "Working",
            TrackerState::OnBreak => "OnBreak",
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Tracker {
    pub employees: Vec<Employee>,
    pub current_employee: Option<String>,
    pub current_session: Option<OpenSession>,
    pub history: History,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------
    // Roster
    // ---------------------------

    /// Register a new employee and select it, mirroring the auto-select the
    /// registration form performs.
    pub fn register_employee(&mut self, name: &str, schedule: ScheduleKind) -> AppResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyEmployeeName);
        }

        let employee = Employee::new(self.next_employee_id(), name.to_string(), schedule);
        debug!("registered employee {} ({})", employee.name, employee.id);
        self.employees.push(employee.clone());

        // Auto-selecting the new employee must not drop a session open for
        // the previously selected one.
        if let Some(session) = self.current_session.take() {
            self.history.park_open(session);
        }
        self.current_employee = Some(employee.id.clone());
        Ok(employee)
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.current_employee.as_deref().and_then(|id| self.employee(id))
    }

    /// Switch the selected employee. An open session of the previously
    /// selected employee is parked into history (not dropped), and an open
    /// session of the new employee for `today` is reconstituted if present.
    pub fn select_employee(&mut self, id: &str, today: NaiveDate) -> AppResult<()> {
        if self.employee(id).is_none() {
            return Err(AppError::UnknownEmployee(id.to_string()));
        }

        if let Some(session) = self.current_session.take() {
            if session.employee_id == id {
                self.current_session = Some(session);
            } else {
                debug!("parking open session of employee {}", session.employee_id);
                self.history.park_open(session);
            }
        }

        self.current_employee = Some(id.to_string());
        self.resume(today);
        Ok(())
    }

    /// Recover a previously-open session for the selected employee from
    /// history back into active state, preferring today's record but falling
    /// back to one parked on an earlier date (which keeps its original date
    /// key and can then be finalized). Invoked after every load and after
    /// employee selection; a no-op when a session is already active.
    pub fn resume(&mut self, today: NaiveDate) {
        if self.current_session.is_some() {
            return;
        }
        if let Some(id) = self.current_employee.clone() {
            let open = self
                .history
                .take_open_session(&id, today)
                .or_else(|| self.history.take_open_any(&id));
            if let Some(open) = open {
                debug!("reconstituted open session of {} from {}", id, open.date);
                self.current_session = Some(open);
            }
        }
    }

    // ---------------------------
    // Lifecycle commands
    // ---------------------------

    pub fn clock_in(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let employee = self
            .selected_employee()
            .ok_or(AppError::NoEmployeeSelected)?
            .clone();

        if let Some(session) = &self.current_session {
            return Err(AppError::SessionAlreadyOpen(session.clock_in));
        }
        // A parked open session counts too: one open session per employee.
        if let Some(parked) = self.history.find_open_any(&employee.id) {
            return Err(AppError::SessionAlreadyOpen(parked.clock_in));
        }

        debug!("clock-in {} at {}", employee.name, now);
        self.current_session = Some(OpenSession::start(&employee, now));
        Ok(())
    }

    pub fn start_break(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let session = self.current_session.as_mut().ok_or(AppError::NoActiveSession)?;
        session.start_break(now)?;
        debug!("break started at {}", now);
        Ok(())
    }

    pub fn end_break(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let session = self.current_session.as_mut().ok_or(AppError::NoActiveSession)?;
        session.end_break(now)?;
        debug!("break ended at {}", now);
        Ok(())
    }

    /// Finalize the active session and append it to history. A running break
    /// is implicitly ended at `now` first. On validation failure the session
    /// stays open and unchanged.
    pub fn clock_out(&mut self, now: DateTime<Local>) -> AppResult<ClosedSession> {
        let session = self.current_session.as_ref().ok_or(AppError::NoActiveSession)?;
        let closed = session.finalized(now)?;

        debug!(
            "clock-out {} at {}: worked {} min, break {} min",
            closed.employee_name, now, closed.worked_minutes, closed.break_minutes
        );
        self.history.append_closed(closed.clone());
        self.current_session = None;
        Ok(closed)
    }

    // ---------------------------
    // Read-only projections
    // ---------------------------

    pub fn state(&self) -> TrackerState {
        match &self.current_session {
            None => TrackerState::Idle,
            Some(s) if s.on_break() => TrackerState::OnBreak,
            Some(_) => TrackerState::Working,
        }
    }

    /// Live worked-time in milliseconds, zero when idle.
    pub fn project_elapsed_ms(&self, now: DateTime<Local>) -> i64 {
        self.current_session
            .as_ref()
            .map(|s| s.project_elapsed_ms(now))
            .unwrap_or(0)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    /// Opaque id from the epoch-millisecond clock, bumped until unique.
    fn next_employee_id(&self) -> String {
        let mut candidate = Local::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !self.employees.iter().any(|e| e.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}
