//! Unified application error type.
//! All modules (core, store, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::{DateTime, Local};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Engine preconditions
    // ---------------------------
    #[error("No employee selected")]
    NoEmployeeSelected,

    #[error("A session is already open (clocked in at {0})")]
    SessionAlreadyOpen(DateTime<Local>),

    #[error("No active session")]
    NoActiveSession,

    #[error("Already on break (since {0})")]
    AlreadyOnBreak(DateTime<Local>),

    #[error("Not on break")]
    NotOnBreak,

    // ---------------------------
    // Time validation
    // ---------------------------
    #[error("Invalid time range: end {end} precedes start {start}")]
    InvalidTimeRange {
        start: DateTime<Local>,
        end: DateTime<Local>,
    },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Employee name must not be empty")]
    EmptyEmployeeName,

    #[error("Invalid schedule kind: {0} (use 'full' or 'half')")]
    InvalidSchedule(String),

    // ---------------------------
    // Persistence errors
    // ---------------------------
    #[error("Persistence unavailable: {0}")]
    Persistence(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
