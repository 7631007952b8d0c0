//! Command handlers plus the load/act/persist plumbing they share.

pub mod brk;
pub mod clock;
pub mod config;
pub mod employee;
pub mod history;
pub mod init;
pub mod status;
pub mod today;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::engine::Tracker;
use crate::errors::{AppError, AppResult};
use crate::store::{self, JsonStore, StateStore};
use crate::ui::messages;
use crate::utils::date;
use chrono::{DateTime, Local};

/// Resolve the state store from the CLI override or the config file.
pub fn store_for(cli: &Cli, cfg: &Config) -> JsonStore {
    let path = cli.state.clone().unwrap_or_else(|| cfg.state_file.clone());
    JsonStore::new(path)
}

/// Load the tracker (fail-soft) and re-attach any open session persisted for
/// the selected employee and today.
pub fn load_tracker(store: &JsonStore) -> Tracker {
    let mut tracker = store::load_or_default(store);
    tracker.resume(date::today());
    tracker
}

/// Save, degrading to in-memory-only operation with a warning on failure.
pub fn persist(store: &JsonStore, tracker: &Tracker) {
    if let Err(e) = store.save(tracker) {
        messages::warning(format!(
            "Could not save state to {}, changes are lost when this run ends: {}",
            store.path().display(),
            e
        ));
    }
}

/// Event timestamp: the hidden `--at` override (RFC3339) or the wall clock.
pub fn resolve_now(at: &Option<String>) -> AppResult<DateTime<Local>> {
    match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Local))
            .map_err(|_| AppError::InvalidTimestamp(s.clone())),
        None => Ok(Local::now()),
    }
}
