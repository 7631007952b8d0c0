//! Whole-state persistence collaborator.
//!
//! The engine treats storage as an all-or-nothing load/save of the full
//! `Tracker`: there are no partial writes or retries here. `load_or_default`
//! implements the fail-soft contract: a malformed or unreadable state file
//! is logged and replaced by an empty state, never a crash.

use crate::core::engine::Tracker;
use crate::errors::{AppError, AppResult};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

pub trait StateStore {
    fn save(&self, state: &Tracker) -> AppResult<()>;
    fn load(&self) -> AppResult<Option<Tracker>>;
}

/// File-backed JSON store. Timestamps serialize as RFC3339, dates as
/// `YYYY-MM-DD`; a missing file is simply "no saved state yet".
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStore {
    fn save(&self, state: &Tracker) -> AppResult<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn load(&self) -> AppResult<Option<Tracker>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| AppError::Persistence(e.to_string()))?;
        let state = serde_json::from_str(&content)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(Some(state))
    }
}

/// Load the tracker, falling back to an empty one on any persistence error.
pub fn load_or_default(store: &dyn StateStore) -> Tracker {
    match store.load() {
        Ok(Some(state)) => state,
        Ok(None) => Tracker::new(),
        Err(e) => {
            warn!("failed to load state, starting empty: {}", e);
            Tracker::new()
        }
    }
}
