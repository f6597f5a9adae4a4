use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds since UNIX epoch.
pub type EpochSecs = i64;

/// Why a file that exists could not be turned into data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("could not read {path}: {cause}")]
    Unreadable { path: String, cause: String },
    #[error("could not parse {path}: {cause}")]
    Malformed { path: String, cause: String },
}

impl LoadError {
    pub fn cause(&self) -> &str {
        match self {
            LoadError::Unreadable { cause, .. } | LoadError::Malformed { cause, .. } => cause,
        }
    }
}

/// Counters from Puppet's last run summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Events by outcome (`failure`, `success`, `total`, ...).
    pub events: BTreeMap<String, i64>,
    /// Timings; `last_run` is Unix seconds.
    pub time: BTreeMap<String, i64>,
    /// Resources by outcome. Only `failed_to_restart` is evaluated.
    pub resources: BTreeMap<String, i64>,
}

impl RunSummary {
    pub fn last_run(&self) -> Option<EpochSecs> {
        self.time.get("last_run").copied()
    }

    pub fn failures(&self) -> Option<i64> {
        self.events.get("failure").copied()
    }

    pub fn restart_failures(&self) -> Option<i64> {
        self.resources.get("failed_to_restart").copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryLoad {
    Loaded(RunSummary),
    /// Expected before the agent has ever run.
    NotFound,
    Failed(LoadError),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledLock {
    pub reason: String,
    pub locked_at: Option<EpochSecs>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisabledLoad {
    NotDisabled,
    Disabled(DisabledLock),
    Failed(LoadError),
}

/// Read-only view of the agent state for one evaluation.
/// The loader produces it; the engine never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSnapshot {
    /// Summary location as shown in messages.
    pub summary_source: String,
    pub summary: SummaryLoad,
    pub disabled: DisabledLoad,
}

impl RunSnapshot {
    pub fn summary_present(&self) -> bool {
        matches!(self.summary, SummaryLoad::Loaded(_))
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.summary {
            SummaryLoad::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn disabled_reason(&self) -> Option<&str> {
        match &self.disabled {
            DisabledLoad::Disabled(lock) => Some(lock.reason.as_str()),
            _ => None,
        }
    }

    pub fn disabled_lock_load_error(&self) -> Option<&LoadError> {
        match &self.disabled {
            DisabledLoad::Failed(err) => Some(err),
            _ => None,
        }
    }
}
