//! Reads Puppet agent state from disk into [`puppetcheck_core`] types.

pub mod conf;
pub mod lock;
pub mod paths;
pub mod summary;

pub use conf::*;
pub use lock::*;
pub use paths::*;
pub use summary::*;

use std::path::Path;

use puppetcheck_core::RunSnapshot;

/// Load everything the evaluator needs for one check.
pub fn load_snapshot(summary_file: &Path, agent_disabled_file: &Path) -> RunSnapshot {
    RunSnapshot {
        summary_source: summary_file.display().to_string(),
        summary: load_summary(summary_file),
        disabled: load_disabled_lock(agent_disabled_file),
    }
}
