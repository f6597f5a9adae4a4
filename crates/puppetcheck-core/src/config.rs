use serde::{Deserialize, Serialize};

pub const DEFAULT_WARNING_AGE_SECS: i64 = 3600;
pub const DEFAULT_CRITICAL_AGE_SECS: i64 = 7200;

/// Pair of age thresholds in seconds. An age strictly greater than a
/// threshold crosses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeLimits {
    pub warning_secs: i64,
    pub critical_secs: i64,
}

/// Immutable per-invocation settings for [`crate::evaluate`].
///
/// `critical >= warning` is expected but not enforced; with inverted
/// limits the critical comparison still runs first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub warning_age_secs: i64,
    pub critical_age_secs: i64,
    pub warning_age_disabled_secs: i64,
    pub critical_age_disabled_secs: i64,
    /// Use the `*_disabled_secs` pair while the agent lock is present.
    pub use_disabled_age_limits: bool,
    pub ignore_failures: bool,
    /// Escalate on `resources.failed_to_restart`. Has no effect while
    /// failures are ignored.
    pub report_restart_failures: bool,
    pub check_age: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            warning_age_secs: DEFAULT_WARNING_AGE_SECS,
            critical_age_secs: DEFAULT_CRITICAL_AGE_SECS,
            warning_age_disabled_secs: DEFAULT_WARNING_AGE_SECS,
            critical_age_disabled_secs: DEFAULT_CRITICAL_AGE_SECS,
            use_disabled_age_limits: true,
            ignore_failures: true,
            report_restart_failures: true,
            check_age: true,
        }
    }
}

impl EvaluationConfig {
    /// Settings for the errors check: lock and failure counts only.
    pub fn errors_only() -> Self {
        Self {
            ignore_failures: false,
            report_restart_failures: false,
            check_age: false,
            ..Self::default()
        }
    }

    pub fn age_limits(&self, disabled: bool) -> AgeLimits {
        if disabled && self.use_disabled_age_limits {
            AgeLimits {
                warning_secs: self.warning_age_disabled_secs,
                critical_secs: self.critical_age_disabled_secs,
            }
        } else {
            AgeLimits {
                warning_secs: self.warning_age_secs,
                critical_secs: self.critical_age_secs,
            }
        }
    }
}
