use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use puppetcheck_core::EvaluationConfig;
use puppetcheck_state::DefaultPaths;

use crate::cli::{LimitArgs, StateFiles};

/// Optional TOML defaults. Command-line flags win over anything here.
///
/// ```toml
/// [paths]
/// summary_file = "/opt/puppetlabs/puppet/public/last_run_summary.yaml"
///
/// [thresholds]
/// warn_age = 3600
/// crit_age = 7200
///
/// [flags]
/// ignore_failures = false
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub paths: PathsSection,
    pub thresholds: ThresholdsSection,
    pub flags: FlagsSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    pub summary_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub agent_disabled_file: Option<PathBuf>,
    pub puppet_config_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsSection {
    pub warn_age: Option<i64>,
    pub crit_age: Option<i64>,
    pub warn_age_disabled: Option<i64>,
    pub crit_age_disabled: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagsSection {
    pub disabled_age_limits: Option<bool>,
    pub report_restart_failures: Option<bool>,
    pub ignore_failures: Option<bool>,
}

impl FileConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: FileConfig = toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }

    /// Platform defaults with the `[paths]` overrides applied.
    pub fn paths(&self, defaults: DefaultPaths) -> DefaultPaths {
        let p = &self.paths;
        DefaultPaths {
            summary_file: p.summary_file.clone().unwrap_or(defaults.summary_file),
            report_file: p.report_file.clone().unwrap_or(defaults.report_file),
            agent_disabled_file: p.agent_disabled_file.clone().unwrap_or(defaults.agent_disabled_file),
            puppet_config_file: p.puppet_config_file.clone().unwrap_or(defaults.puppet_config_file),
        }
    }

    pub fn evaluation_config(&self, args: &LimitArgs) -> Result<EvaluationConfig> {
        let base = EvaluationConfig::default();
        let t = &self.thresholds;
        let f = &self.flags;
        let cfg = EvaluationConfig {
            warning_age_secs: args.warn_age.or(t.warn_age).unwrap_or(base.warning_age_secs),
            critical_age_secs: args.crit_age.or(t.crit_age).unwrap_or(base.critical_age_secs),
            warning_age_disabled_secs: args
                .warn_age_disabled
                .or(t.warn_age_disabled)
                .unwrap_or(base.warning_age_disabled_secs),
            critical_age_disabled_secs: args
                .crit_age_disabled
                .or(t.crit_age_disabled)
                .unwrap_or(base.critical_age_disabled_secs),
            use_disabled_age_limits: args
                .disabled_age_limits
                .or(f.disabled_age_limits)
                .unwrap_or(base.use_disabled_age_limits),
            ignore_failures: args.ignore_failures.or(f.ignore_failures).unwrap_or(base.ignore_failures),
            report_restart_failures: args
                .report_restart_failures
                .or(f.report_restart_failures)
                .unwrap_or(base.report_restart_failures),
            check_age: true,
        };

        let ages = [
            ("warn_age", cfg.warning_age_secs),
            ("crit_age", cfg.critical_age_secs),
            ("warn_age_disabled", cfg.warning_age_disabled_secs),
            ("crit_age_disabled", cfg.critical_age_disabled_secs),
        ];
        if let Some((name, value)) = ages.iter().find(|(_, v)| *v <= 0) {
            return Err(anyhow!("{} must be a positive number of seconds, got {}", name, value));
        }
        Ok(cfg)
    }
}

impl StateFiles {
    /// (summary, disabled lock) with flag > file > platform precedence already applied to `paths`.
    pub fn resolve(&self, paths: &DefaultPaths) -> (PathBuf, PathBuf) {
        (
            self.summary_file.clone().unwrap_or_else(|| paths.summary_file.clone()),
            self.agent_disabled_file.clone().unwrap_or_else(|| paths.agent_disabled_file.clone()),
        )
    }
}
