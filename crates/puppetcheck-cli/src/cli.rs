use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "check-puppet", version, about = "Sensu checks for the Puppet agent")]
pub struct Cli {
    /// TOML file with [paths], [thresholds] and [flags] defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Age, failures and disabled state of the last agent run
    LastRun {
        #[command(flatten)]
        files: StateFiles,
        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Failures of the last agent run and disabled state
    Errors {
        #[command(flatten)]
        files: StateFiles,
    },

    /// Presence of the last run report
    LastRunReport {
        /// Path to the last run report
        #[arg(long)]
        report_file: Option<PathBuf>,
    },

    /// Fail when puppet.conf pins an `environment`
    Environment {
        /// Path to puppet.conf file
        #[arg(long, short = 'c')]
        config_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct StateFiles {
    /// Path to summary file for puppet runs
    #[arg(long)]
    pub summary_file: Option<PathBuf>,

    /// Path to agent disabled lock file
    #[arg(long, short = 'a')]
    pub agent_disabled_file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct LimitArgs {
    /// Age in seconds to be a warning [default: 3600]
    #[arg(long, short = 'w', value_parser = clap::value_parser!(i64).range(1..))]
    pub warn_age: Option<i64>,

    /// Age in seconds to be a critical [default: 7200]
    #[arg(long, short = 'c', value_parser = clap::value_parser!(i64).range(1..))]
    pub crit_age: Option<i64>,

    /// Age in seconds to warn when agent is disabled [default: 3600]
    #[arg(long, short = 'W', value_parser = clap::value_parser!(i64).range(1..))]
    pub warn_age_disabled: Option<i64>,

    /// Age in seconds to crit when agent is disabled [default: 7200]
    #[arg(long, short = 'C', value_parser = clap::value_parser!(i64).range(1..))]
    pub crit_age_disabled: Option<i64>,

    /// Consider disabled age limits, otherwise use main limits [default: true]
    #[arg(long, short = 'd', action = ArgAction::Set)]
    pub disabled_age_limits: Option<bool>,

    /// Raise alerts if restart failures have happened [default: true]
    #[arg(long, short = 'r', action = ArgAction::Set)]
    pub report_restart_failures: Option<bool>,

    /// Ignore Puppet failures [default: true]
    #[arg(long, short = 'i', action = ArgAction::Set)]
    pub ignore_failures: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_last_run_flags() {
        let cli = Cli::try_parse_from([
            "check-puppet",
            "last-run",
            "-w",
            "60",
            "--crit-age",
            "120",
            "--ignore-failures",
            "false",
            "-a",
            "/tmp/lock",
        ])
        .unwrap();
        match cli.cmd {
            Command::LastRun { files, limits } => {
                assert_eq!(limits.warn_age, Some(60));
                assert_eq!(limits.crit_age, Some(120));
                assert_eq!(limits.ignore_failures, Some(false));
                assert_eq!(limits.disabled_age_limits, None);
                assert_eq!(files.agent_disabled_file, Some(PathBuf::from("/tmp/lock")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive_ages() {
        assert!(Cli::try_parse_from(["check-puppet", "last-run", "--warn-age", "0"]).is_err());
    }

    #[test]
    fn config_is_global() {
        let cli = Cli::try_parse_from(["check-puppet", "environment", "--config", "checks.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("checks.toml")));
        assert!(matches!(cli.cmd, Command::Environment { config_file: None }));
    }
}
