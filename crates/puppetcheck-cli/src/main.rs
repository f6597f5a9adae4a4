mod cli;
mod settings;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use puppetcheck_core::{evaluate, evaluate_environment, evaluate_report_presence, EvaluationConfig, Severity, Verdict};
use puppetcheck_state::{file_presence, load_snapshot, scan_puppet_conf, DefaultPaths};

use cli::{Cli, Command};
use settings::FileConfig;

fn main() {
    // stdout carries the check output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let verdict = match run(cli) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "check could not run");
            Verdict::single(Severity::Critical, format!("CRITICAL: {:#}", e))
        }
    };

    for line in &verdict.messages {
        println!("{}", line);
    }
    std::process::exit(verdict.exit_code());
}

fn run(cli: Cli) -> anyhow::Result<Verdict> {
    let file = FileConfig::load_optional(cli.config.as_deref())?;
    let paths = file.paths(DefaultPaths::for_platform());

    let verdict = match cli.cmd {
        Command::LastRun { files, limits } => {
            let config = file.evaluation_config(&limits)?;
            let (summary, lock) = files.resolve(&paths);
            debug!(summary = %summary.display(), lock = %lock.display(), ?config, "last-run check");
            evaluate(&load_snapshot(&summary, &lock), &config)
        }
        Command::Errors { files } => {
            let (summary, lock) = files.resolve(&paths);
            debug!(summary = %summary.display(), lock = %lock.display(), "errors check");
            evaluate(&load_snapshot(&summary, &lock), &EvaluationConfig::errors_only())
        }
        Command::LastRunReport { report_file } => {
            let path = report_file.unwrap_or(paths.report_file);
            evaluate_report_presence(&path.display().to_string(), &file_presence(&path))
        }
        Command::Environment { config_file } => {
            let path = config_file.unwrap_or(paths.puppet_config_file);
            evaluate_environment(&path.display().to_string(), &scan_puppet_conf(&path))
        }
    };

    debug!(severity = %verdict.severity, "check finished");
    Ok(verdict)
}
