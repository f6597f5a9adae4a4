use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::{
    format_duration, AgeLimits, DisabledLoad, EpochSecs, EvaluationConfig, LoadError, RunSnapshot,
    RunSummary, Severity, SummaryLoad, Verdict,
};

pub fn now_unix() -> EpochSecs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Evaluate a snapshot against the wall clock, sampled once.
pub fn evaluate(snapshot: &RunSnapshot, config: &EvaluationConfig) -> Verdict {
    evaluate_at(snapshot, config, now_unix())
}

/// Rules, in order:
/// 1. summary missing -> OK and stop; summary unreadable/malformed -> CRITICAL and stop
/// 2. lock unreadable/malformed -> CRITICAL and stop; lock present -> CRITICAL, switch limits
/// 3. age of `time.last_run` against the active limits (skipped when absent)
/// 4. failure and restart-failure counts unless failures are ignored
///
/// Severity only ever rises; the verdict takes the highest one reached.
pub fn evaluate_at(snapshot: &RunSnapshot, config: &EvaluationConfig, now: EpochSecs) -> Verdict {
    let source = snapshot.summary_source.as_str();

    let summary = match &snapshot.summary {
        SummaryLoad::Loaded(summary) => summary,
        SummaryLoad::NotFound => {
            return Verdict::single(Severity::Ok, format!("File {} not found, skipping check", source));
        }
        SummaryLoad::Failed(err) => {
            return Verdict::single(Severity::Critical, format!("Could not process {}: {}", source, err.cause()));
        }
    };

    let mut tally = Tally::default();

    let disabled = match &snapshot.disabled {
        DisabledLoad::NotDisabled => false,
        DisabledLoad::Failed(err @ LoadError::Unreadable { .. }) => {
            return Verdict::single(Severity::Critical, format!("Error reading agent lockfile: {}", err.cause()));
        }
        DisabledLoad::Failed(err @ LoadError::Malformed { .. }) => {
            return Verdict::single(Severity::Critical, format!("Error parsing JSON: {}", err.cause()));
        }
        DisabledLoad::Disabled(lock) => {
            tally.raise(Severity::Critical, format!("Lockfile exists. Disabled reason: {}", lock.reason));
            if let Some(locked_for) = lock.locked_at.and_then(|at| now.checked_sub(at)) {
                tally.raise(
                    Severity::Critical,
                    format!("Agent disabled for {}", format_duration(locked_for.max(0))),
                );
            }
            true
        }
    };

    if config.check_age {
        check_age(summary, config.age_limits(disabled), now, &mut tally);
    }

    if config.ignore_failures {
        debug!("failure counts ignored");
    } else {
        check_failures(summary, source, config.report_restart_failures, &mut tally);
    }

    tally.finish(source)
}

fn check_age(summary: &RunSummary, limits: AgeLimits, now: EpochSecs, tally: &mut Tally) {
    let Some(last_run) = summary.last_run() else {
        debug!("summary has no time.last_run, skipping age check");
        return;
    };

    let Some(age) = now.checked_sub(last_run) else {
        tally.raise(Severity::Critical, format!("Puppet last_run {} out of range", last_run));
        return;
    };
    // A last_run ahead of now counts as a run just now.
    let age = age.max(0);
    debug!(age, ?limits, "evaluating last run age");
    if age > limits.critical_secs {
        tally.raise(
            Severity::Critical,
            format!(
                "Puppet last run {} ago (critical after {})",
                format_duration(age),
                format_duration(limits.critical_secs)
            ),
        );
    } else if age > limits.warning_secs {
        tally.raise(
            Severity::Warning,
            format!(
                "Puppet last run {} ago (warning after {})",
                format_duration(age),
                format_duration(limits.warning_secs)
            ),
        );
    } else {
        tally.raise(Severity::Ok, format!("Puppet last run {} ago, OK", format_duration(age)));
    }
}

fn check_failures(summary: &RunSummary, source: &str, report_restart_failures: bool, tally: &mut Tally) {
    match summary.failures() {
        None => tally.raise(
            Severity::Critical,
            format!("{} is missing information about the events", source),
        ),
        Some(failures) if failures > 0 => tally.raise(
            Severity::Critical,
            format!("Puppet last run with {} failures", failures),
        ),
        Some(failures) => tally.raise(Severity::Ok, format!("Failures: {}", failures)),
    }

    if !report_restart_failures {
        return;
    }
    if let Some(restarts) = summary.restart_failures().filter(|n| *n > 0) {
        tally.raise(
            Severity::Critical,
            format!("Puppet last run with {} restart failures", restarts),
        );
    }
}

/// Running severity plus the messages in firing order.
#[derive(Default)]
struct Tally {
    severity: Option<Severity>,
    messages: Vec<String>,
}

impl Tally {
    fn raise(&mut self, severity: Severity, message: String) {
        self.severity = Some(self.severity.map_or(severity, |current| current.max(severity)));
        self.messages.push(message);
    }

    fn finish(self, source: &str) -> Verdict {
        match self.severity {
            Some(severity) => Verdict::new(severity, self.messages),
            None => {
                let mut messages = self.messages;
                messages.push(format!("Unable to determine Puppet health from {}", source));
                Verdict::new(Severity::Unknown, messages)
            }
        }
    }
}
