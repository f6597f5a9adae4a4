use crate::{Severity, Verdict};

/// Whether a file exists, as seen by a stat/open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presence {
    Present,
    NotFound,
    Unreadable(String),
}

/// Contents of puppet.conf, or why there are none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfScan {
    Lines(Vec<String>),
    NotFound,
    Unreadable(String),
}

pub fn evaluate_report_presence(path: &str, presence: &Presence) -> Verdict {
    match presence {
        Presence::Present => Verdict::single(Severity::Ok, format!("Puppet last run report {} present", path)),
        Presence::NotFound => Verdict::single(Severity::Critical, format!("File {} not found", path)),
        Presence::Unreadable(cause) => {
            Verdict::single(Severity::Critical, format!("Error accessing {}: {}", path, cause))
        }
    }
}

/// True for INI lines of the form `environment = ...`, leading whitespace allowed.
pub fn is_environment_assignment(line: &str) -> bool {
    line.trim_start()
        .strip_prefix("environment")
        .map(|rest| rest.trim_start().starts_with('='))
        .unwrap_or(false)
}

/// An agent pinned to an environment in puppet.conf ignores the one
/// assigned by the server, so any such key is critical.
pub fn evaluate_environment(path: &str, scan: &ConfScan) -> Verdict {
    match scan {
        ConfScan::NotFound => {
            Verdict::single(Severity::Ok, format!("OK: File {} not found, skipping check", path))
        }
        ConfScan::Unreadable(cause) => {
            Verdict::single(Severity::Critical, format!("Could not open {}: {}", path, cause))
        }
        ConfScan::Lines(lines) => {
            if lines.iter().any(|l| is_environment_assignment(l)) {
                Verdict::single(Severity::Critical, format!("Critical: 'environment' key found in {}", path))
            } else {
                Verdict::single(Severity::Ok, format!("OK: No 'environment' key found in {}", path))
            }
        }
    }
}
