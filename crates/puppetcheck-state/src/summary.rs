use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use puppetcheck_core::{LoadError, RunSummary, SummaryLoad};

/// Puppet writes timings as floats; counts are always integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
}

/// A timing truncated to whole seconds.
#[derive(Deserialize)]
#[serde(try_from = "Number")]
struct Seconds(i64);

impl TryFrom<Number> for Seconds {
    type Error = String;

    fn try_from(n: Number) -> Result<Self, Self::Error> {
        match n {
            Number::Int(n) => Ok(Seconds(n)),
            // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
            Number::Float(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(Seconds(f as i64))
            }
            Number::Float(f) => Err(format!("timing {} is out of range", f)),
        }
    }
}

#[derive(Deserialize)]
struct SummaryDoc {
    #[serde(default)]
    events: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    time: Option<BTreeMap<String, Seconds>>,
    #[serde(default)]
    resources: Option<BTreeMap<String, i64>>,
}

pub fn parse_summary(s: &str) -> Result<RunSummary, serde_yaml::Error> {
    if s.trim().is_empty() {
        return Ok(RunSummary::default());
    }
    let doc: SummaryDoc = serde_yaml::from_str(s)?;
    Ok(RunSummary {
        events: doc.events.unwrap_or_default(),
        time: doc
            .time
            .unwrap_or_default()
            .into_iter()
            .map(|(k, Seconds(v))| (k, v))
            .collect(),
        resources: doc.resources.unwrap_or_default(),
    })
}

/// Read `last_run_summary.yaml`. A missing file is reported as
/// [`SummaryLoad::NotFound`], never as an error.
pub fn load_summary(path: &Path) -> SummaryLoad {
    let s = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "run summary not found");
            return SummaryLoad::NotFound;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "run summary unreadable");
            return SummaryLoad::Failed(LoadError::Unreadable {
                path: path.display().to_string(),
                cause: e.to_string(),
            });
        }
    };

    match parse_summary(&s) {
        Ok(summary) => {
            debug!(path = %path.display(), ?summary, "loaded run summary");
            SummaryLoad::Loaded(summary)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "run summary malformed");
            SummaryLoad::Failed(LoadError::Malformed {
                path: path.display().to_string(),
                cause: e.to_string(),
            })
        }
    }
}
