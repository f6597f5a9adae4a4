use serde::{Deserialize, Serialize};

/// Monitoring-plugin severity. Variant order is the escalation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Process exit status expected by the monitoring agent.
    pub fn code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result of one check: a severity plus the lines to print, in the
/// order the rules produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub severity: Severity,
    pub messages: Vec<String>,
}

impl Verdict {
    pub fn new(severity: Severity, messages: Vec<String>) -> Self {
        Self { severity, messages }
    }

    pub fn single(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity, vec![message.into()])
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.code()
    }
}
