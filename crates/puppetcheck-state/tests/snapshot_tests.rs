use puppetcheck_core::{evaluate_at, now_unix, EvaluationConfig, Severity};
use puppetcheck_state::load_snapshot;
use tempfile::tempdir;

fn summary_yaml(last_run: i64, failures: i64) -> String {
    format!(
        "resources:\n  failed_to_restart: 0\n  total: 10\ntime:\n  total: 3.2\n  last_run: {}\nevents:\n  failure: {}\n  success: 2\n",
        last_run, failures
    )
}

fn watching_failures() -> EvaluationConfig {
    EvaluationConfig { ignore_failures: false, ..EvaluationConfig::default() }
}

#[test]
fn healthy_agent() {
    let dir = tempdir().unwrap();
    let now = now_unix();
    let summary = dir.path().join("last_run_summary.yaml");
    std::fs::write(&summary, summary_yaml(now - 100, 0)).unwrap();

    let snap = load_snapshot(&summary, &dir.path().join("agent_disabled.lock"));
    assert!(snap.summary_present());
    assert_eq!(snap.disabled_reason(), None);

    let v = evaluate_at(&snap, &watching_failures(), now);
    assert_eq!(v.severity, Severity::Ok);
    assert_eq!(v.messages, vec!["Puppet last run 0h 1m ago, OK".to_string(), "Failures: 0".to_string()]);
}

#[test]
fn disabled_agent_reports_reason() {
    let dir = tempdir().unwrap();
    let now = now_unix();
    let summary = dir.path().join("last_run_summary.yaml");
    let lock = dir.path().join("agent_disabled.lock");
    std::fs::write(&summary, summary_yaml(now - 10, 0)).unwrap();
    std::fs::write(&lock, r#"{"disabled_message":"maintenance"}"#).unwrap();

    let snap = load_snapshot(&summary, &lock);
    assert_eq!(snap.disabled_reason(), Some("maintenance"));

    let v = evaluate_at(&snap, &watching_failures(), now);
    assert_eq!(v.severity, Severity::Critical);
    assert_eq!(v.messages[0], "Lockfile exists. Disabled reason: maintenance");
}

#[test]
fn missing_summary_is_skipped() {
    let dir = tempdir().unwrap();
    let summary = dir.path().join("last_run_summary.yaml");
    let snap = load_snapshot(&summary, &dir.path().join("agent_disabled.lock"));
    assert!(!snap.summary_present());
    assert!(snap.load_error().is_none());

    let v = evaluate_at(&snap, &watching_failures(), now_unix());
    assert_eq!(v.severity, Severity::Ok);
    assert!(v.messages[0].ends_with("not found, skipping check"));
}

#[test]
fn malformed_lock_is_critical() {
    let dir = tempdir().unwrap();
    let now = now_unix();
    let summary = dir.path().join("last_run_summary.yaml");
    let lock = dir.path().join("agent_disabled.lock");
    std::fs::write(&summary, summary_yaml(now - 10, 0)).unwrap();
    std::fs::write(&lock, "{not json").unwrap();

    let snap = load_snapshot(&summary, &lock);
    assert!(snap.disabled_lock_load_error().is_some());

    let v = evaluate_at(&snap, &watching_failures(), now);
    assert_eq!(v.severity, Severity::Critical);
    assert!(v.messages[0].starts_with("Error parsing JSON: "));
}

#[test]
fn unreadable_lock_is_critical() {
    let dir = tempdir().unwrap();
    let now = now_unix();
    let summary = dir.path().join("last_run_summary.yaml");
    let lock = dir.path().join("agent_disabled.lock");
    std::fs::write(&summary, summary_yaml(now - 10, 0)).unwrap();
    std::fs::create_dir(&lock).unwrap();

    let v = evaluate_at(&load_snapshot(&summary, &lock), &watching_failures(), now);
    assert_eq!(v.severity, Severity::Critical);
    assert_eq!(v.messages.len(), 1);
    assert!(v.messages[0].starts_with("Error reading agent lockfile: "));
}

#[test]
fn extreme_last_run_is_critical() {
    let dir = tempdir().unwrap();
    let summary = dir.path().join("last_run_summary.yaml");
    std::fs::write(&summary, "time:\n  last_run: -1.0e300\nevents:\n  failure: 0\n").unwrap();

    let v = evaluate_at(
        &load_snapshot(&summary, &dir.path().join("agent_disabled.lock")),
        &EvaluationConfig::default(),
        1_700_000_000,
    );
    assert_eq!(v.severity, Severity::Critical);
    assert!(v.messages[0].starts_with("Could not process "));
}
