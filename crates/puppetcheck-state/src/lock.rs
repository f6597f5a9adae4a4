use std::io::ErrorKind;
use std::path::Path;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use tracing::{debug, warn};

use puppetcheck_core::{DisabledLoad, DisabledLock, EpochSecs, LoadError};

/// `puppet agent --disable "<reason>"` writes this document.
#[derive(Deserialize)]
struct LockDoc {
    #[serde(default)]
    disabled_message: Option<String>,
}

pub fn parse_disabled_lock(s: &str) -> Result<String, serde_json::Error> {
    let doc: LockDoc = serde_json::from_str(s)?;
    Ok(doc.disabled_message.unwrap_or_default())
}

fn modified_unix(path: &Path) -> Option<EpochSecs> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let dur = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(dur.as_secs() as i64)
}

/// Read the agent disabled lock. No file means the agent is enabled.
pub fn load_disabled_lock(path: &Path) -> DisabledLoad {
    let s = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return DisabledLoad::NotDisabled,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "agent lockfile unreadable");
            return DisabledLoad::Failed(LoadError::Unreadable {
                path: path.display().to_string(),
                cause: e.to_string(),
            });
        }
    };

    match parse_disabled_lock(&s) {
        Ok(reason) => {
            let locked_at = modified_unix(path);
            debug!(path = %path.display(), %reason, ?locked_at, "agent is disabled");
            DisabledLoad::Disabled(DisabledLock { reason, locked_at })
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "agent lockfile malformed");
            DisabledLoad::Failed(LoadError::Malformed {
                path: path.display().to_string(),
                cause: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_lock_means_enabled() {
        let dir = tempdir().unwrap();
        assert_eq!(load_disabled_lock(&dir.path().join("agent_disabled.lock")), DisabledLoad::NotDisabled);
    }

    #[test]
    fn reads_reason_and_mtime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agent_disabled.lock");
        std::fs::write(&path, r#"{"disabled_message":"maintenance"}"#).unwrap();
        match load_disabled_lock(&path) {
            DisabledLoad::Disabled(lock) => {
                assert_eq!(lock.reason, "maintenance");
                assert!(lock.locked_at.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn reason_is_optional() {
        assert_eq!(parse_disabled_lock("{}").unwrap(), "");
        assert_eq!(parse_disabled_lock(r#"{"disabled_message":null}"#).unwrap(), "");
    }

    #[test]
    fn directory_lock_is_unreadable() {
        let dir = tempdir().unwrap();
        assert!(matches!(load_disabled_lock(dir.path()), DisabledLoad::Failed(LoadError::Unreadable { .. })));
    }

    #[test]
    fn garbage_lock_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agent_disabled.lock");
        std::fs::write(&path, "disabled by bob").unwrap();
        assert!(matches!(load_disabled_lock(&path), DisabledLoad::Failed(LoadError::Malformed { .. })));
    }
}
