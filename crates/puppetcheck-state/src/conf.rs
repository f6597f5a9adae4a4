use std::io::ErrorKind;
use std::path::Path;

use puppetcheck_core::{ConfScan, Presence};

pub fn file_presence(path: &Path) -> Presence {
    match std::fs::metadata(path) {
        Ok(_) => Presence::Present,
        Err(e) if e.kind() == ErrorKind::NotFound => Presence::NotFound,
        Err(e) => Presence::Unreadable(e.to_string()),
    }
}

pub fn scan_puppet_conf(path: &Path) -> ConfScan {
    match std::fs::read_to_string(path) {
        Ok(s) => ConfScan::Lines(s.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == ErrorKind::NotFound => ConfScan::NotFound,
        Err(e) => ConfScan::Unreadable(e.to_string()),
    }
}
