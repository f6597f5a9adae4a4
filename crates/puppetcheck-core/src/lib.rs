//! Pure health evaluation for the Puppet agent checks.
//!
//! Nothing in this crate touches the filesystem: callers load a
//! [`RunSnapshot`] and hand it to [`evaluate`] together with an
//! [`EvaluationConfig`].

pub mod checks;
pub mod config;
pub mod duration;
pub mod engine;
pub mod snapshot;
pub mod types;

pub use checks::*;
pub use config::*;
pub use duration::*;
pub use engine::*;
pub use snapshot::*;
pub use types::*;
