//! Skein - daemon discovery and secret credentials for skein clients.
//!
//! This library provides the file-backed state a client consults before
//! talking to a running skein daemon:
//! - [`daemon`] - the `{address, pid}` record of the running daemon
//! - [`secret`] - the bearer secret used to authenticate requests
//! - [`session`] - a per-session view that memoizes both lookups

pub mod cli;
pub mod commands;
pub mod config;
pub mod daemon;
pub mod format;
pub mod secret;
pub mod session;
pub mod sys;

pub use config::ConfigPaths;
pub use daemon::{DaemonFile, DaemonRecord, read_daemon, write_daemon};
pub use secret::{Secret, SecretSource, read_secret};
pub use session::Session;


/// Library-level error type for Skein operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Skein operations.
pub type Result<T> = std::result::Result<T, Error>;
