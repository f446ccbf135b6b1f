//! Daemon record management for discovering the running skein daemon.
//!
//! This module provides the `DaemonFile` struct for tracking the daemon
//! process across client invocations. The record is stored in the config
//! directory as `daemon` and contains the address and process id as JSON:
//!
//! ```text
//! {"address":"http://127.0.0.1:8080","pid":12345}
//! ```
//!
//! Reads are lenient: a missing, unreadable or malformed record all mean
//! "no known daemon". Writes are strict and report every failure.
//! No locking is done; with concurrent writers the last replace wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ConfigPaths;
use crate::{Error, Result};

/// Information stored in the daemon file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonRecord {
    /// Network location of the daemon, opaque to this crate
    pub address: String,
    /// Process ID of the daemon
    pub pid: i64,
}

/// Manages the daemon record file.
#[derive(Debug)]
pub struct DaemonFile {
    path: PathBuf,
}

impl DaemonFile {
    /// Create a new DaemonFile for the given config directory.
    pub fn new(config_dir: &Path) -> Self {
        Self::at(ConfigPaths::new(config_dir).daemon_path())
    }

    /// Use an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the daemon record, fully replacing any previous one.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an IO error if the directory or file cannot be written.
    pub fn write(&self, record: &DaemonRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_vec(record)?;

        let mut file = fs::File::create(&self.path)?;
        file.write_all(&contents)?;
        file.sync_all()?;

        info!(address = %record.address, pid = record.pid, "registered daemon");
        Ok(())
    }

    /// Read the daemon record, collapsing every failure to `None`.
    pub fn read(&self) -> Option<DaemonRecord> {
        match self.try_read() {
            Ok(record) => record,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unusable daemon record");
                None
            }
        }
    }

    /// Read the daemon record, keeping the reason it could not be read.
    ///
    /// # Returns
    /// * `Ok(Some(record))` if the file exists and was parsed successfully
    /// * `Ok(None)` if the file doesn't exist
    /// * `Err(e)` if there was an IO error or the contents are malformed
    pub fn try_read(&self) -> Result<Option<DaemonRecord>> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(Self::parse_contents(&contents)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the daemon file if it exists.
    ///
    /// Does nothing if the file doesn't exist.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Parse daemon file contents. Unknown keys are ignored.
    ///
    /// Only a JSON object is a record; serde would otherwise accept a
    /// positional array like `["host:1", 5]`.
    fn parse_contents(contents: &[u8]) -> Result<DaemonRecord> {
        let value: serde_json::Value = serde_json::from_slice(contents)?;
        if !value.is_object() {
            return Err(Error::InvalidInput(
                "daemon record must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Look up the running daemon's address and pid.
///
/// Never fails: `(None, None)` means no daemon is known, whether the record
/// is missing, unreadable or malformed.
pub fn read_daemon(paths: &ConfigPaths) -> (Option<String>, Option<i64>) {
    match DaemonFile::at(paths.daemon_path()).read() {
        Some(DaemonRecord { address, pid }) => (Some(address), Some(pid)),
        None => (None, None),
    }
}

/// Record the running daemon's address and pid, creating the config
/// directory if needed.
pub fn write_daemon(paths: &ConfigPaths, address: &str, pid: i64) -> Result<()> {
    paths.ensure_dir()?;
    DaemonFile::at(paths.daemon_path()).write(&DaemonRecord {
        address: address.to_string(),
        pid,
    })
}
