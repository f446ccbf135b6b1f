//! Command implementations for the Skein CLI.
//!
//! Each command returns a result type implementing [`Output`]:
//! - `daemon_*` - inspect and manage the daemon record
//! - `secret_*` - inspect and create the bearer secret
//! - `config_path` - show where state lives

use serde::Serialize;

use crate::config::ConfigPaths;
use crate::daemon::{DaemonFile, read_daemon, write_daemon};
use crate::format::format_table;
use crate::secret::{Secret, resolve_secret, write_secret};
use crate::sys::process_alive;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

// === Daemon ===

#[derive(Debug, Serialize)]
pub struct DaemonStatus {
    pub running: bool,
    pub address: Option<String>,
    pub pid: Option<i64>,
    /// Whether the recorded pid belongs to a live process
    pub alive: Option<bool>,
}

impl Output for DaemonStatus {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        match (&self.address, self.pid) {
            (Some(address), Some(pid)) => {
                let alive = if self.alive == Some(true) { "yes" } else { "no" };
                format_table(
                    &["address", "pid", "alive"],
                    &[vec![address.clone(), pid.to_string(), alive.to_string()]],
                )
            }
            _ => "No daemon recorded.".to_string(),
        }
    }
}

/// Report the recorded daemon and whether its process is alive.
pub fn daemon_status(paths: &ConfigPaths) -> Result<DaemonStatus> {
    let (address, pid) = read_daemon(paths);
    let alive = pid.map(process_alive);
    Ok(DaemonStatus {
        running: alive == Some(true),
        address,
        pid,
        alive,
    })
}

#[derive(Debug, Serialize)]
pub struct DaemonRegistered {
    pub address: String,
    pub pid: i64,
    pub path: String,
}

impl Output for DaemonRegistered {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!(
            "Registered daemon at {} (pid {}) in {}",
            self.address, self.pid, self.path
        )
    }
}

/// Record a daemon's address and pid.
pub fn daemon_register(paths: &ConfigPaths, address: &str, pid: i64) -> Result<DaemonRegistered> {
    if address.trim().is_empty() {
        return Err(Error::InvalidInput("address must not be empty".to_string()));
    }
    write_daemon(paths, address, pid)?;
    Ok(DaemonRegistered {
        address: address.to_string(),
        pid,
        path: paths.daemon_path().display().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct DaemonCleared {
    pub removed: bool,
    pub path: String,
}

impl Output for DaemonCleared {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.removed {
            format!("Removed daemon record {}", self.path)
        } else {
            "No daemon record to remove.".to_string()
        }
    }
}

/// Remove the daemon record. Succeeds when there is none.
pub fn daemon_clear(paths: &ConfigPaths) -> Result<DaemonCleared> {
    let file = DaemonFile::at(paths.daemon_path());
    let removed = file.exists();
    file.delete()?;
    Ok(DaemonCleared {
        removed,
        path: file.path().display().to_string(),
    })
}

// === Secret ===

#[derive(Debug, Serialize)]
pub struct SecretShown {
    pub source: String,
    pub length: usize,
    pub secret: String,
    pub masked: bool,
}

impl Output for SecretShown {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!(
            "Secret: {}\nSource: {}\nLength: {} bytes",
            self.secret, self.source, self.length
        )
    }
}

/// Resolve the secret and describe it, masked unless `reveal` is set.
pub fn secret_show(paths: &ConfigPaths, reveal: bool) -> Result<SecretShown> {
    let resolved = resolve_secret(paths)?;
    let secret = if reveal {
        String::from_utf8_lossy(resolved.secret.as_bytes()).into_owned()
    } else {
        resolved.secret.masked()
    };
    Ok(SecretShown {
        source: resolved.source.to_string(),
        length: resolved.secret.len(),
        secret,
        masked: !reveal,
    })
}

#[derive(Debug, Serialize)]
pub struct SecretInitialized {
    pub path: String,
    pub replaced: bool,
}

impl Output for SecretInitialized {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.replaced {
            format!("Replaced secret in {}", self.path)
        } else {
            format!("Created secret in {}", self.path)
        }
    }
}

/// Generate and store a new secret. Refuses to overwrite unless `force`.
pub fn secret_init(paths: &ConfigPaths, force: bool) -> Result<SecretInitialized> {
    let path = paths.secret_path();
    let replaced = path.exists();
    if replaced && !force {
        return Err(Error::InvalidInput(format!(
            "secret already exists at {} (use --force to replace it)",
            path.display()
        )));
    }
    write_secret(paths, &Secret::generate())?;
    Ok(SecretInitialized {
        path: path.display().to_string(),
        replaced,
    })
}

// === Config ===

#[derive(Debug, Serialize)]
pub struct ConfigPathsInfo {
    pub config_dir: String,
    pub secret_path: String,
    pub secret_exists: bool,
    pub daemon_path: String,
    pub daemon_exists: bool,
}

impl Output for ConfigPathsInfo {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let exists = |b: bool| (if b { "yes" } else { "no" }).to_string();
        let rows = vec![
            vec!["secret".to_string(), self.secret_path.clone(), exists(self.secret_exists)],
            vec!["daemon".to_string(), self.daemon_path.clone(), exists(self.daemon_exists)],
        ];
        format!(
            "Config directory: {}\n{}",
            self.config_dir,
            format_table(&["file", "path", "exists"], &rows)
        )
    }
}

pub fn config_path(paths: &ConfigPaths) -> Result<ConfigPathsInfo> {
    let secret_path = paths.secret_path();
    let daemon_path = paths.daemon_path();
    Ok(ConfigPathsInfo {
        config_dir: paths.dir().display().to_string(),
        secret_exists: secret_path.exists(),
        secret_path: secret_path.display().to_string(),
        daemon_exists: daemon_path.exists(),
        daemon_path: daemon_path.display().to_string(),
    })
}
