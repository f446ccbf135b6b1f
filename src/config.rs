//! Location of skein's per-user config directory.
//!
//! Both persisted files live in one directory:
//!
//! ```text
//! ~/.skein/
//!   secret    raw bytes, the bearer secret
//!   daemon    {"address": <string>, "pid": <integer>}
//! ```
//!
//! ## Precedence
//!
//! `--config-dir` flag > `SKEIN_CONFIG_DIR` env var > `~/.skein`

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable holding the fallback bearer secret.
pub const SECRET_ENV_VAR: &str = "SKEIN_SECRET_ACCESS_KEY";

/// Environment variable naming the application master address.
pub const ADDRESS_ENV_VAR: &str = "SKEIN_APPMASTER_ADDRESS";

/// Environment variable overriding the config directory location.
pub const CONFIG_DIR_ENV_VAR: &str = "SKEIN_CONFIG_DIR";

/// Name of the config directory under the user's home.
pub const CONFIG_DIR_NAME: &str = ".skein";

const SECRET_FILE_NAME: &str = "secret";
const DAEMON_FILE_NAME: &str = "daemon";

/// Paths of the config directory and the files it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    /// Use an explicit config directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default location, `~/.skein`.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Configuration("Could not determine home directory".to_string()))?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME)))
    }

    /// Resolve the config directory from an explicit override or the default.
    ///
    /// The CLI feeds both `--config-dir` and `SKEIN_CONFIG_DIR` through
    /// `explicit`; library callers use [`ConfigPaths::from_env`].
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::default_location(),
        }
    }

    /// Resolve from `SKEIN_CONFIG_DIR`, falling back to `~/.skein`.
    pub fn from_env() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_DIR_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve(explicit)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn secret_path(&self) -> PathBuf {
        self.dir.join(SECRET_FILE_NAME)
    }

    pub fn daemon_path(&self) -> PathBuf {
        self.dir.join(DAEMON_FILE_NAME)
    }

    /// Create the config directory and any missing parents.
    ///
    /// Succeeds if the directory already exists.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}
