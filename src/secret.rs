//! Bearer secret resolution.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. The secret file (`~/.skein/secret`)
//! 2. The `SKEIN_SECRET_ACCESS_KEY` environment variable
//!
//! Only a missing secret file falls through to the environment. Any other
//! failure reading the file is returned to the caller as-is. Nothing is
//! cached here; every call reads its source again (see [`crate::Session`]
//! for per-session memoization).

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::{ConfigPaths, SECRET_ENV_VAR};
use crate::{Error, Result};

/// Required permissions for the secret file (Unix: 0600, owner read/write only).
#[cfg(unix)]
pub const SECRET_FILE_MODE: u32 = 0o600;

/// An opaque bearer token.
///
/// Holds the raw bytes exactly as read from the source. `Debug` never shows
/// the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Generate a fresh random token of 64 lowercase hex characters.
    pub fn generate() -> Self {
        let token = format!(
            "{}{}",
            uuid::Uuid::new_v4().simple(),
            uuid::Uuid::new_v4().simple()
        );
        Self(token.into_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The secret as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masked form for display, e.g. `abcd...wxyz`.
    ///
    /// Secrets of 8 characters or fewer show nothing but `...`.
    pub fn masked(&self) -> String {
        let text = String::from_utf8_lossy(&self.0);
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= 8 {
            "...".to_string()
        } else if chars.len() <= 12 {
            let head: String = chars[..4].iter().collect();
            format!("{}...", head)
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} bytes redacted>)", self.0.len())
    }
}

/// Where a resolved secret came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Read from the secret file at this path
    File(PathBuf),
    /// Read from the named environment variable
    EnvVar(String),
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::File(path) => write!(f, "file:{}", path.display()),
            SecretSource::EnvVar(name) => write!(f, "env:{}", name),
        }
    }
}

/// A secret together with its source.
#[derive(Debug, Clone)]
pub struct ResolvedSecret {
    pub secret: Secret,
    pub source: SecretSource,
}

/// Read the bearer secret from the secret file or the environment.
///
/// # Errors
/// * `Error::Io` if the secret file exists but cannot be read
/// * `Error::Configuration` if neither source has a secret
pub fn read_secret(paths: &ConfigPaths) -> Result<Secret> {
    resolve_secret(paths).map(|resolved| resolved.secret)
}

/// Like [`read_secret`], also reporting which source supplied the secret.
pub fn resolve_secret(paths: &ConfigPaths) -> Result<ResolvedSecret> {
    resolve_secret_with(paths, |name| std::env::var_os(name))
}

/// Resolve the secret using `lookup` in place of the process environment.
pub fn resolve_secret_with<F>(paths: &ConfigPaths, lookup: F) -> Result<ResolvedSecret>
where
    F: Fn(&str) -> Option<OsString>,
{
    let path = paths.secret_path();
    match fs::read(&path) {
        Ok(bytes) => {
            debug!(path = %path.display(), "read secret from config file");
            return Ok(ResolvedSecret {
                secret: Secret::new(bytes),
                source: SecretSource::File(path),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no secret file, checking {}", SECRET_ENV_VAR);
        }
        Err(e) => return Err(e.into()),
    }

    let value = lookup(SECRET_ENV_VAR).ok_or_else(|| {
        Error::Configuration(format!(
            "Secret key not found in config file or '{}' envar",
            SECRET_ENV_VAR
        ))
    })?;

    Ok(ResolvedSecret {
        secret: Secret::new(value.into_encoded_bytes()),
        source: SecretSource::EnvVar(SECRET_ENV_VAR.to_string()),
    })
}

/// Store `secret` in the secret file, creating the config directory.
///
/// Replaces any existing secret. On Unix the file is restricted to 0600.
pub fn write_secret(paths: &ConfigPaths, secret: &Secret) -> Result<()> {
    paths.ensure_dir()?;
    let path = paths.secret_path();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SECRET_FILE_MODE);
    }

    let mut file = options.open(&path)?;
    // mode() only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(SECRET_FILE_MODE))?;
    }
    file.write_all(secret.as_bytes())?;
    file.sync_all()?;

    debug!(path = %path.display(), "wrote secret file");
    Ok(())
}
