//! Per-client-session view of the daemon record and secret.
//!
//! A client consults both stores once per session. `Session` memoizes each
//! lookup on first use, so repeated calls on the same instance never touch
//! the filesystem again. A new session reads fresh state.

use std::cell::OnceCell;

use crate::config::{ADDRESS_ENV_VAR, ConfigPaths};
use crate::daemon::{DaemonFile, DaemonRecord};
use crate::format::normalize_address;
use crate::secret::{Secret, read_secret};
use crate::Result;

/// Memoized access to the skein client state in one config directory.
#[derive(Debug)]
pub struct Session {
    paths: ConfigPaths,
    secret: OnceCell<Secret>,
    daemon: OnceCell<Option<DaemonRecord>>,
}

impl Session {
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            paths,
            secret: OnceCell::new(),
            daemon: OnceCell::new(),
        }
    }

    /// Session over the config directory from `SKEIN_CONFIG_DIR` or `~/.skein`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ConfigPaths::from_env()?))
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// The bearer secret, read on first call.
    ///
    /// Errors are not memoized; a failed lookup is retried on the next call.
    pub fn secret(&self) -> Result<&Secret> {
        if let Some(secret) = self.secret.get() {
            return Ok(secret);
        }
        let secret = read_secret(&self.paths)?;
        Ok(self.secret.get_or_init(|| secret))
    }

    /// The daemon record, read on first call. `None` means no known daemon.
    pub fn daemon(&self) -> Option<&DaemonRecord> {
        self.daemon
            .get_or_init(|| DaemonFile::at(self.paths.daemon_path()).read())
            .as_ref()
    }

    /// The daemon's address normalized to an `http://` URL.
    pub fn daemon_url(&self) -> Option<String> {
        self.daemon()
            .map(|record| normalize_address(&record.address, "http"))
    }

    /// The application master address from `SKEIN_APPMASTER_ADDRESS`, if set.
    pub fn appmaster_address(&self) -> Option<String> {
        std::env::var(ADDRESS_ENV_VAR)
            .ok()
            .filter(|addr| !addr.is_empty())
            .map(|addr| normalize_address(&addr, "http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::daemon::write_daemon;
    use crate::secret::write_secret;
    use crate::test_utils::TestEnv;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_secret_is_read_once_per_session() {
        let env = TestEnv::new();
        write_secret(&env.paths(), &Secret::new("first")).unwrap();

        let session = Session::new(env.paths());
        assert_eq!(session.secret().unwrap().as_bytes(), b"first");

        write_secret(&env.paths(), &Secret::new("second")).unwrap();
        assert_eq!(session.secret().unwrap().as_bytes(), b"first");

        let fresh = Session::new(env.paths());
        assert_eq!(fresh.secret().unwrap().as_bytes(), b"second");
    }

    #[test]
    fn test_secret_failure_is_not_memoized() {
        let env = TestEnv::new();
        // Unreadable secret path so the environment is never consulted
        fs::create_dir_all(env.paths().secret_path()).unwrap();

        let session = Session::new(env.paths());
        assert!(matches!(session.secret(), Err(Error::Io(_))));

        fs::remove_dir(env.paths().secret_path()).unwrap();
        write_secret(&env.paths(), &Secret::new("now-present")).unwrap();
        assert_eq!(session.secret().unwrap().as_bytes(), b"now-present");
    }

    #[test]
    fn test_daemon_is_read_once_per_session() {
        let env = TestEnv::new();
        let session = Session::new(env.paths());
        assert!(session.daemon().is_none());

        // Absence is memoized too
        write_daemon(&env.paths(), "127.0.0.1:8080", 42).unwrap();
        assert!(session.daemon().is_none());

        let fresh = Session::new(env.paths());
        let record = fresh.daemon().unwrap();
        assert_eq!(record.address, "127.0.0.1:8080");
        assert_eq!(record.pid, 42);
    }

    #[test]
    fn test_daemon_url_is_normalized() {
        let env = TestEnv::new();
        write_daemon(&env.paths(), "tcp://10.1.2.3:9000/rpc", 1).unwrap();

        let session = Session::new(env.paths());
        assert_eq!(session.daemon_url().as_deref(), Some("http://10.1.2.3:9000"));
    }

    #[test]
    #[serial]
    fn test_appmaster_address_from_env() {
        let env = TestEnv::new();
        let session = Session::new(env.paths());

        // SAFETY: serialized with other env-mutating tests in this crate
        unsafe { std::env::set_var(ADDRESS_ENV_VAR, "example.org:8765") };
        assert_eq!(
            session.appmaster_address().as_deref(),
            Some("http://example.org:8765")
        );

        unsafe { std::env::remove_var(ADDRESS_ENV_VAR) };
        assert_eq!(session.appmaster_address(), None);
    }
}
