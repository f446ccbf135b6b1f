//! Common test utilities for skein integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's `~/.skein/` directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated config directory.
///
/// The `skein()` method returns a `Command` that sets `SKEIN_CONFIG_DIR`
/// per-invocation and clears the secret and address variables inherited
/// from the test runner, making tests parallel-safe.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Create a new test environment. The config directory does not exist yet.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the skein binary with an isolated config directory.
    pub fn skein(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skein"));
        cmd.current_dir(self.root.path());
        cmd.env("SKEIN_CONFIG_DIR", self.config_dir());
        cmd.env_remove("SKEIN_SECRET_ACCESS_KEY");
        cmd.env_remove("SKEIN_APPMASTER_ADDRESS");
        cmd.env_remove("SKEIN_LOG");
        cmd
    }

    /// Path of the config directory used by `skein()`.
    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join(".skein")
    }

    pub fn secret_path(&self) -> PathBuf {
        self.config_dir().join("secret")
    }

    pub fn daemon_path(&self) -> PathBuf {
        self.config_dir().join("daemon")
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write raw bytes into a file inside the config directory.
    pub fn write_config_file(&self, name: &str, contents: &[u8]) {
        std::fs::create_dir_all(self.config_dir()).unwrap();
        std::fs::write(self.config_dir().join(name), contents).unwrap();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command's stdout as JSON.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be valid JSON")
}
