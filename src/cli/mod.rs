//! CLI argument definitions for Skein.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKEIN_GIT_COMMIT"),
    ", built ",
    env!("SKEIN_BUILD_TIMESTAMP"),
    ")"
);

/// Skein - discover the running skein daemon and its credentials.
#[derive(Parser, Debug)]
#[command(name = "skein")]
#[command(author, version, long_version = LONG_VERSION, about = "Inspect and manage skein daemon discovery state", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Use <DIR> as the config directory instead of ~/.skein.
    /// Can also be set via SKEIN_CONFIG_DIR environment variable.
    #[arg(long = "config-dir", global = true, env = "SKEIN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log debug output to stderr (SKEIN_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Daemon record commands
    Daemon {
        #[command(subcommand)]
        command: DaemonCommands,
    },

    /// Secret credential commands
    Secret {
        #[command(subcommand)]
        command: SecretCommands,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Daemon subcommands
#[derive(Subcommand, Debug)]
pub enum DaemonCommands {
    /// Show the recorded daemon address and pid, and whether it is alive
    Status,

    /// Record a running daemon's address and pid
    Register {
        /// Daemon address (e.g., 127.0.0.1:8080)
        #[arg(long)]
        address: String,

        /// Daemon process ID
        #[arg(long, allow_negative_numbers = true)]
        pid: i64,
    },

    /// Remove the daemon record
    Clear,
}

/// Secret subcommands
#[derive(Subcommand, Debug)]
pub enum SecretCommands {
    /// Show where the secret comes from (masked unless --reveal)
    Show {
        /// Print the full secret
        #[arg(long)]
        reveal: bool,
    },

    /// Generate a new secret and store it in the config directory
    Init {
        /// Overwrite an existing secret file
        #[arg(long)]
        force: bool,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config directory and file paths
    Path,
}
