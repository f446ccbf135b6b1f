//! Skein CLI - inspect and manage skein daemon discovery state.

use std::process;

use clap::Parser;
use skein::cli::{Cli, Commands, ConfigCommands, DaemonCommands, SecretCommands};
use skein::commands::{self, Output};
use skein::config::ConfigPaths;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV_VAR: &str = "SKEIN_LOG";

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    init_logging(cli.verbose);

    let result = ConfigPaths::resolve(cli.config_dir)
        .and_then(|paths| run_command(cli.command, &paths, human));

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Install the stderr log subscriber.
///
/// `SKEIN_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
fn init_logging(verbose: bool) {
    let default = if verbose { "skein=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(command: Commands, paths: &ConfigPaths, human: bool) -> Result<(), skein::Error> {
    match command {
        Commands::Daemon { command } => match command {
            DaemonCommands::Status => output(&commands::daemon_status(paths)?, human),
            DaemonCommands::Register { address, pid } => {
                output(&commands::daemon_register(paths, &address, pid)?, human)
            }
            DaemonCommands::Clear => output(&commands::daemon_clear(paths)?, human),
        },
        Commands::Secret { command } => match command {
            SecretCommands::Show { reveal } => {
                output(&commands::secret_show(paths, reveal)?, human)
            }
            SecretCommands::Init { force } => output(&commands::secret_init(paths, force)?, human),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => output(&commands::config_path(paths)?, human),
        },
    }

    Ok(())
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
