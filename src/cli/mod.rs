pub mod args;
pub mod commands;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use std::fs::File;
use std::sync::Mutex;

use crate::config::Config;

/// Execute the CLI with parsed arguments
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet, cli.command.is_interactive());

    // The config command itself must work with a missing or broken file
    let load_config =
        || Config::load(cli.config.as_deref()).context("Failed to load configuration");

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &load_config()?).await,
        Commands::Show(args) => commands::show::execute(args, &load_config()?).await,
        Commands::At(args) => commands::at::execute(args, &load_config()?).await,
        Commands::Convert(args) => commands::convert::execute(args, &load_config()?).await,
        Commands::Config(args) => commands::config::execute(args, cli.config.as_deref()).await,
    }
}

fn setup_logging(verbose: u8, quiet: bool, interactive: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = default_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if interactive {
        // Log lines would tear the TUI apart, send them to a file instead
        let Some(file) = open_log_file() else {
            return;
        };
        fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Filter used when `RUST_LOG` is unset; `--quiet` still lets errors through.
fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn open_log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("sync-lyrics");
    std::fs::create_dir_all(&dir).ok()?;
    File::create(dir.join("sync-lyrics.log")).ok()
}
