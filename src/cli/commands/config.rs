use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::ConfigArgs;
use crate::config::Config;

pub async fn execute(args: ConfigArgs, custom_path: Option<&Path>) -> Result<()> {
    let config_path = custom_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);

    if args.path {
        println!("Configuration file path:");
        println!("  {}", config_path.display());
        return Ok(());
    }

    if args.init {
        if config_path.exists() {
            anyhow::bail!(
                "Configuration file already exists: {}",
                config_path.display()
            );
        }
        println!("Initializing configuration file...");
        Config::default()
            .write_to(&config_path)
            .context("Failed to create configuration file")?;
        println!("✅ Configuration file created: {}", config_path.display());
        println!("\nYou can now edit this file to customize default settings.");
        return Ok(());
    }

    if args.show {
        println!("Current configuration:");
        let config = if config_path.exists() {
            Config::load(Some(&config_path))?
        } else {
            println!("  No configuration file found, using defaults.");
            println!("  Run 'sync-lyrics config --init' to create one.");
            Config::default()
        };
        println!("\n{}", config.to_toml()?);
        return Ok(());
    }

    // Default: show help
    println!("Configuration management");
    println!("\nOptions:");
    println!("  --show   Show current configuration");
    println!("  --init   Initialize default configuration file");
    println!("  --path   Show configuration file path");

    Ok(())
}
