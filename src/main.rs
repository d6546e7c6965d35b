mod app;
mod cli;
mod config;
mod error;
mod lyrics;
mod player;
mod ui;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
