use anyhow::Result;
use std::io::{self, Write};

use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::lyrics::{export, fetch, SubtitleFormat};

pub async fn execute(args: ConvertArgs, config: &Config) -> Result<()> {
    let lyrics = fetch::load_lyrics(&args.locator, &config.fetch);
    if lyrics.is_empty() {
        anyhow::bail!("No lyrics could be read from: {}", args.locator);
    }

    let format = SubtitleFormat::from(args.to);
    match &args.output {
        Some(path) => {
            export::save(path, &lyrics, format)?;
            tracing::info!(lines = lyrics.len(), path = %path.display(), "Wrote subtitles");
            println!("✅ Wrote {} lines to {}", lyrics.len(), path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(export::to_string(&lyrics, format).as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
