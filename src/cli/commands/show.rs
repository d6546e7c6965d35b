use anyhow::Result;
use std::io::{self, Write};

use crate::cli::args::ShowArgs;
use crate::config::Config;
use crate::lyrics::timecode::{format_clock, format_timecode};
use crate::lyrics::{fetch, LineSequence, SubtitleFormat};

pub async fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    let lyrics = fetch::load_lyrics(&args.locator, &config.fetch);
    let mut out = io::stdout().lock();
    write_listing(&mut out, &lyrics)?;
    Ok(())
}

fn write_listing<W: Write>(out: &mut W, lyrics: &LineSequence) -> Result<()> {
    if lyrics.is_empty() {
        writeln!(out, "No lyrics available")?;
        return Ok(());
    }

    for (i, line) in lyrics.iter().enumerate() {
        writeln!(
            out,
            "{:4} │ {} → {} │ {}",
            i,
            format_timecode(line.start_time, SubtitleFormat::Srt),
            format_timecode(line.end_time, SubtitleFormat::Srt),
            line.text
        )?;
    }
    writeln!(
        out,
        "\n{} lines, ends at {}",
        lyrics.len(),
        format_clock(lyrics.end_time())
    )?;
    Ok(())
}
