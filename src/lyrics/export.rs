use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::timecode::format_timecode;
use super::{LineSequence, SubtitleFormat, TimedLine};

/// Render one cue; `number` is only written for SRT.
fn cue_to_string(number: usize, line: &TimedLine, format: SubtitleFormat) -> String {
    let times = format!(
        "{} --> {}",
        format_timecode(line.start_time, format),
        format_timecode(line.end_time, format)
    );
    match format {
        SubtitleFormat::Srt => format!("{}\n{}\n{}\n", number, times, line.text),
        SubtitleFormat::WebVtt => format!("{}\n{}\n", times, line.text),
    }
}

/// Serialise lines to SRT or WebVTT text.
///
/// Cues whose text is empty are left out, since neither format can carry a
/// cue without a text line. SRT numbering counts only the written cues.
pub fn to_string(lines: &LineSequence, format: SubtitleFormat) -> String {
    let cues: Vec<String> = lines
        .iter()
        .filter(|line| !line.text.is_empty())
        .enumerate()
        .map(|(i, line)| cue_to_string(i + 1, line, format))
        .collect();

    match format {
        SubtitleFormat::Srt => cues.join("\n"),
        SubtitleFormat::WebVtt if cues.is_empty() => "WEBVTT\n".to_string(),
        SubtitleFormat::WebVtt => format!("WEBVTT\n\n{}", cues.join("\n")),
    }
}

/// Write lines to a subtitle file
pub fn save(path: &Path, lines: &LineSequence, format: SubtitleFormat) -> Result<()> {
    fs::write(path, to_string(lines, format))
        .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;
    Ok(())
}
