use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::timecode::seconds_from_parts;
use super::{LineSequence, SubtitleFormat, TimedLine};

const TIMECODE_SEPARATOR: &str = "-->";
const WEBVTT_HEADER: &str = "WEBVTT";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn block_separator() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n{2,}").expect("block separator pattern is valid"))
}

fn srt_time_line() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})\s*-->\s*([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})",
        )
        .expect("SRT timecode pattern is valid")
    })
}

fn vtt_time_line() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})\s*-->\s*([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})",
        )
        .expect("WebVTT timecode pattern is valid")
    })
}

fn markup_tag() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"))
}

/// Parse SRT or WebVTT text into timed lines.
///
/// Never fails: blocks without a usable timecode line or without text are
/// skipped, and unintelligible input yields an empty sequence.
pub fn parse(content: &str, hint_url: &str) -> LineSequence {
    let content = strip_bom(content);
    let format = SubtitleFormat::detect(content, hint_url);
    tracing::debug!(?format, bytes = content.len(), "Parsing lyrics");
    parse_as(content, format)
}

/// Parse with an explicit format, bypassing detection.
pub fn parse_as(content: &str, format: SubtitleFormat) -> LineSequence {
    let normalized = strip_bom(content)
        .replace("\r\n", "\n").replace('\r', "\n");
    let blocks: Vec<&str> = block_separator().split(normalized.trim()).collect();
    tracing::trace!(blocks = blocks.len(), "Split subtitle blocks");

    let lines: LineSequence = blocks
        .into_iter()
        .filter_map(|block| parse_block(block, format))
        .collect();

    tracing::debug!(lines = lines.len(), "Parsed lyric lines");
    lines
}

/// Drop one leading UTF-8 byte order mark, as decoders of fetched text do.
fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content)
}

fn parse_block(block: &str, format: SubtitleFormat) -> Option<TimedLine> {
    let block = block.trim();
    if format == SubtitleFormat::WebVtt && block.starts_with(WEBVTT_HEADER) {
        return None;
    }

    let block_lines: Vec<&str> = block.split('\n').collect();
    let time_index = block_lines
        .iter()
        .position(|line| line.contains(TIMECODE_SEPARATOR))?;

    let text_lines = &block_lines[time_index + 1..];
    if text_lines.is_empty() {
        return None;
    }

    let (start_time, end_time) = parse_time_line(block_lines[time_index], format)?;

    // Zero-length cue at the origin is an encoder artifact
    if start_time == end_time && start_time == 0.0 {
        return None;
    }

    Some(TimedLine {
        start_time,
        end_time,
        text: clean_text(text_lines),
    })
}

/// Parse a `start --> end` line in the given format's timecode syntax.
pub fn parse_time_line(line: &str, format: SubtitleFormat) -> Option<(f64, f64)> {
    let pattern = match format {
        SubtitleFormat::Srt => srt_time_line(),
        SubtitleFormat::WebVtt => vtt_time_line(),
    };
    let caps = pattern.captures(line)?;
    Some((timecode_at(&caps, 1)?, timecode_at(&caps, 5)?))
}

fn timecode_at(caps: &Captures, first_group: usize) -> Option<f64> {
    let mut parts = [0u64; 4];
    for (offset, part) in parts.iter_mut().enumerate() {
        *part = caps.get(first_group + offset)?.as_str().parse().ok()?;
    }
    Some(seconds_from_parts(parts[0], parts[1], parts[2], parts[3]))
}

fn clean_text(text_lines: &[&str]) -> String {
    let joined = text_lines.join(" ");
    markup_tag().replace_all(&joined, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello world\n\n2\n00:00:04,000 --> 00:00:06,500\nSecond line";
        let lines = parse(content, "https://cdn.example.com/song.srt");

        assert_eq!(
            lines.lines(),
            &[
                TimedLine::new(1.0, 4.0, "Hello world"),
                TimedLine::new(4.0, 6.5, "Second line"),
            ]
        );
    }

    #[test]
    fn test_parse_vtt_strips_tags() {
        let content = "WEBVTT\n\n00:00:00.500 --> 00:00:02.000\nFirst <i>cue</i>";
        let lines = parse(content, "lyrics");

        assert_eq!(lines.lines(), &[TimedLine::new(0.5, 2.0, "First cue")]);
    }

    #[test]
    fn test_byte_order_mark_before_vtt_header() {
        let content = "\u{FEFF}WEBVTT\n\n00:00:00.500 --> 00:00:02.000\nFirst cue";
        let lines = parse(content, "https://cdn.example.com/lyrics?id=7");
        assert_eq!(lines.lines(), &[TimedLine::new(0.5, 2.0, "First cue")]);

        let srt = "\u{FEFF}1\n00:00:01,000 --> 00:00:02,000\nHi";
        assert_eq!(
            parse_as(srt, SubtitleFormat::Srt).lines(),
            &[TimedLine::new(1.0, 2.0, "Hi")]
        );
    }

    #[test]
    fn test_block_without_timecode_is_skipped() {
        let content = "Just some text\n\n00:00:01,000 --> 00:00:02,000\nValid line";
        let lines = parse(content, "");

        assert_eq!(lines.lines(), &[TimedLine::new(1.0, 2.0, "Valid line")]);
    }

    #[test]
    fn test_zero_duration_artifact_is_discarded() {
        let content = "1\n00:00:00,000 --> 00:00:00,000\nghost\n\n2\n00:00:01,000 --> 00:00:02,000\nreal";
        let lines = parse(content, "");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "real");
    }

    #[test]
    fn test_zero_duration_away_from_origin_is_kept() {
        let lines = parse("00:00:03,000 --> 00:00:03,000\nblink", "");
        assert_eq!(lines.lines(), &[TimedLine::new(3.0, 3.0, "blink")]);
    }

    #[test]
    fn test_crlf_and_multiline_cues() {
        let content = "1\r\n00:00:01,000 --> 00:00:02,000\r\nline one\r\n<b>line</b> two\r\n\r\n\r\n2\r00:00:02,000 --> 00:00:03,000\rlast";
        let lines = parse(content, "");

        assert_eq!(
            lines.lines(),
            &[
                TimedLine::new(1.0, 2.0, "line one line two"),
                TimedLine::new(2.0, 3.0, "last"),
            ]
        );
    }

    #[test]
    fn test_missing_text_is_skipped() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\n\n2\n00:00:02,000 --> 00:00:03,000\nok";
        let lines = parse(content, "");
        assert_eq!(lines.lines(), &[TimedLine::new(2.0, 3.0, "ok")]);
    }

    #[test]
    fn test_wrong_separator_for_format_is_skipped() {
        // Period millis in an SRT document do not match the SRT pattern
        let content = "1\n00:00:01.000 --> 00:00:02.000\nnope\n\n2\n00:00:02,000 --> 00:00:03,000\nyes";
        let lines = parse(content, "a.srt");
        assert_eq!(lines.lines(), &[TimedLine::new(2.0, 3.0, "yes")]);
    }

    #[test]
    fn test_vtt_equivalent_to_srt() {
        let srt = "1\n00:00:01,250 --> 00:00:03,000\nOne\n\n2\n00:01:00,000 --> 00:01:02,500\n<c.red>Two</c>";
        let vtt = "WEBVTT - lyrics\n\nNOTE generated\n\n00:00:01.250 --> 00:00:03.000 align:center\nOne\n\ncue-2\n00:01:00.000 --> 00:01:02.500\n<c.red>Two</c>";

        let from_srt = parse(srt, "x.srt");
        let from_vtt = parse(vtt, "x.vtt");
        assert_eq!(from_srt, from_vtt);
        assert_eq!(from_vtt.len(), 2);
        assert_eq!(from_vtt[1].text, "Two");
    }

    #[test]
    fn test_source_order_is_preserved() {
        let content = "00:00:05,000 --> 00:00:06,000\nlater\n\n00:00:01,000 --> 00:00:02,000\nearlier";
        let lines = parse(content, "");
        assert_eq!(lines[0].text, "later");
        assert_eq!(lines[1].text, "earlier");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse("", "").is_empty());
        assert!(parse("   \n\n\n  ", "a.vtt").is_empty());
        assert!(parse("WEBVTT", "").is_empty());
        assert!(parse("not a subtitle at all\n-->\n", "").is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let content = "WEBVTT\n\n00:00:00.500 --> 00:00:02.000\nA\n\n00:00:02.000 --> 00:00:04.000\nB";
        assert_eq!(parse(content, ""), parse(content, ""));
    }

    #[test]
    fn test_valid_lines_are_ordered_windows() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nA\n\n2\n00:00:04,000 --> 00:00:06,500\nB\n\n3\n00:10:00,001 --> 00:10:00,002\nC";
        for line in parse(content, "").iter() {
            assert!(line.start_time <= line.end_time);
            assert!(!line.text.is_empty());
        }
    }

    #[test]
    fn test_parse_time_line() {
        assert_eq!(
            parse_time_line("00:00:01,000-->00:00:02,500", SubtitleFormat::Srt),
            Some((1.0, 2.5))
        );
        assert_eq!(
            parse_time_line("01:00:00.000 --> 01:00:01.000 line:0", SubtitleFormat::WebVtt),
            Some((3600.0, 3601.0))
        );
        assert_eq!(parse_time_line("00:01.000 --> 00:02.000", SubtitleFormat::WebVtt), None);
    }
}
