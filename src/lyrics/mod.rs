pub mod export;
pub mod fetch;
pub mod indexer;
pub mod loader;
pub mod parser;
pub mod timecode;

use std::ops::Index;

/// A single timed lyric cue, times in seconds.
///
/// `start_time` is inclusive, `end_time` exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLine {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl TimedLine {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// Ordered cues of one subtitle resource.
///
/// Built once per load and never mutated; a reload produces a new sequence.
/// Order is the source document's block order, not re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSequence {
    lines: Vec<TimedLine>,
}

impl LineSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimedLine> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimedLine> {
        self.lines.iter()
    }

    /// End of the latest cue, used to size the playback timeline.
    pub fn end_time(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.end_time)
            .fold(0.0, f64::max)
    }
}

impl From<Vec<TimedLine>> for LineSequence {
    fn from(lines: Vec<TimedLine>) -> Self {
        Self { lines }
    }
}

impl FromIterator<TimedLine> for LineSequence {
    fn from_iter<I: IntoIterator<Item = TimedLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for LineSequence {
    type Output = TimedLine;

    fn index(&self, index: usize) -> &TimedLine {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a TimedLine;
    type IntoIter = std::slice::Iter<'a, TimedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// The two timed-text formats understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    WebVtt,
}

impl SubtitleFormat {
    /// Two-way branch: a `.vtt` hint or a leading `WEBVTT` header selects
    /// WebVTT, anything else is read as SRT. A byte order mark before the
    /// header is ignored.
    pub fn detect(content: &str, hint_url: &str) -> Self {
        let head = content.trim_start_matches('\u{FEFF}').trim();
        if hint_url.ends_with(".vtt") || head.starts_with("WEBVTT") {
            SubtitleFormat::WebVtt
        } else {
            SubtitleFormat::Srt
        }
    }

    /// Separator between seconds and milliseconds in a timecode.
    pub fn millis_separator(&self) -> char {
        match self {
            SubtitleFormat::Srt => ',',
            SubtitleFormat::WebVtt => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            SubtitleFormat::detect("1\n00:00:01,000 --> 00:00:02,000\nx", "https://cdn/a.vtt"),
            SubtitleFormat::WebVtt
        );
        assert_eq!(
            SubtitleFormat::detect("", "https://cdn/a.srt"),
            SubtitleFormat::Srt
        );
    }

    #[test]
    fn test_detect_by_header() {
        assert_eq!(
            SubtitleFormat::detect("\n  WEBVTT\n\n00:00:00.500 --> 00:00:01.000\nx", "lyrics"),
            SubtitleFormat::WebVtt
        );
        // Query strings defeat the extension check; content decides
        assert_eq!(
            SubtitleFormat::detect("1\n00:00:01,000 --> 00:00:02,000\nx", "a.vtt?sig=1"),
            SubtitleFormat::Srt
        );
    }

    #[test]
    fn test_detect_header_after_byte_order_mark() {
        assert_eq!(
            SubtitleFormat::detect(
                "\u{FEFF}WEBVTT\n\n00:00:00.500 --> 00:00:02.000\nx",
                "https://cdn.example.com/lyrics?id=7"
            ),
            SubtitleFormat::WebVtt
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let line = TimedLine::new(1.0, 2.0, "a");
        assert!(line.contains(1.0));
        assert!(line.contains(1.999));
        assert!(!line.contains(2.0));
        assert!(!line.contains(0.999));
    }

    #[test]
    fn test_end_time() {
        let seq: LineSequence = vec![
            TimedLine::new(0.0, 4.0, "a"),
            TimedLine::new(3.0, 3.5, "b"),
        ]
        .into();
        assert_eq!(seq.end_time(), 4.0);
        assert_eq!(LineSequence::empty().end_time(), 0.0);
    }
}
