use super::SubtitleFormat;

/// Convert `HH:MM:SS,mmm` components to seconds.
pub fn seconds_from_parts(hours: u64, minutes: u64, seconds: u64, millis: u64) -> f64 {
    (hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0
}

/// Format seconds as `HH:MM:SS,mmm` (SRT) or `HH:MM:SS.mmm` (WebVTT).
pub fn format_timecode(seconds: f64, format: SubtitleFormat) -> String {
    let ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        minutes,
        secs,
        format.millis_separator(),
        millis
    )
}

/// Short `M:SS` clock used by the player status bar.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_seconds_from_parts() {
        assert_eq!(seconds_from_parts(0, 0, 0, 0), 0.0);
        assert!((seconds_from_parts(0, 0, 1, 500) - 1.5).abs() < EPSILON);
        assert!((seconds_from_parts(1, 1, 1, 500) - 3661.5).abs() < EPSILON);
        assert!((seconds_from_parts(23, 59, 59, 999) - 86399.999).abs() < EPSILON);
    }

    #[test]
    fn test_millis_exact_across_range() {
        for ms in [0u64, 1, 7, 99, 100, 333, 500, 998, 999] {
            let expected = 42.0 + ms as f64 / 1000.0;
            assert!((seconds_from_parts(0, 0, 42, ms) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0, SubtitleFormat::Srt), "00:00:00,000");
        assert_eq!(format_timecode(1.5, SubtitleFormat::Srt), "00:00:01,500");
        assert_eq!(format_timecode(65.0, SubtitleFormat::WebVtt), "00:01:05.000");
        assert_eq!(format_timecode(3661.5, SubtitleFormat::WebVtt), "01:01:01.500");
        assert_eq!(format_timecode(86399.999, SubtitleFormat::Srt), "23:59:59,999");
        assert_eq!(format_timecode(-3.0, SubtitleFormat::Srt), "00:00:00,000");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(65.9), "1:05");
        assert_eq!(format_clock(-1.0), "0:00");
    }
}
