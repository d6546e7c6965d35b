use super::TimedLine;

/// Find the line active at `current_time`.
///
/// The first line whose `[start, end)` window contains the time wins. Past
/// every window but at or after the last line's start, the last line stays
/// active so trailing silence does not blank the display. Otherwise `None`.
pub fn active_index(lines: &[TimedLine], current_time: f64) -> Option<usize> {
    if let Some(index) = lines.iter().position(|line| line.contains(current_time)) {
        return Some(index);
    }

    match lines.last() {
        Some(last) if current_time >= last.start_time => Some(lines.len() - 1),
        _ => None,
    }
}

/// Integer form of [`active_index`]: `-1` when no line is active.
pub fn active_index_signed(lines: &[TimedLine], current_time: f64) -> i64 {
    active_index(lines, current_time).map_or(-1, |i| i as i64)
}

/// Result of feeding one playback tick to an [`ActiveLineTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerUpdate {
    pub index: Option<usize>,
    /// The active index differs from the previous tick.
    pub changed: bool,
    /// Line to bring into view; set once per distinct line.
    pub reveal: Option<usize>,
}

/// Change detection for consumers of the indexer.
///
/// Recomputes the active line on every tick but only reports a change when
/// the index moves, and asks for a reveal at most once per distinct line.
#[derive(Debug, Default)]
pub struct ActiveLineTracker {
    current: Option<usize>,
    last_revealed: Option<usize>,
}

impl ActiveLineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn on_time_update(&mut self, lines: &[TimedLine], current_time: f64) -> TrackerUpdate {
        let index = active_index(lines, current_time);
        if index == self.current {
            return TrackerUpdate {
                index,
                changed: false,
                reveal: None,
            };
        }

        self.current = index;
        let reveal = match index {
            Some(i) if self.last_revealed != Some(i) => {
                self.last_revealed = Some(i);
                Some(i)
            }
            _ => None,
        };

        tracing::trace!(?index, ?reveal, current_time, "Active lyric line changed");
        TrackerUpdate {
            index,
            changed: true,
            reveal,
        }
    }

    /// Forget all state; call when a new line sequence replaces the old one.
    pub fn reset(&mut self) {
        self.current = None;
        self.last_revealed = None;
    }
}
