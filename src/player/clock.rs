use std::time::Instant;

/// Simulated media clock feeding playback positions to the lyrics view.
///
/// Position is kept as an anchor (`base`) plus the wall time elapsed since
/// playback last started, clamped to `[0, duration]`. Every operation has an
/// `_at` form taking an explicit `now` so behaviour is testable.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    duration: f64,
    base: f64,
    started_at: Option<Instant>,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            base: 0.0,
            started_at: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Resize the timeline, e.g. after new lyrics are loaded.
    pub fn set_duration(&mut self, duration: f64) {
        let now = Instant::now();
        let position = self.position_at(now);
        self.duration = duration.max(0.0);
        self.anchor(position, now);
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position_at(Instant::now())
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start).as_secs_f64())
            .unwrap_or(0.0);
        (self.base + elapsed).clamp(0.0, self.duration)
    }

    /// Fraction of the timeline played, in `[0, 1]`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration <= 0.0 {
            0.0
        } else {
            self.position_at(now) / self.duration
        }
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.is_playing() {
            return;
        }
        // Restart from the top once the end was reached
        if self.base >= self.duration {
            self.base = 0.0;
        }
        self.started_at = Some(now);
    }

    #[cfg(test)]
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn pause_at(&mut self, now: Instant) {
        self.base = self.position_at(now);
        self.started_at = None;
    }

    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    pub fn toggle_at(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause_at(now);
        } else {
            self.play_at(now);
        }
    }

    pub fn seek(&mut self, position: f64) {
        self.seek_at(position, Instant::now());
    }

    pub fn seek_at(&mut self, position: f64, now: Instant) {
        self.anchor(position, now);
    }

    pub fn seek_by(&mut self, delta: f64) {
        self.seek_by_at(delta, Instant::now());
    }

    pub fn seek_by_at(&mut self, delta: f64, now: Instant) {
        let position = self.position_at(now) + delta;
        self.anchor(position, now);
    }

    /// Advance bookkeeping for a tick; pauses at the end of the timeline.
    /// Returns the current position.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let position = self.position_at(now);
        if self.is_playing() && position >= self.duration {
            tracing::debug!(position, "Playback reached the end");
            self.base = self.duration;
            self.started_at = None;
        }
        position
    }

    fn anchor(&mut self, position: f64, now: Instant) {
        // NaN would survive the clamp and stick
        let position = if position.is_finite() { position } else { 0.0 };
        self.base = position.clamp(0.0, self.duration);
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn after(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let clock = PlaybackClock::new(10.0);
        let start = Instant::now();
        assert_eq!(clock.position_at(after(start, 5_000)), 0.0);
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_play_and_pause() {
        let mut clock = PlaybackClock::new(10.0);
        let start = Instant::now();

        clock.play_at(start);
        assert_eq!(clock.position_at(after(start, 1_500)), 1.5);

        clock.pause_at(after(start, 2_000));
        assert_eq!(clock.position_at(after(start, 9_000)), 2.0);

        clock.toggle_at(after(start, 9_000));
        assert!(clock.is_playing());
        assert_eq!(clock.position_at(after(start, 9_250)), 2.25);
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut clock = PlaybackClock::new(10.0);
        let start = Instant::now();

        clock.seek_at(4.0, start);
        assert_eq!(clock.position_at(start), 4.0);
        clock.seek_by_at(-20.0, start);
        assert_eq!(clock.position_at(start), 0.0);
        clock.seek_by_at(30.0, start);
        assert_eq!(clock.position_at(start), 10.0);
    }

    #[test]
    fn test_non_finite_seek_goes_to_start() {
        let mut clock = PlaybackClock::new(10.0);
        let start = Instant::now();

        clock.seek_at(f64::NAN, start);
        assert_eq!(clock.position_at(start), 0.0);
        clock.seek_at(4.0, start);
        clock.seek_by_at(f64::INFINITY, start);
        assert_eq!(clock.position_at(start), 0.0);
        assert_eq!(clock.progress_at(start), 0.0);
    }

    #[test]
    fn test_seek_while_playing_continues_from_target() {
        let mut clock = PlaybackClock::new(60.0);
        let start = Instant::now();

        clock.play_at(start);
        clock.seek_at(30.0, after(start, 1_000));
        assert_eq!(clock.position_at(after(start, 1_500)), 30.5);
    }

    #[test]
    fn test_tick_pauses_at_end_and_play_restarts() {
        let mut clock = PlaybackClock::new(2.0);
        let start = Instant::now();

        clock.play_at(start);
        assert_eq!(clock.tick_at(after(start, 3_000)), 2.0);
        assert!(!clock.is_playing());

        clock.play_at(after(start, 4_000));
        assert_eq!(clock.position_at(after(start, 4_000)), 0.0);
    }

    #[test]
    fn test_progress() {
        let mut clock = PlaybackClock::new(8.0);
        let start = Instant::now();
        clock.seek_at(2.0, start);
        assert_eq!(clock.progress_at(start), 0.25);
        assert_eq!(PlaybackClock::new(0.0).progress_at(start), 0.0);
    }
}
