use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use std::time::Instant;

use crate::config::{Config, PlaybackConfig};
use crate::lyrics::indexer::{ActiveLineTracker, TrackerUpdate};
use crate::lyrics::loader::{LoadedLyrics, LyricsLoader};
use crate::lyrics::LineSequence;
use crate::player::PlaybackClock;
use crate::ui;

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Loading,
    Playing,
}

pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    pub locator: String,
    pub lyrics: LineSequence,
    pub tracker: ActiveLineTracker,
    pub clock: PlaybackClock,
    /// Line the lyrics list is centred on; moves only on a reveal.
    pub scroll_anchor: Option<usize>,
    pub status_message: String,
    playback: PlaybackConfig,
    loader: LyricsLoader,
    loaded_once: bool,
    start_at: Option<f64>,
}

impl App {
    pub fn new(locator: &str, config: &Config) -> Self {
        Self {
            state: AppState::Loading,
            should_quit: false,
            locator: locator.to_string(),
            lyrics: LineSequence::empty(),
            tracker: ActiveLineTracker::new(),
            clock: PlaybackClock::new(0.0),
            scroll_anchor: None,
            status_message: String::new(),
            playback: config.playback.clone(),
            loader: LyricsLoader::new(config.fetch.clone()),
            loaded_once: false,
            start_at: None,
        }
    }

    /// Begin playback at `seconds` once the first lyrics arrive.
    pub fn with_start(mut self, seconds: f64) -> Self {
        self.start_at = Some(seconds);
        self
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tracker.current()
    }

    /// Request (re)loading of the current locator in the background.
    pub fn start_loading(&mut self) {
        self.state = AppState::Loading;
        self.status_message = "Loading lyrics...".to_string();
        self.loader.request(&self.locator);
    }

    /// Swap in freshly loaded lyrics; the previous sequence is dropped.
    pub fn apply_loaded(&mut self, loaded: LoadedLyrics) {
        tracing::info!(
            lines = loaded.lines.len(),
            locator = %loaded.locator,
            "Lyrics ready"
        );
        self.lyrics = loaded.lines;
        self.tracker.reset();
        self.scroll_anchor = None;
        self.clock
            .set_duration(self.lyrics.end_time() + self.playback.tail_secs.max(0.0));
        self.state = AppState::Playing;
        self.status_message = if self.lyrics.is_empty() {
            "No lyrics available".to_string()
        } else {
            format!("{} lines loaded", self.lyrics.len())
        };

        if !self.loaded_once {
            self.loaded_once = true;
            if let Some(start) = self.start_at.take() {
                self.clock.seek(start);
            }
            self.clock.play();
        }
    }

    /// One playback-time update: advance the clock and recompute the active line.
    pub fn on_tick(&mut self, now: Instant) -> TrackerUpdate {
        if let Some(loaded) = self.loader.poll() {
            self.apply_loaded(loaded);
        }

        let position = self.clock.tick_at(now);
        let update = self.tracker.on_time_update(self.lyrics.lines(), position);
        if let Some(index) = update.reveal {
            self.scroll_anchor = Some(index);
        } else if update.changed && update.index.is_none() {
            tracing::trace!(position, "No active lyric line");
        }
        update
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        self.start_loading();
        let tick = self.playback.tick();

        loop {
            self.on_tick(Instant::now());

            terminal.draw(|frame| self.draw(frame))?;

            // Wait for input no longer than one clock tick
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if !self.loader.is_loading() => self.start_loading(),
            _ if self.state == AppState::Loading => {}
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.clock.toggle();
                self.status_message = if self.clock.is_playing() {
                    "Playing".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.clock.seek_by(-self.playback.seek_step_secs);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.clock.seek_by(self.playback.seek_step_secs);
            }
            KeyCode::Home | KeyCode::Char('0') => {
                self.clock.seek(0.0);
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        match self.state {
            AppState::Loading => ui::loading::draw(frame, self),
            AppState::Playing => ui::player::draw(frame, self),
        }
    }
}
