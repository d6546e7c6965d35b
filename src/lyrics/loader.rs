use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{fetch, LineSequence};
use crate::config::FetchConfig;

/// Result of one background load.
#[derive(Debug, Clone)]
pub struct LoadedLyrics {
    pub token: u64,
    pub locator: String,
    pub lines: LineSequence,
}

/// Loads lyrics on worker threads with last-load-wins ordering.
///
/// Every request gets a fresh token. Results arriving for anything but the
/// latest token are dropped, so a slow earlier response can never replace
/// a newer one.
pub struct LyricsLoader {
    config: FetchConfig,
    latest: u64,
    pending: bool,
    tx: Sender<LoadedLyrics>,
    rx: Receiver<LoadedLyrics>,
}

impl LyricsLoader {
    pub fn new(config: FetchConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            config,
            latest: 0,
            pending: false,
            tx,
            rx,
        }
    }

    /// Start loading `locator` in the background and return its token.
    pub fn request(&mut self, locator: &str) -> u64 {
        let config = self.config.clone();
        let target = locator.to_string();
        self.request_with(locator.to_string(), move || {
            fetch::load_lyrics(&target, &config)
        })
    }

    fn request_with<F>(&mut self, locator: String, load: F) -> u64
    where
        F: FnOnce() -> LineSequence + Send + 'static,
    {
        self.latest += 1;
        self.pending = true;
        let token = self.latest;
        let tx = self.tx.clone();

        tracing::debug!(token, locator = %locator, "Starting lyrics load");
        thread::spawn(move || {
            let lines = load();
            // Receiver may be gone if the app already quit
            let _ = tx.send(LoadedLyrics {
                token,
                locator,
                lines,
            });
        });

        token
    }

    /// Drain finished loads, returning the result of the latest request if
    /// it has arrived.
    pub fn poll(&mut self) -> Option<LoadedLyrics> {
        let mut fresh = None;
        while let Ok(loaded) = self.rx.try_recv() {
            if loaded.token == self.latest {
                fresh = Some(loaded);
            } else {
                tracing::debug!(
                    token = loaded.token,
                    latest = self.latest,
                    "Discarding stale lyrics load"
                );
            }
        }

        if fresh.is_some() {
            self.pending = false;
        }
        fresh
    }

    /// Whether the latest request has not delivered yet.
    pub fn is_loading(&self) -> bool {
        self.pending
    }

    #[cfg(test)]
    pub fn latest_token(&self) -> u64 {
        self.latest
    }
}
