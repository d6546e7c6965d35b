pub mod clock;

pub use clock::PlaybackClock;
