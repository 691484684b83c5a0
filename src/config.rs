//! Builder-style configuration for the game and the music loop.
//!
//! ```ignore
//! use pairs::{GameConfig, MusicConfig};
//! use std::time::Duration;
//!
//! let game = GameConfig::new().seed(7).mismatch_delay(Duration::from_millis(900));
//! let music = MusicConfig::new().interval(Duration::from_millis(300));
//! ```

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::music::melody::MELODY;

/// Timing and randomness for the board controller.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How long a matched pair stays pending before input unlocks
    pub match_delay: Duration,
    /// How long a mismatched pair stays face-up before flipping back
    pub mismatch_delay: Duration,
    /// Elapsed-time clock resolution
    pub clock_period: Duration,
    /// Fixed shuffle seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            match_delay: Duration::from_millis(500),
            mismatch_delay: Duration::from_millis(700),
            clock_period: Duration::from_secs(1),
            seed: None,
        }
    }

    pub fn match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    pub fn mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    pub fn clock_period(mut self, period: Duration) -> Self {
        self.clock_period = period;
        self
    }

    /// Make every shuffle reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Melody and voicing for the tone sequencer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MusicConfig {
    /// Frequencies (Hz) cycled by the loop
    pub melody: Vec<f32>,
    /// Time between melody ticks
    pub interval: Duration,
    /// Length of each looped note in seconds
    pub note_seconds: f32,
    /// Envelope peak for each note
    pub peak_gain: f32,
}

impl MusicConfig {
    pub fn new() -> Self {
        Self {
            melody: MELODY.to_vec(),
            interval: Duration::from_millis(400),
            note_seconds: 0.35,
            peak_gain: 0.12,
        }
    }

    pub fn melody(mut self, melody: impl Into<Vec<f32>>) -> Self {
        self.melody = melody.into();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn note_seconds(mut self, seconds: f32) -> Self {
        self.note_seconds = seconds;
        self
    }

    pub fn peak_gain(mut self, gain: f32) -> Self {
        self.peak_gain = gain;
        self
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self::new()
    }
}
