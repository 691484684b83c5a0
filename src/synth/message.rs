use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One note request: a sine tone at `frequency` Hz lasting `duration` seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: f32,
    pub gain: f32,
}

impl Tone {
    /// Length of a tone when none is given.
    pub const DEFAULT_DURATION: f32 = 0.18;
    /// Envelope peak when none is given.
    pub const DEFAULT_GAIN: f32 = 0.12;

    pub fn new(frequency: f32) -> Self {
        Self {
            frequency,
            duration: Self::DEFAULT_DURATION,
            gain: Self::DEFAULT_GAIN,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Positive, finite frequency and duration.
    pub fn is_playable(&self) -> bool {
        self.frequency.is_finite()
            && self.frequency > 0.0
            && self.duration.is_finite()
            && self.duration > 0.0
    }
}

pub trait ToneReceiver {
    fn pop(&mut self) -> Option<Tone>;
}

impl ToneReceiver for rtrb::Consumer<Tone> {
    fn pop(&mut self) -> Option<Tone> {
        rtrb::Consumer::pop(self).ok()
    }
}

/// Offline queue, for rendering without an audio device.
impl ToneReceiver for VecDeque<Tone> {
    fn pop(&mut self) -> Option<Tone> {
        self.pop_front()
    }
}
