use thiserror::Error;

use crate::synth::Tone;

/// Whether a context is producing sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created but not started, or paused
    Suspended,
    Running,
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no default output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("audio context has not been created")]
    NoContext,
    #[error("tone queue is full")]
    QueueFull,
    #[error("unplayable tone: {frequency} Hz for {duration} s")]
    InvalidTone { frequency: f32, duration: f32 },
}

/// Something that can play tones.
///
/// Playback is best-effort: a failed `play_tone` loses that one note and
/// nothing else.
pub trait AudioContext {
    fn state(&self) -> ContextState;

    /// Start (or restart) output.
    fn resume(&mut self) -> Result<(), AudioError>;

    /// Schedule one tone to start now.
    fn play_tone(&mut self, tone: Tone) -> Result<(), AudioError>;
}

/// Reject tones the voices cannot render.
pub(crate) fn check_tone(tone: &Tone) -> Result<(), AudioError> {
    if tone.is_playable() {
        Ok(())
    } else {
        Err(AudioError::InvalidTone {
            frequency: tone.frequency,
            duration: tone.duration,
        })
    }
}
