//! Tone sequencer - the melody loop and the audio context it plays through
//!
//! The sequencer lives on the UI thread. It owns the only audio context of the
//! session, created the first time music is wanted and kept until exit. Each
//! melody tick hands one tone to the context; a tone that fails to play is
//! logged and dropped, and the loop carries on.

use std::time::Instant;

use log::{debug, info, warn};

use super::melody::MelodyState;
use crate::{
    audio::{AudioContext, AudioError, ContextState},
    config::MusicConfig,
    synth::Tone,
    timing::Interval,
};

/// Toggle label while the loop is stopped.
pub const PLAY_LABEL: &str = "Play Music";
/// Toggle label while the loop is running.
pub const PAUSE_LABEL: &str = "Pause Music";

type ContextFactory<C> = Box<dyn FnMut() -> Result<C, AudioError>>;

pub struct ToneSequencer<C: AudioContext> {
    config: MusicConfig,
    /// Builds the context on first demand
    factory: ContextFactory<C>,
    context: Option<C>,
    melody: MelodyState,
    /// Melody tick schedule
    interval: Interval,
}

impl<C: AudioContext> ToneSequencer<C> {
    /// Create a stopped sequencer. No context is built until music is wanted.
    pub fn new<F>(config: MusicConfig, factory: F) -> Self
    where
        F: FnMut() -> Result<C, AudioError> + 'static,
    {
        let interval = Interval::new(config.interval);
        Self {
            config,
            factory: Box::new(factory),
            context: None,
            melody: MelodyState::new(),
            interval,
        }
    }

    /// Build the audio context if there isn't one yet.
    ///
    /// Returns whether a context exists afterwards. A failed build is logged
    /// and tried again on the next call.
    pub fn ensure_context(&mut self) -> bool {
        if self.context.is_none() {
            match (self.factory)() {
                Ok(context) => {
                    info!("audio context created");
                    self.context = Some(context);
                }
                Err(err) => warn!("audio context unavailable: {err}"),
            }
        }
        self.context.is_some()
    }

    /// Resume the context if it exists and is suspended.
    pub fn resume_if_suspended(&mut self) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        if context.state() == ContextState::Suspended {
            if let Err(err) = context.resume() {
                warn!("could not resume audio context: {err}");
            }
        }
    }

    /// Any user gesture is a chance to unblock a suspended context.
    pub fn on_gesture(&mut self) {
        self.resume_if_suspended();
    }

    /// A card was flipped. Music asked for before a context could be built
    /// gets its context (and its loop) now.
    pub fn on_card_flip(&mut self, now: Instant) {
        if self.melody.is_playing() && self.context.is_none() {
            debug!("starting deferred music");
            self.ensure_context();
            self.resume_if_suspended();
            self.interval.start(now);
        }
    }

    /// Mark music as wanted without touching the audio device yet.
    ///
    /// The context and the loop are started by the next card flip.
    pub fn request_music(&mut self) {
        self.melody.set_playing(true);
    }

    /// Start the loop. No-op if already playing.
    pub fn start_music(&mut self, now: Instant) {
        if self.melody.is_playing() {
            return;
        }
        self.ensure_context();
        self.start_loop(now);
    }

    fn start_loop(&mut self, now: Instant) {
        self.resume_if_suspended();

        self.interval.start(now);
        self.melody.set_playing(true);
        info!("music started at position {}", self.melody.position());
    }

    /// Stop the loop. The melody position is kept.
    pub fn stop_music(&mut self) {
        self.interval.stop();
        if self.melody.is_playing() {
            info!("music stopped at position {}", self.melody.position());
        }
        self.melody.set_playing(false);
    }

    pub fn toggle_music(&mut self, now: Instant) {
        self.ensure_context();
        if self.melody.is_playing() {
            self.stop_music();
        } else {
            self.start_loop(now);
        }
    }

    /// Play one tone through the context.
    pub fn play_tone(&mut self, frequency: f32, duration: f32) -> Result<(), AudioError> {
        let tone = Tone::new(frequency)
            .with_duration(duration)
            .with_gain(self.config.peak_gain);
        match self.context.as_mut() {
            Some(context) => context.play_tone(tone),
            None => Err(AudioError::NoContext),
        }
    }

    /// Play the melody tick due by `now`, if any. Returns whether one ran.
    ///
    /// Ticks missed while the loop was not polled are dropped, so a stall
    /// plays one note rather than a burst.
    pub fn advance(&mut self, now: Instant) -> bool {
        let due = self.interval.poll_skip(now);
        if due {
            self.tick();
        }
        due
    }

    fn tick(&mut self) {
        let Some(frequency) = self.melody.next_note(&self.config.melody) else {
            return;
        };
        if let Err(err) = self.play_tone(frequency, self.config.note_seconds) {
            debug!("dropped {frequency} Hz tone: {err}");
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.next_due()
    }

    pub fn is_playing(&self) -> bool {
        self.melody.is_playing()
    }

    /// Label for the music toggle.
    pub fn label(&self) -> &'static str {
        if self.melody.is_playing() {
            PAUSE_LABEL
        } else {
            PLAY_LABEL
        }
    }

    /// Pressed state of the music toggle.
    pub fn pressed(&self) -> bool {
        self.melody.is_playing()
    }

    pub fn position(&self) -> u64 {
        self.melody.position()
    }

    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }
}
