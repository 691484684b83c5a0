//! Background music: a short melody looped on a fixed tick.
//!
//! # Example
//!
//! ```ignore
//! use pairs::{audio::DeviceContext, music::ToneSequencer, MusicConfig};
//! use std::time::Instant;
//!
//! let mut music = ToneSequencer::new(MusicConfig::new(), DeviceContext::open);
//! music.toggle_music(Instant::now()); // "Pause Music"
//! loop {
//!     music.advance(Instant::now());
//!     // ...
//! }
//! ```

pub mod melody;
pub mod sequencer;

pub use melody::{MelodyState, MELODY};
pub use sequencer::{ToneSequencer, PAUSE_LABEL, PLAY_LABEL};
