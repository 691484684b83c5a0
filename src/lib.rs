pub mod audio; // Audio context seam and the cpal-backed device
pub mod config;
pub mod dsp;
pub mod game; // Board, cards, match resolution
pub mod music; // Melody loop driven from the UI thread
pub mod session;
pub mod synth; // Tone voices and the voice pool
pub mod timing;

pub use config::{GameConfig, MusicConfig};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
