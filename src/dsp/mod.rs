//! Low-level DSP primitives used by the tone voices.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! run inside the audio callback. They stay focused on the signal math; voice
//! bookkeeping lives in [`crate::synth`].

/// Exponential attack/decay gain envelope for plucked tones.
pub mod envelope;
/// Phase-accumulating sine oscillator.
pub mod oscillator;

pub use envelope::EnvelopeStage;
