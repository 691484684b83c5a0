//! Audio output.
//!
//! [`AudioContext`] is the seam between the tone sequencer and whatever
//! actually makes sound. [`DeviceContext`] is the real one: a cpal output
//! stream rendering a [`TonePool`](crate::synth::TonePool), fed over a
//! lock-free ring so the UI thread never blocks on the audio thread.

pub mod context;
pub mod device;

pub use context::{AudioContext, AudioError, ContextState};
pub use device::DeviceContext;
