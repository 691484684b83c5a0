// Purpose: Tone voices and the fixed voice pool the audio callback renders
// This layer sits above the DSP primitives and below the audio device

pub mod message;
pub mod pool;
pub mod voice;

pub use message::{Tone, ToneReceiver};
pub use pool::TonePool;
pub use voice::ToneVoice;
