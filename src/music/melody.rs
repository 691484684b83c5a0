/// The default loop: an A-based arpeggio, in Hz.
pub const MELODY: [f32; 6] = [440.0, 523.25, 659.25, 880.0, 587.33, 783.99];

/// Playback flag plus a position that only ever moves forward.
///
/// Stopping does not rewind: a restarted loop picks up where it paused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MelodyState {
    playing: bool,
    position: u64,
}

impl MelodyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Ticks taken so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The note for the current tick, then step forward. `None` for an empty melody.
    pub fn next_note(&mut self, melody: &[f32]) -> Option<f32> {
        if melody.is_empty() {
            return None;
        }
        let note = melody[(self.position % melody.len() as u64) as usize];
        self.position = self.position.wrapping_add(1);
        Some(note)
    }
}
