use crate::MAX_BLOCK_SIZE;

use super::{
    message::{Tone, ToneReceiver},
    voice::ToneVoice,
};

/// Fixed set of tone voices fed from a message queue.
///
/// Runs inside the audio callback: no allocation after construction. When
/// every voice is busy the oldest one is stolen.
pub struct TonePool<R: ToneReceiver> {
    voices: Vec<ToneVoice>,
    rx: R,
    temp_buffer: Vec<f32>,
    frame_counter: u64,
}

impl<R: ToneReceiver> TonePool<R> {
    pub fn new(sample_rate: f32, max_voices: usize, rx: R) -> Self {
        let voices = (0..max_voices.max(1))
            .map(|_| ToneVoice::new(sample_rate))
            .collect();

        Self {
            voices,
            rx,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
        }
    }

    /// Start any queued tones, then mix every sounding voice into `out`.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Some(tone) = self.rx.pop() {
            if !tone.is_playable() {
                continue;
            }
            let age = self.frame_counter;
            self.allocate_voice().start(tone, age);
        }

        out.fill(0.0);
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            for voice in &mut self.voices {
                if voice.is_free() {
                    continue;
                }
                let scratch = &mut self.temp_buffer[..chunk.len()];
                voice.render(scratch);
                for (o, v) in chunk.iter_mut().zip(scratch.iter()) {
                    *o += v;
                }
            }
        }

        self.frame_counter += out.len() as u64;
    }

    /// Voices currently producing sound.
    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| !v.is_free()).count()
    }

    fn allocate_voice(&mut self) -> &mut ToneVoice {
        // First pass: any free voice
        if let Some(idx) = self.voices.iter().position(ToneVoice::is_free) {
            return &mut self.voices[idx];
        }

        // Second pass: steal the oldest
        let idx = self
            .voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.age())
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &mut self.voices[idx]
    }
}

/// Convenience for tests and offline rendering.
impl TonePool<std::collections::VecDeque<Tone>> {
    pub fn offline(sample_rate: f32, max_voices: usize) -> Self {
        Self::new(sample_rate, max_voices, Default::default())
    }

    /// Queue a tone to start on the next rendered block.
    pub fn push(&mut self, tone: Tone) {
        self.rx.push_back(tone);
    }
}
