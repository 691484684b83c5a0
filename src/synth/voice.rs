use crate::dsp::{envelope::ExpEnvelope, oscillator::SineOscillator};

use super::message::Tone;

/// A sine oscillator shaped by a pluck envelope.
pub struct ToneVoice {
    osc: SineOscillator,
    env: ExpEnvelope,
    frequency: f32,
    /// Envelope still running; a silent voice is free for allocation
    sounding: bool,
    age: u64,
    sample_rate: f32,
}

impl ToneVoice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            osc: SineOscillator::new(),
            env: ExpEnvelope::new(sample_rate, Tone::DEFAULT_GAIN),
            frequency: 0.0,
            sounding: false,
            age: 0,
            sample_rate,
        }
    }

    pub fn start(&mut self, tone: Tone, age: u64) {
        self.frequency = tone.frequency;
        self.age = age;
        self.sounding = true;

        self.osc.reset();
        self.env.set_peak(tone.gain);
        self.env.note_on(tone.duration);
    }

    /// Overwrite `out` with this voice's signal.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            let gain = self.env.next_sample();
            *sample = self.osc.next_sample(self.frequency, self.sample_rate) * gain;
        }

        // Oscillator stops once the envelope tail is done
        if !self.env.is_active() {
            self.free();
        }
    }

    pub fn is_free(&self) -> bool {
        !self.sounding
    }

    pub fn free(&mut self) {
        self.sounding = false;
        self.frequency = 0.0;
        self.env.reset();
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn age(&self) -> u64 {
        self.age
    }

}
