use std::f32::consts::TAU;

/// Sine oscillator with a normalized phase accumulator.
///
/// Phase lives in `[0, 1)` and advances by `frequency / sample_rate` per
/// sample, so the frequency can change between samples without a jump.
#[derive(Debug, Clone, Default)]
pub struct SineOscillator {
    phase: f32,
}

impl SineOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let out = (TAU * self.phase).sin();
        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();
        out
    }

    pub fn render(&mut self, buffer: &mut [f32], frequency: f32, sample_rate: f32) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(frequency, sample_rate);
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
