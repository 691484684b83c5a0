use crate::MIN_TIME;

/*
Exponential Pluck Envelope
==========================

Every melody note is a short pluck: a fast swell to a fixed peak, then a
long exponential fall back to silence. The oscillator keeps running for a
short tail after the fall so the note never ends on an abrupt step.

Vocabulary
----------

  floor       The "silent" level, 0.0001 (-80 dB). Exponential curves can't
              start from or reach exactly zero, so every ramp begins or ends
              here instead.

  peak        The loudest point of the note (0.12 by default), reached at the
              end of the attack.

  ratio       How much `level` is multiplied by per sample. A ramp from `a`
              to `b` over `n` samples uses ratio = (b / a)^(1 / n).


The Shape
---------

  Level
   peak ┐  ╱╲
        │ ╱  ╲
        │╱    ╲__
        │        ╲____
  floor └──────────────╲═══──→ Time
        Attack  Decay      Tail
        (20ms)  (to end)   (20ms)

Why exponential: the ear hears loudness on a log scale. A ramp that
multiplies by a constant each sample sounds like an even fade, where a
linear ramp sounds like it hangs and then drops off a cliff.


The State Machine
-----------------

    Idle ──note_on──▶ Attack ──peak──▶ Decay ──floor──▶ Tail ──▶ Idle

There is no gate and no release: the note's length is fixed at note_on. The
sample counts for each stage are computed once at note_on, so the per-sample
work is one multiply and one decrement.
*/

/// Level every ramp starts from and falls back to.
pub const FLOOR: f32 = 0.0001;
/// Attack length in seconds.
pub const ATTACK_TIME: f32 = 0.02;
/// How long the oscillator keeps running after the decay reaches the floor.
pub const TAIL_TIME: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,   // No note, output 0
    Attack, // Floor → peak
    Decay,  // Peak → floor
    Tail,   // Holding the floor until the oscillator stops
}

pub struct ExpEnvelope {
    peak: f32,
    sample_rate: f32,

    // Scheduled at note_on
    decay_time: f32,

    // Runtime state
    stage: EnvelopeStage,
    level: f32,
    ratio: f32,
    remaining: u32, // samples left in the current stage
}

impl ExpEnvelope {
    pub fn new(sample_rate: f32, peak: f32) -> Self {
        Self {
            peak: peak.clamp(FLOOR, 1.0),
            sample_rate,
            decay_time: MIN_TIME,
            stage: EnvelopeStage::Idle,
            level: 0.0,
            ratio: 1.0,
            remaining: 0,
        }
    }

    pub fn set_peak(&mut self, peak: f32) {
        self.peak = peak.clamp(FLOOR, 1.0);
    }

    /// Start a note that reaches the floor again `duration` seconds from now.
    pub fn note_on(&mut self, duration: f32) {
        self.decay_time = (duration - ATTACK_TIME).max(MIN_TIME);
        self.level = FLOOR;
        self.enter(EnvelopeStage::Attack);
    }

    fn samples(&self, seconds: f32) -> u32 {
        (seconds * self.sample_rate).round().max(1.0) as u32
    }

    fn enter(&mut self, stage: EnvelopeStage) {
        self.stage = stage;
        match stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
                self.ratio = 1.0;
                self.remaining = 0;
            }
            EnvelopeStage::Attack => {
                self.remaining = self.samples(ATTACK_TIME);
                self.ratio = (self.peak / FLOOR).powf(1.0 / self.remaining as f32);
            }
            EnvelopeStage::Decay => {
                self.level = self.peak;
                self.remaining = self.samples(self.decay_time);
                self.ratio = (FLOOR / self.peak).powf(1.0 / self.remaining as f32);
            }
            EnvelopeStage::Tail => {
                self.level = FLOOR;
                self.ratio = 1.0;
                self.remaining = self.samples(TAIL_TIME);
            }
        }
    }

    /// Advance by one sample and return the gain for it.
    pub fn next_sample(&mut self) -> f32 {
        if self.stage == EnvelopeStage::Idle {
            return 0.0;
        }

        let out = self.level;
        self.level *= self.ratio;
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            let next = match self.stage {
                EnvelopeStage::Attack => EnvelopeStage::Decay,
                EnvelopeStage::Decay => EnvelopeStage::Tail,
                EnvelopeStage::Tail | EnvelopeStage::Idle => EnvelopeStage::Idle,
            };
            self.enter(next);
        }

        debug_assert!((0.0..=1.0).contains(&out));
        out
    }

    /// Render a block of gain values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// True until the tail has finished.
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Idle
    }

    pub fn reset(&mut self) {
        self.enter(EnvelopeStage::Idle);
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}
