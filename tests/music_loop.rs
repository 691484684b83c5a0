use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pairs::audio::{AudioContext, AudioError, ContextState};
use pairs::music::{ToneSequencer, MELODY, PAUSE_LABEL, PLAY_LABEL};
use pairs::synth::{Tone, TonePool};
use pairs::MusicConfig;

const TICK: Duration = Duration::from_millis(400);

/// Context that fails every third tone and records the rest.
struct FlakyContext {
    played: Rc<RefCell<Vec<Tone>>>,
    attempts: usize,
}

impl AudioContext for FlakyContext {
    fn state(&self) -> ContextState {
        ContextState::Running
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play_tone(&mut self, tone: Tone) -> Result<(), AudioError> {
        self.attempts += 1;
        if self.attempts % 3 == 0 {
            return Err(AudioError::QueueFull);
        }
        self.played.borrow_mut().push(tone);
        Ok(())
    }
}

fn flaky_sequencer(config: MusicConfig) -> (ToneSequencer<FlakyContext>, Rc<RefCell<Vec<Tone>>>) {
    let played = Rc::new(RefCell::new(Vec::new()));
    let handle = played.clone();
    let sequencer = ToneSequencer::new(config, move || {
        Ok(FlakyContext {
            played: handle.clone(),
            attempts: 0,
        })
    });
    (sequencer, played)
}

#[test]
fn failing_tones_do_not_interrupt_the_loop() {
    let (mut music, played) = flaky_sequencer(MusicConfig::new());
    let start = Instant::now();

    music.toggle_music(start);
    let mut now = start;
    for _ in 0..9 {
        now += TICK;
        assert!(music.advance(now));
    }

    let played: Vec<f32> = played.borrow().iter().map(|t| t.frequency).collect();
    assert_eq!(played.len(), 6);
    assert_eq!(
        played,
        vec![MELODY[0], MELODY[1], MELODY[3], MELODY[4], MELODY[0], MELODY[1]]
    );
    assert_eq!(music.position(), 9);
}

#[test]
fn looped_notes_use_configured_voicing() {
    let config = MusicConfig::new().note_seconds(0.5).peak_gain(0.2);
    let (mut music, played) = flaky_sequencer(config);
    let start = Instant::now();

    music.start_music(start);
    music.advance(start + TICK);

    let tone = played.borrow()[0];
    assert_eq!(tone.frequency, MELODY[0]);
    assert_eq!(tone.duration, 0.5);
    assert_eq!(tone.gain, 0.2);
}

#[test]
fn toggle_label_round_trips() {
    let (mut music, _) = flaky_sequencer(MusicConfig::new());
    let now = Instant::now();
    let labels: Vec<&str> = (0..2)
        .map(|_| {
            music.toggle_music(now);
            music.label()
        })
        .collect();
    assert_eq!(labels, vec![PAUSE_LABEL, PLAY_LABEL]);
}

#[test]
fn melody_renders_audibly_offline() {
    // Feed a full loop of tones through the voice pool, 400ms apart
    let sample_rate = 8_000.0;
    let mut pool = TonePool::offline(sample_rate, 4);
    let mut out = vec![0.0f32; (0.4 * sample_rate) as usize];
    let mut peak = 0.0f32;

    for &freq in &MELODY {
        pool.push(Tone::new(freq).with_duration(0.35));
        pool.render_block(&mut out);
        peak = out.iter().fold(peak, |acc, &x| acc.max(x.abs()));
        assert!(out.iter().all(|s| s.abs() <= 1.0));
    }

    assert!(peak > 0.1 && peak <= 0.25, "peak {peak}");
}
