//! Benchmarks for the tone voices.
//!
//! Run with: cargo bench
//!
//! The audio callback renders the whole voice pool once per block, so every
//! case here has to finish well inside the block's real-time deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pairs::dsp::envelope::ExpEnvelope;
use pairs::music::MELODY;
use pairs::synth::{Tone, TonePool};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];
const SAMPLE_RATE: f32 = 48_000.0;

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Long note so the decay stage never runs out mid-benchmark
        let mut env = ExpEnvelope::new(SAMPLE_RATE, Tone::DEFAULT_GAIN);
        env.note_on(3_600.0);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| env.render(black_box(&mut buffer)))
        });
    }

    group.finish();
}

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/pool");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Every melody note sounding at once
        let mut pool = TonePool::offline(SAMPLE_RATE, MELODY.len());
        for &freq in &MELODY {
            pool.push(Tone::new(freq).with_duration(3_600.0));
        }
        group.bench_with_input(BenchmarkId::new("six_voices", size), &size, |b, _| {
            b.iter(|| pool.render_block(black_box(&mut buffer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_envelope, bench_pool);
criterion_main!(benches);
