use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info, warn};
use rtrb::{Producer, RingBuffer};

use super::context::{check_tone, AudioContext, AudioError, ContextState};
use crate::{
    synth::{Tone, TonePool},
    MAX_BLOCK_SIZE,
};

/// Capacity of the UI → audio tone ring.
const TONE_QUEUE_SIZE: usize = 64;
/// Simultaneous tones before the oldest is stolen.
const MAX_VOICES: usize = 8;

/// Audio context backed by the default cpal output device.
///
/// The stream is built paused, so a fresh context reports
/// [`ContextState::Suspended`] until [`resume`](AudioContext::resume).
pub struct DeviceContext {
    stream: cpal::Stream,
    tx: Producer<Tone>,
    state: ContextState,
}

impl DeviceContext {
    /// Open the default output device and build a (paused) stream for it.
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, rx) = RingBuffer::<Tone>::new(TONE_QUEUE_SIZE);
        let mut pool = TonePool::new(sample_rate, MAX_VOICES, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                    let block = &mut render_buf[..frames_to_render];
                    pool.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| error!("audio stream error: {err}"),
            None,
        )?;

        // Some hosts start streams immediately; hold output until resumed
        if let Err(err) = stream.pause() {
            warn!("could not pause new output stream: {err}");
        }

        info!("opened audio output at {sample_rate} Hz, {channels} channel(s)");

        Ok(Self {
            stream,
            tx,
            state: ContextState::Suspended,
        })
    }
}

impl AudioContext for DeviceContext {
    fn state(&self) -> ContextState {
        self.state
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        self.stream.play()?;
        self.state = ContextState::Running;
        Ok(())
    }

    fn play_tone(&mut self, tone: Tone) -> Result<(), AudioError> {
        check_tone(&tone)?;
        self.tx.push(tone).map_err(|_| AudioError::QueueFull)
    }
}
