//! Tone cues
//!
//! Procedurally generated sound effects - no asset files. A buzz is a raw
//! 200 Hz tone, success is a short C5/E5/G5 arpeggio, both with a linear
//! fade-out envelope.
//!
//! cpal streams are not `Send`, so a dedicated thread owns the output
//! stream and receives cues over a channel. If no output device can be
//! opened the manager stays disabled and gameplay continues silently.

use std::f32::consts::TAU;
use std::sync::{Arc, Mutex};
use std::thread;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Sender, bounded, unbounded};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ring touched the wire
    Buzz,
    /// Ring reached the far end
    Success,
}

/// Maximum simultaneous voices; the oldest is dropped at capacity.
const MAX_VOICES: usize = 8;

/// One fading sine tone, optionally with a delayed onset.
#[derive(Debug, Clone, Copy)]
pub struct ToneVoice {
    frequency: f32,
    duration: f32,
    volume: f32,
    delay: f32,
    time: f32,
}

impl ToneVoice {
    pub fn new(frequency: f32, duration: f32, volume: f32) -> Self {
        Self::delayed(frequency, duration, volume, 0.0)
    }

    pub fn delayed(frequency: f32, duration: f32, volume: f32, delay: f32) -> Self {
        Self { frequency, duration, volume, delay, time: 0.0 }
    }

    /// Next mono sample, `None` once the tone has played out.
    pub fn next_sample(&mut self, sample_rate: f32) -> Option<f32> {
        if self.is_done() {
            return None;
        }
        let sample = if self.time < self.delay {
            0.0
        } else {
            let t = self.time - self.delay;
            let fade = 1.0 - t / self.duration;
            (TAU * self.frequency * t).sin() * self.volume * fade
        };
        self.time += 1.0 / sample_rate;
        Some(sample)
    }

    pub fn is_done(&self) -> bool {
        self.time >= self.delay + self.duration
    }
}

/// Voices making up one cue.
pub fn cue_voices(cue: SoundCue) -> Vec<ToneVoice> {
    match cue {
        SoundCue::Buzz => vec![ToneVoice::new(200.0, 0.3, 0.7)],
        SoundCue::Success => vec![
            ToneVoice::delayed(523.0, 0.5, 0.5, 0.0),
            ToneVoice::delayed(659.0, 0.5, 0.5, 0.1),
            ToneVoice::delayed(784.0, 0.7, 0.6, 0.2),
        ],
    }
}

struct MixerState {
    voices: Vec<ToneVoice>,
    sample_rate: f32,
}

impl MixerState {
    fn mix(&mut self) -> f32 {
        let mut sample = 0.0;
        for voice in &mut self.voices {
            sample += voice.next_sample(self.sample_rate).unwrap_or(0.0);
        }
        self.voices.retain(|v| !v.is_done());
        sample.clamp(-1.0, 1.0)
    }
}

/// Cue playback manager.
pub struct AudioManager {
    tx: Option<Sender<SoundCue>>,
}

impl AudioManager {
    /// Open the default output device. Falls back to a disabled manager on
    /// any failure.
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<SoundCue>();
        let (ready_tx, ready_rx) = bounded::<bool>(1);

        // Detached on purpose: exits when the manager (and its sender) drops
        let _ = thread::spawn(move || {
            let state = Arc::new(Mutex::new(MixerState {
                voices: Vec::new(),
                sample_rate: 44100.0,
            }));

            let stream = match build_stream(Arc::clone(&state)) {
                Ok(stream) => stream,
                Err(err) => {
                    log::warn!("audio disabled: {err}");
                    let _ = ready_tx.send(false);
                    return;
                }
            };
            let _ = ready_tx.send(true);

            // Stream stays alive for as long as cues can arrive
            for cue in rx {
                if let Ok(mut mixer) = state.lock() {
                    mixer.voices.retain(|v| !v.is_done());
                    for voice in cue_voices(cue) {
                        if mixer.voices.len() >= MAX_VOICES {
                            mixer.voices.remove(0);
                        }
                        mixer.voices.push(voice);
                    }
                }
            }
            drop(stream);
        });

        match ready_rx.recv() {
            Ok(true) => Self { tx: Some(tx) },
            _ => Self { tx: None },
        }
    }

    /// Manager with no output at all.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue a cue. Silently dropped when disabled.
    pub fn play(&self, cue: SoundCue) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(cue);
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

fn build_stream(state: Arc<Mutex<MixerState>>) -> Result<cpal::Stream, String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or("no audio output device found")?;
    let config = device
        .default_output_config()
        .map_err(|e| format!("no default output config: {e}"))?;

    let channels = config.channels() as usize;
    if let Ok(mut mixer) = state.lock() {
        mixer.sample_rate = config.sample_rate().0 as f32;
    }

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    fill_buffer_f32(data, channels, &state);
                },
                |err| log::warn!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| format!("failed to build f32 stream: {e}"))?,
        cpal::SampleFormat::I16 => device
            .build_output_stream(
                &config.into(),
                move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                    fill_buffer_i16(data, channels, &state);
                },
                |err| log::warn!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| format!("failed to build i16 stream: {e}"))?,
        format => return Err(format!("unsupported sample format: {format:?}")),
    };

    stream.play().map_err(|e| format!("failed to start stream: {e}"))?;
    Ok(stream)
}

fn fill_buffer_f32(data: &mut [f32], channels: usize, state: &Arc<Mutex<MixerState>>) {
    let Ok(mut mixer) = state.lock() else {
        data.fill(0.0);
        return;
    };
    for frame in data.chunks_mut(channels) {
        let sample = mixer.mix();
        frame.fill(sample);
    }
}

fn fill_buffer_i16(data: &mut [i16], channels: usize, state: &Arc<Mutex<MixerState>>) {
    let Ok(mut mixer) = state.lock() else {
        data.fill(0);
        return;
    };
    for frame in data.chunks_mut(channels) {
        let sample = (mixer.mix() * i16::MAX as f32) as i16;
        frame.fill(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 44100.0;

    fn drain(mut voice: ToneVoice) -> Vec<f32> {
        let mut samples = Vec::new();
        while let Some(s) = voice.next_sample(SAMPLE_RATE) {
            samples.push(s);
        }
        samples
    }

    #[test]
    fn test_voice_length_matches_duration() {
        let samples = drain(ToneVoice::new(200.0, 0.3, 0.7));
        let expected = (0.3 * SAMPLE_RATE) as usize;
        // f32 time accumulation drifts a few samples over a whole tone
        assert!(samples.len().abs_diff(expected) <= 16);
    }

    #[test]
    fn test_envelope_fades_to_silence() {
        let samples = drain(ToneVoice::new(200.0, 0.3, 0.7));
        assert!(samples.iter().all(|s| s.abs() <= 0.7));
        assert!(samples.iter().any(|s| s.abs() > 0.3));
        // Tail of the fade is nearly silent
        let tail = &samples[samples.len() - 50..];
        assert!(tail.iter().all(|s| s.abs() < 0.05));
    }

    #[test]
    fn test_delayed_onset_is_silent() {
        let mut voice = ToneVoice::delayed(523.0, 0.1, 0.5, 0.1);
        // Stay just short of the onset to tolerate f32 time drift
        let lead_in = (0.09 * SAMPLE_RATE) as usize;
        for _ in 0..lead_in {
            assert_eq!(voice.next_sample(SAMPLE_RATE), Some(0.0));
        }
        // Sound after the delay
        let rest: Vec<f32> = std::iter::from_fn(|| voice.next_sample(SAMPLE_RATE)).collect();
        assert!(rest.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_cue_shapes() {
        let buzz = cue_voices(SoundCue::Buzz);
        assert_eq!(buzz.len(), 1);
        assert_eq!(buzz[0].frequency, 200.0);

        let success = cue_voices(SoundCue::Success);
        assert_eq!(success.len(), 3);
        // Ascending arpeggio with staggered onsets
        assert!(success.windows(2).all(|w| w[0].frequency < w[1].frequency));
        assert!(success.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn test_mixer_drops_finished_voices() {
        let mut mixer = MixerState {
            voices: cue_voices(SoundCue::Buzz),
            sample_rate: SAMPLE_RATE,
        };
        for _ in 0..(0.4 * SAMPLE_RATE) as usize {
            let s = mixer.mix();
            assert!((-1.0..=1.0).contains(&s));
        }
        assert!(mixer.voices.is_empty());
    }

    #[test]
    fn test_disabled_manager_swallows_cues() {
        let audio = AudioManager::disabled();
        assert!(!audio.is_enabled());
        audio.play(SoundCue::Buzz);
        audio.play(SoundCue::Success);
    }
}
