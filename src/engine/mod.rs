//! Engine state aggregate and the per-sample render loop.
//!
//! One [`Engine`] owns everything that moves: the frame clock, the beat
//! sequencer, the bass voice, the drum kit, and the random source. Nothing
//! lives in statics, so independent engines can coexist and a seeded engine
//! replays the same track every run.
//!
//! After construction the render path is allocation-free and cannot fail;
//! it is meant to be called synchronously from an audio device callback.

use crate::rng::RandomSource;
use crate::sequencing::BeatSequencer;
use crate::voices::{BassVoice, DrumKit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Share of the final mix taken by the bass; the drum bus gets the rest.
const BASS_MIX: f32 = 0.3;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Tempo in beats per minute. Must be at least 60 — subdivision timing
    /// uses truncating integer arithmetic (see
    /// [`BeatSequencer::subdivision_frames`]).
    pub bpm: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            bpm: 200,
        }
    }
}

/// The complete synthesis engine.
pub struct Engine {
    config: EngineConfig,
    subdivision_frames: u64,
    global_frame: u64,
    sequencer: BeatSequencer,
    bass: BassVoice,
    drums: DrumKit,
    rng: Box<dyn RandomSource>,
}

impl Engine {
    /// Build an engine: renders the three drum buffers up front and parks
    /// the bass at its resting state. All allocation happens here.
    pub fn new(config: EngineConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let drums = DrumKit::render(config.sample_rate, rng.as_mut());

        Self {
            subdivision_frames: BeatSequencer::subdivision_frames(config.sample_rate, config.bpm),
            global_frame: 0,
            sequencer: BeatSequencer::new(config.bpm),
            bass: BassVoice::new(),
            drums,
            rng,
            config,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Absolute frames rendered so far.
    pub fn global_frame(&self) -> u64 {
        self.global_frame
    }

    /// Subdivisions the sequencer has fired so far.
    pub fn beat_count(&self) -> u32 {
        self.sequencer.beat_count()
    }

    /// Fill `out` with the next `out.len()` mono samples.
    ///
    /// Per sample: fire the sequencer if the frame clock sits on a
    /// subdivision boundary, advance the drum cursors, evaluate the bass,
    /// mix, clamp to [-1, 1].
    pub fn render(&mut self, out: &mut [f32]) {
        let sample_rate = self.config.sample_rate as f32;

        for sample in out.iter_mut() {
            if self.global_frame % self.subdivision_frames == 0 {
                self.sequencer
                    .fire(&mut self.bass, &mut self.drums, self.rng.as_mut());
            }

            // Drum bus. Each later voice scales down whatever is already on
            // the bus, and only while that voice is playing — the snare and
            // hat duck the drums they join
            let mut drum_bus = 0.0;
            if let Some(s) = self.drums.kick.next_sample() {
                drum_bus = s;
            }
            if let Some(s) = self.drums.snare.next_sample() {
                drum_bus = drum_bus * 0.8 + s;
            }
            if let Some(s) = self.drums.hihat.next_sample() {
                drum_bus = drum_bus * 0.8 + s * 0.05;
            }

            let bass = self.bass.next_sample(self.global_frame, sample_rate);
            let mixed = BASS_MIX * self.bass.gate * bass + (1.0 - BASS_MIX) * drum_bus;
            *sample = mixed.clamp(-1.0, 1.0);

            self.global_frame += 1;
        }
    }
}
