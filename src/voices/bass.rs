//! Wobble bass voice.
//!
//! A phase-modulated hard square swept by a slow filter, evaluated one
//! sample at a time against an absolute frame index.
//!
//! # How It Works
//!
//! 1. A sine modulator at `fm_mod` times the fundamental phase-modulates the
//!    carrier; `fm_index` scales how far. At index 0 the carrier is a plain
//!    square wave, at large indices it tears into inharmonic "glitch" noise.
//! 2. The carrier is hard-squared: only the sign of the sine survives, so the
//!    raw signal is always exactly ±1.
//! 3. A one-pole low-pass smooths the square. Its coefficient is swept by a
//!    sine LFO, mapped into (0.98, 1.00) — the narrow band that keeps the
//!    filter stable while still opening and closing audibly. That sweep is
//!    the wobble.
//!
//! The sequencer owns every public parameter here, including the volume
//! gate; the gate is applied by the render loop at mix time, not inside this
//! voice. Only the filter memory and the stored LFO value persist between
//! calls.

use std::f64::consts::TAU;

use crate::dsp::onepole::OnePole;
use crate::sequencing::{midi_note_to_freq, BASE_NOTE};

pub struct BassVoice {
    /// Fundamental frequency in Hz.
    pub freq_hz: f32,
    /// FM depth. 0 = clean square, hundreds = glitch.
    pub fm_index: f32,
    /// Modulator frequency as a multiple of the fundamental.
    pub fm_mod: f32,
    /// Filter-sweep LFO rate in Hz.
    pub lfo_freq_hz: f32,
    /// Volume gate, 0.0 or 1.0 — the sidechain-style duck around the snare.
    pub gate: f32,

    lfo_value: f32,
    filter: OnePole,
}

impl BassVoice {
    /// A voice at rest: base note, no modulation, gated silent until the
    /// sequencer opens it.
    pub fn new() -> Self {
        Self {
            freq_hz: midi_note_to_freq(BASE_NOTE),
            fm_index: 0.0,
            fm_mod: 2.0,
            lfo_freq_hz: 0.0,
            gate: 0.0,
            lfo_value: 0.0,
            filter: OnePole::new(),
        }
    }

    /// Evaluate one sample at the given absolute frame index.
    ///
    /// Returns the filtered, unclamped, ungated bass sample; the render loop
    /// applies the gate and mix weights.
    pub fn next_sample(&mut self, frame: u64, sample_rate: f32) -> f32 {
        let t = frame as f64 / sample_rate as f64;

        self.lfo_value = (TAU * self.lfo_freq_hz as f64 * t).sin() as f32;
        let coeff = self.lfo_value / 100.0 + 0.99;

        let modulator = (TAU * self.fm_mod as f64 * self.freq_hz as f64 * t).sin();
        let phase = TAU * self.freq_hz as f64 * t + modulator * self.fm_index as f64;
        let raw = hard_square(phase.sin() as f32);

        self.filter.process(raw, coeff)
    }

    /// Most recent LFO sample, in [-1, 1].
    pub fn lfo_value(&self) -> f32 {
        self.lfo_value
    }
}

impl Default for BassVoice {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign of the carrier: -1.0 below zero, +1.0 otherwise (zero included).
#[inline]
fn hard_square(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}
