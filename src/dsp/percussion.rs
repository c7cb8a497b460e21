//! Offline percussion renderer.
//!
//! Drums are synthesized once at startup from a tone+noise model and played
//! back from their buffers, which keeps the render loop to a buffer read per
//! voice. The model is a decaying sine (the drum body) plus low-pass-filtered
//! white noise (the skin/wire rattle), everything shaped by per-frame decay
//! multipliers rather than an envelope generator.

use std::f64::consts::TAU;

use crate::dsp::onepole::OnePole;
use crate::rng::RandomSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for one percussion render.
///
/// `amp` and `freq_hz` are starting values: the amplitude and noise scale
/// decay multiplicatively per frame, the frequency decays linearly
/// (`freq_decay` Hz per frame). All three are floored at zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PercussionParams {
    pub amp: f32,
    pub amp_decay: f32,
    pub freq_hz: f32,
    pub freq_decay: f32,
    pub noise: f32,
    pub noise_decay: f32,
    /// One-pole coefficient for the noise path. 0.0 leaves the noise white.
    pub noise_filter: f32,
}

/// Render a percussion waveform into `dest`.
///
/// Per frame: tonal term `amp * sin(2π·freq·i/sample_rate)` using the current
/// decaying values, plus the noise term through a one-pole low-pass, clamped
/// to [-1, 1]. Deterministic for a given random sequence; the only side
/// effect is writing `dest`.
pub fn render_percussion(
    dest: &mut [f32],
    sample_rate: f32,
    params: &PercussionParams,
    rng: &mut dyn RandomSource,
) {
    let mut amp = params.amp;
    let mut freq = params.freq_hz;
    let mut noise = params.noise;
    let mut filter = OnePole::new();

    for (i, sample) in dest.iter_mut().enumerate() {
        let phase = TAU * freq as f64 * i as f64 / sample_rate as f64;
        let tone = amp * phase.sin() as f32;

        // White noise on a 1/100 lattice, same quantization the model was
        // tuned against
        let white = rng.draw_below(100) as f32 / 100.0 - 0.5;
        let rattle = filter.process(noise * white, params.noise_filter);

        *sample = (tone + rattle).clamp(-1.0, 1.0);

        amp = (amp * params.amp_decay).max(0.0);
        freq = (freq - params.freq_decay).max(0.0);
        noise = (noise * params.noise_decay).max(0.0);
    }
}
