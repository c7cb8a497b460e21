//! Snare drum voice.
//!
//! A tonal body an octave above the kick plus a long, barely-filtered noise
//! tail for the wire rattle. The noise decays much more slowly than the
//! kick's, which is what gives the snare its sustain.

use crate::dsp::PercussionParams;

/// Parameter preset for the snare drum.
pub fn snare() -> PercussionParams {
    PercussionParams {
        amp: 2.0,
        amp_decay: 0.9995,
        freq_hz: 70.0,
        freq_decay: 0.002,
        noise: 1.0,
        noise_decay: 0.9998,
        noise_filter: 0.5,
    }
}
