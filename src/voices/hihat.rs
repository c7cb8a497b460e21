//! Hi-hat voice.
//!
//! Pure unfiltered white noise with a fast decay — no tonal component at
//! all. Mixed in quietly, the raw noise reads as a bright closed hat.

use crate::dsp::PercussionParams;

/// Parameter preset for the hi-hat.
pub fn hihat() -> PercussionParams {
    PercussionParams {
        amp: 0.0,
        amp_decay: 0.0,
        freq_hz: 0.0,
        freq_decay: 0.0,
        noise: 1.0,
        noise_decay: 0.9995,
        noise_filter: 0.0,
    }
}
