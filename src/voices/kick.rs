//! Kick drum voice.
//!
//! A deep sine body that starts at 35 Hz and sags lower as it decays, with a
//! burst of heavily low-passed noise for the beater attack. The amplitude
//! starts above full scale on purpose: the clamp in the renderer squares off
//! the first cycles, which reads as punch.

use crate::dsp::PercussionParams;

/// Parameter preset for the kick drum.
pub fn kick() -> PercussionParams {
    PercussionParams {
        amp: 2.0,
        amp_decay: 0.9995,
        freq_hz: 35.0,
        freq_decay: 0.001,
        noise: 5.0,
        noise_decay: 0.99,
        noise_filter: 0.93,
    }
}
