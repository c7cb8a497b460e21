//! The fixed voice repertoire: three synthesized drums and one bass.
//!
//! Drums are rendered once into one-second buffers and replayed from a
//! cursor; the bass is evaluated live, one sample per frame. The sequencer
//! drives both — it resets drum cursors and rewrites bass parameters, and
//! nothing else mutates them.

mod bass;
mod hihat;
mod kick;
mod snare;

pub use bass::BassVoice;
pub use hihat::hihat;
pub use kick::kick;
pub use snare::snare;

use crate::dsp::{render_percussion, PercussionParams};
use crate::rng::RandomSource;

/// One percussion voice: a precomputed waveform and a playback cursor.
///
/// The cursor is `None` while the voice is silent. Triggering rewinds it to
/// the start of the buffer; playback advances one frame per rendered sample
/// and deactivates past the end.
pub struct DrumVoice {
    buffer: Vec<f32>,
    cursor: Option<usize>,
}

impl DrumVoice {
    /// Render a one-second voice from a parameter preset.
    pub fn render(params: &PercussionParams, sample_rate: u32, rng: &mut dyn RandomSource) -> Self {
        let mut buffer = vec![0.0; sample_rate as usize];
        render_percussion(&mut buffer, sample_rate as f32, params, rng);
        Self {
            buffer,
            cursor: None,
        }
    }

    /// Wrap an already-rendered waveform.
    pub fn from_samples(buffer: Vec<f32>) -> Self {
        Self {
            buffer,
            cursor: None,
        }
    }

    /// Restart playback from the top of the buffer.
    pub fn trigger(&mut self) {
        self.cursor = (!self.buffer.is_empty()).then_some(0);
    }

    /// Advance playback by one frame. `None` while the voice is silent.
    pub fn next_sample(&mut self) -> Option<f32> {
        let cursor = self.cursor?;
        let sample = self.buffer[cursor];
        self.cursor = if cursor + 1 < self.buffer.len() {
            Some(cursor + 1)
        } else {
            None
        };
        Some(sample)
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn samples(&self) -> &[f32] {
        &self.buffer
    }
}

/// The three drum voices, rendered together at startup.
pub struct DrumKit {
    pub kick: DrumVoice,
    pub snare: DrumVoice,
    pub hihat: DrumVoice,
}

impl DrumKit {
    pub fn render(sample_rate: u32, rng: &mut dyn RandomSource) -> Self {
        Self {
            kick: DrumVoice::render(&kick(), sample_rate, rng),
            snare: DrumVoice::render(&snare(), sample_rate, rng),
            hihat: DrumVoice::render(&hihat(), sample_rate, rng),
        }
    }
}
