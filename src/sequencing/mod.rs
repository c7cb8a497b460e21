pub mod beat;
pub mod scale;

pub use beat::BeatSequencer;
pub use scale::{midi_note_to_freq, BASE_NOTE, FILTER_SWEEP, MINOR_SCALE};
