//! Musical constants: the note set the bass wanders over and the
//! filter-sweep rates the sequencer draws from.

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

/// Root of the bassline: MIDI note 28 (E1, ~41.2 Hz).
pub const BASE_NOTE: u8 = 28;

/// Natural-minor semitone offsets the bass note is drawn from.
pub const MINOR_SCALE: [u8; 7] = [0, 2, 3, 5, 7, 9, 10];

/// Filter-LFO rate multipliers, applied to the beats-per-second pulse.
/// One of these is drawn every half measure, so the wobble speed locks to
/// simple ratios of the tempo.
pub const FILTER_SWEEP: [f32; 4] = [2.0, 4.0, 1.0, 6.0];
