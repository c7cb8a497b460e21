//! Beat sequencer - the probabilistic 16th-note state machine.
//!
//! The sequencer fires once per subdivision boundary (a 16th-note at the
//! configured tempo). Each firing is a pass over a fixed list of rules keyed
//! on the running beat counter: deterministic pattern slots (downbeat kick,
//! backbeat snare, hats on every other step) interleaved with "1 in N"
//! draws that rewrite the bass parameters. There is no terminal state — the
//! counter only ever climbs.

use crate::rng::RandomSource;
use crate::sequencing::scale::{midi_note_to_freq, BASE_NOTE, FILTER_SWEEP, MINOR_SCALE};
use crate::voices::{BassVoice, DrumKit};

// "1 in N" odds per subdivision (or per half measure where noted)
const NOTE_CHANGE_CHANCE: u32 = 20;
const OCTAVE_JUMP_CHANCE: u32 = 3;
const GLITCH_CHANCE: u32 = 3;
const GLITCH_RETURN_CHANCE: u32 = 3;
const MODULATION_CHANCE: u32 = 5;
const SNARE_SILENCE_CHANCE: u32 = 3;
const GHOST_SNARE_CHANCE: u32 = 4;

/// Sequencer state: the tempo and the subdivision counter.
pub struct BeatSequencer {
    bpm: u32,
    beat_count: u32,
}

impl BeatSequencer {
    pub fn new(bpm: u32) -> Self {
        Self { bpm, beat_count: 0 }
    }

    /// Frames between subdivision boundaries.
    ///
    /// Deliberately truncating integer arithmetic: `bpm / 60` rounds the
    /// tempo down to whole beats per second, so 140 bpm at 44.1 kHz lands on
    /// 44100 / 2 / 4 = 5512 frames. The coarse quantization is part of the
    /// sound. `bpm` must be at least 60.
    pub fn subdivision_frames(sample_rate: u32, bpm: u32) -> u64 {
        assert!(bpm >= 60, "bpm below 60 truncates to zero beats per second");
        (sample_rate / (bpm / 60) / 4) as u64
    }

    /// Subdivisions fired so far.
    pub fn beat_count(&self) -> u32 {
        self.beat_count
    }

    /// Run one subdivision firing.
    ///
    /// Rules are keyed on the counter *before* it increments, so the very
    /// first firing observes count 0 and the opening kick lands on the first
    /// rendered sample. Draw order is part of the contract: with a seeded
    /// source, reordering the rules reorders the whole track.
    pub fn fire(&mut self, bass: &mut BassVoice, drums: &mut DrumKit, rng: &mut dyn RandomSource) {
        let beat = self.beat_count;

        // Half measure: re-pick how fast the filter wobbles, locked to a
        // ratio of the tempo
        if beat % 4 == 0 {
            let sweep = FILTER_SWEEP[rng.draw_below(FILTER_SWEEP.len() as u32) as usize];
            bass.lfo_freq_hz = self.bpm as f32 / 60.0 * sweep;
        }

        if rng.one_in(NOTE_CHANGE_CHANCE) {
            let degree = MINOR_SCALE[rng.draw_below(MINOR_SCALE.len() as u32) as usize];
            let octave = if rng.one_in(OCTAVE_JUMP_CHANCE) { 12 } else { 0 };
            bass.freq_hz = midi_note_to_freq(BASE_NOTE + degree + octave);
        }

        // Glitch onset and release are independent draws on the same
        // boundary; release runs second and overwrites an onset that landed
        // in the same firing
        if beat % 4 == 0 && rng.one_in(GLITCH_CHANCE) {
            bass.fm_index = (rng.draw_below(999) + 1) as f32;
        }
        if beat % 4 == 0 && rng.one_in(GLITCH_RETURN_CHANCE) {
            bass.fm_index = 0.0;
        }

        if rng.one_in(MODULATION_CHANCE) {
            bass.fm_mod = (rng.draw_below(3) + 1) as f32;
        }

        if beat % 16 == 0 {
            drums.kick.trigger();
        }

        // Backbeat: snare, with a chance to duck the bass under it
        if beat % 16 == 8 {
            if rng.one_in(SNARE_SILENCE_CHANCE) {
                bass.gate = 0.0;
            }
            drums.snare.trigger();
        }

        if beat % 16 == 10 && rng.one_in(GHOST_SNARE_CHANCE) {
            drums.snare.trigger();
        }

        // Duck release
        if beat % 16 == 12 {
            bass.gate = 1.0;
        }

        if beat % 16 == 6 {
            drums.kick.trigger();
        }

        if beat % 2 == 0 {
            drums.hihat.trigger();
        }

        self.beat_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgSource, RandomSource, ZeroSource};
    use crate::voices::DrumVoice;

    fn tiny_kit() -> DrumKit {
        DrumKit {
            kick: DrumVoice::from_samples(vec![1.0; 4]),
            snare: DrumVoice::from_samples(vec![1.0; 4]),
            hihat: DrumVoice::from_samples(vec![1.0; 4]),
        }
    }

    /// Fire through counts 0..n, draining cursors between firings so each
    /// observation reflects only the latest firing.
    fn fire_until(
        seq: &mut BeatSequencer,
        bass: &mut BassVoice,
        drums: &mut DrumKit,
        rng: &mut dyn RandomSource,
        n: u32,
    ) {
        for _ in 0..n {
            drums.kick = DrumVoice::from_samples(vec![1.0; 4]);
            drums.snare = DrumVoice::from_samples(vec![1.0; 4]);
            drums.hihat = DrumVoice::from_samples(vec![1.0; 4]);
            seq.fire(bass, drums, rng);
        }
    }

    #[test]
    fn subdivision_period_uses_truncating_tempo_math() {
        // 140 / 60 truncates to 2 whole beats per second
        assert_eq!(BeatSequencer::subdivision_frames(44_100, 140), 5_512);
        assert_eq!(BeatSequencer::subdivision_frames(44_100, 200), 3_675);
        assert_eq!(BeatSequencer::subdivision_frames(48_000, 120), 6_000);
    }

    #[test]
    #[should_panic(expected = "bpm below 60")]
    fn subdivision_period_rejects_sub_minute_tempo() {
        BeatSequencer::subdivision_frames(44_100, 59);
    }

    #[test]
    fn counter_increments_once_per_firing() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = PcgSource::seeded(5);

        for expected in 0..64 {
            assert_eq!(seq.beat_count(), expected);
            seq.fire(&mut bass, &mut drums, &mut rng);
        }
    }

    #[test]
    fn first_firing_lands_kick_and_hihat() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = ZeroSource;

        seq.fire(&mut bass, &mut drums, &mut rng);

        assert!(drums.kick.is_active());
        assert!(drums.hihat.is_active());
        assert!(!drums.snare.is_active());
    }

    #[test]
    fn kick_pattern_is_counts_zero_and_six() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = PcgSource::seeded(2);

        for beat in 0..32u32 {
            drums.kick = DrumVoice::from_samples(vec![1.0; 4]);
            seq.fire(&mut bass, &mut drums, &mut rng);
            let expected = beat % 16 == 0 || beat % 16 == 6;
            assert_eq!(
                drums.kick.is_active(),
                expected,
                "kick mismatch at count {beat}"
            );
        }
    }

    #[test]
    fn snare_lands_on_the_backbeat() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();

        // Draws that never fire, so only the unconditional snare at 8 remains
        struct NeverFire;
        impl RandomSource for NeverFire {
            fn draw_below(&mut self, bound: u32) -> u32 {
                bound - 1
            }
        }
        let mut rng = NeverFire;

        for beat in 0..16u32 {
            drums.snare = DrumVoice::from_samples(vec![1.0; 4]);
            seq.fire(&mut bass, &mut drums, &mut rng);
            assert_eq!(
                drums.snare.is_active(),
                beat == 8,
                "snare mismatch at count {beat}"
            );
        }
    }

    #[test]
    fn ghost_snare_always_fires_when_draws_are_zero() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = ZeroSource;

        fire_until(&mut seq, &mut bass, &mut drums, &mut rng, 10);

        drums.snare = DrumVoice::from_samples(vec![1.0; 4]);
        seq.fire(&mut bass, &mut drums, &mut rng);
        assert!(drums.snare.is_active(), "ghost snare should fire at count 10");
    }

    #[test]
    fn hihat_rides_every_even_count() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = PcgSource::seeded(8);

        for beat in 0..16u32 {
            drums.hihat = DrumVoice::from_samples(vec![1.0; 4]);
            seq.fire(&mut bass, &mut drums, &mut rng);
            assert_eq!(
                drums.hihat.is_active(),
                beat % 2 == 0,
                "hihat mismatch at count {beat}"
            );
        }
    }

    #[test]
    fn bass_ducks_under_the_snare_and_recovers() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = ZeroSource;

        // Counts 0..=7
        fire_until(&mut seq, &mut bass, &mut drums, &mut rng, 8);
        assert_eq!(bass.gate, 0.0, "gate starts closed");

        // Count 8: silence draw fires alongside the snare
        seq.fire(&mut bass, &mut drums, &mut rng);
        assert_eq!(bass.gate, 0.0);

        // Counts 9..=11, then 12 releases the duck
        fire_until(&mut seq, &mut bass, &mut drums, &mut rng, 3);
        seq.fire(&mut bass, &mut drums, &mut rng);
        assert_eq!(bass.gate, 1.0, "gate should reopen at count 12");
    }

    #[test]
    fn glitch_release_overwrites_onset_in_the_same_firing() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = ZeroSource;

        // Count 0 is a half-measure boundary: onset sets fm_index, release
        // immediately zeroes it again
        seq.fire(&mut bass, &mut drums, &mut rng);
        assert_eq!(bass.fm_index, 0.0);
    }

    #[test]
    fn zero_draws_pin_every_parameter() {
        let mut seq = BeatSequencer::new(200);
        let mut bass = BassVoice::new();
        let mut drums = tiny_kit();
        let mut rng = ZeroSource;

        seq.fire(&mut bass, &mut drums, &mut rng);

        // Sweep table entry 0 at 200 bpm
        assert!((bass.lfo_freq_hz - 200.0 / 60.0 * 2.0).abs() < 1e-4);
        // Note change fires with degree 0 and the octave jump: E2
        assert!((bass.freq_hz - midi_note_to_freq(BASE_NOTE + 12)).abs() < 1e-3);
        // Modulator redraw lands on the lowest multiple
        assert_eq!(bass.fm_mod, 1.0);
    }

    #[test]
    fn seeded_sequences_replay_identically() {
        let run = |seed: u64| {
            let mut seq = BeatSequencer::new(200);
            let mut bass = BassVoice::new();
            let mut drums = tiny_kit();
            let mut rng = PcgSource::seeded(seed);
            let mut trace = Vec::new();
            for _ in 0..256 {
                seq.fire(&mut bass, &mut drums, &mut rng);
                trace.push((bass.freq_hz, bass.fm_index, bass.fm_mod, bass.lfo_freq_hz));
            }
            trace
        };

        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }
}
