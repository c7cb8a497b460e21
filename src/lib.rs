pub mod dsp;
pub mod engine; // Engine state aggregate and the per-sample render loop
pub mod io;
pub mod rng; // Injectable random source
pub mod sequencing; // Tempo math and the probabilistic beat sequencer
pub mod voices; // Drum voices and the wobble bass

pub const MAX_BLOCK_SIZE: usize = 2048;
