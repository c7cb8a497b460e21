//! Low-level DSP primitives used by the voices and the render loop.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to embed directly inside voice structs and the audio callback. They
//! intentionally stay focused on the signal-processing math so the engine can
//! layer sequencing and mixing on top.

/// One-pole low-pass filter.
pub mod onepole;
/// Offline tone+noise percussion renderer.
pub mod percussion;

pub use onepole::OnePole;
pub use percussion::{render_percussion, PercussionParams};
