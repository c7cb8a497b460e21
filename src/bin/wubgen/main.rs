//! wubgen - endless procedural dance music, live and to disk
//!
//! Run with: cargo run --release [-- SECONDS [SEED]]
//!
//! With no arguments it plays (and records) until interrupted. Pass SECONDS
//! to render a fixed-length take with a properly finalized file, and SEED to
//! replay a take you liked.

mod app;

use app::Player;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let seconds = args.next().map(|arg| arg.parse::<f64>()).transpose()?;
    let seed = args.next().map(|arg| arg.parse::<u64>()).transpose()?;

    Player::new()
        .seconds(seconds)
        .seed(seed)
        .output("wub.wav")
        .run()
}
