//! Player - streams the engine to the default output device while teeing
//! every rendered sample to a WAV file on a separate writer thread.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use wubgen::engine::{Engine, EngineConfig};
use wubgen::io::{SampleTee, WavSink};
use wubgen::rng::PcgSource;
use wubgen::MAX_BLOCK_SIZE;

/// Player builder
pub struct Player {
    seconds: Option<f64>,
    seed: Option<u64>,
    output: PathBuf,
    bpm: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            seconds: None,
            seed: None,
            output: PathBuf::from("wub.wav"),
            bpm: 200,
        }
    }

    /// Play for a fixed duration; `None` plays until interrupted.
    pub fn seconds(mut self, seconds: Option<f64>) -> Self {
        self.seconds = seconds;
        self
    }

    /// Fix the random seed; `None` seeds from entropy.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Where the recorded WAV goes.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Run the player (takes over, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;
        let seed = self.seed.unwrap_or_else(rand::random);

        let engine_config = EngineConfig {
            sample_rate,
            bpm: self.bpm,
        };
        let mut engine = Engine::new(engine_config, Box::new(PcgSource::seeded(seed)));

        println!("=== wubgen ===");
        println!("BPM: {}", self.bpm);
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        println!("Seed: {}", seed);
        println!("Recording to: {}", self.output.display());
        println!();
        match self.seconds {
            Some(seconds) => println!("Rendering {seconds} s..."),
            None => println!("Playing... Press Ctrl+C to stop"),
        }

        // The file sink drains on its own thread so the audio callback never
        // touches the filesystem. Four seconds of slack absorbs disk stalls.
        let sink =
            WavSink::create(&self.output, sample_rate).wrap_err("failed to open output file")?;
        let (mut tee, mut file_rx) = SampleTee::new(sample_rate as usize * 4);

        let done = Arc::new(AtomicBool::new(false));
        let writer_done = done.clone();
        let writer = std::thread::spawn(move || -> hound::Result<u32> {
            let mut sink = sink;
            let mut chunk = Vec::with_capacity(MAX_BLOCK_SIZE);
            loop {
                chunk.clear();
                while chunk.len() < MAX_BLOCK_SIZE {
                    match file_rx.pop() {
                        Ok(sample) => chunk.push(sample),
                        Err(_) => break,
                    }
                }

                if !chunk.is_empty() {
                    sink.write_block(&chunk)?;
                } else if writer_done.load(Ordering::Acquire) {
                    // Producer is gone and the ring is drained
                    let frames = sink.frames_written();
                    sink.finalize()?;
                    return Ok(frames);
                } else {
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        });

        // Set up the audio stream: render mono, tee to the file, fan out to
        // every device channel
        let mut mono = vec![0.0f32; MAX_BLOCK_SIZE];
        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut mono[..frames_to_render];
                    engine.render(block);
                    tee.push_block(block);

                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        match self.seconds {
            Some(seconds) => std::thread::sleep(Duration::from_secs_f64(seconds)),
            None => loop {
                std::thread::sleep(Duration::from_millis(100));
            },
        }

        // Stop rendering, then let the writer drain the ring and finalize
        drop(stream);
        done.store(true, Ordering::Release);
        let frames = writer
            .join()
            .map_err(|_| eyre!("file writer thread panicked"))?
            .wrap_err("failed to finalize output file")?;

        println!("Wrote {} frames to {}", frames, self.output.display());
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
