//! WAV file sink.
//!
//! Mono 32-bit float, matching the engine's sample format exactly so the
//! file is a bit-perfect copy of what the device played.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

fn spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Streaming writer for the rendered track.
pub struct WavSink<W: Write + Seek> {
    writer: WavWriter<W>,
}

impl WavSink<BufWriter<File>> {
    /// Create (or truncate) a WAV file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, sample_rate: u32) -> hound::Result<Self> {
        Ok(Self {
            writer: WavWriter::create(path, spec(sample_rate))?,
        })
    }
}

impl<W: Write + Seek> WavSink<W> {
    /// Wrap any seekable writer.
    pub fn new(writer: W, sample_rate: u32) -> hound::Result<Self> {
        Ok(Self {
            writer: WavWriter::new(writer, spec(sample_rate))?,
        })
    }

    /// Append a block of mono samples.
    pub fn write_block(&mut self, samples: &[f32]) -> hound::Result<()> {
        for &sample in samples {
            self.writer.write_sample(sample)?;
        }
        Ok(())
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> u32 {
        self.writer.duration()
    }

    /// Patch up the header and flush. Dropping without finalizing leaves the
    /// file with understated chunk lengths.
    pub fn finalize(self) -> hound::Result<()> {
        self.writer.finalize()
    }
}
