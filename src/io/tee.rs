//! Realtime hand-off from the render callback to the file writer.
//!
//! The audio callback must never touch the filesystem, so rendered blocks
//! are pushed into a wait-free SPSC ring buffer and a plain thread drains
//! them into the [`WavSink`](crate::io::WavSink). If the writer falls
//! behind, samples are dropped from the *file* side and counted — the device
//! stream is authoritative and never waits.

use rtrb::{Consumer, Producer, RingBuffer};

/// Producer half of the tee, owned by the audio callback.
pub struct SampleTee {
    producer: Producer<f32>,
    dropped: u64,
}

impl SampleTee {
    /// Create a tee holding up to `capacity` samples in flight. Returns the
    /// consumer half for the writer thread.
    pub fn new(capacity: usize) -> (Self, Consumer<f32>) {
        let (producer, consumer) = RingBuffer::new(capacity);
        (
            Self {
                producer,
                dropped: 0,
            },
            consumer,
        )
    }

    /// Push a rendered block toward the writer. Never blocks.
    pub fn push_block(&mut self, samples: &[f32]) {
        for &sample in samples {
            if self.producer.push(sample).is_err() {
                self.dropped += 1;
            }
        }
    }

    /// Samples the file sink has lost to back-pressure.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
