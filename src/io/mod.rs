// Purpose - external sinks: the WAV file and the realtime hand-off to it

pub mod tee;
pub mod wav;

pub use tee::SampleTee;
pub use wav::WavSink;
