mod sequencer;

pub use sequencer::{LoadingSequencer, LoadingTick, PROGRESS_MAX};
