//! Session history: immutable interaction records and the append-only recorder.

mod record;
mod recorder;

pub use record::InteractionRecord;
pub use recorder::InteractionRecorder;
