//! Worker tasks that back the runtime orchestration.
//!
//! The round worker owns the controller and every timer of the round.

mod recorder;
mod round;

pub use recorder::ResultRecorder;
pub use round::{Command, RoundTimings, RoundWorker};
