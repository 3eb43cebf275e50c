//! File-based repository implementations.

mod results;

pub use results::{FileResultRepository, default_results_dir};
