//! Sample, per-method and per-endpoint result types, and the reducer that
//! folds samples into method statistics.
mod accumulator;
mod types;


pub use accumulator::MethodStatsBuilder;
pub use types::{AverageMode, MethodStats, Report, Sample};
