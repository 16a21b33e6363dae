//! Optional persistence of raw samples.
mod records;

pub use records::RecordsSink;
