//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub mod parsers;
mod types;


pub use cli::CollectorArgs;
pub use types::PositiveUsize;
