use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Interval must be at least {min_secs}s to avoid hammering endpoints.")]
    IntervalTooShort { min_secs: u64 },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid base58 account key: {source}")]
    InvalidBase58 {
        #[source]
        source: bs58::decode::Error,
    },
    #[error("Account key must be {expected} bytes, got {actual}.")]
    InvalidAccountLength { expected: usize, actual: usize },
    #[error("No accounts configured.")]
    NoAccounts,
}
