use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

use super::defaults::MIN_INTERVAL;

/// Accepted suffixes and their length in milliseconds. `ms` must be matched
/// before `m` and `s`.
const UNITS_MS: [(&str, u64); 4] = [("ms", 1), ("s", 1_000), ("m", 60_000), ("h", 3_600_000)];

/// Parses a collection interval and rejects anything under [`MIN_INTERVAL`].
///
/// # Errors
///
/// Returns an error when the value is not a duration or is too short.
pub fn parse_interval(s: &str) -> AppResult<Duration> {
    let interval = parse_duration_arg(s)?;
    if interval < MIN_INTERVAL {
        return Err(AppError::validation(ValidationError::IntervalTooShort {
            min_secs: MIN_INTERVAL.as_secs(),
        }));
    }
    Ok(interval)
}

/// Parses `<number>[ms|s|m|h]`; a bare number is seconds.
///
/// # Errors
///
/// Returns an error when the value is empty, malformed or zero.
pub fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let unit_start = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(unit_start);
    if digits.is_empty() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let count: u64 = digits.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let unit = match unit.trim() {
        "" => "s",
        other => other,
    };
    let Some((_, unit_ms)) = UNITS_MS.iter().find(|(suffix, _)| *suffix == unit) else {
        return Err(AppError::validation(ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        }));
    };
    let millis = count
        .checked_mul(*unit_ms)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
    if millis == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(Duration::from_millis(millis))
}
