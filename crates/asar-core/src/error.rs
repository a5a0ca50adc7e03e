//! Primitive parse errors.
//!
//! Higher crates wrap `AsarError` as one variant of their own enums (see
//! `asar_model::ModelError`), adding the line number of the offending record.

use thiserror::Error;

/// Errors raised while reading a primitive value from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsarError {
    #[error("invalid HHMM time {0:?}: expected four digits with minutes below 60")]
    InvalidClock(String),

    #[error("invalid profit {0:?}: expected a decimal number with at most one fractional digit")]
    InvalidProfit(String),
}

/// Shorthand result type for primitive parsing.
pub type AsarResult<T> = Result<T, AsarError>;
