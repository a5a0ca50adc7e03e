use asar_core::{AsarError, ClockTime, Profit};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("line {line}: {source}")]
    Value {
        line:   usize,
        #[source]
        source: AsarError,
    },

    #[error("line {line}: `{code}` record expects {expected}, got {got} fields")]
    Arity {
        line:     usize,
        code:     &'static str,
        expected: &'static str,
        got:      usize,
    },

    #[error("duplicate {kind} {name:?}")]
    Duplicate { kind: &'static str, name: String },

    #[error("{what} references unknown location {code:?}")]
    UnknownLocation { what: String, code: String },

    #[error("{what} references unknown vehicle class {name:?}")]
    UnknownClass { what: String, name: String },

    #[error("location {code:?} opens at {opening} after it closes at {closing}")]
    InvalidWindow {
        code:    String,
        opening: ClockTime,
        closing: ClockTime,
    },

    #[error("leg {index} has no profit entries")]
    NoProfits { index: usize },

    #[error("leg profits from {min} to {max} are too far apart to total over {legs} legs")]
    ProfitRange { min: Profit, max: Profit, legs: usize },

    #[error("too many {0} to index")]
    Capacity(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
