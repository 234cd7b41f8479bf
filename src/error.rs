use std::io;
use thiserror::Error;

/// Errors raised by the runtime value layer.
///
/// Construction, rendering, type checks and equality are total; only the
/// checked constructors, the variant narrowing helpers and the printer can fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid symbol name {name:?}: {reason}")]
    InvalidSymbolName { name: String, reason: &'static str },

    #[error("type error: expected {expected}, got {got}")]
    TypeError { expected: &'static str, got: &'static str },

    #[error("output failed: {0}")]
    Output(#[from] io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
