//! Error types shared by the address arithmetic and its drivers.

use thiserror::Error;

/// Failure raised while parsing or computing an address value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Structurally malformed input: wrong token count or a non-numeric token.
    #[error("parse error: {0}")]
    Parse(String),
    /// A numeric value outside its valid domain.
    #[error("range error: {0}")]
    Range(String),
}

impl CalcError {
    pub fn parse(msg: impl Into<String>) -> Self {
        CalcError::Parse(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        CalcError::Range(msg.into())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CalcError::Parse(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, CalcError::Range(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
