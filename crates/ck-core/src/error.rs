//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert into `CkError`
//! via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `ck-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ck-*` crates.
pub type CkResult<T> = Result<T, CkError>;
