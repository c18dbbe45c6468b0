//! Shared error type for everything outside the query path.
//!
//! Query failures have their own taxonomy in `rn-planner`; this enum covers
//! parsing identifiers, validating configuration and reading networks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `rn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
