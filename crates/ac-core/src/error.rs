//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `AcError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

/// Errors raised by `ac-core` itself.
#[derive(Debug, Error)]
pub enum AcError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `ac-*` crates.
pub type AcResult<T> = Result<T, AcError>;
