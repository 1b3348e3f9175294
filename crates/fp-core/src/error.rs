//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the
//! validation done by `fp-core` itself.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be within ±90 and longitude within ±180")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `fp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
