//! Tag interpretation error type.
//!
//! These never escape the public `Option`-returning interpreters; they exist so
//! that every warning carries the offending key and value.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagError {
    #[error("invalid numeric value: {key}={value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("unknown unit {unit:?}: {key}={value}")]
    UnknownUnit {
        key:   &'static str,
        value: String,
        unit:  String,
    },

    #[error("unknown tag value: {key}={value}")]
    UnknownValue { key: &'static str, value: String },

    #[error("invalid tag format: {key}={value}")]
    InvalidFormat { key: &'static str, value: String },
}

pub type TagResult<T> = Result<T, TagError>;
