use thiserror::Error;

use crate::{OptionKind, OptionName};

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("unknown preference option {0:?}")]
    UnknownOption(String),

    #[error("option {name} expects a {expected} value")]
    WrongKind {
        name:     OptionName,
        expected: OptionKind,
    },

    #[error("slider {name} must be -1, 0 or 1, got {value}")]
    OutOfRange { name: OptionName, value: i64 },

    #[error("option {0} is a slider, not a toggle")]
    NotAToggle(OptionName),

    #[error("option {0} is a toggle, not a slider")]
    NotASlider(OptionName),

    #[error("preferences JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PrefResult<T> = Result<T, PreferenceError>;
