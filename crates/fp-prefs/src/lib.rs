//! `fp-prefs` — the user's route preferences.
//!
//! A [`Preferences`] value holds one entry for every [`OptionName`]: toggles
//! (`bool`, default off) and sliders ([`Slider`], default neutral).  Every
//! way of constructing one validates names and value kinds up front, so the
//! cost model never sees an unknown option or a malformed value.
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`options`]     | `OptionName`, `OptionKind`, `Slider`, `PreferenceValue`  |
//! | [`preferences`] | `Preferences`, `PreferencesBuilder`, JSON loading        |
//! | [`error`]       | `PreferenceError`, `PrefResult<T>`                       |

pub mod error;
pub mod options;
pub mod preferences;

#[cfg(test)]
mod tests;

pub use error::{PrefResult, PreferenceError};
pub use options::{OptionKind, OptionName, PreferenceValue, RawValue, Slider};
pub use preferences::{Preferences, PreferencesBuilder};
