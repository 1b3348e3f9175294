//! The validated preference set.

use std::collections::BTreeMap;
use std::io::Read;

use crate::{
    OptionKind, OptionName, PrefResult, PreferenceError, PreferenceValue, RawValue, Slider,
};

/// One value per option in the vocabulary, validated at construction.
///
/// Read-only once built; share it across requests by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    values: [PreferenceValue; OptionName::COUNT],
}

impl Default for Preferences {
    /// Toggles off, sliders neutral.
    fn default() -> Self {
        let mut values = [PreferenceValue::Toggle(false); OptionName::COUNT];
        for &name in OptionName::ALL {
            values[name.index()] = name.default_value();
        }
        Self { values }
    }
}

impl Preferences {
    pub fn builder() -> PreferencesBuilder {
        PreferencesBuilder::default()
    }

    /// Build from raw `(name, value)` pairs.  Options not named keep their
    /// defaults; a later pair for the same name overrides an earlier one.
    pub fn from_values<'a, I>(values: I) -> PrefResult<Preferences>
    where
        I: IntoIterator<Item = (&'a str, RawValue)>,
    {
        let mut prefs = Preferences::default();
        for (raw_name, raw) in values {
            let name: OptionName = raw_name.parse()?;
            prefs.values[name.index()] = raw.resolve(name)?;
        }
        Ok(prefs)
    }

    /// Parse a JSON object such as `{"wheelchair_accessible": true, "steps": -1}`.
    pub fn from_json_str(json: &str) -> PrefResult<Preferences> {
        let map: BTreeMap<String, RawValue> = serde_json::from_str(json)?;
        Self::from_values(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> PrefResult<Preferences> {
        let map: BTreeMap<String, RawValue> = serde_json::from_reader(reader)?;
        Self::from_values(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    #[inline]
    pub fn get(&self, name: OptionName) -> PreferenceValue {
        self.values[name.index()]
    }

    // ── Checked accessors ─────────────────────────────────────────────────

    pub fn is_enabled(&self, name: OptionName) -> PrefResult<bool> {
        match self.get(name) {
            PreferenceValue::Toggle(on) => Ok(on),
            PreferenceValue::Slider(_) => Err(PreferenceError::NotAToggle(name)),
        }
    }

    pub fn slider(&self, name: OptionName) -> PrefResult<Slider> {
        match self.get(name) {
            PreferenceValue::Slider(s) => Ok(s),
            PreferenceValue::Toggle(_) => Err(PreferenceError::NotASlider(name)),
        }
    }

    pub fn is_preferred(&self, name: OptionName) -> PrefResult<bool> {
        self.slider(name).map(|s| s == Slider::Prefer)
    }

    pub fn is_avoided(&self, name: OptionName) -> PrefResult<bool> {
        self.slider(name).map(|s| s == Slider::Avoid)
    }

    pub fn is_neutral(&self, name: OptionName) -> PrefResult<bool> {
        self.slider(name).map(|s| s == Slider::Neutral)
    }

    // ── Infallible accessors ──────────────────────────────────────────────
    //
    // For call sites naming a constant option whose kind is known.  A slider
    // read as a toggle is off; a toggle read as a slider is neutral.

    #[inline]
    pub fn enabled(&self, name: OptionName) -> bool {
        matches!(self.get(name), PreferenceValue::Toggle(true))
    }

    /// Slider position as `-1.0`, `0.0` or `1.0`.
    #[inline]
    pub fn level(&self, name: OptionName) -> f64 {
        match self.get(name) {
            PreferenceValue::Slider(s) => s.value(),
            PreferenceValue::Toggle(_) => 0.0,
        }
    }

    /// Options that differ from their defaults, in vocabulary order.
    pub fn non_default(&self) -> impl Iterator<Item = (OptionName, PreferenceValue)> + '_ {
        OptionName::ALL
            .iter()
            .map(|&name| (name, self.get(name)))
            .filter(|&(name, value)| value != name.default_value())
    }
}

/// Typed construction of [`Preferences`].
///
/// ```rust,ignore
/// let prefs = Preferences::builder()
///     .toggle(OptionName::WheelchairAccessible, true)
///     .slider(OptionName::Steps, Slider::Avoid)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct PreferencesBuilder {
    prefs: Preferences,
    error: Option<PreferenceError>,
}

impl PreferencesBuilder {
    pub fn toggle(self, name: OptionName, on: bool) -> Self {
        self.set(name, PreferenceValue::Toggle(on))
    }

    pub fn slider(self, name: OptionName, value: Slider) -> Self {
        self.set(name, PreferenceValue::Slider(value))
    }

    /// Fails with the first kind mismatch seen, if any.
    pub fn build(self) -> PrefResult<Preferences> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.prefs),
        }
    }

    fn set(mut self, name: OptionName, value: PreferenceValue) -> Self {
        let expected: OptionKind = name.kind();
        if value.kind() == expected {
            self.prefs.values[name.index()] = value;
        } else if self.error.is_none() {
            self.error = Some(PreferenceError::WrongKind { name, expected });
        }
        self
    }
}
