//! The preference vocabulary and its value types.

use std::fmt;
use std::str::FromStr;

use crate::PreferenceError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// On/off, defaulting to off.
    Toggle,
    /// Avoid / neutral / prefer, defaulting to neutral.
    Slider,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionKind::Toggle => "toggle",
            OptionKind::Slider => "slider",
        })
    }
}

/// Three-state preference.  The discriminant is the multiplier sign used by
/// the cost model.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slider {
    Avoid = -1,
    #[default]
    Neutral = 0,
    Prefer = 1,
}

impl Slider {
    #[inline]
    pub fn value(self) -> f64 {
        self as i8 as f64
    }

    pub fn from_i64(value: i64) -> Option<Slider> {
        match value {
            -1 => Some(Slider::Avoid),
            0 => Some(Slider::Neutral),
            1 => Some(Slider::Prefer),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceValue {
    Toggle(bool),
    Slider(Slider),
}

impl PreferenceValue {
    pub fn kind(self) -> OptionKind {
        match self {
            PreferenceValue::Toggle(_) => OptionKind::Toggle,
            PreferenceValue::Slider(_) => OptionKind::Slider,
        }
    }

    fn default_for(kind: OptionKind) -> PreferenceValue {
        match kind {
            OptionKind::Toggle => PreferenceValue::Toggle(false),
            OptionKind::Slider => PreferenceValue::Slider(Slider::Neutral),
        }
    }
}

/// A value as it arrives from outside: a JSON boolean or integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
}

impl RawValue {
    /// Validate against the kind of `name`.
    pub fn resolve(self, name: OptionName) -> Result<PreferenceValue, PreferenceError> {
        match (name.kind(), self) {
            (OptionKind::Toggle, RawValue::Bool(on)) => Ok(PreferenceValue::Toggle(on)),
            (OptionKind::Slider, RawValue::Int(value)) => Slider::from_i64(value)
                .map(PreferenceValue::Slider)
                .ok_or(PreferenceError::OutOfRange { name, value }),
            (expected, _) => Err(PreferenceError::WrongKind { name, expected }),
        }
    }
}

// ── Vocabulary ────────────────────────────────────────────────────────────────

/// Declares `OptionName` together with its wire names and kinds.
macro_rules! option_names {
    ($($variant:ident => $name:literal, $kind:ident;)+) => {
        /// Every preference the router understands.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum OptionName {
            $($variant,)+
        }

        impl OptionName {
            pub const ALL: &'static [OptionName] = &[$(OptionName::$variant,)+];
            pub const COUNT: usize = OptionName::ALL.len();

            pub fn as_str(self) -> &'static str {
                match self {
                    $(OptionName::$variant => $name,)+
                }
            }

            pub fn kind(self) -> OptionKind {
                match self {
                    $(OptionName::$variant => OptionKind::$kind,)+
                }
            }
        }

        impl FromStr for OptionName {
            type Err = PreferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(OptionName::$variant),)+
                    other => Err(PreferenceError::UnknownOption(other.to_owned())),
                }
            }
        }
    };
}

option_names! {
    AllowPrivateAccess          => "allow_private_access",           Toggle;
    AllowCustomerAccess         => "allow_customer_access",          Toggle;
    AllowWalkingOnRoads         => "allow_walking_on_roads",         Toggle;
    AllowHigherTrafficRoads     => "allow_higher_traffic_roads",     Toggle;
    PreferMarkedCrossings       => "prefer_marked_crossings",        Toggle;
    PreferTrafficLightCrossings => "prefer_traffic_light_crossings", Toggle;
    PreferAudibleCrossings      => "prefer_audible_crossings",       Toggle;
    PreferDippedKerbs           => "prefer_dipped_kerbs",            Toggle;
    PreferTactilePaving         => "prefer_tactile_paving",          Toggle;
    WheelchairAccessible        => "wheelchair_accessible",          Toggle;
    UnpavedPaths                => "unpaved_paths",                  Slider;
    PavedPaths                  => "paved_paths",                    Slider;
    CoveredPaths                => "covered_paths",                  Slider;
    IndoorPaths                 => "indoor_paths",                   Slider;
    Pavements                   => "pavements",                      Slider;
    LitPaths                    => "lit_paths",                      Slider;
    Steps                       => "steps",                          Slider;
    RightsOfWay                 => "rights_of_way",                  Slider;
    MaintainedPaths             => "maintained_paths",               Slider;
    DesirePaths                 => "desire_paths",                   Slider;
    TreacherousPaths            => "treacherous_paths",              Slider;
}

impl OptionName {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn default_value(self) -> PreferenceValue {
        PreferenceValue::default_for(self.kind())
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
