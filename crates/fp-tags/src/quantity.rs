//! Numeric tags: speed limit, path width, lane count, incline.
//!
//! Values are trimmed and lowercased before parsing.  A quantity is either a
//! bare number (in the tag's default unit) or a number and a unit separated
//! by whitespace.

use fp_core::Tags;

use crate::{report, TagError, TagResult};

const KMH_PER_MPH: f64 = 1.609344;
const MPH_PER_KNOT: f64 = 1.15078;

// ── Speed limit ───────────────────────────────────────────────────────────────

/// Parse a `maxspeed` value into miles per hour.
///
/// A bare number is km/h.  Units: `mph`, `km/h` | `kmh` | `kmph`, `knots`.
pub fn parse_maxspeed_mph(value: &str) -> TagResult<f64> {
    const KEY: &str = "maxspeed";
    let normalised = value.trim().to_lowercase();
    let tokens: Vec<&str> = normalised.split_whitespace().collect();
    let (number, unit) = match tokens.as_slice() {
        [number] => (*number, "km/h"),
        [number, unit] => (*number, *unit),
        _ => return Err(TagError::InvalidFormat { key: KEY, value: value.to_owned() }),
    };
    let speed: f64 = number
        .parse()
        .map_err(|_| TagError::InvalidNumber { key: KEY, value: value.to_owned() })?;
    match unit {
        "mph" => Ok(speed),
        "km/h" | "kmh" | "kmph" => Ok(speed / KMH_PER_MPH),
        "knots" => Ok(speed * MPH_PER_KNOT),
        other => Err(TagError::UnknownUnit {
            key:   KEY,
            value: value.to_owned(),
            unit:  other.to_owned(),
        }),
    }
}

/// Speed limit in mph, or `None` if absent or unparseable (reported).
pub fn maxspeed_mph(tags: &Tags) -> Option<f64> {
    let value = tags.get("maxspeed").filter(|v| !v.is_empty())?;
    report(parse_maxspeed_mph(value).map(Some))
}

// ── Width ─────────────────────────────────────────────────────────────────────

/// Parse a `width` value into metres.  A bare number is metres; of the unit
/// forms only the metre family is understood.
pub fn parse_width_m(key: &'static str, value: &str) -> TagResult<f64> {
    let normalised = value.trim().to_lowercase();
    let tokens: Vec<&str> = normalised.split_whitespace().collect();
    let number = match tokens.as_slice() {
        [number] => *number,
        [number, "m" | "meter" | "meters" | "metre" | "metres"] => *number,
        [_, unit] => {
            return Err(TagError::UnknownUnit {
                key,
                value: value.to_owned(),
                unit:  (*unit).to_owned(),
            });
        }
        _ => return Err(TagError::InvalidFormat { key, value: value.to_owned() }),
    };
    number
        .parse()
        .map_err(|_| TagError::InvalidNumber { key, value: value.to_owned() })
}

/// Path width in metres from `width`, falling back to `est_width`.
pub fn width_m(tags: &Tags) -> Option<f64> {
    let (key, value) = match tags.get("width").filter(|v| !v.is_empty()) {
        Some(v) => ("width", v),
        None => ("est_width", tags.get("est_width").filter(|v| !v.is_empty())?),
    };
    report(parse_width_m(key, value).map(Some))
}

// ── Lanes ─────────────────────────────────────────────────────────────────────

/// Number of lanes, or `None` if absent or not an unsigned integer (reported).
pub fn lanes(tags: &Tags) -> Option<u32> {
    let value = tags.get("lanes").filter(|v| !v.is_empty())?;
    report(
        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| TagError::InvalidNumber { key: "lanes", value: value.to_owned() }),
    )
}

// ── Incline ───────────────────────────────────────────────────────────────────

/// Slope along a way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Incline {
    /// `incline=up`: slope known to exist, grade unknown.
    Up,
    /// `incline=down`.
    Down,
    /// `incline=yes`.
    Unspecified,
    /// Signed grade as a fraction (`0.1` = 10 %).
    Grade(f64),
}

impl Incline {
    /// `true` only for an explicit zero grade.
    pub fn is_flat(self) -> bool {
        matches!(self, Incline::Grade(g) if g == 0.0)
    }

    /// Grade as a fraction if one was given.
    pub fn grade(self) -> Option<f64> {
        match self {
            Incline::Grade(g) => Some(g),
            _ => None,
        }
    }
}

/// Parse an `incline` value: `up` | `down` | `yes` | `no`, `N%`, `N°`, or a
/// bare number (percent).
pub fn parse_incline(value: &str) -> TagResult<Incline> {
    const KEY: &str = "incline";
    let normalised = value.trim().to_lowercase();
    let invalid = || TagError::InvalidNumber { key: KEY, value: value.to_owned() };
    match normalised.as_str() {
        "up" => Ok(Incline::Up),
        "down" => Ok(Incline::Down),
        "yes" => Ok(Incline::Unspecified),
        "no" => Ok(Incline::Grade(0.0)),
        other => {
            if let Some(percent) = other.strip_suffix('%') {
                let p: f64 = percent.trim().parse().map_err(|_| invalid())?;
                Ok(Incline::Grade(p / 100.0))
            } else if let Some(degrees) = other.strip_suffix('°') {
                let d: f64 = degrees.trim().parse().map_err(|_| invalid())?;
                Ok(Incline::Grade(d.to_radians().tan()))
            } else {
                let p: f64 = other.parse().map_err(|_| invalid())?;
                Ok(Incline::Grade(p / 100.0))
            }
        }
    }
}

/// Incline of a way, or `None` if absent or unparseable (reported).
pub fn incline(tags: &Tags) -> Option<Incline> {
    let value = tags.get("incline").filter(|v| !v.is_empty())?;
    report(parse_incline(value).map(Some))
}
