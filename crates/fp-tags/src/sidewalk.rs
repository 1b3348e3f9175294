//! Sidewalk presence.

use fp_core::Tags;

use crate::TagError;

/// Which side(s) of a road carry a walkable sidewalk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sidewalk {
    Both,
    Left,
    Right,
    /// No usable sidewalk: none at all, drawn as a separate way, or a lane.
    No,
}

const NO_VALUES: [&str; 4] = ["no", "none", "separate", "lane"];

/// Side-specific keys in the order they are consulted.
const SIDE_KEYS: [(&str, Sidewalk); 3] = [
    ("sidewalk:left", Sidewalk::Left),
    ("sidewalk:right", Sidewalk::Right),
    ("sidewalk:both", Sidewalk::Both),
];

/// Resolve `sidewalk`, `sidewalk:left`, `sidewalk:right`, `sidewalk:both`.
///
/// Side-specific tags are consulted first, in the order left, right, both.
/// The first one carrying `yes` or a negative value decides; an unrecognised
/// value is reported and the next key is tried.  Only then is the combined
/// `sidewalk` tag read.  `None` means no usable information.
pub fn sidewalk(tags: &Tags) -> Option<Sidewalk> {
    for (key, side) in SIDE_KEYS {
        let Some(value) = tags.get(key) else { continue };
        match value {
            "yes" => return Some(side),
            v if NO_VALUES.contains(&v) => return Some(Sidewalk::No),
            v => log::warn!("{}", TagError::UnknownValue { key, value: v.to_owned() }),
        }
    }

    match tags.get("sidewalk")? {
        "both" => Some(Sidewalk::Both),
        "left" => Some(Sidewalk::Left),
        "right" => Some(Sidewalk::Right),
        v if NO_VALUES.contains(&v) => Some(Sidewalk::No),
        v => {
            log::warn!("{}", TagError::UnknownValue { key: "sidewalk", value: v.to_owned() });
            None
        }
    }
}
