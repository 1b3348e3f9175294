//! Path weights.
//!
//! A path starts at weight 1 and every recognised fact multiplies it.  A
//! fact that makes the path unusable returns `+∞` immediately; no factor
//! applied afterwards is ever zero, so the early return changes nothing.

use fp_prefs::{OptionName, Preferences};
use fp_tags::{
    Designation, Highway, Maintenance, PathClass, SacScale, TrailVisibility, WayProfile,
    Wheelchair,
};

/// Paths narrower than this are treated as impassable.
const MIN_WIDTH_M: f64 = 0.20;

/// Weight of a path, or `None` if the way is not a path.
pub fn path_weight(way: &WayProfile, prefs: &Preferences) -> Option<f64> {
    let Highway::Path(class) = way.highway else {
        return None;
    };
    let mut weight = 1.0;

    if class == PathClass::Cycleway {
        let mixed_use = way.segregated.is_some() || way.foot_designated;
        if !mixed_use {
            weight *= 1.5;
        }
    }
    if class == PathClass::Steps {
        weight *= 1.0 - 0.5 * prefs.level(OptionName::Steps);
    }

    match way.maintenance() {
        Maintenance::Maintained => weight *= 1.0 - 0.1 * prefs.level(OptionName::MaintainedPaths),
        Maintenance::Informal => {
            weight *= 1.05;
            weight *= 1.0 - 0.1 * prefs.level(OptionName::DesirePaths);
        }
        Maintenance::Unknown => {}
    }

    // Difficulty.
    let treacherous = prefs.level(OptionName::TreacherousPaths);
    let by_treachery = |prefer: f64, avoid: f64, neutral: f64| {
        if treacherous > 0.0 {
            prefer
        } else if treacherous < 0.0 {
            avoid
        } else {
            neutral
        }
    };
    weight *= match way.sac_scale {
        Some(SacScale::Strolling) => 0.9,
        Some(SacScale::Hiking) | None => 1.0,
        Some(SacScale::MountainHiking) => 2.5,
        Some(SacScale::DemandingMountainHiking) => by_treachery(0.99, 10.0, 3.0),
        Some(SacScale::AlpineHiking) => by_treachery(20.0, 1000.0, 30.0),
        Some(SacScale::DemandingAlpineHiking | SacScale::DifficultAlpineHiking) => {
            return Some(f64::INFINITY);
        }
    };

    weight *= match way.effective_trail_visibility() {
        Some(TrailVisibility::Excellent) => 0.9,
        Some(TrailVisibility::Good) => 1.02,
        Some(TrailVisibility::Poor) => 1.05,
        None => 1.0,
    };
    if way.trailblazed {
        weight *= 0.91;
    }

    match way.width_m {
        Some(w) if w < MIN_WIDTH_M => return Some(f64::INFINITY),
        Some(w) if w > 5.0 => weight *= 0.9,
        Some(w) if w > 2.0 => weight *= 0.975,
        _ => {}
    }

    let right_of_way = match way.designation {
        Some(
            Designation::PublicFootpath
            | Designation::PublicBridleway
            | Designation::RestrictedByway
            | Designation::CorePath,
        ) => Some(0.9),
        Some(Designation::BywayOpenToAllTraffic) => Some(0.95),
        Some(Designation::PublicRightOfWay) => Some(0.91),
        Some(Designation::Other) | None => None,
    };
    if let Some(discount) = right_of_way {
        weight *= discount * (1.0 - 0.1 * prefs.level(OptionName::RightsOfWay));
    }

    match way.segregated {
        Some(true) => weight *= 0.98,
        Some(false) => weight *= 1.02,
        None => {}
    }
    if way.obstacle_vegetation {
        weight *= 1.10;
    }
    if way.footway_sidewalk {
        weight *= 1.0 - 0.4 * prefs.level(OptionName::Pavements);
    }

    if prefs.enabled(OptionName::WheelchairAccessible) {
        weight *= match way.effective_wheelchair() {
            Wheelchair::Yes => 0.9,
            Wheelchair::No => 100.0,
            Wheelchair::Limited => 0.96,
            Wheelchair::Designated => 0.89,
        };
    }

    Some(weight)
}
