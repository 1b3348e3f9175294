//! Multipliers that apply to roads and paths alike.

use fp_prefs::{OptionName, Preferences};
use fp_tags::{Ford, Smoothness, SurfaceClass, WayProfile};

/// Steepest grade comfortable in a wheelchair.
const WHEELCHAIR_MAX_GRADE: f64 = 0.025;

/// Surface, smoothness, incline, fords, lighting and shelter.
pub fn general_factor(way: &WayProfile, prefs: &Preferences) -> f64 {
    let wheelchair = prefs.enabled(OptionName::WheelchairAccessible);
    let paved = 1.0 - 0.5 * prefs.level(OptionName::PavedPaths);
    let unpaved = 1.0 - 0.5 * prefs.level(OptionName::UnpavedPaths);
    let mut factor = 1.0;

    factor *= match way.surface {
        Some(SurfaceClass::NicePaved) => paved * 0.95,
        Some(SurfaceClass::Paved) => paved * if wheelchair { 1.1 } else { 0.95 },
        Some(SurfaceClass::NiceUnpaved) => unpaved * 0.99,
        Some(SurfaceClass::BareGround) => unpaved * 1.05,
        Some(SurfaceClass::Mud) => unpaved * 4.0,
        None => 1.0,
    };

    factor *= match way.smoothness {
        Some(Smoothness::Good) => 0.95,
        Some(Smoothness::Bad) | None => 1.0,
        Some(Smoothness::VeryBad) => 1.9,
        Some(Smoothness::Impassable) => {
            if way.sac_scale.is_some_and(|s| s.is_easy()) { 2.0 } else { 5.0 }
        }
    };

    if let Some(incline) = way.incline {
        if !incline.is_flat() {
            factor *= 1.1;
        }
        let steep = incline.grade().is_some_and(|g| g.abs() > WHEELCHAIR_MAX_GRADE);
        if steep && wheelchair {
            factor *= 3.0;
        }
    }

    factor *= match way.ford {
        Some(Ford::Yes) => 3.0,
        Some(Ford::SteppingStones) => 2.5,
        None => 1.0,
    };

    if way.lit == Some(true) {
        factor *= 1.0 - 0.3 * prefs.level(OptionName::LitPaths);
    }
    if way.indoor {
        factor *= 1.0 - 0.5 * prefs.level(OptionName::IndoorPaths);
    }
    if way.covered {
        factor *= 1.0 - 0.4 * prefs.level(OptionName::CoveredPaths);
    }

    factor
}
