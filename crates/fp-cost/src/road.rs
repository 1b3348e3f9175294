//! Carriageway weights.

use fp_prefs::{OptionName, Preferences};
use fp_tags::{Highway, RoadClass, ServiceKind, WayProfile};

/// Base weight of a road class, or `None` if the way is not a road.
///
/// Higher-traffic classes are heavily discouraged; motorways and trunk roads
/// are effectively last resorts.
pub fn road_base_weight(way: &WayProfile, prefs: &Preferences) -> Option<f64> {
    let Highway::Road { class, .. } = way.highway else {
        return None;
    };
    let busier_ok = prefs.enabled(OptionName::AllowHigherTrafficRoads);
    let weight = match class {
        RoadClass::Motorway => 50_000.0,
        RoadClass::Trunk => 10_000.0,
        RoadClass::Primary => 20.0,
        RoadClass::Secondary => 15.0,
        RoadClass::Tertiary => if busier_ok { 5.0 } else { 10.0 },
        RoadClass::Unclassified => if busier_ok { 4.0 } else { 6.0 },
        RoadClass::Residential => 3.0,
        RoadClass::LivingStreet => 1.5,
        RoadClass::Service => match way.service {
            Some(ServiceKind::Driveway) => 1.0,
            Some(ServiceKind::ParkingAisle | ServiceKind::Parking) => 2.0,
            Some(ServiceKind::Alley) => 1.3,
            Some(ServiceKind::DriveThrough) => 5.0,
            Some(ServiceKind::Slipway) => 7.0,
            Some(ServiceKind::Layby) => 1.75,
            _ => 2.0,
        },
    };
    Some(weight)
}

/// Multiplier for walking on the carriageway itself.
pub fn road_factor(way: &WayProfile) -> f64 {
    let mut factor = 1.0;
    if way.lanes.is_some_and(|n| n >= 2) {
        factor *= 2.0;
    }
    if way.shoulder {
        factor *= 0.9;
    }
    if way.verge {
        factor *= 0.95;
    }
    factor
}
