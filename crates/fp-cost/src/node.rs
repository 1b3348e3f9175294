//! Vertex costs: barriers and crossings.
//!
//! A vertex cost is a flat charge, paid once when a route passes through the
//! vertex, not a per-metre weight.

use fp_prefs::{OptionName, Preferences};
use fp_tags::{Crossing, CrossingInfo, Kerb, NodeProfile};

use crate::{access_is_legal, Cost};

/// Base charge for a crossing of unknown type.
const DEFAULT_CROSSING: f64 = 2.5;

pub fn node_cost(node: &NodeProfile, prefs: &Preferences) -> Cost {
    if !node.tagged {
        return Cost::ZERO;
    }
    if !access_is_legal(node.access, prefs) || node.barrier_blocks() {
        return Cost::IMPASSABLE;
    }
    match &node.crossing {
        Some(crossing) => Cost::new(crossing_cost(crossing, prefs)),
        None => Cost::ZERO,
    }
}

/// Charge for crossing a road at this node.
pub fn crossing_cost(crossing: &CrossingInfo, prefs: &Preferences) -> f64 {
    // A zebra reference overrides `crossing=no` but not the explicit types.
    let mut weight = match crossing.kind {
        Some(Crossing::TrafficSignals) => 1.0,
        Some(Crossing::Uncontrolled | Crossing::Unmarked) => 2.0,
        Some(Crossing::Informal) => 4.0,
        Some(Crossing::Zebra) => 1.2,
        _ if crossing.zebra_ref => 1.2,
        Some(Crossing::No) => f64::INFINITY,
        None => DEFAULT_CROSSING,
    };

    if prefs.enabled(OptionName::PreferMarkedCrossings) && !crossing.is_marked() {
        weight *= 3.0;
    }
    if prefs.enabled(OptionName::PreferTrafficLightCrossings) && !crossing.has_traffic_lights() {
        weight *= 2.5;
    }

    if crossing.raised_table {
        weight *= 0.75;
    } else if crossing.continuous {
        weight *= 0.5;
    }
    if crossing.island {
        weight *= 0.7;
    }

    if prefs.enabled(OptionName::PreferAudibleCrossings) {
        match crossing.sound {
            Some(true) => weight *= 0.6,
            Some(false) => weight *= 4.0,
            None => {}
        }
    }

    let kerb_sensitive = prefs.enabled(OptionName::WheelchairAccessible)
        || prefs.enabled(OptionName::PreferDippedKerbs);
    if kerb_sensitive {
        if crossing.kerb == Some(Kerb::Lowered) || crossing.raised_table {
            weight *= 0.8;
        } else if crossing.kerb == Some(Kerb::Flush) {
            weight *= 0.75;
        }
    }
    if prefs.enabled(OptionName::PreferTactilePaving)
        && crossing.kerb == Some(Kerb::Flush)
        && crossing.tactile_paving == Some(false)
    {
        weight *= 10.0;
    }

    weight
}
