//! The assembled walking route.

use fp_core::{GeoPoint, VertexId};

/// One step of a route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RoutePart {
    /// Where the walk begins.  No distance, no time.
    Start { position: GeoPoint },
    /// Movement along one edge.
    Progression {
        distance_m:     f64,
        estimated_secs: f64,
        start:          GeoPoint,
        end:            GeoPoint,
    },
    /// Where the walk ends.  No distance, no time.
    Arrive { position: GeoPoint },
}

impl RoutePart {
    pub fn distance_m(&self) -> f64 {
        match self {
            RoutePart::Progression { distance_m, .. } => *distance_m,
            RoutePart::Start { .. } | RoutePart::Arrive { .. } => 0.0,
        }
    }

    pub fn estimated_secs(&self) -> f64 {
        match self {
            RoutePart::Progression { estimated_secs, .. } => *estimated_secs,
            RoutePart::Start { .. } | RoutePart::Arrive { .. } => 0.0,
        }
    }

    /// Human-readable instruction, e.g. `"Walk 12.34 meters (13.41 s)"`.
    pub fn description(&self) -> String {
        match self {
            RoutePart::Start { position } => format!("Start walking from {position}"),
            RoutePart::Progression { distance_m, estimated_secs, .. } => {
                format!("Walk {distance_m:.2} meters ({estimated_secs:.2} s)")
            }
            RoutePart::Arrive { position } => format!("Arrive at {position}"),
        }
    }
}

impl std::fmt::Display for RoutePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// A route from `start` to `end`, created once by
/// [`assemble_route`](crate::assemble_route).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// The requested start coordinate, before snapping.
    pub start:    GeoPoint,
    /// The requested end coordinate, before snapping.
    pub end:      GeoPoint,
    pub parts:    Vec<RoutePart>,
    /// Graph vertices walked, in order.
    pub vertices: Vec<VertexId>,
}

impl RouteResult {
    /// Estimated walking time in seconds, summed over every part.
    pub fn total_time(&self) -> f64 {
        self.parts.iter().map(RoutePart::estimated_secs).sum()
    }

    /// Walked distance in metres, summed over progressions.
    pub fn total_distance(&self) -> f64 {
        self.parts
            .iter()
            .filter(|p| matches!(p, RoutePart::Progression { .. }))
            .map(RoutePart::distance_m)
            .sum()
    }

    /// The progressions alone, in walking order.
    pub fn progressions(&self) -> impl Iterator<Item = &RoutePart> + '_ {
        self.parts.iter().filter(|p| matches!(p, RoutePart::Progression { .. }))
    }
}
