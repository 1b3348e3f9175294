//! Geographic coordinate type and distance functions.
//!
//! Two distances are offered and they are not interchangeable:
//!
//! - [`geodesic_distance`] is the WGS84 ellipsoidal distance in metres.  It is
//!   authoritative for edge lengths and nearest-vertex snapping.
//! - [`planar_heuristic`] treats `(lat, lon)` as Cartesian and returns a
//!   unitless number.  It only guides A* and has no physical meaning.

use ::geo::{Distance, Geodesic, Point};

use crate::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Like [`new`](Self::new) but rejects non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// Ellipsoidal distance to `other` in metres.  See [`geodesic_distance`].
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        geodesic_distance(self, other)
    }

    /// `geo` points are `(x, y) = (lon, lat)`.
    #[inline]
    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// `(lat, lon)` order, matching how coordinates are written by hand.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// WGS84 inverse geodesic distance in metres (Karney's algorithm, via `geo`).
///
/// Symmetric: `geodesic_distance(a, b) == geodesic_distance(b, a)` up to
/// floating-point rounding.
pub fn geodesic_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    Geodesic::distance(a.to_point(), b.to_point())
}

/// Euclidean distance with latitude and longitude treated as plane axes.
///
/// Not a physical quantity and not guaranteed admissible for the cost model,
/// which encodes walkability rather than length.  Only its ordering matters.
#[inline]
pub fn planar_heuristic(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}
