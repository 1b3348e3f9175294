//! Bounding box used to scope map data acquisition.
//!
//! The routing core never consults a bounding box; it is handed to whatever
//! collaborator fetches ways and nodes before the graph is built.

use crate::GeoPoint;

/// Latitude/longitude rectangle, bounds inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

/// Latitude margin (degrees) per unit of expansion.
const LAT_EXPANSION_DEG: f64 = 0.02;
/// Longitude margin (degrees) per unit of expansion.
const LON_EXPANSION_DEG: f64 = 0.05;

impl BoundingBox {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self { min_lat, min_lon, max_lat, max_lon }
    }

    /// Box enclosing both route endpoints plus a margin, so that routes which
    /// wander away from the direct line before coming back are still covered.
    ///
    /// `expansion = 0` gives the tight box; `0.2` is a sensible default.
    pub fn around(start: GeoPoint, end: GeoPoint, expansion: f64) -> Self {
        let lat_margin = expansion * LAT_EXPANSION_DEG;
        let lon_margin = expansion * LON_EXPANSION_DEG;
        Self {
            min_lat: start.lat.min(end.lat) - lat_margin,
            min_lon: start.lon.min(end.lon) - lon_margin,
            max_lat: start.lat.max(end.lat) + lat_margin,
            max_lon: start.lon.max(end.lon) + lon_margin,
        }
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat)
            && (self.min_lon..=self.max_lon).contains(&p.lon)
    }
}

impl std::fmt::Display for BoundingBox {
    /// Overpass order: `south,west,north,east`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.min_lat, self.min_lon, self.max_lat, self.max_lon)
    }
}
