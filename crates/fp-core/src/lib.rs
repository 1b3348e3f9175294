//! `fp-core` — foundational types for the `footpath` pedestrian router.
//!
//! This crate is a dependency of every other `fp-*` crate.  It has no `fp-*`
//! dependencies and few external ones (`geo` for the WGS84 geodesic and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `VertexId`, `EdgeId`, `WayId`                             |
//! | [`geodesy`] | `GeoPoint`, geodesic distance, planar heuristic         |
//! | [`bbox`]  | `BoundingBox` used to scope map data acquisition          |
//! | [`tags`]  | `Tags`, the raw OSM key/value map                         |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bbox;
pub mod error;
pub mod geodesy;
pub mod ids;
pub mod tags;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bbox::BoundingBox;
pub use error::{CoreError, CoreResult};
pub use geodesy::{geodesic_distance, planar_heuristic, GeoPoint};
pub use ids::{EdgeId, VertexId, WayId};
pub use tags::Tags;
