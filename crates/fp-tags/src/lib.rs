//! `fp-tags` — turning raw OSM tags into typed facts.
//!
//! Every interpreter is a pure function over [`fp_core::Tags`].  Malformed or
//! unrecognised values never fail the caller: they are reported through the
//! `log` facade at `warn` level and treated as absent.  Parsers that can fail
//! for a specific reason also expose a `Result<_, TagError>` form.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sidewalk`] | `Sidewalk`, sidewalk presence resolution                   |
//! | [`quantity`] | speed limit (mph), path width (m), lane count, incline     |
//! | [`access`]   | `AccessLevel` from `foot` / `access`                       |
//! | [`way`]      | `WayProfile` and its enums; implicit way-level defaults    |
//! | [`node`]     | `NodeProfile`, barriers and crossing facts                 |
//! | [`error`]    | `TagError`, `TagResult<T>`                                 |
//!
//! The profiles are built once when the routing graph is constructed; the
//! cost model matches over their enums and never re-reads raw strings.

pub mod access;
pub mod error;
pub mod node;
pub mod quantity;
pub mod sidewalk;
pub mod way;

#[cfg(test)]
mod tests;

pub use access::{access_level, AccessLevel};
pub use error::{TagError, TagResult};
pub use node::{Barrier, Crossing, CrossingInfo, Kerb, NodeProfile};
pub use quantity::{incline, lanes, maxspeed_mph, width_m, Incline};
pub use sidewalk::{sidewalk, Sidewalk};
pub use way::{
    with_implicit_defaults, Designation, Ford, Highway, Maintenance, PathClass, RoadClass,
    SacScale, ServiceKind, Smoothness, SurfaceClass, TrailVisibility, WayProfile, Wheelchair,
};

/// Log a non-fatal tag problem and fall back to "unknown".
pub(crate) fn report<T>(result: TagResult<Option<T>>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
