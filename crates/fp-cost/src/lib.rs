//! `fp-cost` — how hard is it to walk here?
//!
//! The model turns the typed profiles built by `fp-tags` into [`Cost`]s under
//! a user's [`Preferences`](fp_prefs::Preferences).  Ways get a per-metre
//! weight, vertices a flat charge, and an edge from `A` costs
//! `node_cost(A) + way_cost × length`.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`cost`]    | `Cost`, with the `IMPASSABLE` sentinel                     |
//! | [`access`]  | legal access under the access toggles                      |
//! | [`road`]    | road class base weights, carriageway factors              |
//! | [`path`]    | path weights (difficulty, visibility, width, …)           |
//! | [`general`] | surface, smoothness, incline, ford, lit, indoor, covered  |
//! | [`node`]    | barrier and crossing costs                                |
//! | [`model`]   | `CostModel`, `CostFunction`, `EdgeCost`                   |
//! | [`table`]   | `WayCosts`, `TabulatedCosts`                              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `WayCosts::compute` runs on the rayon pool.             |

pub mod access;
pub mod cost;
pub mod general;
pub mod model;
pub mod node;
pub mod path;
pub mod road;
pub mod table;


pub use access::access_is_legal;
pub use cost::Cost;
pub use general::general_factor;
pub use model::{CostFunction, CostModel, EdgeCost};
pub use node::{crossing_cost, node_cost};
pub use path::path_weight;
pub use road::{road_base_weight, road_factor};
pub use table::{TabulatedCosts, WayCosts};
