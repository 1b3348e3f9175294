//! `fp-route` — pedestrian path search and route assembly.
//!
//! [`RouteCalculator`] is the front door: it snaps two coordinates to the
//! graph, prices ways under the caller's preferences and returns a
//! [`RouteResult`] of walking instructions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`calculator`] | `RouteCalculator`                                         |
//! | [`router`]     | `Router` trait, `AStarRouter`, `CancelFlag`               |
//! | [`assemble`]   | `assemble_route`, `WALKING_SPEED_MPS`                     |
//! | [`result`]     | `RouteResult`, `RoutePart`                                |
//! | [`observer`]   | `SearchObserver`, `NoopObserver`, `CostTrace`             |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on `RouteResult` and `RoutePart`. |
//! | `parallel` | Snapping and way cost tabulation on the rayon pool.       |

pub mod assemble;
pub mod calculator;
pub mod error;
pub mod observer;
pub mod result;
pub mod router;


pub use assemble::{assemble_route, WALKING_SPEED_MPS};
pub use calculator::RouteCalculator;
pub use error::{RoutingError, RoutingResult};
pub use observer::{CostTrace, EdgeCostRecord, NoopObserver, SearchObserver, SearchStats, WayWeight};
pub use result::{RoutePart, RouteResult};
pub use router::{AStarRouter, CancelFlag, Router};
