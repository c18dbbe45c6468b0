//! `rn-planner` — graph index, adjacency construction, and route planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RouteNetwork`, `Waypoint`, `Segment`, `RoutePath`, builder |
//! | [`index`]    | `GraphIndex` (id → index, positions, R-tree snap)          |
//! | [`graph`]    | `Adjacency` (CSR), `Edge`                                  |
//! | [`search`]   | best-first search and path reconstruction                  |
//! | [`snapshot`] | `Snapshot`: one loaded network plus its derived indices    |
//! | [`planner`]  | `RoutePlanner`: LoadNetwork / PlanRoute service            |
//! | [`config`]   | `PlannerConfig`, `SettlePolicy`                            |
//! | [`loader`]   | JSON network loading (feature = `"serde"` only)            |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `plan_batch` runs on the Rayon pool (default).            |
//! | `serde`    | Derives `Serialize`/`Deserialize`; enables [`loader`].    |

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod network;
pub mod planner;
pub mod search;
pub mod snapshot;

#[cfg(feature = "serde")]
pub mod loader;


pub use config::{PlannerConfig, SettlePolicy};
pub use error::{PlanError, PlanResult, WaypointRole};
pub use graph::{Adjacency, Edge};
pub use index::GraphIndex;
pub use network::{RouteNetwork, RouteNetworkBuilder, RoutePath, Segment, Waypoint};
pub use planner::{PlanRequest, RoutePlanner};
pub use snapshot::Snapshot;
