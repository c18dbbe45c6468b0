//! `rn-core` — foundational types for the `route_network` planner.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and minimal external ones (`uuid` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `WaypointId`, `SegmentId`, `NetworkId`, `WaypointIndex`, `SegmentIndex` |
//! | [`geo`]     | `Position`, `GeoPoint`, `Location`, local projection      |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, Location, Position};
pub use ids::{NetworkId, SegmentId, SegmentIndex, WaypointId, WaypointIndex};
