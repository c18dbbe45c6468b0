//! Query error taxonomy.
//!
//! Every variant is recoverable at the caller's boundary.  Construction-time
//! problems (segments referencing unknown waypoints) are not errors at all;
//! the offending segments are dropped from the adjacency list.

use std::fmt;

use thiserror::Error;

use rn_core::{NetworkId, WaypointId};

/// Which end of a plan request an identifier belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointRole {
    Start,
    Goal,
}

impl fmt::Display for WaypointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaypointRole::Start => f.write_str("start"),
            WaypointRole::Goal => f.write_str("goal"),
        }
    }
}

/// Errors produced by a PlanRoute query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("planner not ready: no route network loaded")]
    NotReady,

    #[error("invalid network {requested}: loaded network is {loaded}")]
    InvalidNetwork { requested: NetworkId, loaded: NetworkId },

    #[error("unknown {role} waypoint {id}")]
    UnknownWaypoint { role: WaypointRole, id: WaypointId },

    #[error("no path from {start} to {goal}")]
    NoPathToGoal { start: WaypointId, goal: WaypointId },

    #[error("search abandoned after {limit} expansions")]
    ExpansionLimit { limit: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
