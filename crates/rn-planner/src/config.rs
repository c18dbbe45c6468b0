//! Planner configuration.

use std::fmt;
use std::str::FromStr;

use rn_core::{CoreError, CoreResult};

/// When the search commits to a waypoint's predecessor.
///
/// | Policy         | Behaviour                                                  |
/// |----------------|------------------------------------------------------------|
/// | `OnExtraction` | Dijkstra proper: a waypoint is final when popped as the cheapest frontier entry.  Always returns a shortest path. |
/// | `OnInsertion`  | A waypoint is final the first time it is pushed.  A cheaper route found later through another predecessor is ignored, so the path may be longer than optimal.  Matches planners that close a waypoint as soon as it is queued. |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SettlePolicy {
    #[default]
    OnExtraction,
    OnInsertion,
}

impl fmt::Display for SettlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlePolicy::OnExtraction => f.write_str("on-extraction"),
            SettlePolicy::OnInsertion => f.write_str("on-insertion"),
        }
    }
}

impl FromStr for SettlePolicy {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-extraction" => Ok(SettlePolicy::OnExtraction),
            "on-insertion" => Ok(SettlePolicy::OnInsertion),
            other => Err(CoreError::Parse(format!(
                "unknown settle policy {other:?} (expected on-extraction or on-insertion)"
            ))),
        }
    }
}

/// Tunables for [`RoutePlanner`](crate::RoutePlanner).
///
/// The config is copied into every [`Snapshot`](crate::Snapshot) at build
/// time, so a query always runs with the settings its snapshot was built
/// with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub settle_policy: SettlePolicy,
    /// Upper bound on frontier extractions per query.  `None` = unbounded.
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_expansions == Some(0) {
            return Err(CoreError::Config("max_expansions must be at least 1".into()));
        }
        Ok(())
    }
}
