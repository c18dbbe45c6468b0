//! The planner service: LoadNetwork and PlanRoute.
//!
//! # Snapshot publication
//!
//! The current [`Snapshot`] sits behind an `RwLock<Option<Arc<Snapshot>>>`.
//! The lock guards only the pointer: a rebuild constructs the new snapshot
//! with no lock held and then swaps the `Arc` in; a query clones the `Arc`
//! and releases the lock before searching.  In-flight queries therefore
//! finish against the snapshot they started with, and neither side ever
//! waits on the other's work.
//!
//! # Thread safety
//!
//! `RoutePlanner` is `Send + Sync`; share it with `Arc<RoutePlanner>`.

use std::sync::{Arc, PoisonError, RwLock};

use rn_core::{CoreResult, NetworkId, WaypointId};

use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::network::{RouteNetwork, RoutePath};
use crate::snapshot::Snapshot;

/// One PlanRoute request, as carried by a transport adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    pub network: NetworkId,
    pub start:   WaypointId,
    pub goal:    WaypointId,
}

pub struct RoutePlanner {
    config:  PlannerConfig,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl RoutePlanner {
    /// Planner with the default config and no network loaded.
    pub fn new() -> Self {
        Self { config: PlannerConfig::default(), current: RwLock::new(None) }
    }

    /// Planner with a validated config and no network loaded.
    pub fn with_config(config: PlannerConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config, current: RwLock::new(None) })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// LoadNetwork: rebuild the index and adjacency list, then publish.
    ///
    /// Returns the newly published snapshot.
    pub fn load_network(&self, network: RouteNetwork) -> Arc<Snapshot> {
        let snapshot = Arc::new(Snapshot::build(network, self.config));
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Arc::clone(&snapshot));

        match previous {
            Some(old) => log::info!("route network {} replaced by {}", old.id(), snapshot.id()),
            None => log::info!("route network {} loaded", snapshot.id()),
        }
        snapshot
    }

    /// The currently published snapshot, if any.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_ready(&self) -> bool {
        self.current().is_some()
    }

    /// PlanRoute against whatever snapshot is current when the call begins.
    pub fn plan_route(
        &self,
        network: &NetworkId,
        start: &WaypointId,
        goal: &WaypointId,
    ) -> PlanResult<RoutePath> {
        let snapshot = self.current().ok_or(PlanError::NotReady)?;
        let result = snapshot.plan_route(network, start, goal);
        if let Err(e) = &result {
            log::debug!("plan request failed: {e}");
        }
        result
    }

    pub fn plan_request(&self, request: &PlanRequest) -> PlanResult<RoutePath> {
        self.plan_route(&request.network, &request.start, &request.goal)
    }

    /// Answer many requests against one snapshot.
    ///
    /// All requests see the snapshot that was current on entry, even if a
    /// new network is loaded mid-batch.  Results are in request order.
    pub fn plan_batch(&self, requests: &[PlanRequest]) -> Vec<PlanResult<RoutePath>> {
        let Some(snapshot) = self.current() else {
            return vec![Err(PlanError::NotReady); requests.len()];
        };
        let plan_one = |r: &PlanRequest| snapshot.plan_route(&r.network, &r.start, &r.goal);

        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(plan_one).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests.par_iter().map(plan_one).collect()
        }
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}
