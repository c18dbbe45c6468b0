//! One loaded route network plus everything derived from it.
//!
//! A [`Snapshot`] is immutable after [`Snapshot::build`].  The planner hands
//! out `Arc<Snapshot>`s; a query holding one keeps answering against that
//! topology even after a newer network has been published.

use rn_core::{Location, NetworkId, SegmentId, WaypointId, WaypointIndex};

use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult, WaypointRole};
use crate::graph::Adjacency;
use crate::index::GraphIndex;
use crate::network::{RouteNetwork, RoutePath};
use crate::search::{self, SearchFailure};

pub struct Snapshot {
    id:          NetworkId,
    frame_id:    String,
    index:       GraphIndex,
    adjacency:   Adjacency,
    segment_ids: Vec<SegmentId>,
    config:      PlannerConfig,
}

impl Snapshot {
    /// Build the graph index and adjacency list for `network`.
    ///
    /// Never fails: segments with unresolvable endpoints are dropped.
    pub fn build(network: RouteNetwork, config: PlannerConfig) -> Self {
        let index = GraphIndex::new(&network.waypoints);
        let adjacency = Adjacency::build(&index, &network.segments);

        log::debug!(
            "built snapshot {}: {} waypoints, {} edges, {} dropped segments",
            network.id,
            index.len(),
            adjacency.edge_count(),
            adjacency.dropped_segments(),
        );

        Self {
            id: network.id,
            frame_id: network.frame_id,
            index,
            adjacency,
            segment_ids: network.segments.iter().map(|s| s.id).collect(),
            config,
        }
    }

    pub fn id(&self) -> NetworkId {
        self.id
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Nearest waypoint id to a free position or geographic fix.
    ///
    /// `None` for an empty network, or for a geographic fix against a network
    /// whose waypoints were all projected already.
    pub fn nearest_waypoint(&self, location: impl Into<Location>) -> Option<WaypointId> {
        let pos = self.index.to_planar(location.into())?;
        self.index.nearest_waypoint(pos).map(|i| self.index.id_of(i))
    }

    /// PlanRoute against this snapshot.
    ///
    /// Fails with [`PlanError::InvalidNetwork`] if `network` is not this
    /// snapshot's id, then checks the start and goal ids in that order.
    pub fn plan_route(
        &self,
        network: &NetworkId,
        start: &WaypointId,
        goal: &WaypointId,
    ) -> PlanResult<RoutePath> {
        if *network != self.id {
            return Err(PlanError::InvalidNetwork { requested: *network, loaded: self.id });
        }
        self.plan(start, goal)
    }

    /// Plan between two waypoint ids without checking the network id.
    pub fn plan(&self, start: &WaypointId, goal: &WaypointId) -> PlanResult<RoutePath> {
        let from = self.resolve(start, WaypointRole::Start)?;
        let to = self.resolve(goal, WaypointRole::Goal)?;
        self.plan_indices(from, to)
            .map_err(|failure| self.failure_to_error(failure, start, goal))
    }

    fn resolve(&self, id: &WaypointId, role: WaypointRole) -> PlanResult<WaypointIndex> {
        self.index
            .index_of(id)
            .ok_or(PlanError::UnknownWaypoint { role, id: *id })
    }

    fn plan_indices(
        &self,
        start: WaypointIndex,
        goal: WaypointIndex,
    ) -> Result<RoutePath, SearchFailure> {
        let tree = search::best_first(&self.adjacency, start, goal, &self.config)?;
        let edges = search::reconstruct(&self.adjacency, &tree.backpointers, start, goal)
            .ok_or(SearchFailure::Unreachable)?;

        log::trace!(
            "planned {} -> {} in {} expansions: {} segments, cost {:.3}",
            start,
            goal,
            tree.expansions,
            edges.len(),
            tree.goal_cost,
        );

        Ok(RoutePath {
            network:  self.id,
            frame_id: self.frame_id.clone(),
            segments: edges.iter().map(|e| self.segment_ids[e.segment.index()]).collect(),
            length:   edges.iter().map(|e| e.weight).sum(),
        })
    }

    fn failure_to_error(
        &self,
        failure: SearchFailure,
        start: &WaypointId,
        goal: &WaypointId,
    ) -> PlanError {
        match failure {
            SearchFailure::Unreachable => PlanError::NoPathToGoal { start: *start, goal: *goal },
            SearchFailure::ExpansionLimit(limit) => PlanError::ExpansionLimit { limit },
        }
    }
}
