//! Route network snapshot message and builder.
//!
//! A [`RouteNetwork`] is the unit delivered by LoadNetwork: one network id,
//! an ordered waypoint list and an ordered segment list.  Segments are
//! directed (`start → end`); a two-way link needs two segments.
//!
//! Nothing here validates references between segments and waypoints.  That
//! happens when a [`Snapshot`](crate::Snapshot) is built, where dangling
//! segments are dropped rather than rejected.

use rn_core::{Location, NetworkId, SegmentId, WaypointId};

// ── Messages ──────────────────────────────────────────────────────────────────

/// A named point in the route network.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub id:       WaypointId,
    /// Projected or geographic; geographic waypoints are projected when a
    /// snapshot is built.
    pub position: Location,
}

/// A directed link between two waypoints, referenced by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id:    SegmentId,
    pub start: WaypointId,
    pub end:   WaypointId,
}

/// One complete route network as delivered to the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteNetwork {
    pub id: NetworkId,
    /// Coordinate frame the waypoint positions are expressed in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub frame_id:  String,
    pub waypoints: Vec<Waypoint>,
    pub segments:  Vec<Segment>,
}

impl RouteNetwork {
    /// A network with no waypoints or segments.
    pub fn empty(id: NetworkId) -> Self {
        Self {
            id,
            frame_id:  String::new(),
            waypoints: Vec::new(),
            segments:  Vec::new(),
        }
    }
}

/// The answer to a PlanRoute query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    pub network:  NetworkId,
    pub frame_id: String,
    /// Segments to traverse in order, from start to goal.  Empty when the
    /// start is the goal.
    pub segments: Vec<SegmentId>,
    /// Sum of the planar lengths of `segments`, in metres.
    pub length:   f64,
}

impl RoutePath {
    /// `true` if the start and goal are the same waypoint.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── RouteNetworkBuilder ───────────────────────────────────────────────────────

/// Construct a [`RouteNetwork`] incrementally, then call [`build`](Self::build).
///
/// Waypoint and segment ids are derived from the network id and insertion
/// order, so building the same sequence twice yields identical networks.
///
/// # Example
///
/// ```
/// use rn_core::{NetworkId, Position};
/// use rn_planner::RouteNetworkBuilder;
///
/// let mut b = RouteNetworkBuilder::new(NetworkId::from_url("http://example.com/net"));
/// let a = b.add_waypoint(Position::new(0.0, 0.0));
/// let c = b.add_waypoint(Position::new(3.0, 4.0));
/// b.add_two_way(a, c);
/// let net = b.build();
/// assert_eq!(net.waypoints.len(), 2);
/// assert_eq!(net.segments.len(), 2);
/// ```
pub struct RouteNetworkBuilder {
    id:        NetworkId,
    frame_id:  String,
    waypoints: Vec<Waypoint>,
    segments:  Vec<Segment>,
}

impl RouteNetworkBuilder {
    pub fn new(id: NetworkId) -> Self {
        Self {
            id,
            frame_id:  String::new(),
            waypoints: Vec::new(),
            segments:  Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of waypoints and segments.
    pub fn with_capacity(id: NetworkId, waypoints: usize, segments: usize) -> Self {
        Self {
            id,
            frame_id:  String::new(),
            waypoints: Vec::with_capacity(waypoints),
            segments:  Vec::with_capacity(segments),
        }
    }

    pub fn frame_id(mut self, frame_id: impl Into<String>) -> Self {
        self.frame_id = frame_id.into();
        self
    }

    /// Add a waypoint with a generated id and return that id.
    ///
    /// Accepts a projected [`Position`](rn_core::Position) or a
    /// [`GeoPoint`](rn_core::GeoPoint).
    pub fn add_waypoint(&mut self, position: impl Into<Location>) -> WaypointId {
        let id = WaypointId::from_url(&format!(
            "route_network://{}/waypoint/{}",
            self.id,
            self.waypoints.len()
        ));
        self.add_waypoint_with_id(id, position);
        id
    }

    /// Add a waypoint with a caller-chosen id.
    pub fn add_waypoint_with_id(&mut self, id: WaypointId, position: impl Into<Location>) {
        self.waypoints.push(Waypoint { id, position: position.into() });
    }

    /// Add a **directed** segment from `start` to `end` and return its id.
    ///
    /// The endpoints are not checked; a segment naming an unknown waypoint is
    /// kept in the message and ignored by the planner.
    pub fn add_segment(&mut self, start: WaypointId, end: WaypointId) -> SegmentId {
        let id = SegmentId::from_url(&format!(
            "route_network://{}/segment/{}",
            self.id,
            self.segments.len()
        ));
        self.add_segment_with_id(id, start, end);
        id
    }

    pub fn add_segment_with_id(&mut self, id: SegmentId, start: WaypointId, end: WaypointId) {
        self.segments.push(Segment { id, start, end });
    }

    /// Convenience: add segments in **both directions**.
    pub fn add_two_way(&mut self, a: WaypointId, b: WaypointId) -> (SegmentId, SegmentId) {
        (self.add_segment(a, b), self.add_segment(b, a))
    }

    pub fn waypoint_count(&self) -> usize { self.waypoints.len() }
    pub fn segment_count(&self) -> usize { self.segments.len() }

    pub fn build(self) -> RouteNetwork {
        RouteNetwork {
            id:        self.id,
            frame_id:  self.frame_id,
            waypoints: self.waypoints,
            segments:  self.segments,
        }
    }
}
