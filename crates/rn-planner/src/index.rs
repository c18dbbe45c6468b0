//! Waypoint lookup table.
//!
//! [`GraphIndex`] maps each waypoint's unique id to its dense
//! [`WaypointIndex`] (position in the snapshot's waypoint list) and stores
//! positions in a parallel `Vec` so distance queries are two array reads.
//!
//! # Projection
//!
//! Stored positions are always planar metres.  Geographic waypoints are
//! projected once, here, onto the plane tangent at the centroid of the
//! network's geographic waypoints (the index's *origin*).  Edge weights and
//! path lengths are therefore metres whichever form the waypoints came in.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a planar position to the nearest waypoint.
//! Used to snap free positions (clicked points, vehicle fixes) onto the
//! network before planning.

use std::collections::hash_map::Entry;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use rn_core::{GeoPoint, Location, Position, WaypointId, WaypointIndex};

use crate::network::Waypoint;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct WaypointEntry {
    point: [f64; 2], // [x, y]
    index: WaypointIndex,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── GraphIndex ────────────────────────────────────────────────────────────────

/// Bijective id ↔ index mapping plus per-waypoint positions.
///
/// If the same id appears more than once in the waypoint list, the first
/// occurrence owns the id; later duplicates keep their index (so the index
/// space still matches the list) but cannot be looked up by id.
pub struct GraphIndex {
    ids:         Vec<WaypointId>,
    positions:   Vec<Position>,
    origin:      Option<GeoPoint>,
    by_id:       FxHashMap<WaypointId, WaypointIndex>,
    spatial_idx: RTree<WaypointEntry>,
}

impl GraphIndex {
    /// Build the index in O(n) (plus O(n log n) for the R-tree bulk load).
    ///
    /// At most `u32::MAX - 1` waypoints are addressable.
    pub fn new(waypoints: &[Waypoint]) -> Self {
        debug_assert!(waypoints.len() < u32::MAX as usize, "waypoint list exceeds WaypointIndex range");

        let mut by_id: FxHashMap<WaypointId, WaypointIndex> =
            FxHashMap::with_capacity_and_hasher(waypoints.len(), Default::default());
        let mut duplicates = 0usize;

        for (i, wp) in waypoints.iter().enumerate() {
            match by_id.entry(wp.id) {
                Entry::Vacant(slot) => {
                    slot.insert(WaypointIndex(i as u32));
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }
        if duplicates > 0 {
            log::warn!("{duplicates} duplicate waypoint id(s) ignored for lookup");
        }

        let origin = GeoPoint::centroid(waypoints.iter().filter_map(|w| w.position.as_geo()));
        if let Some(o) = origin {
            let planar = waypoints.iter().filter(|w| w.position.as_geo().is_none()).count();
            if planar > 0 {
                log::warn!("{planar} projected waypoint(s) mixed with geographic ones; taken as metres from {o}");
            }
        }

        let positions: Vec<Position> = waypoints
            .iter()
            .map(|w| project(w.position, origin))
            .collect();

        let entries: Vec<WaypointEntry> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| WaypointEntry {
                point: [p.x, p.y],
                index: WaypointIndex(i as u32),
            })
            .collect();

        Self {
            ids: waypoints.iter().map(|w| w.id).collect(),
            positions,
            origin,
            by_id,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    /// Reference point geographic waypoints were projected around.  `None`
    /// when every waypoint was already planar.
    pub fn origin(&self) -> Option<GeoPoint> {
        self.origin
    }

    /// Bring a free location into this index's planar frame.
    ///
    /// `None` for a geographic location when the index has no origin.
    pub fn to_planar(&self, location: Location) -> Option<Position> {
        match location {
            Location::Planar(p) => Some(p),
            Location::Geo(g) => self.origin.map(|o| g.project(o)),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a waypoint id.  `None` if the id is not in this snapshot.
    #[inline]
    pub fn index_of(&self, id: &WaypointId) -> Option<WaypointIndex> {
        self.by_id.get(id).copied()
    }

    /// The id stored at `index`.
    ///
    /// # Panics
    /// If `index` is out of range for this snapshot.
    #[inline]
    pub fn id_of(&self, index: WaypointIndex) -> WaypointId {
        self.ids[index.index()]
    }

    /// Planar position in metres.
    ///
    /// # Panics
    /// If `index` is out of range for this snapshot.
    #[inline]
    pub fn position_of(&self, index: WaypointIndex) -> Position {
        self.positions[index.index()]
    }

    /// 2-D Euclidean distance between two waypoints, ignoring elevation.
    #[inline]
    pub fn planar_distance(&self, a: WaypointIndex, b: WaypointIndex) -> f64 {
        self.position_of(a).planar_distance(self.position_of(b))
    }

    /// Nearest waypoint to `pos` in the plane.  `None` only if the index is
    /// empty.
    pub fn nearest_waypoint(&self, pos: Position) -> Option<WaypointIndex> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.index)
    }

    /// Up to `k` nearest waypoints to `pos`, sorted by ascending distance.
    pub fn k_nearest_waypoints(&self, pos: Position, k: usize) -> Vec<WaypointIndex> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.index)
            .collect()
    }
}

fn project(location: Location, origin: Option<GeoPoint>) -> Position {
    match (location, origin) {
        (Location::Planar(p), _) => p,
        (Location::Geo(g), Some(o)) => g.project(o),
        // Unreachable: any geographic waypoint contributes to the origin.
        (Location::Geo(g), None) => g.project(g),
    }
}
