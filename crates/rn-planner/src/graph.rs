//! Adjacency list in Compressed Sparse Row form.
//!
//! # Data layout
//!
//! Given a `WaypointIndex w`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ out_start[w] .. out_start[w+1] ]
//! ```
//!
//! Within one waypoint's slice, edges keep the order of their segments in the
//! source network.  Parallel segments between the same pair of waypoints stay
//! distinct edges.  Edge weights are computed once here and never again.

use rn_core::{SegmentIndex, WaypointIndex};

use crate::index::GraphIndex;
use crate::network::Segment;

/// One outgoing edge of a waypoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub target:  WaypointIndex,
    /// Planar distance between the segment's endpoints.
    pub weight:  f64,
    /// Position of the originating segment in the network's segment list.
    pub segment: SegmentIndex,
}

/// Outgoing edges of every waypoint in a snapshot.
pub struct Adjacency {
    /// CSR row pointer.  Length = `waypoint_count + 1`.
    out_start: Vec<u32>,
    /// All edges, grouped by source waypoint.
    edges:     Vec<Edge>,
    /// Segments skipped because an endpoint id did not resolve.
    dropped:   usize,
}

impl Adjacency {
    /// Resolve every segment through `index` and collect the edges.
    ///
    /// Segments whose start or end id is unknown are skipped, never fatal.
    /// At most `u32::MAX - 1` segments are addressable.
    pub fn build(index: &GraphIndex, segments: &[Segment]) -> Self {
        let n = index.len();
        debug_assert!(segments.len() < u32::MAX as usize, "segment list exceeds SegmentIndex range");

        // Resolve once; `None` marks a dropped segment.
        let resolved: Vec<Option<(WaypointIndex, WaypointIndex)>> = segments
            .iter()
            .map(|seg| Some((index.index_of(&seg.start)?, index.index_of(&seg.end)?)))
            .collect();

        let mut out_start = vec![0u32; n + 1];
        for &(from, _) in resolved.iter().flatten() {
            out_start[from.index() + 1] += 1;
        }
        for i in 1..=n {
            out_start[i] += out_start[i - 1];
        }

        // Stable counting placement keeps segment order within each row.
        let mut cursor: Vec<u32> = out_start[..n].to_vec();
        let placeholder = Edge {
            target:  WaypointIndex::INVALID,
            weight:  0.0,
            segment: SegmentIndex::INVALID,
        };
        let mut edges = vec![placeholder; out_start[n] as usize];
        let mut dropped = 0usize;

        for (seg_idx, hop) in resolved.iter().enumerate() {
            let Some((from, to)) = *hop else {
                dropped += 1;
                continue;
            };
            let slot = &mut cursor[from.index()];
            edges[*slot as usize] = Edge {
                target:  to,
                weight:  index.planar_distance(from, to),
                segment: SegmentIndex(seg_idx as u32),
            };
            *slot += 1;
        }

        if dropped > 0 {
            log::warn!("dropped {dropped} segment(s) referencing unknown waypoints");
        }

        Self { out_start, edges, dropped }
    }

    pub fn waypoint_count(&self) -> usize {
        self.out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of segments left out because an endpoint did not resolve.
    pub fn dropped_segments(&self) -> usize {
        self.dropped
    }

    /// Outgoing edges of `from`, in segment order.
    ///
    /// Contiguous slice, no allocation.
    #[inline]
    pub fn out_edges(&self, from: WaypointIndex) -> &[Edge] {
        let start = self.out_start[from.index()] as usize;
        let end   = self.out_start[from.index() + 1] as usize;
        &self.edges[start..end]
    }

    #[inline]
    pub fn out_degree(&self, from: WaypointIndex) -> usize {
        self.out_edges(from).len()
    }

    /// The lowest-weight edge `from → to`; the earliest segment wins a tie.
    pub fn cheapest_edge(&self, from: WaypointIndex, to: WaypointIndex) -> Option<&Edge> {
        self.out_edges(from)
            .iter()
            .filter(|e| e.target == to)
            .fold(None, |best: Option<&Edge>, e| match best {
                Some(b) if b.weight <= e.weight => Some(b),
                _ => Some(e),
            })
    }
}
