//! Best-first search and path reconstruction.
//!
//! # Algorithm
//!
//! Cost-accumulating best-first search over non-negative edge weights, i.e.
//! Dijkstra's algorithm.  No goal-directed heuristic is applied.  The
//! frontier is a binary min-heap keyed by `(cost, insertion sequence)`, so
//! equal-cost entries pop in the order they were pushed and identical inputs
//! always produce identical paths.
//!
//! The search records only a predecessor waypoint per waypoint.  Turning a
//! hop back into a segment is done by [`reconstruct`], which picks the
//! lowest-weight parallel segment for each hop.
//!
//! See [`SettlePolicy`] for the difference between the two settle rules.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rn_core::WaypointIndex;

use crate::config::{PlannerConfig, SettlePolicy};
use crate::graph::{Adjacency, Edge};

// ── Frontier ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    cost:     f64,
    seq:      u64,
    waypoint: WaypointIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap with a monotonically increasing tie-break sequence.
struct Frontier {
    heap:     BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    fn push(&mut self, cost: f64, waypoint: WaypointIndex) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry { cost, seq, waypoint }));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(e)| e)
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Why a search ended without reaching the goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Frontier exhausted.
    Unreachable,
    /// `max_expansions` reached before the goal was extracted.
    ExpansionLimit(usize),
}

/// Search state handed to [`reconstruct`] on success.
#[derive(Debug)]
pub struct SearchTree {
    /// `backpointers[w]` = predecessor of `w`, or `WaypointIndex::INVALID`.
    pub backpointers: Vec<WaypointIndex>,
    /// Cumulative cost at which the goal was extracted.
    pub goal_cost:    f64,
    /// Frontier extractions performed, goal included.
    pub expansions:   usize,
}

/// Run the search from `start` until `goal` is extracted.
///
/// `start` and `goal` must be valid indices into `adjacency`.
pub fn best_first(
    adjacency: &Adjacency,
    start: WaypointIndex,
    goal: WaypointIndex,
    config: &PlannerConfig,
) -> Result<SearchTree, SearchFailure> {
    let n = adjacency.waypoint_count();
    let mut settled      = vec![false; n];
    let mut backpointers = vec![WaypointIndex::INVALID; n];
    // best[w] = cheapest cost pushed for w so far (OnExtraction only).
    let mut best         = vec![f64::INFINITY; n];

    let mut frontier = Frontier::new();
    frontier.push(0.0, start);
    best[start.index()] = 0.0;

    let mut expansions = 0usize;

    while let Some(FrontierEntry { cost, waypoint: current, .. }) = frontier.pop() {
        if config.settle_policy == SettlePolicy::OnExtraction {
            // Stale entry for a waypoint already finalised at lower cost.
            if settled[current.index()] {
                continue;
            }
            settled[current.index()] = true;
        }

        expansions += 1;
        if current == goal {
            return Ok(SearchTree { backpointers, goal_cost: cost, expansions });
        }
        if let Some(limit) = config.max_expansions {
            if expansions >= limit {
                return Err(SearchFailure::ExpansionLimit(limit));
            }
        }

        for edge in adjacency.out_edges(current) {
            let next = edge.target.index();
            let next_cost = cost + edge.weight;
            match config.settle_policy {
                SettlePolicy::OnExtraction => {
                    if !settled[next] && next_cost < best[next] {
                        best[next] = next_cost;
                        backpointers[next] = current;
                        frontier.push(next_cost, edge.target);
                    }
                }
                SettlePolicy::OnInsertion => {
                    if !settled[next] {
                        settled[next] = true;
                        backpointers[next] = current;
                        frontier.push(next_cost, edge.target);
                    }
                }
            }
        }
    }

    Err(SearchFailure::Unreachable)
}

// ── Reconstruction ────────────────────────────────────────────────────────────

/// Walk the backpointers from `goal` to `start` and resolve every hop to its
/// cheapest edge.  Edges are returned in travel order.
///
/// Returns `None` if the chain does not lead back to `start` or a hop has no
/// matching edge; neither can happen for a tree produced by [`best_first`].
pub fn reconstruct(
    adjacency: &Adjacency,
    backpointers: &[WaypointIndex],
    start: WaypointIndex,
    goal: WaypointIndex,
) -> Option<Vec<Edge>> {
    let mut hops = Vec::new();
    let mut current = goal;
    while current != start {
        // A longer chain than there are waypoints is a cycle.
        if hops.len() >= backpointers.len() {
            return None;
        }
        let pred = *backpointers.get(current.index())?;
        if !pred.is_valid() {
            return None;
        }
        hops.push(*adjacency.cheapest_edge(pred, current)?);
        current = pred;
    }
    hops.reverse();
    Some(hops)
}
