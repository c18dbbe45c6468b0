//! Built-in synthetic route network.
//!
//! A small street grid with 100 m blocks.  Most streets are two-way; the
//! middle row is a one-way eastbound avenue and a single diagonal shortcut
//! runs from the south-west corner towards the centre.

use rn_core::{NetworkId, Position};
use rn_planner::{RouteNetwork, RouteNetworkBuilder};

const GRID:       usize = 5;
const BLOCK_M:    f64   = 100.0;

/// Build the synthetic grid network.
pub fn build_grid() -> RouteNetwork {
    let id = NetworkId::from_url("http://example.com/route_demo/grid");
    let mut b = RouteNetworkBuilder::with_capacity(id, GRID * GRID, 4 * GRID * GRID)
        .frame_id("local_enu");

    let mut ids = Vec::with_capacity(GRID * GRID);
    for row in 0..GRID {
        for col in 0..GRID {
            ids.push(b.add_waypoint(Position::new(col as f64 * BLOCK_M, row as f64 * BLOCK_M)));
        }
    }
    let at = |row: usize, col: usize| ids[row * GRID + col];

    let avenue = GRID / 2;
    for row in 0..GRID {
        for col in 0..GRID - 1 {
            if row == avenue {
                b.add_segment(at(row, col), at(row, col + 1));
            } else {
                b.add_two_way(at(row, col), at(row, col + 1));
            }
        }
    }
    for col in 0..GRID {
        for row in 0..GRID - 1 {
            b.add_two_way(at(row, col), at(row + 1, col));
        }
    }

    // Diagonal shortcut, one-way towards the centre.
    for step in 0..avenue {
        b.add_segment(at(step, step), at(step + 1, step + 1));
    }

    b.build()
}
