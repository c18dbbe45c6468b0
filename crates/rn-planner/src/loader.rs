//! JSON route network loader.
//!
//! # Format
//!
//! The serde shape of [`RouteNetwork`]: ids are hyphenated UUID strings,
//! positions are either projected `x`/`y` (metres, optional `z`) or
//! geographic `lat`/`lon` (degrees, optional `alt`, e.g.
//! `{ "lat": 30.385, "lon": -97.728 }`), and `frame_id` may be omitted.
//!
//! ```json
//! {
//!   "id": "1c4b7a52-9bd0-5f34-8d6b-0e5a3c2f4a11",
//!   "frame_id": "utm_16N",
//!   "waypoints": [
//!     { "id": "…", "position": { "x": 0.0, "y": 0.0 } },
//!     { "id": "…", "position": { "x": 3.0, "y": 4.0, "z": 12.5 } }
//!   ],
//!   "segments": [
//!     { "id": "…", "start": "…", "end": "…" }
//!   ]
//! }
//! ```
//!
//! Referential integrity is not checked here; see [`Snapshot::build`](crate::Snapshot::build).

use std::io::Read;
use std::path::Path;

use rn_core::{CoreError, CoreResult};

use crate::network::RouteNetwork;

/// Load a route network from a JSON file.
pub fn load_network_json(path: &Path) -> CoreResult<RouteNetwork> {
    let file = std::fs::File::open(path)?;
    load_network_reader(std::io::BufReader::new(file))
}

/// Like [`load_network_json`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R) -> CoreResult<RouteNetwork> {
    let network: RouteNetwork = serde_json::from_reader(reader)
        .map_err(|e| CoreError::Parse(format!("route network JSON: {e}")))?;
    log::debug!(
        "read route network {}: {} waypoints, {} segments",
        network.id,
        network.waypoints.len(),
        network.segments.len(),
    );
    Ok(network)
}
