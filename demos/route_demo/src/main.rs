//! route_demo — load a route network and plan through it.
//!
//! Without `--network` a built-in street grid is used.  With `--start` and
//! `--goal` a single request is planned; otherwise `--samples` random
//! waypoint pairs are drawn from a seeded RNG and planned one by one, the
//! way a visualisation front end would exercise the planner.
//!
//! ```text
//! RUST_LOG=debug cargo run -p route_demo -- --samples 5 --seed 7
//! cargo run -p route_demo -- --network net.json --start <uuid> --goal <uuid> --json
//! ```

mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index::sample;

use rn_core::{WaypointId, WaypointIndex};
use rn_planner::loader::load_network_json;
use rn_planner::{PlanRequest, PlannerConfig, RoutePath, RoutePlanner, SettlePolicy};

use network::build_grid;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan shortest paths through a route network")]
struct Args {
    /// Route network JSON file (defaults to a built-in 5×5 grid)
    #[arg(long)]
    network: Option<PathBuf>,

    /// Start waypoint id
    #[arg(long, requires = "goal")]
    start: Option<WaypointId>,

    /// Goal waypoint id
    #[arg(long, requires = "start")]
    goal: Option<WaypointId>,

    /// Number of random start/goal pairs to plan when no pair is given
    #[arg(long, default_value_t = 4)]
    samples: usize,

    /// RNG seed for random pairs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// When a waypoint is settled: on-extraction or on-insertion
    #[arg(long, default_value_t = SettlePolicy::OnExtraction)]
    policy: SettlePolicy,

    /// Abandon a search after this many frontier extractions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Print each path as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PlannerConfig {
        settle_policy:  args.policy,
        max_expansions: args.max_expansions,
    };
    let planner = RoutePlanner::with_config(config)?;

    // 1. LoadNetwork.
    let network = match &args.network {
        Some(path) => load_network_json(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => build_grid(),
    };
    let snapshot = planner.load_network(network);
    println!(
        "Network {}: {} waypoints, {} edges ({} segments dropped), policy {}",
        snapshot.id(),
        snapshot.index().len(),
        snapshot.adjacency().edge_count(),
        snapshot.adjacency().dropped_segments(),
        args.policy,
    );

    // 2. Build requests.
    let requests: Vec<PlanRequest> = match (args.start, args.goal) {
        (Some(start), Some(goal)) => vec![PlanRequest { network: snapshot.id(), start, goal }],
        _ => {
            let n = snapshot.index().len();
            if n < 2 {
                bail!("random sampling needs at least 2 waypoints, network has {n}");
            }
            let mut rng = SmallRng::seed_from_u64(args.seed);
            let id_at = |i: usize| -> Result<WaypointId> {
                Ok(snapshot.index().id_of(WaypointIndex::try_from(i)?))
            };
            (0..args.samples)
                .map(|_| {
                    // Two distinct waypoints per sample.
                    let pair = sample(&mut rng, n, 2);
                    Ok(PlanRequest {
                        network: snapshot.id(),
                        start:   id_at(pair.index(0))?,
                        goal:    id_at(pair.index(1))?,
                    })
                })
                .collect::<Result<_>>()?
        }
    };

    // 3. PlanRoute.
    log::info!("planning {} request(s)", requests.len());
    let t0 = Instant::now();
    let results = planner.plan_batch(&requests);
    let elapsed = t0.elapsed();

    for (request, result) in requests.iter().zip(&results) {
        match result {
            Ok(path) => print_path(request, path, args.json)?,
            Err(e) => println!("{} -> {}: {e}", request.start, request.goal),
        }
    }

    let ok = results.iter().filter(|r| r.is_ok()).count();
    println!();
    println!(
        "{ok}/{} requests planned in {:.3} ms",
        results.len(),
        elapsed.as_secs_f64() * 1_000.0
    );
    Ok(())
}

fn print_path(request: &PlanRequest, path: &RoutePath, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(path)?);
        return Ok(());
    }
    println!(
        "{} -> {}: {} segments, {:.1} m",
        request.start,
        request.goal,
        path.segments.len(),
        path.length,
    );
    for segment in &path.segments {
        println!("    {segment}");
    }
    Ok(())
}
