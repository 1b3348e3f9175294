//! fp-demo — route a walk from the command line.
//!
//! Without `--pbf` the route runs on a small synthetic network around the
//! Meadows in Edinburgh.  With `--pbf` (build with `--features osm`) the
//! walkable ways of an OSM extract around both endpoints are loaded instead.
//!
//! ```text
//! RUST_LOG=debug fp-demo --prefs prefs.json --trace
//! fp-demo --pbf scotland.osm.pbf --from 55.9533,-3.1883 --to 55.9445,-3.1892
//! ```

mod network;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use fp_core::GeoPoint;
use fp_graph::RoutingGraph;
use fp_prefs::Preferences;
use fp_route::{CostTrace, RouteCalculator};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Margin around the endpoints when reading an OSM extract.
#[cfg(feature = "osm")]
const BBOX_EXPANSION: f64 = 0.2;
/// How many ways `--trace` lists.
const TRACE_WAYS: usize = 10;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "fp-demo", version, about = "Pedestrian routing with walkability preferences")]
struct Args {
    /// Start coordinate as LAT,LON
    #[arg(long, value_name = "LAT,LON", value_parser = parse_point)]
    from: Option<GeoPoint>,

    /// End coordinate as LAT,LON
    #[arg(long, value_name = "LAT,LON", value_parser = parse_point)]
    to: Option<GeoPoint>,

    /// JSON object of preference options, e.g. {"steps": -1, "lit_paths": 1}
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// OSM PBF extract to route on
    #[arg(long, value_name = "FILE")]
    pbf: Option<PathBuf>,

    /// Print the heaviest ways the search priced
    #[arg(long)]
    trace: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    GeoPoint::try_new(lat, lon).map_err(|e| e.to_string())
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_preferences(path: Option<&Path>) -> Result<Preferences> {
    let Some(path) = path else {
        return Ok(Preferences::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let prefs = Preferences::from_json_reader(BufReader::new(file))
        .with_context(|| format!("reading preferences from {}", path.display()))?;
    for (name, value) in prefs.non_default() {
        log::info!("preference {name} = {value:?}");
    }
    Ok(prefs)
}

#[cfg(feature = "osm")]
fn load_graph(pbf: &Path, from: GeoPoint, to: GeoPoint) -> Result<RoutingGraph> {
    let bbox = fp_core::BoundingBox::around(from, to, BBOX_EXPANSION);
    fp_graph::osm::load_graph_from_pbf(pbf, Some(&bbox))
        .with_context(|| format!("loading {}", pbf.display()))
}

#[cfg(not(feature = "osm"))]
fn load_graph(pbf: &Path, _from: GeoPoint, _to: GeoPoint) -> Result<RoutingGraph> {
    bail!("{} given but fp-demo was built without the `osm` feature", pbf.display())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let prefs = load_preferences(args.prefs.as_deref())?;

    let t0 = Instant::now();
    let (graph, from, to) = match &args.pbf {
        Some(pbf) => {
            let (Some(from), Some(to)) = (args.from, args.to) else {
                bail!("--pbf needs both --from and --to");
            };
            (load_graph(pbf, from, to)?, from, to)
        }
        None => {
            let (graph, [west, east]) = build_network();
            (graph, args.from.unwrap_or(west), args.to.unwrap_or(east))
        }
    };
    log::info!(
        "graph ready: {} vertices, {} edges, {} ways ({:.2?})",
        graph.vertex_count(),
        graph.edge_count(),
        graph.way_count(),
        t0.elapsed(),
    );

    let calculator = RouteCalculator::new(&graph, &prefs);
    let mut trace = CostTrace::new();
    let t1 = Instant::now();
    let route = calculator
        .calculate_route_observed(from, to, &mut trace)
        .with_context(|| format!("routing {from} -> {to}"))?;
    log::info!(
        "route found in {:.2?}: {} vertices expanded, {} edges priced",
        t1.elapsed(),
        trace.stats.expanded,
        trace.stats.evaluated,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        for part in &route.parts {
            println!("{part}");
        }
        println!(
            "Total: {:.1} m, {:.0} s",
            route.total_distance(),
            route.total_time(),
        );
    }

    if args.trace {
        println!("\nHeaviest ways priced:");
        for (_, way) in trace.heaviest_ways().into_iter().take(TRACE_WAYS) {
            println!(
                "  way {:>12}  weight {:>10}  total {:>12}",
                way.osm_id, way.weight, way.total_weight,
            );
        }
    }
    Ok(())
}
