//! corridor — picks access/egress stations for synthetic trips across a
//! 36 km metropolitan corridor served by six air-mobility stations, using
//! the strategy named by `strategy` in the configuration file.
//!
//! ```text
//! cargo run -p corridor -- [stations.csv] [uam.toml]
//! RUST_LOG=debug cargo run -p corridor        # per-trip decisions
//! ```
//!
//! Without arguments the bundled files under `data/` are used.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use uam_core::{Coord, FacilityId, TransportMode, TravelerId};
use uam_infra::{Facility, load_stations_csv};
use uam_strategy::{
    TeleportQueries, TripRequest, UamConfig, UamRoute, build_strategy, select_routes,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const TRIP_COUNT:    usize = 2_000;
const SEED:          u64   = 42;
const CORRIDOR_X_M:  f64   = 36_000.0;
const CORRIDOR_Y_M:  f64   = 18_000.0;
/// Minimum straight-line trip length worth considering a flight for.
const MIN_TRIP_M:    f64   = 8_000.0;
/// Departures between 06:00 and 10:00.
const FIRST_DEP_SECS: f64  = 6.0 * 3_600.0;
const LAST_DEP_SECS:  f64  = 10.0 * 3_600.0;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

// ── Trip synthesis ────────────────────────────────────────────────────────────

fn random_coord(rng: &mut SmallRng) -> Coord {
    Coord::new(rng.gen_range(0.0..CORRIDOR_X_M), rng.gen_range(0.0..CORRIDOR_Y_M))
}

/// Uniformly placed home/work pairs, discarding trips too short to fly.
fn synthesize_trips(rng: &mut SmallRng, count: usize) -> Vec<TripRequest> {
    let mut trips = Vec::with_capacity(count);
    let mut next_facility = 0u32;

    while trips.len() < count {
        let a = random_coord(rng);
        let b = random_coord(rng);
        if a.distance_m(b) < MIN_TRIP_M {
            continue;
        }
        let from = Facility::new(FacilityId(next_facility), a);
        let to = Facility::new(FacilityId(next_facility + 1), b);
        next_facility += 2;

        trips.push(TripRequest {
            traveler:       TravelerId(trips.len() as u32),
            from,
            to,
            departure_time: rng.gen_range(FIRST_DEP_SECS..LAST_DEP_SECS),
        });
    }
    trips
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn mode_counts(routes: &[Option<UamRoute>], pick: fn(&UamRoute) -> TransportMode) -> String {
    let modes = [TransportMode::Walk, TransportMode::Bike, TransportMode::Transit, TransportMode::Car];
    modes
        .iter()
        .map(|&m| {
            let n = routes.iter().flatten().filter(|r| pick(r) == m).count();
            format!("{m}={n}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let stations_path = args.next().map(PathBuf::from).unwrap_or_else(|| data_path("stations.csv"));
    let config_path = args.next().map(PathBuf::from).unwrap_or_else(|| data_path("uam.toml"));

    let registry = load_stations_csv(&stations_path)
        .with_context(|| format!("loading {}", stations_path.display()))?;
    let config = UamConfig::from_file(&config_path)?;
    log::info!("{} stations, {} ground modes", registry.len(), config.modes.len());

    let mut rng = SmallRng::seed_from_u64(SEED);
    let trips = synthesize_trips(&mut rng, TRIP_COUNT);

    let queries = Arc::new(TeleportQueries::new(registry, &config));
    let strategy = build_strategy(config.strategy, Arc::clone(&queries));
    let kind = strategy.strategy_type();

    let t0 = Instant::now();
    let routes = select_routes(strategy.as_ref(), &trips);
    let elapsed = t0.elapsed();

    let found = routes.iter().flatten().count();
    log::info!("{kind}: {found}/{} trips routed in {elapsed:.2?}", trips.len());
    log::info!("{kind}: access  {}", mode_counts(&routes, |r| r.access_mode));
    log::info!("{kind}: egress  {}", mode_counts(&routes, |r| r.egress_mode));

    if let Some((trip, route)) = trips.iter().zip(&routes).find_map(|(t, r)| r.map(|r| (t, r))) {
        let origin = queries.registry().get(route.origin_station).map(|s| s.name.as_str());
        let destination = queries.registry().get(route.destination_station).map(|s| s.name.as_str());
        log::info!(
            "{kind}: e.g. {} {} -> {} : {route} ({} -> {})",
            trip.traveler,
            trip.from.coord,
            trip.to.coord,
            origin.unwrap_or("?"),
            destination.unwrap_or("?"),
        );
    }

    Ok(())
}
