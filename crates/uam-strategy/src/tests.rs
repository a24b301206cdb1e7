//! Unit tests for uam-strategy.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use uam_core::{Coord, FacilityId, StationId, TransportMode, TravelerId};
use uam_infra::Facility;

use crate::{AccessLeg, AccessOptions, StrategyQueries};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ORIGIN: FacilityId = FacilityId(1);
const DESTINATION: FacilityId = FacilityId(2);

fn origin_facility() -> Facility {
    Facility::new(ORIGIN, Coord::new(0.0, 0.0))
}

fn destination_facility() -> Facility {
    Facility::new(DESTINATION, Coord::new(20_000.0, 0.0))
}

/// A table-driven query backend that records what strategies ask of it.
#[derive(Default)]
struct MockQueries {
    /// Candidate stations keyed by the `from` facility.
    candidates:   FxHashMap<FacilityId, Vec<StationId>>,
    access:       FxHashMap<StationId, AccessOptions>,
    flights:      FxHashMap<(StationId, StationId), f64>,
    egress:       FxHashMap<(StationId, TransportMode), f64>,
    modes:        Vec<TransportMode>,
    flight_calls: Mutex<Vec<(StationId, StationId)>>,
    egress_calls: Mutex<Vec<(StationId, TransportMode, f64)>>,
}

impl MockQueries {
    fn new(modes: &[TransportMode]) -> Self {
        Self { modes: modes.to_vec(), ..Self::default() }
    }

    fn origins(mut self, stations: &[u32]) -> Self {
        self.candidates.insert(ORIGIN, stations.iter().map(|&s| StationId(s)).collect());
        self
    }

    fn destinations(mut self, stations: &[u32]) -> Self {
        self.candidates.insert(DESTINATION, stations.iter().map(|&s| StationId(s)).collect());
        self
    }

    fn access(mut self, station: u32, time: f64, mode: TransportMode) -> Self {
        self.access.insert(StationId(station), AccessOptions::new(time, mode));
        self
    }

    fn flight(mut self, from: u32, to: u32, time: f64) -> Self {
        self.flights.insert((StationId(from), StationId(to)), time);
        self
    }

    fn egress(mut self, station: u32, mode: TransportMode, time: f64) -> Self {
        self.egress.insert((StationId(station), mode), time);
        self
    }

    fn flight_calls(&self) -> Vec<(StationId, StationId)> {
        self.flight_calls.lock().unwrap().clone()
    }

    fn egress_calls(&self) -> Vec<(StationId, TransportMode, f64)> {
        self.egress_calls.lock().unwrap().clone()
    }
}

impl StrategyQueries for MockQueries {
    fn candidate_stations(&self, from: &Facility, _toward: &Facility) -> Vec<StationId> {
        self.candidates.get(&from.id).cloned().unwrap_or_default()
    }

    fn access_options(
        &self,
        _is_access: bool,
        stations:   &[StationId],
        _facility:  &Facility,
        _time:      f64,
    ) -> FxHashMap<StationId, AccessOptions> {
        stations
            .iter()
            .filter_map(|s| self.access.get(s).map(|o| (*s, *o)))
            .collect()
    }

    fn flight_time(&self, from: StationId, to: StationId) -> f64 {
        self.flight_calls.lock().unwrap().push((from, to));
        self.flights.get(&(from, to)).copied().unwrap_or(0.0)
    }

    fn estimate_leg(
        &self,
        _is_access: bool,
        _facility:  &Facility,
        time:       f64,
        station:    StationId,
        mode:       TransportMode,
    ) -> Option<AccessLeg> {
        self.egress_calls.lock().unwrap().push((station, mode, time));
        self.egress.get(&(station, mode)).map(|&travel_time| AccessLeg {
            mode,
            travel_time,
            distance_m: 0.0,
        })
    }

    fn modes(&self) -> &[TransportMode] {
        &self.modes
    }
}

// ── MinAccessTravelTimeStrategy ───────────────────────────────────────────────

#[cfg(test)]
mod min_access_tests {
    use super::*;
    use crate::{MinAccessTravelTimeStrategy, StrategyType, UamRoute, UamStrategy};

    use uam_core::TransportMode::{Car, Walk};

    fn select(q: &MockQueries, departure_time: f64) -> Option<UamRoute> {
        MinAccessTravelTimeStrategy::new(q).route(
            TravelerId(0),
            &origin_facility(),
            &destination_facility(),
            departure_time,
        )
    }

    #[test]
    fn reports_its_type() {
        let q = MockQueries::new(&[Walk]);
        assert_eq!(
            MinAccessTravelTimeStrategy::new(&q).strategy_type(),
            StrategyType::MinAccessTravelTime
        );
    }

    #[test]
    fn end_to_end_uses_winning_origin_for_flights() {
        // S1 is slower to reach (15 > 8), so S2 wins phase 1 and every flight
        // must be measured from S2.
        let q = MockQueries::new(&[Walk, Car])
            .origins(&[1, 2])
            .destinations(&[3, 4])
            .access(1, 15.0, Car)
            .access(2, 8.0, Walk)
            .flight(1, 3, 30.0)
            .flight(1, 4, 40.0)
            .flight(2, 3, 30.0)
            .flight(2, 4, 40.0)
            .egress(3, Walk, 5.0)
            .egress(4, Walk, 3.0);

        let route = select(&q, 0.0).unwrap();
        assert_eq!(
            route,
            UamRoute {
                access_mode:         Walk,
                origin_station:      StationId(2),
                destination_station: StationId(4),
                egress_mode:         Walk,
            }
        );
        assert_eq!(
            q.flight_calls(),
            vec![(StationId(2), StationId(3)), (StationId(2), StationId(4))]
        );
    }

    #[test]
    fn egress_estimated_at_landing_time() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1])
            .destinations(&[2])
            .access(1, 10.0, Car)
            .flight(1, 2, 20.0)
            .egress(2, Walk, 4.0);

        select(&q, 100.0).unwrap();
        assert_eq!(q.egress_calls(), vec![(StationId(2), Walk, 100.0 + 10.0 + 20.0)]);
    }

    #[test]
    fn infinite_flight_time_still_queries_egress() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1])
            .destinations(&[2])
            .access(1, 5.0, Walk)
            .flight(1, 2, f64::INFINITY)
            .egress(2, Walk, 3.0);

        let route = select(&q, 0.0).unwrap();
        assert_eq!(route.origin_station, StationId(1));
        assert_eq!(route.destination_station, StationId(2));
        assert_eq!(route.egress_mode, Walk);

        let calls = q.egress_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, f64::INFINITY);
    }

    #[test]
    fn minimum_access_wins_regardless_of_order() {
        for order in [[1, 2], [2, 1]] {
            let q = MockQueries::new(&[Walk])
                .origins(&order)
                .destinations(&[3])
                .access(1, 10.0, Car)
                .access(2, 5.0, Walk)
                .egress(3, Walk, 1.0);
            assert_eq!(select(&q, 0.0).unwrap().origin_station, StationId(2));
        }
    }

    #[test]
    fn tied_access_keeps_first_candidate() {
        for (order, expected) in [([1, 2], 1), ([2, 1], 2)] {
            let q = MockQueries::new(&[Walk])
                .origins(&order)
                .destinations(&[3])
                .access(1, 5.0, Walk)
                .access(2, 5.0, Car)
                .egress(3, Walk, 1.0);
            assert_eq!(select(&q, 0.0).unwrap().origin_station, StationId(expected));
        }
    }

    #[test]
    fn tied_egress_keeps_first_station_then_first_mode() {
        let q = MockQueries::new(&[Car, Walk])
            .origins(&[1])
            .destinations(&[2, 3])
            .access(1, 5.0, Walk)
            .egress(2, Car, 7.0)
            .egress(2, Walk, 7.0)
            .egress(3, Walk, 7.0);

        let route = select(&q, 0.0).unwrap();
        assert_eq!(route.destination_station, StationId(2));
        assert_eq!(route.egress_mode, Car);
    }

    #[test]
    fn empty_origin_candidates_yield_none() {
        let q = MockQueries::new(&[Walk]).destinations(&[3]).egress(3, Walk, 1.0);
        assert_eq!(select(&q, 0.0), None);
        assert!(q.egress_calls().is_empty());
    }

    #[test]
    fn unreachable_origins_yield_none() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1, 2])
            .destinations(&[3])
            .access(1, f64::INFINITY, Walk)
            .egress(3, Walk, 1.0);
        // Station 2 has no entry in the access map at all.
        assert_eq!(select(&q, 0.0), None);
        assert!(q.flight_calls().is_empty());
    }

    #[test]
    fn infeasible_egress_yields_none() {
        let q = MockQueries::new(&[Walk, Car])
            .origins(&[1])
            .destinations(&[2, 3])
            .access(1, 5.0, Walk);
        assert_eq!(select(&q, 0.0), None);
        assert_eq!(q.egress_calls().len(), 4);
    }

    #[test]
    fn origin_is_never_the_destination() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1, 2])
            .destinations(&[1, 2])
            .access(1, 5.0, Walk)
            .access(2, 9.0, Walk)
            .egress(1, Walk, 0.5)
            .egress(2, Walk, 8.0);

        let route = select(&q, 0.0).unwrap();
        assert_eq!(route.origin_station, StationId(1));
        assert_eq!(route.destination_station, StationId(2));
        assert!(q.flight_calls().iter().all(|(a, b)| a != b));
    }

    #[test]
    fn only_candidate_equal_to_origin_yields_none() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1])
            .destinations(&[1])
            .access(1, 5.0, Walk)
            .egress(1, Walk, 1.0);
        assert_eq!(select(&q, 0.0), None);
    }

    #[test]
    fn repeated_queries_agree() {
        let q = MockQueries::new(&[Walk, Car])
            .origins(&[1, 2])
            .destinations(&[3, 4])
            .access(1, 12.0, Car)
            .access(2, 12.5, Walk)
            .egress(3, Car, 6.0)
            .egress(4, Walk, 6.5);
        assert_eq!(select(&q, 50.0), select(&q, 50.0));
    }
}

// ── MinTravelTimeStrategy ─────────────────────────────────────────────────────

#[cfg(test)]
mod min_travel_tests {
    use super::*;
    use crate::{MinTravelTimeStrategy, StrategyType, UamStrategy};

    use uam_core::TransportMode::{Car, Walk};

    #[test]
    fn trades_access_time_for_shorter_flight() {
        // Min-access would take S1 (access 5) and fly 100 s to S3.
        // S2 costs 10 s more to reach but flies only 20 s.
        let q = MockQueries::new(&[Walk])
            .origins(&[1, 2])
            .destinations(&[3])
            .access(1, 5.0, Walk)
            .access(2, 15.0, Car)
            .flight(1, 3, 100.0)
            .flight(2, 3, 20.0)
            .egress(3, Walk, 4.0);

        let strategy = MinTravelTimeStrategy::new(&q);
        assert_eq!(strategy.strategy_type(), StrategyType::MinTravelTime);

        let route = strategy
            .route(TravelerId(3), &origin_facility(), &destination_facility(), 0.0)
            .unwrap();
        assert_eq!(route.origin_station, StationId(2));
        assert_eq!(route.access_mode, Car);
        assert_eq!(route.destination_station, StationId(3));
    }

    #[test]
    fn skips_self_loops_and_infeasible_pairs() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1])
            .destinations(&[1])
            .access(1, 5.0, Walk)
            .egress(1, Walk, 1.0);
        let route = MinTravelTimeStrategy::new(&q).route(
            TravelerId(0),
            &origin_facility(),
            &destination_facility(),
            0.0,
        );
        assert_eq!(route, None);
    }

    #[test]
    fn infinite_flight_time_reaches_egress_but_never_wins() {
        let q = MockQueries::new(&[Walk])
            .origins(&[1])
            .destinations(&[2])
            .access(1, 5.0, Walk)
            .flight(1, 2, f64::INFINITY)
            .egress(2, Walk, 3.0);
        let route = MinTravelTimeStrategy::new(&q).route(
            TravelerId(0),
            &origin_facility(),
            &destination_facility(),
            0.0,
        );
        assert_eq!(route, None);
        assert_eq!(q.egress_calls(), vec![(StationId(2), Walk, f64::INFINITY)]);
    }
}

// ── StrategyType & build_strategy ─────────────────────────────────────────────

#[cfg(test)]
mod strategy_type_tests {
    use std::sync::Arc;

    use super::*;
    use crate::{StrategyError, StrategyType, build_strategy};

    #[test]
    fn parses_all_spellings() {
        for s in ["MINACCESSTRAVELTIME", "MinAccessTravelTime", "min_access_travel_time"] {
            assert_eq!(s.parse::<StrategyType>().unwrap(), StrategyType::MinAccessTravelTime);
        }
        assert_eq!("min_travel_time".parse::<StrategyType>().unwrap(), StrategyType::MinTravelTime);
    }

    #[test]
    fn unknown_name_is_error() {
        assert!(matches!(
            "predefined".parse::<StrategyType>(),
            Err(StrategyError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn build_dispatches_on_type() {
        let q = Arc::new(MockQueries::new(&[TransportMode::Walk]));
        for kind in [StrategyType::MinAccessTravelTime, StrategyType::MinTravelTime] {
            assert_eq!(build_strategy(kind, Arc::clone(&q)).strategy_type(), kind);
        }
    }

    #[test]
    fn configured_strategy_is_built() {
        use uam_infra::StationRegistry;

        use crate::{TeleportQueries, UamConfig};

        let text = r#"
strategy        = "MINTRAVELTIME"
search_radius_m = 3000.0

[[modes]]
mode      = "walk"
speed_mps = 1.4
"#;
        let config = UamConfig::from_toml_str(text).unwrap();
        let queries = TeleportQueries::new(StationRegistry::empty(), &config);
        let strategy = build_strategy(config.strategy, queries);
        assert_eq!(strategy.strategy_type(), StrategyType::MinTravelTime);
    }
}

// ── TeleportQueries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod teleport_tests {
    use uam_infra::{Station, StationRegistry};

    use super::*;
    use crate::{FlightParams, ModeParams, TeleportQueries, UamConfig};

    /// Stations at x = 1 000 (S0), 4 000 (S1), 19 000 (S2); origin facility
    /// at x = 0, destination facility at x = 20 000.
    fn queries(config: &UamConfig) -> TeleportQueries {
        let registry = StationRegistry::new(vec![
            Station::new(StationId(0), "west", Coord::new(1_000.0, 0.0)),
            Station::new(StationId(1), "inner", Coord::new(4_000.0, 0.0))
                .with_process_times(300.0, 60.0),
            Station::new(StationId(2), "east", Coord::new(19_000.0, 0.0))
                .with_process_times(120.0, 90.0),
        ])
        .unwrap();
        TeleportQueries::new(registry, config)
    }

    fn config() -> UamConfig {
        UamConfig {
            search_radius_m: 5_000.0,
            detour_factor:   1.5,
            modes: vec![
                ModeParams { max_distance_m: Some(2_000.0), ..ModeParams::new(TransportMode::Walk, 1.5) },
                ModeParams { wait_secs: 60.0, ..ModeParams::new(TransportMode::Car, 10.0) },
            ],
            flight: FlightParams {
                cruise_speed_mps:   50.0,
                vertical_speed_mps: 5.0,
                cruise_altitude_m:  100.0,
            },
            ..UamConfig::default()
        }
    }

    #[test]
    fn candidates_within_radius_nearest_first() {
        let q = queries(&config());
        let found = q.candidate_stations(&origin_facility(), &destination_facility());
        assert_eq!(found, vec![StationId(0), StationId(1)]);
    }

    #[test]
    fn falls_back_to_nearest_station() {
        let q = queries(&UamConfig { search_radius_m: 10.0, ..config() });
        let found = q.candidate_stations(&origin_facility(), &destination_facility());
        assert_eq!(found, vec![StationId(0)]);
    }

    #[test]
    fn no_fallback_when_disabled() {
        let q = queries(&UamConfig { search_radius_m: 10.0, fallback_to_nearest: false, ..config() });
        assert!(q.candidate_stations(&origin_facility(), &destination_facility()).is_empty());
    }

    #[test]
    fn leg_time_includes_detour_and_wait() {
        let q = queries(&config());
        // 1 000 m beeline * 1.5 detour = 1 500 m.
        let walk = q.estimate_leg(true, &origin_facility(), 0.0, StationId(0), TransportMode::Walk).unwrap();
        assert_eq!(walk.distance_m, 1_500.0);
        assert_eq!(walk.travel_time, 1_000.0);

        let car = q.estimate_leg(true, &origin_facility(), 0.0, StationId(0), TransportMode::Car).unwrap();
        assert_eq!(car.travel_time, 60.0 + 150.0);
    }

    #[test]
    fn leg_beyond_max_distance_is_infeasible() {
        let q = queries(&config());
        // 4 000 m * 1.5 = 6 000 m > 2 000 m walking limit.
        assert!(q.estimate_leg(true, &origin_facility(), 0.0, StationId(1), TransportMode::Walk).is_none());
    }

    #[test]
    fn unconfigured_mode_is_infeasible() {
        let q = queries(&config());
        assert!(q.estimate_leg(true, &origin_facility(), 0.0, StationId(0), TransportMode::Bike).is_none());
    }

    #[test]
    fn access_options_pick_fastest_mode() {
        let q = queries(&config());
        let stations = [StationId(0), StationId(1)];
        let options = q.access_options(true, &stations, &origin_facility(), 0.0);

        // S0: walk 1 000 s vs car 210 s.
        assert_eq!(options[&StationId(0)], AccessOptions::new(210.0, TransportMode::Car));
        // S1: walk infeasible, car 60 + 600 s.
        assert_eq!(options[&StationId(1)], AccessOptions::new(660.0, TransportMode::Car));
    }

    #[test]
    fn access_options_mark_unreachable_stations() {
        let only_walk = UamConfig {
            modes: vec![ModeParams { max_distance_m: Some(100.0), ..ModeParams::new(TransportMode::Walk, 1.5) }],
            ..config()
        };
        let q = queries(&only_walk);
        let options = q.access_options(true, &[StationId(0)], &origin_facility(), 0.0);
        assert!(!options[&StationId(0)].is_feasible());
    }

    #[test]
    fn flight_time_adds_process_and_vertical_phases() {
        let q = queries(&config());
        // 300 pre + 2 * 100/5 vertical + 15 000/50 cruise + 90 post.
        assert_eq!(q.flight_time(StationId(1), StationId(2)), 300.0 + 40.0 + 300.0 + 90.0);
        assert_eq!(q.flight_time(StationId(1), StationId(42)), f64::INFINITY);
    }

    #[test]
    fn modes_follow_config_order() {
        let q = queries(&config());
        assert_eq!(q.modes(), &[TransportMode::Walk, TransportMode::Car]);
    }

    #[test]
    fn full_selection_over_teleport_backend() {
        use crate::{MinAccessTravelTimeStrategy, UamStrategy};

        let strategy = MinAccessTravelTimeStrategy::new(queries(&config()));
        let route = strategy
            .route(TravelerId(9), &origin_facility(), &destination_facility(), 8.0 * 3_600.0)
            .unwrap();
        assert_eq!(route.origin_station, StationId(0));
        assert_eq!(route.access_mode, TransportMode::Car);
        assert_eq!(route.destination_station, StationId(2));
        // 1 500 m detoured: walk 1 000 s vs car 210 s.
        assert_eq!(route.egress_mode, TransportMode::Car);
    }
}

// ── UamConfig ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use super::*;
    use crate::{StrategyError, StrategyType, UamConfig};

    const TOML: &str = r#"
strategy        = "MINTRAVELTIME"
search_radius_m = 3000.0

[[modes]]
mode           = "walk"
speed_mps      = 1.4
max_distance_m = 1500.0

[[modes]]
mode      = "pt"
speed_mps = 8.0
wait_secs = 240.0
"#;

    #[test]
    fn default_config_is_valid() {
        UamConfig::default().validate().unwrap();
    }

    #[test]
    fn parses_toml_with_defaults() {
        let c = UamConfig::from_toml_str(TOML).unwrap();
        assert_eq!(c.strategy, StrategyType::MinTravelTime);
        assert_eq!(c.search_radius_m, 3_000.0);
        assert!(c.fallback_to_nearest);
        assert_eq!(c.detour_factor, 1.3);
        assert_eq!(c.modes.len(), 2);
        assert_eq!(c.modes[1].mode, TransportMode::Transit);
        assert_eq!(c.mode_params(TransportMode::Walk).unwrap().max_distance_m, Some(1_500.0));
        assert!(c.mode_params(TransportMode::Car).is_none());
    }

    #[test]
    fn rejects_duplicate_modes() {
        let mut c = UamConfig::default();
        c.modes.push(c.modes[0].clone());
        assert!(matches!(c.validate(), Err(StrategyError::Config(_))));
    }

    #[test]
    fn rejects_flight_as_ground_mode() {
        let mut c = UamConfig::default();
        c.modes[0].mode = TransportMode::Uam;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(UamConfig { search_radius_m: 0.0, ..UamConfig::default() }.validate().is_err());
        assert!(UamConfig { detour_factor: 0.9, ..UamConfig::default() }.validate().is_err());
        assert!(UamConfig { modes: vec![], ..UamConfig::default() }.validate().is_err());
    }

    #[test]
    fn loads_toml_and_json_files() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(TOML.as_bytes()).unwrap();
        assert_eq!(
            UamConfig::from_file(toml_file.path()).unwrap().strategy,
            StrategyType::MinTravelTime
        );

        let json = serde_json::to_string(&UamConfig::default()).unwrap();
        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file.write_all(json.as_bytes()).unwrap();
        assert_eq!(UamConfig::from_file(json_file.path()).unwrap(), UamConfig::default());
    }

    #[test]
    fn unsupported_extension_is_error() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(UamConfig::from_file(file.path()), Err(StrategyError::Config(_))));
    }
}

// ── Batch selection ───────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::{MinAccessTravelTimeStrategy, TripRequest, select_routes};

    #[test]
    fn results_follow_request_order() {
        let q = MockQueries::new(&[TransportMode::Walk])
            .origins(&[1])
            .destinations(&[2])
            .access(1, 5.0, TransportMode::Walk)
            .egress(2, TransportMode::Walk, 3.0);
        let strategy = MinAccessTravelTimeStrategy::new(&q);

        let outbound = TripRequest {
            traveler:       TravelerId(0),
            from:           origin_facility(),
            to:             destination_facility(),
            departure_time: 0.0,
        };
        // Starting from the destination facility, the only nearby station
        // has no access estimate, so no origin station is found.
        let inbound = TripRequest {
            traveler: TravelerId(1),
            from:     destination_facility(),
            to:       Facility::new(FacilityId(7), Coord::new(0.0, 0.0)),
            ..outbound
        };

        let routes = select_routes(&strategy, &[outbound, inbound, outbound]);
        assert_eq!(routes.len(), 3);
        assert!(routes[0].is_some());
        assert_eq!(routes[1], None);
        assert_eq!(routes[0], routes[2]);
    }

    #[test]
    fn accepts_boxed_strategies() {
        let q = std::sync::Arc::new(MockQueries::new(&[TransportMode::Walk]));
        let strategy = crate::build_strategy(crate::StrategyType::MinTravelTime, q);
        assert!(select_routes(strategy.as_ref(), &[]).is_empty());
    }
}
