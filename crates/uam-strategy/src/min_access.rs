//! Minimum access travel time strategy.
//!
//! Two greedy phases, the second depending on the first:
//!
//! 1. **Origin**: among stations near the origin, take the one with the
//!    smallest fastest-access time.
//! 2. **Destination**: among stations near the destination (excluding the
//!    chosen origin), take the (station, mode) pair with the smallest egress
//!    time.  Each egress leg is estimated at the time the traveler actually
//!    lands there: departure + access + flight.
//!
//! Both scans use strict `<`, so the first of several equal candidates wins,
//! in candidate order and then mode order.

use uam_core::{StationId, TransportMode, TravelerId};
use uam_infra::Facility;

use crate::{StrategyQueries, StrategyType, UamRoute, UamStrategy};

pub struct MinAccessTravelTimeStrategy<Q> {
    queries: Q,
}

impl<Q: StrategyQueries> MinAccessTravelTimeStrategy<Q> {
    pub fn new(queries: Q) -> Self {
        Self { queries }
    }
}

impl<Q: StrategyQueries> UamStrategy for MinAccessTravelTimeStrategy<Q> {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::MinAccessTravelTime
    }

    fn route(
        &self,
        traveler:       TravelerId,
        from:           &Facility,
        to:             &Facility,
        departure_time: f64,
    ) -> Option<UamRoute> {
        let q = &self.queries;

        // ── Phase 1: origin station ───────────────────────────────────────
        let origins = q.candidate_stations(from, to);
        let access = q.access_options(true, &origins, from, departure_time);

        let mut best_origin: Option<StationId> = None;
        let mut min_access_time = f64::INFINITY;
        let mut access_mode = TransportMode::default();

        for &station in &origins {
            let Some(options) = access.get(&station) else { continue };
            if options.fastest_time < min_access_time {
                best_origin = Some(station);
                min_access_time = options.fastest_time;
                access_mode = options.fastest_mode;
            }
        }

        let Some(origin) = best_origin else {
            if origins.is_empty() {
                log::debug!("{traveler}: no station near the origin");
            } else {
                log::debug!("{traveler}: none of {} origin stations is reachable", origins.len());
            }
            return None;
        };

        // ── Phase 2: destination station and egress mode ──────────────────
        let destinations = q.candidate_stations(to, from);

        let mut best_destination: Option<StationId> = None;
        let mut min_egress_time = f64::INFINITY;
        let mut egress_mode = TransportMode::Walk;

        for &station in &destinations {
            if station == origin {
                continue;
            }
            let flight_time = q.flight_time(origin, station);
            let landing_time = departure_time + min_access_time + flight_time;

            for &mode in q.modes() {
                let Some(leg) = q.estimate_leg(false, to, landing_time, station, mode) else {
                    continue;
                };
                if leg.travel_time < min_egress_time {
                    best_destination = Some(station);
                    min_egress_time = leg.travel_time;
                    egress_mode = mode;
                }
            }
        }

        let Some(destination) = best_destination else {
            log::debug!("{traveler}: no feasible egress from {} candidates", destinations.len());
            return None;
        };

        let route = UamRoute {
            access_mode,
            origin_station: origin,
            destination_station: destination,
            egress_mode,
        };
        log::debug!("{traveler}: {route}");
        Some(route)
    }
}
