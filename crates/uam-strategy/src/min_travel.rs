//! Minimum total travel time strategy.
//!
//! Scores every (origin station, destination station) pair by
//! `access + flight + best egress` and keeps the smallest total.  More
//! expensive than [`MinAccessTravelTimeStrategy`][crate::MinAccessTravelTimeStrategy]
//! (one flight query per pair rather than per destination) but never trades
//! a slightly faster access leg for a much longer flight.

use uam_core::{StationId, TransportMode, TravelerId};
use uam_infra::Facility;

use crate::{StrategyQueries, StrategyType, UamRoute, UamStrategy};

pub struct MinTravelTimeStrategy<Q> {
    queries: Q,
}

impl<Q: StrategyQueries> MinTravelTimeStrategy<Q> {
    pub fn new(queries: Q) -> Self {
        Self { queries }
    }

    /// Fastest egress mode and time from `station` at `time`.
    fn best_egress(&self, to: &Facility, time: f64, station: StationId) -> Option<(TransportMode, f64)> {
        let mut best: Option<(TransportMode, f64)> = None;
        for &mode in self.queries.modes() {
            let Some(leg) = self.queries.estimate_leg(false, to, time, station, mode) else {
                continue;
            };
            if best.is_none_or(|(_, t)| leg.travel_time < t) {
                best = Some((mode, leg.travel_time));
            }
        }
        best
    }
}

impl<Q: StrategyQueries> UamStrategy for MinTravelTimeStrategy<Q> {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::MinTravelTime
    }

    fn route(
        &self,
        traveler:       TravelerId,
        from:           &Facility,
        to:             &Facility,
        departure_time: f64,
    ) -> Option<UamRoute> {
        let q = &self.queries;

        let origins = q.candidate_stations(from, to);
        let access = q.access_options(true, &origins, from, departure_time);
        let destinations = q.candidate_stations(to, from);

        let mut best: Option<UamRoute> = None;
        let mut min_total = f64::INFINITY;

        for &origin in &origins {
            let Some(options) = access.get(&origin).filter(|o| o.is_feasible()) else {
                continue;
            };
            for &destination in &destinations {
                if destination == origin {
                    continue;
                }
                let flight_time = q.flight_time(origin, destination);
                let landing_time = departure_time + options.fastest_time + flight_time;
                let Some((egress_mode, egress_time)) = self.best_egress(to, landing_time, destination)
                else {
                    continue;
                };

                let total = options.fastest_time + flight_time + egress_time;
                if total < min_total {
                    min_total = total;
                    best = Some(UamRoute {
                        access_mode: options.fastest_mode,
                        origin_station: origin,
                        destination_station: destination,
                        egress_mode,
                    });
                }
            }
        }

        match &best {
            Some(route) => log::debug!("{traveler}: {route} in {min_total:.0} s"),
            None => log::debug!("{traveler}: no feasible station pair"),
        }
        best
    }
}
