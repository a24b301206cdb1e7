//! Default query backend: straight-line "teleported" ground legs and a
//! climb/cruise/descend flight model.
//!
//! # Ground legs
//!
//! ```text
//! distance = beeline(facility, station) * detour_factor
//! time     = wait_secs + distance / speed_mps
//! ```
//!
//! A leg is infeasible when the mode is not configured or `distance`
//! exceeds the mode's `max_distance_m`.  Departure time does not affect
//! teleported legs; it is accepted so network-routed backends can honour it.
//!
//! # Flights
//!
//! ```text
//! time = pre_flight(from) + climb + cruise + descent + post_flight(to)
//! climb = descent = cruise_altitude_m / vertical_speed_mps
//! cruise          = beeline(from, to) / cruise_speed_mps
//! ```

use rustc_hash::FxHashMap;

use uam_core::{StationId, TransportMode};
use uam_infra::{Facility, StationRegistry};

use crate::{AccessLeg, AccessOptions, StrategyQueries, UamConfig};

pub struct TeleportQueries {
    registry: StationRegistry,
    config:   UamConfig,
    modes:    Vec<TransportMode>,
}

impl TeleportQueries {
    /// `config` is assumed to have passed [`UamConfig::validate`].
    pub fn new(registry: StationRegistry, config: &UamConfig) -> Self {
        Self {
            registry,
            config: config.clone(),
            modes:  config.modes.iter().map(|m| m.mode).collect(),
        }
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }
}

impl StrategyQueries for TeleportQueries {
    /// Stations within the search radius of `from`, nearest first.
    ///
    /// `toward` is not used for pruning: a traveler may walk away from the
    /// destination to reach a well-placed station.
    fn candidate_stations(&self, from: &Facility, _toward: &Facility) -> Vec<StationId> {
        let found = self.registry.within_radius(from.coord, self.config.search_radius_m);
        if !found.is_empty() || !self.config.fallback_to_nearest {
            return found;
        }
        self.registry.nearest(from.coord).into_iter().collect()
    }

    fn access_options(
        &self,
        is_access: bool,
        stations:  &[StationId],
        facility:  &Facility,
        time:      f64,
    ) -> FxHashMap<StationId, AccessOptions> {
        let mut out = FxHashMap::default();
        out.reserve(stations.len());

        for &station in stations {
            let mut best = AccessOptions::infeasible();
            for &mode in &self.modes {
                if let Some(leg) = self.estimate_leg(is_access, facility, time, station, mode) {
                    if leg.travel_time < best.fastest_time {
                        best = AccessOptions::new(leg.travel_time, mode);
                    }
                }
            }
            out.insert(station, best);
        }
        out
    }

    fn flight_time(&self, from: StationId, to: StationId) -> f64 {
        let (Some(a), Some(b)) = (self.registry.get(from), self.registry.get(to)) else {
            return f64::INFINITY;
        };
        let flight = &self.config.flight;
        let vertical = 2.0 * flight.cruise_altitude_m / flight.vertical_speed_mps;
        let cruise = a.coord.distance_m(b.coord) / flight.cruise_speed_mps;
        a.pre_flight_secs + vertical + cruise + b.post_flight_secs
    }

    fn estimate_leg(
        &self,
        _is_access: bool,
        facility:   &Facility,
        _time:      f64,
        station:    StationId,
        mode:       TransportMode,
    ) -> Option<AccessLeg> {
        let station = self.registry.get(station)?;
        let params = self.config.mode_params(mode)?;

        let distance_m = facility.coord.distance_m(station.coord) * self.config.detour_factor;
        if params.max_distance_m.is_some_and(|max| distance_m > max) {
            return None;
        }

        Some(AccessLeg {
            mode,
            travel_time: params.wait_secs + distance_m / params.speed_mps,
            distance_m,
        })
    }

    fn modes(&self) -> &[TransportMode] {
        &self.modes
    }
}
