//! The `StrategyQueries` trait — everything a strategy may ask of the host
//! simulation.
//!
//! # Pluggability
//!
//! Strategies never touch the station registry, the road network, or the
//! flight model directly.  They go through this trait so the host can plug
//! in network-routed estimators, and tests can plug in fixed tables.  The
//! bundled [`TeleportQueries`][crate::TeleportQueries] is the default.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use uam_core::{StationId, TransportMode};
use uam_infra::Facility;

use crate::{AccessLeg, AccessOptions};

/// Read-only queries a strategy issues while choosing a route.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: batch selection may run many
/// strategy calls in parallel against one shared instance.
///
/// # Ordering
///
/// Strategies keep the first of several equally good candidates, so the
/// order of [`candidate_stations`][Self::candidate_stations] and
/// [`modes`][Self::modes] decides ties.  Implementations should return
/// them in a stable order.
pub trait StrategyQueries: Send + Sync {
    /// Stations a traveler at `from` heading for `toward` may use.
    fn candidate_stations(&self, from: &Facility, toward: &Facility) -> Vec<StationId>;

    /// Fastest ground option for every station in `stations`, in one batch.
    ///
    /// `is_access` is `true` for facility → station legs and `false` for
    /// station → facility legs.  A station missing from the returned map is
    /// treated as unreachable.
    fn access_options(
        &self,
        is_access: bool,
        stations:  &[StationId],
        facility:  &Facility,
        time:      f64,
    ) -> FxHashMap<StationId, AccessOptions>;

    /// Flight duration in seconds from station `from` to station `to`.
    fn flight_time(&self, from: StationId, to: StationId) -> f64;

    /// A single ground leg for one mode; `None` if the mode cannot serve it.
    fn estimate_leg(
        &self,
        is_access: bool,
        facility:  &Facility,
        time:      f64,
        station:   StationId,
        mode:      TransportMode,
    ) -> Option<AccessLeg>;

    /// Ground modes considered for access and egress, in preference order.
    fn modes(&self) -> &[TransportMode];
}

macro_rules! forward_queries {
    ($($target:ty),*) => {$(
        impl<Q: StrategyQueries + ?Sized> StrategyQueries for $target {
            fn candidate_stations(&self, from: &Facility, toward: &Facility) -> Vec<StationId> {
                (**self).candidate_stations(from, toward)
            }

            fn access_options(
                &self,
                is_access: bool,
                stations:  &[StationId],
                facility:  &Facility,
                time:      f64,
            ) -> FxHashMap<StationId, AccessOptions> {
                (**self).access_options(is_access, stations, facility, time)
            }

            fn flight_time(&self, from: StationId, to: StationId) -> f64 {
                (**self).flight_time(from, to)
            }

            fn estimate_leg(
                &self,
                is_access: bool,
                facility:  &Facility,
                time:      f64,
                station:   StationId,
                mode:      TransportMode,
            ) -> Option<AccessLeg> {
                (**self).estimate_leg(is_access, facility, time, station, mode)
            }

            fn modes(&self) -> &[TransportMode] {
                (**self).modes()
            }
        }
    )*};
}

// Lets several strategies share one query backend.
forward_queries!(&Q, Arc<Q>, Box<Q>);
