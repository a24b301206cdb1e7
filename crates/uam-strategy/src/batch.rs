//! Route selection for many travelers at once.
//!
//! With the `parallel` Cargo feature the requests are spread over Rayon's
//! thread pool.  Results always come back in request order, so output is
//! identical with and without the feature.

use uam_core::TravelerId;
use uam_infra::Facility;

use crate::{UamRoute, UamStrategy};

/// One traveler's request for an air-mobility trip leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    pub traveler:       TravelerId,
    pub from:           Facility,
    pub to:             Facility,
    pub departure_time: f64,
}

/// Run `strategy` for every request.  `result[i]` answers `trips[i]`.
pub fn select_routes<S>(strategy: &S, trips: &[TripRequest]) -> Vec<Option<UamRoute>>
where
    S: UamStrategy + ?Sized,
{
    let select = |t: &TripRequest| strategy.route(t.traveler, &t.from, &t.to, t.departure_time);

    #[cfg(not(feature = "parallel"))]
    let routes: Vec<Option<UamRoute>> = trips.iter().map(select).collect();

    #[cfg(feature = "parallel")]
    let routes: Vec<Option<UamRoute>> = {
        use rayon::prelude::*;
        trips.par_iter().map(select).collect()
    };

    let found = routes.iter().filter(|r| r.is_some()).count();
    log::info!(
        "{} selected routes for {found} of {} trips",
        strategy.strategy_type(),
        trips.len()
    );
    routes
}
