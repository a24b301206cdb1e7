//! Query-scoped access and egress estimates.
//!
//! Neither type outlives the strategy call that produced it.

use uam_core::TransportMode;

/// The fastest way to reach one station from a facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessOptions {
    /// Fastest travel time over all configured modes, in seconds.
    /// `f64::INFINITY` if no mode can reach the station.
    pub fastest_time: f64,
    /// The mode achieving `fastest_time`.  Meaningless when infeasible.
    pub fastest_mode: TransportMode,
}

impl AccessOptions {
    #[inline]
    pub fn new(fastest_time: f64, fastest_mode: TransportMode) -> Self {
        Self { fastest_time, fastest_mode }
    }

    /// A station that no configured mode can reach.
    #[inline]
    pub fn infeasible() -> Self {
        Self { fastest_time: f64::INFINITY, fastest_mode: TransportMode::default() }
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.fastest_time.is_finite()
    }
}

/// One candidate ground leg between a facility and a station by one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessLeg {
    pub mode:        TransportMode,
    /// Door-to-platform travel time in seconds, including any fixed wait.
    pub travel_time: f64,
    /// Distance covered on the ground, in metres.
    pub distance_m:  f64,
}
