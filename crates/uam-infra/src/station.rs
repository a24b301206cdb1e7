//! Stations and facilities.

use uam_core::{Coord, FacilityId, StationId};

/// A fixed air-mobility boarding/alighting point.
///
/// Immutable once loaded into a [`StationRegistry`][crate::StationRegistry].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:    StationId,
    pub name:  String,
    pub coord: Coord,
    /// Check-in and boarding time spent at this station before take-off.
    pub pre_flight_secs:  f64,
    /// Deboarding time spent at this station after landing.
    pub post_flight_secs: f64,
}

impl Station {
    /// A station with no boarding or deboarding overhead.
    pub fn new(id: StationId, name: impl Into<String>, coord: Coord) -> Self {
        Self {
            id,
            name: name.into(),
            coord,
            pre_flight_secs:  0.0,
            post_flight_secs: 0.0,
        }
    }

    pub fn with_process_times(mut self, pre_flight_secs: f64, post_flight_secs: f64) -> Self {
        self.pre_flight_secs = pre_flight_secs;
        self.post_flight_secs = post_flight_secs;
        self
    }
}

/// A trip origin or destination in the host simulation's spatial model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id:    FacilityId,
    pub coord: Coord,
}

impl Facility {
    #[inline]
    pub fn new(id: FacilityId, coord: Coord) -> Self {
        Self { id, coord }
    }
}
