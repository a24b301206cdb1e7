use std::fmt;

use uam_core::{StationId, TransportMode};

/// The outcome of a successful strategy query.
///
/// The caller owns it and typically expands it into the traveler's
/// access walk/drive, flight, and egress legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UamRoute {
    pub access_mode:         TransportMode,
    pub origin_station:      StationId,
    pub destination_station: StationId,
    pub egress_mode:         TransportMode,
}

impl fmt::Display for UamRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ~uam~> {} -> {}",
            self.access_mode, self.origin_station, self.destination_station, self.egress_mode
        )
    }
}
