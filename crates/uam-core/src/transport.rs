//! Transportation mode enum shared across the UAM crates.
//!
//! Ground modes are the candidates for access and egress legs; `Uam` is the
//! flight itself and never appears as an access or egress mode.

use std::str::FromStr;

use crate::CoreError;

/// The means by which a traveler covers one leg of a trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TransportMode {
    /// On foot.  Default egress mode before any candidate has been scored.
    #[default]
    Walk,
    /// Private vehicle.
    Car,
    /// Bicycle.
    Bike,
    /// Scheduled public transit (bus, rail, ferry…).
    #[cfg_attr(feature = "serde", serde(alias = "pt"))]
    Transit,
    /// Air-mobility flight between two stations.
    Uam,
}

impl TransportMode {
    /// `true` for modes that can serve an access or egress leg.
    #[inline]
    pub fn is_ground(self) -> bool {
        !matches!(self, TransportMode::Uam)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Walk    => "walk",
            TransportMode::Car     => "car",
            TransportMode::Bike    => "bike",
            TransportMode::Transit => "transit",
            TransportMode::Uam     => "uam",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk"            => Ok(TransportMode::Walk),
            "car"             => Ok(TransportMode::Car),
            "bike"            => Ok(TransportMode::Bike),
            "transit" | "pt"  => Ok(TransportMode::Transit),
            "uam"             => Ok(TransportMode::Uam),
            other             => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}
