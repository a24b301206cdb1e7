//! The `UamStrategy` trait and strategy selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use uam_core::TravelerId;
use uam_infra::Facility;

use crate::{
    MinAccessTravelTimeStrategy, MinTravelTimeStrategy, StrategyError, StrategyQueries, UamRoute,
};

/// Chooses access station, egress station, and ground modes for one
/// air-mobility trip leg.
///
/// Returning `None` is the normal "no feasible route" outcome; the caller
/// falls back to another mode.  Implementations hold no per-query state, so
/// one instance serves every traveler, from any thread.
pub trait UamStrategy: Send + Sync {
    fn strategy_type(&self) -> StrategyType;

    fn route(
        &self,
        traveler:       TravelerId,
        from:           &Facility,
        to:             &Facility,
        departure_time: f64,
    ) -> Option<UamRoute>;
}

// ── StrategyType ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Fastest access to the origin station, then fastest egress.
    #[default]
    #[serde(alias = "MINACCESSTRAVELTIME")]
    MinAccessTravelTime,
    /// Fastest door-to-door total over every station pair.
    #[serde(alias = "MINTRAVELTIME")]
    MinTravelTime,
}

impl StrategyType {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyType::MinAccessTravelTime => "min_access_travel_time",
            StrategyType::MinTravelTime       => "min_travel_time",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyType {
    type Err = StrategyError;

    /// Case-insensitive; underscores are ignored, so `MINTRAVELTIME`,
    /// `MinTravelTime`, and `min_travel_time` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "minaccesstraveltime" => Ok(StrategyType::MinAccessTravelTime),
            "mintraveltime"       => Ok(StrategyType::MinTravelTime),
            _ => Err(StrategyError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Instantiate the strategy named by `kind` over `queries`.
pub fn build_strategy<Q>(kind: StrategyType, queries: Q) -> Box<dyn UamStrategy>
where
    Q: StrategyQueries + 'static,
{
    match kind {
        StrategyType::MinAccessTravelTime => Box::new(MinAccessTravelTimeStrategy::new(queries)),
        StrategyType::MinTravelTime       => Box::new(MinTravelTimeStrategy::new(queries)),
    }
}
