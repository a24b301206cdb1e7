//! `uam-strategy` — access/egress station and mode selection for
//! air-mobility trip legs.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`access`]     | `AccessOptions`, `AccessLeg`                                  |
//! | [`route`]      | `UamRoute` — the chosen stations and ground modes             |
//! | [`queries`]    | `StrategyQueries` trait — station, access, and flight lookups |
//! | [`teleport`]   | `TeleportQueries` — default straight-line backend             |
//! | [`config`]     | `UamConfig`, `ModeParams`, `FlightParams`                     |
//! | [`strategy`]   | `UamStrategy` trait, `StrategyType`, `build_strategy`         |
//! | [`min_access`] | `MinAccessTravelTimeStrategy`                                 |
//! | [`min_travel`] | `MinTravelTimeStrategy`                                       |
//! | [`batch`]      | `TripRequest`, `select_routes`                                |
//! | [`error`]      | `StrategyError`, `StrategyResult<T>`                          |
//!
//! # Design notes
//!
//! Strategies are stateless: every value they compute lives for one
//! `route` call.  All knowledge of stations, ground travel, and flights
//! comes through the injected [`StrategyQueries`], so a strategy is as
//! thread-safe and as deterministic as the backend it is given.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `select_routes` runs on Rayon's thread pool.             |

pub mod access;
pub mod batch;
pub mod config;
pub mod error;
pub mod min_access;
pub mod min_travel;
pub mod queries;
pub mod route;
pub mod strategy;
pub mod teleport;

#[cfg(test)]
mod tests;

pub use access::{AccessLeg, AccessOptions};
pub use batch::{TripRequest, select_routes};
pub use config::{FlightParams, ModeParams, UamConfig};
pub use error::{StrategyError, StrategyResult};
pub use min_access::MinAccessTravelTimeStrategy;
pub use min_travel::MinTravelTimeStrategy;
pub use queries::StrategyQueries;
pub use route::UamRoute;
pub use strategy::{StrategyType, UamStrategy, build_strategy};
pub use teleport::TeleportQueries;
