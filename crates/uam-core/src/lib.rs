//! `uam-core` — foundational types shared by the UAM access-strategy crates.
//!
//! This crate has no `uam-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TravelerId`, `FacilityId`, `StationId`               |
//! | [`geo`]         | `Coord`, planar distance                              |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`error`]       | `CoreError`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::CoreError;
pub use geo::Coord;
pub use ids::{FacilityId, StationId, TravelerId};
pub use transport::TransportMode;
