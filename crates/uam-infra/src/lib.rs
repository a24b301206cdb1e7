//! `uam-infra` — air-mobility station infrastructure.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`station`]  | `Station`, `Facility`                                      |
//! | [`registry`] | `StationRegistry` (ID map + R-tree radius/nearest queries) |
//! | [`loader`]   | `load_stations_csv`, `load_stations_reader`                |
//! | [`error`]    | `InfraError`, `InfraResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod registry;
pub mod station;


pub use error::{InfraError, InfraResult};
pub use loader::{load_stations_csv, load_stations_reader};
pub use registry::StationRegistry;
pub use station::{Facility, Station};
