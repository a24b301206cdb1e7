//! Strategy configuration.
//!
//! Loaded from a TOML or JSON file by the application and handed to
//! [`TeleportQueries`][crate::TeleportQueries] and
//! [`build_strategy`][crate::build_strategy].
//!
//! ```toml
//! strategy            = "min_access_travel_time"
//! search_radius_m     = 5000.0
//! fallback_to_nearest = true
//! detour_factor       = 1.3
//!
//! [[modes]]
//! mode      = "walk"
//! speed_mps = 1.4
//! max_distance_m = 2000.0
//!
//! [[modes]]
//! mode      = "car"
//! speed_mps = 11.1
//! wait_secs = 120.0
//!
//! [flight]
//! cruise_speed_mps   = 55.0
//! vertical_speed_mps = 5.0
//! cruise_altitude_m  = 300.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use uam_core::TransportMode;

use crate::{StrategyError, StrategyResult, StrategyType};

// ── Mode parameters ───────────────────────────────────────────────────────────

/// Teleportation parameters for one ground mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeParams {
    pub mode:      TransportMode,
    /// Average door-to-door speed over the detoured distance.
    pub speed_mps: f64,
    /// Fixed time added to every leg (parking, waiting for a vehicle…).
    #[serde(default)]
    pub wait_secs: f64,
    /// Legs longer than this (after detour) are infeasible for the mode.
    #[serde(default)]
    pub max_distance_m: Option<f64>,
}

impl ModeParams {
    pub fn new(mode: TransportMode, speed_mps: f64) -> Self {
        Self { mode, speed_mps, wait_secs: 0.0, max_distance_m: None }
    }
}

// ── Flight parameters ─────────────────────────────────────────────────────────

/// Vehicle performance used to derive station-to-station flight times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightParams {
    pub cruise_speed_mps:   f64,
    pub vertical_speed_mps: f64,
    pub cruise_altitude_m:  f64,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            cruise_speed_mps:   55.6, // 200 km/h
            vertical_speed_mps: 5.0,
            cruise_altitude_m:  300.0,
        }
    }
}

// ── UamConfig ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UamConfig {
    #[serde(default)]
    pub strategy: StrategyType,

    /// Stations farther than this from a facility are not candidates.
    pub search_radius_m: f64,

    /// Use the single nearest station when none lies within the radius.
    #[serde(default = "default_fallback")]
    pub fallback_to_nearest: bool,

    /// Ratio of routed ground distance to straight-line distance.
    #[serde(default = "default_detour_factor")]
    pub detour_factor: f64,

    /// Ground modes for access and egress.  Order decides ties.
    pub modes: Vec<ModeParams>,

    #[serde(default)]
    pub flight: FlightParams,
}

fn default_fallback() -> bool {
    true
}

fn default_detour_factor() -> f64 {
    1.3
}

impl Default for UamConfig {
    /// Walk, bike, transit, and car with typical urban speeds.
    fn default() -> Self {
        Self {
            strategy:            StrategyType::default(),
            search_radius_m:     5_000.0,
            fallback_to_nearest: default_fallback(),
            detour_factor:       default_detour_factor(),
            modes: vec![
                ModeParams { max_distance_m: Some(2_500.0), ..ModeParams::new(TransportMode::Walk, 1.4) },
                ModeParams::new(TransportMode::Bike, 4.2),
                ModeParams { wait_secs: 300.0, ..ModeParams::new(TransportMode::Transit, 8.3) },
                ModeParams { wait_secs: 120.0, ..ModeParams::new(TransportMode::Car, 11.1) },
            ],
            flight: FlightParams::default(),
        }
    }
}

impl UamConfig {
    /// Read a `.toml` or `.json` configuration file and validate it.
    pub fn from_file(path: &Path) -> StrategyResult<Self> {
        let shown = path.display();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StrategyError::Config(format!("failure reading {shown}: {e}")))?;

        let config: UamConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&text)
                .map_err(|e| StrategyError::Config(format!("failure decoding {shown}: {e}")))?,
            Some("json") => serde_json::from_str(&text)
                .map_err(|e| StrategyError::Config(format!("failure decoding {shown}: {e}")))?,
            _ => {
                return Err(StrategyError::Config(format!("unsupported file type: {shown}")));
            }
        };

        config.validate()?;
        log::info!("loaded {} strategy configuration from {shown}", config.strategy);
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> StrategyResult<Self> {
        let config: UamConfig =
            toml::from_str(text).map_err(|e| StrategyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter values that would make every estimate meaningless.
    pub fn validate(&self) -> StrategyResult<()> {
        let bad = |msg: String| Err(StrategyError::Config(msg));

        if !(self.search_radius_m > 0.0) {
            return bad(format!("search_radius_m must be positive, got {}", self.search_radius_m));
        }
        if !(self.detour_factor >= 1.0) {
            return bad(format!("detour_factor must be at least 1, got {}", self.detour_factor));
        }
        if self.modes.is_empty() {
            return bad("at least one ground mode must be configured".into());
        }
        for (i, m) in self.modes.iter().enumerate() {
            if !m.mode.is_ground() {
                return bad(format!("{} cannot serve an access or egress leg", m.mode));
            }
            if !(m.speed_mps > 0.0) {
                return bad(format!("{} speed_mps must be positive, got {}", m.mode, m.speed_mps));
            }
            if m.wait_secs < 0.0 {
                return bad(format!("{} wait_secs must not be negative", m.mode));
            }
            if self.modes[..i].iter().any(|o| o.mode == m.mode) {
                return bad(format!("mode {} configured more than once", m.mode));
            }
        }

        let f = &self.flight;
        if !(f.cruise_speed_mps > 0.0) || !(f.vertical_speed_mps > 0.0) {
            return bad("flight speeds must be positive".into());
        }
        if f.cruise_altitude_m < 0.0 {
            return bad("cruise_altitude_m must not be negative".into());
        }
        Ok(())
    }

    /// Parameters for `mode`, if it is configured.
    pub fn mode_params(&self, mode: TransportMode) -> Option<&ModeParams> {
        self.modes.iter().find(|m| m.mode == mode)
    }
}
