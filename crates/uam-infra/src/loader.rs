//! CSV station loader.
//!
//! # CSV format
//!
//! One row per station.  Coordinates are in the simulation's projected CRS
//! (metres).  Process-time columns may be left empty, meaning zero.
//!
//! ```csv
//! station_id,name,x,y,pre_flight_secs,post_flight_secs
//! 0,Airport,2000.0,500.0,600,120
//! 1,Downtown,12000.0,9000.0,300,60
//! 2,Harbour,15000.0,1500.0,,
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use uam_core::{Coord, StationId};

use crate::{InfraError, InfraResult, Station, StationRegistry};

#[derive(Deserialize)]
struct StationRecord {
    station_id:       u32,
    name:             String,
    x:                f64,
    y:                f64,
    pre_flight_secs:  Option<f64>,
    post_flight_secs: Option<f64>,
}

/// Load a [`StationRegistry`] from a CSV file.
pub fn load_stations_csv(path: &Path) -> InfraResult<StationRegistry> {
    let file = std::fs::File::open(path)?;
    log::info!("loading stations from {}", path.display());
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> InfraResult<StationRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stations = Vec::new();

    for (row, result) in csv_reader.deserialize::<StationRecord>().enumerate() {
        let r = result.map_err(|e| InfraError::Parse(e.to_string()))?;
        let pre = r.pre_flight_secs.unwrap_or(0.0);
        let post = r.post_flight_secs.unwrap_or(0.0);
        if pre < 0.0 || post < 0.0 {
            return Err(InfraError::Parse(format!(
                "row {}: station {} has a negative process time",
                row + 1,
                r.station_id
            )));
        }
        stations.push(
            Station::new(StationId(r.station_id), r.name, Coord::new(r.x, r.y))
                .with_process_times(pre, post),
        );
    }

    StationRegistry::new(stations)
}
