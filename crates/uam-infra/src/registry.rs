//! Station registry with an R-tree spatial index.
//!
//! # Ordering
//!
//! Every query that returns several stations orders them by ascending
//! distance from the query point, breaking exact ties by ascending
//! [`StationId`].  Strategies scan candidates in this order and keep the
//! first minimum they see, so a stable order here is what makes route
//! selection deterministic.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use uam_core::{Coord, StationId};

use crate::{InfraError, InfraResult, Station};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct StationEntry {
    point: [f64; 2], // [x, y]
    id:    StationId,
}

impl RTreeObject for StationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── StationRegistry ───────────────────────────────────────────────────────────

/// All stations known to the simulation, indexed by ID and by position.
///
/// Read-only after construction, so a single registry can be shared by
/// reference across worker threads.
pub struct StationRegistry {
    stations:    Vec<Station>,
    by_id:       FxHashMap<StationId, usize>,
    spatial_idx: RTree<StationEntry>,
}

impl StationRegistry {
    /// Build a registry, rejecting duplicate station IDs.
    pub fn new(stations: Vec<Station>) -> InfraResult<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(stations.len());
        for (i, s) in stations.iter().enumerate() {
            if by_id.insert(s.id, i).is_some() {
                return Err(InfraError::DuplicateStation(s.id));
            }
        }

        let entries: Vec<StationEntry> = stations
            .iter()
            .map(|s| StationEntry { point: s.coord.to_array(), id: s.id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::info!("station registry built with {} stations", stations.len());
        Ok(Self { stations, by_id, spatial_idx })
    }

    pub fn empty() -> Self {
        Self {
            stations:    Vec::new(),
            by_id:       FxHashMap::default(),
            spatial_idx: RTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&i| &self.stations[i])
    }

    /// Stations in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Stations within `radius_m` of `coord` (inclusive), nearest first.
    pub fn within_radius(&self, coord: Coord, radius_m: f64) -> Vec<StationId> {
        let query = coord.to_array();
        let mut hits: Vec<(f64, StationId)> = self
            .spatial_idx
            .locate_within_distance(query, radius_m * radius_m)
            .map(|e| (e.distance_2(&query), e.id))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// The station closest to `coord`; lowest ID wins an exact tie.
    ///
    /// Returns `None` only if the registry is empty.
    pub fn nearest(&self, coord: Coord) -> Option<StationId> {
        let query = coord.to_array();
        let mut iter = self.spatial_idx.nearest_neighbor_iter(&query);
        let first = iter.next()?;
        let best_d2 = first.distance_2(&query);
        let mut best = first.id;
        for e in iter {
            if e.distance_2(&query) > best_d2 {
                break;
            }
            best = best.min(e.id);
        }
        Some(best)
    }
}
