//! Station catalog: the immutable journey reference data.
//!
//! The catalog is the central data structure the engine validates against.
//! It uses a centralized approach for:
//! - Easy serialization
//! - Catalog-wide validation at construction
//! - Stable iteration order for front-ends

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::types::StationId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single stage in the supply-chain journey.
///
/// Only the fields the validation engine needs live here; icons, canvas
/// positions and other display concerns are kept in
/// [`StationPresentation`](crate::catalog::presentation::StationPresentation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier.
    pub id: StationId,
    /// Position in the correct sequence, 1-based. A total order with no ties.
    pub canonical_order: u32,
    /// Short display title, also used in hint text.
    pub title: String,
    /// One-line explanation of what happens at this stage.
    pub description: String,
}

impl Station {
    /// Create a new station row.
    pub fn new(
        id: impl Into<StationId>,
        canonical_order: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            canonical_order,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The validated, immutable set of stations for one journey.
///
/// Uses IndexMap to maintain insertion order for consistent iteration.
/// Construction enforces the catalog invariants: at least one station, unique
/// ids, and canonical orders covering exactly `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationCatalog {
    /// All stations, indexed by id.
    stations: IndexMap<StationId, Station>,
    /// Station id at each canonical order, index 0 holding order 1.
    by_order: Vec<StationId>,
}

impl StationCatalog {
    /// Build a catalog from station rows, validating the journey invariants.
    pub fn new(rows: Vec<Station>) -> CatalogResult<Self> {
        if rows.is_empty() {
            return Err(CatalogError::Empty);
        }

        let expected = rows.len() as u32;
        let mut stations: IndexMap<StationId, Station> = IndexMap::with_capacity(rows.len());
        let mut order_to_id: HashMap<u32, StationId> = HashMap::with_capacity(rows.len());

        for row in rows {
            if let Some(existing) = order_to_id.get(&row.canonical_order) {
                return Err(CatalogError::DuplicateOrder {
                    order: row.canonical_order,
                    first: *existing,
                    second: row.id,
                });
            }
            order_to_id.insert(row.canonical_order, row.id);

            let id = row.id;
            if stations.insert(id, row).is_some() {
                return Err(CatalogError::DuplicateStationId(id));
            }
        }

        // Orders are unique by now; a gap shows up as a missing key.
        let mut by_order = Vec::with_capacity(expected as usize);
        for order in 1..=expected {
            match order_to_id.get(&order) {
                Some(id) => by_order.push(*id),
                None => {
                    return Err(CatalogError::MissingOrder {
                        expected,
                        missing: order,
                    })
                }
            }
        }

        Ok(Self { stations, by_order })
    }

    /// Get a station by id.
    pub fn get(&self, id: StationId) -> CatalogResult<&Station> {
        self.stations
            .get(&id)
            .ok_or(CatalogError::StationNotFound(id))
    }

    /// Get the station at a 1-based canonical order.
    pub fn get_by_order(&self, order: u32) -> Option<&Station> {
        let id = *self.by_order.get(order.checked_sub(1)? as usize)?;
        self.stations.get(&id)
    }

    /// Check whether a station id exists.
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All stations sorted by canonical order.
    pub fn stations_in_order(&self) -> impl Iterator<Item = &Station> + '_ {
        self.by_order.iter().map(|id| &self.stations[id])
    }

    /// All station ids in insertion order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.keys().copied()
    }

    /// Number of stations in the journey.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of edges in the canonical path (`N - 1`).
    pub fn required_edge_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Display title for a station, or the id if it is unknown.
    pub fn title_of(&self, id: StationId) -> String {
        self.stations
            .get(&id)
            .map(|s| s.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
