//! Display metadata for stations, kept apart from the engine data.
//!
//! The validation engine only ever reads [`Station`](super::station::Station)
//! rows; everything a front-end needs to draw a station (icon, canvas
//! position, the educational substeps shown in guided mode) lives here so the
//! core stays UI-free.

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::types::StationId;
use crate::catalog::station::StationCatalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Position of a station marker on the drawing canvas.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display metadata for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPresentation {
    /// The station this metadata belongs to.
    pub station: StationId,
    /// Icon name for the front-end to resolve (e.g. "tree", "truck").
    pub icon: String,
    /// Marker position on the drawing canvas.
    pub position: Position,
    /// Short educational substeps shown while walking through this stage.
    pub substeps: Vec<String>,
}

impl StationPresentation {
    /// Create presentation metadata for a station.
    pub fn new(station: impl Into<StationId>, icon: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            station: station.into(),
            icon: icon.into(),
            position: Position::new(x, y),
            substeps: Vec::new(),
        }
    }

    /// Attach the guided-mode substeps.
    pub fn with_substeps<I, S>(mut self, substeps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.substeps = substeps.into_iter().map(Into::into).collect();
        self
    }
}

/// Presentation metadata for every station in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationTable {
    entries: IndexMap<StationId, StationPresentation>,
}

impl PresentationTable {
    /// Build a table from individual entries. Later entries for the same
    /// station replace earlier ones.
    pub fn new(entries: Vec<StationPresentation>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.station, e)).collect(),
        }
    }

    /// Get the metadata for a station.
    pub fn get(&self, id: StationId) -> Option<&StationPresentation> {
        self.entries.get(&id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &StationPresentation> {
        self.entries.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every station in the catalog has presentation metadata.
    pub fn check_covers(&self, catalog: &StationCatalog) -> CatalogResult<()> {
        for id in catalog.station_ids() {
            if !self.entries.contains_key(&id) {
                return Err(CatalogError::MissingPresentation(id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::station::Station;

    #[test]
    fn test_table_lookup() {
        let table = PresentationTable::new(vec![
            StationPresentation::new(1, "tree", 100.0, 150.0).with_substeps(["Apple Trees"]),
            StationPresentation::new(2, "apple", 300.0, 100.0),
        ]);
        assert_eq!(table.len(), 2);
        let entry = table.get(StationId::new(1)).unwrap();
        assert_eq!(entry.icon, "tree");
        assert_eq!(entry.substeps, ["Apple Trees"]);
    }

    #[test]
    fn test_coverage_check() {
        let catalog = StationCatalog::new(vec![
            Station::new(1, 1, "Farm", ""),
            Station::new(2, 2, "Market", ""),
        ])
        .unwrap();

        let partial = PresentationTable::new(vec![StationPresentation::new(1, "tree", 0.0, 0.0)]);
        assert_eq!(
            partial.check_covers(&catalog),
            Err(CatalogError::MissingPresentation(StationId::new(2)))
        );

        let full = PresentationTable::new(vec![
            StationPresentation::new(1, "tree", 0.0, 0.0),
            StationPresentation::new(2, "store", 0.0, 0.0),
        ]);
        assert!(full.check_covers(&catalog).is_ok());
    }
}
