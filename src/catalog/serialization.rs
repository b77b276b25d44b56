//! Catalog serialization for saving and loading journeys.
//!
//! A serialized catalog carries both the engine-facing station table and the
//! presentation table, so a single JSON file describes a playable journey.

use crate::catalog::presentation::{PresentationTable, StationPresentation};
use crate::catalog::station::{Station, StationCatalog};
use crate::core::error::{CatalogError, GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable representation of a complete journey catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedCatalog {
    /// Catalog format version.
    pub version: String,
    /// Optional journey name (e.g. "Apple Journey").
    pub name: Option<String>,
    /// All station rows.
    pub stations: Vec<Station>,
    /// Presentation metadata per station.
    pub presentation: Vec<StationPresentation>,
}

impl SerializedCatalog {
    /// Current format version.
    pub const VERSION: &'static str = "1.0.0";

    /// Build a serialized form from a validated catalog and its presentation.
    pub fn from_parts(
        name: Option<String>,
        catalog: &StationCatalog,
        presentation: &PresentationTable,
    ) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            name,
            stations: catalog.stations().cloned().collect(),
            presentation: presentation.entries().cloned().collect(),
        }
    }

    /// Validate and convert into the in-memory catalog types.
    ///
    /// Fails on an unsupported format version, malformed station rows, or
    /// stations missing presentation metadata.
    pub fn into_parts(self) -> GameResult<(StationCatalog, PresentationTable)> {
        if self.version != Self::VERSION {
            return Err(CatalogError::UnsupportedVersion(self.version).into());
        }
        let catalog = StationCatalog::new(self.stations)?;
        let presentation = PresentationTable::new(self.presentation);
        presentation.check_covers(&catalog)?;
        Ok((catalog, presentation))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a journey from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> GameResult<(StationCatalog, PresentationTable)> {
        let json = std::fs::read_to_string(path).map_err(GameError::Io)?;
        let serialized = Self::from_json(&json)?;
        serialized.into_parts()
    }

    /// Save a journey to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(GameError::Io)
    }
}
