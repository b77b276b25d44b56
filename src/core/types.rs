//! Core identifier and mode types shared across the crate.
//!
//! Station ids are small catalog-assigned integers rather than generated
//! identifiers: the catalog is static reference data authored once, and the
//! ids double as stable keys in serialized catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a station in the journey catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl StationId {
    /// Create a station id from a raw integer.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for StationId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// A completion score as a percentage of canonical edges reproduced.
///
/// Always in `0..=100`.
pub type Score = u8;

/// Which of the two play styles a session used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Linear step-by-step walkthrough with explanations.
    Guided,
    /// Free-form path drawing checked against the canonical order.
    DrawThePath,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Guided => write!(f, "guided"),
            GameMode::DrawThePath => write!(f, "draw-the-path"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_display() {
        assert_eq!(StationId::new(7).to_string(), "#7");
    }

    #[test]
    fn test_station_id_from_raw() {
        let id: StationId = 3u32.into();
        assert_eq!(id.raw(), 3);
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&GameMode::DrawThePath).unwrap();
        assert_eq!(json, "\"draw-the-path\"");
    }
}
