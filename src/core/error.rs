//! Error types for applepath.
//!
//! Uses thiserror for structured errors with context. Errors are designed to:
//! - Be serializable for sending to a front-end
//! - Include actionable information (which station, what to fix)
//! - Support error chaining for context

use crate::core::types::StationId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for applepath.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while building or loading a station catalog.
///
/// Catalog errors are caught at construction time, before a session starts,
/// so the engine never runs against an inconsistent journey.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogError {
    #[error("Catalog has no stations")]
    Empty,

    #[error("Duplicate station id {0}")]
    DuplicateStationId(StationId),

    #[error("Stations {first} and {second} both have canonical order {order}")]
    DuplicateOrder {
        order: u32,
        first: StationId,
        second: StationId,
    },

    #[error("Canonical orders must cover 1..={expected} exactly, but order {missing} is missing")]
    MissingOrder { expected: u32, missing: u32 },

    #[error("Station {0} not found in catalog")]
    StationNotFound(StationId),

    #[error("No presentation metadata for station {0}")]
    MissingPresentation(StationId),

    #[error("Unsupported catalog format version '{0}'")]
    UnsupportedVersion(String),
}

/// Errors from session operations.
///
/// The UI constructs station ids from the catalog, so these indicate a caller
/// contract violation rather than anything a player can trigger.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    #[error("Station {0} does not exist in this session's catalog")]
    UnknownStation(StationId),
}

/// Result type alias for applepath operations.
pub type GameResult<T> = Result<T, GameError>;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
