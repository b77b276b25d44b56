//! Core types and error handling for the applepath engine.
//!
//! This module contains the foundational pieces shared by every other part of
//! the crate:
//! - Station identifiers and game modes
//! - Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, GameError, SessionError};
pub use types::{GameMode, Score, StationId};
