//! # Applepath - Supply-Chain Path Game Core
//!
//! Applepath is the engine of an educational game that teaches the stages of
//! a supply chain, from farm to consumer. Players either walk a guided tour
//! of the journey or connect the stations themselves in the order they think
//! is correct, and the engine scores the drawn path against the canonical
//! order.
//!
//! ## Features
//!
//! - **Validated catalogs**: Station tables are checked at construction, so
//!   sessions never run against an inconsistent journey
//! - **Click-to-connect sessions**: A two-phase selection state machine turns
//!   station taps into classified connections
//! - **Lenient scoring**: Connections are undirected and duplicates are not
//!   penalized; the score measures canonical edges reproduced
//! - **Hints**: Deterministic next-step suggestions indexed by progress
//! - **Two modes**: Free-form path drawing and a linear guided walkthrough
//!
//! ## Quick Start
//!
//! ```rust
//! use applepath::prelude::*;
//!
//! // The built-in nine-station apple journey
//! let catalog = apple_journey_catalog();
//! let mut session = PathSession::new(catalog);
//!
//! // The player taps Farm, then Harvest
//! session.select_station(StationId::new(1)).unwrap();
//! let outcome = session.select_station(StationId::new(2)).unwrap();
//! assert!(matches!(outcome, SelectionOutcome::Connected(c) if c.is_correct));
//!
//! // Score the drawn path
//! let check = session.check_solution();
//! assert_eq!(check.score, 13);
//! assert!(!check.is_complete);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`core`]: Identifier types and error handling
//! - [`catalog`]: Station tables, presentation metadata, built-in content,
//!   and JSON serialization
//! - [`path`]: Canonical path derivation and connection classification
//! - [`engine`]: The play session state machine, scoring, and hints
//! - [`guided`]: The linear guided walkthrough
//! - [`summary`]: Results derivation for the post-game screen

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod core;
pub mod engine;
pub mod guided;
pub mod path;
pub mod summary;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use applepath::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::error::{
        CatalogError, CatalogResult, GameError, GameResult, SessionError, SessionResult,
    };
    pub use crate::core::types::{GameMode, Score, StationId};

    // Catalog
    pub use crate::catalog::builtin::{
        apple_journey, apple_journey_catalog, apple_journey_presentation,
    };
    pub use crate::catalog::presentation::{Position, PresentationTable, StationPresentation};
    pub use crate::catalog::serialization::SerializedCatalog;
    pub use crate::catalog::station::{Station, StationCatalog};

    // Path
    pub use crate::path::canonical::{CanonicalEdge, CanonicalPath};
    pub use crate::path::connection::DrawnConnection;

    // Engine
    pub use crate::engine::hints::{next_hint, ENCOURAGEMENT};
    pub use crate::engine::session::{CheckOutcome, PathSession, SelectionOutcome};

    // Guided mode and results
    pub use crate::guided::{GuidedOutcome, GuidedWalk};
    pub use crate::summary::{Achievement, GameSummary};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "applepath");
    }

    #[test]
    fn test_full_play_through() {
        let mut session = PathSession::new(apple_journey_catalog());

        for i in 1..=8u32 {
            session.select_station(StationId::new(i)).unwrap();
            session.select_station(StationId::new(i + 1)).unwrap();
        }
        let check = session.check_solution();
        assert!(check.is_complete);

        let summary = GameSummary::from_drawn("tester", &session, check);
        assert_eq!(summary.score, 100);
        assert!(summary.achievements().contains(&Achievement::PerfectScore));
    }

    #[test]
    fn test_builtin_journey_round_trips_through_json() {
        let (catalog, presentation) = apple_journey();
        let serialized = SerializedCatalog::from_parts(None, &catalog, &presentation);
        let json = serialized.to_json().unwrap();
        let (back, _) = SerializedCatalog::from_json(&json)
            .unwrap()
            .into_parts()
            .unwrap();
        assert_eq!(back, catalog);
    }
}
