//! Station catalogs: the static reference data a session plays against.
//!
//! A catalog is authored once (built-in or loaded from JSON), validated at
//! construction, and never mutated while a session runs.

pub mod builtin;
pub mod presentation;
pub mod serialization;
pub mod station;

// Re-export commonly used types
pub use builtin::{apple_journey, apple_journey_catalog, apple_journey_presentation};
pub use presentation::{Position, PresentationTable, StationPresentation};
pub use serialization::SerializedCatalog;
pub use station::{Station, StationCatalog};
