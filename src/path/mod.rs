//! Canonical path derivation and drawn-connection classification.

pub mod canonical;
pub mod connection;

// Re-export commonly used types
pub use canonical::{CanonicalEdge, CanonicalPath};
pub use connection::DrawnConnection;
