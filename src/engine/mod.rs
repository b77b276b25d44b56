//! The path-validation engine: session state machine, scoring, and hints.

pub mod hints;
pub mod session;

// Re-export commonly used types
pub use hints::{next_hint, ENCOURAGEMENT};
pub use session::{CheckOutcome, PathSession, SelectionOutcome};
