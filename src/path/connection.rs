//! Player-drawn connections and their classification.

use crate::core::types::StationId;
use crate::path::canonical::CanonicalPath;
use log::debug;
use serde::{Deserialize, Serialize};

/// A connection the player drew between two stations.
///
/// The connection is undirected: the engine compares it against canonical
/// edges as an unordered pair, so click direction never matters.
/// Classification is fixed at creation time and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnConnection {
    /// First station clicked.
    pub from: StationId,
    /// Second station clicked.
    pub to: StationId,
    /// Whether the pair matches a canonical edge.
    pub is_correct: bool,
}

impl DrawnConnection {
    /// Classify a drawn pair against the canonical path.
    pub fn classify(from: StationId, to: StationId, canonical: &CanonicalPath) -> Self {
        let is_correct = canonical.contains_undirected(from, to);
        debug!(
            "connection {from} -> {to} classified {}",
            if is_correct { "correct" } else { "incorrect" }
        );
        Self {
            from,
            to,
            is_correct,
        }
    }

    /// The unordered endpoints of this connection.
    pub fn endpoints(&self) -> (StationId, StationId) {
        (self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::apple_journey_catalog;
    use proptest::prelude::*;

    fn canonical() -> CanonicalPath {
        CanonicalPath::derive(&apple_journey_catalog())
    }

    #[test]
    fn test_canonical_pair_is_correct() {
        let path = canonical();
        let conn = DrawnConnection::classify(StationId::new(3), StationId::new(4), &path);
        assert!(conn.is_correct);
    }

    #[test]
    fn test_reversed_pair_is_still_correct() {
        let path = canonical();
        let conn = DrawnConnection::classify(StationId::new(2), StationId::new(1), &path);
        assert!(conn.is_correct);
    }

    #[test]
    fn test_unrelated_pair_is_incorrect() {
        let path = canonical();
        let conn = DrawnConnection::classify(StationId::new(1), StationId::new(9), &path);
        assert!(!conn.is_correct);
    }

    proptest! {
        /// Classification never depends on click direction.
        #[test]
        fn prop_classification_is_symmetric(a in 1u32..=9, b in 1u32..=9) {
            let path = canonical();
            let forward =
                DrawnConnection::classify(StationId::new(a), StationId::new(b), &path);
            let reverse =
                DrawnConnection::classify(StationId::new(b), StationId::new(a), &path);
            prop_assert_eq!(forward.is_correct, reverse.is_correct);
        }

        /// Exactly the consecutive-order pairs classify as correct.
        #[test]
        fn prop_correct_iff_adjacent_orders(a in 1u32..=9, b in 1u32..=9) {
            let path = canonical();
            let conn = DrawnConnection::classify(StationId::new(a), StationId::new(b), &path);
            // Built-in journey ids coincide with canonical orders.
            let adjacent = a.abs_diff(b) == 1;
            prop_assert_eq!(conn.is_correct, adjacent);
        }
    }
}
