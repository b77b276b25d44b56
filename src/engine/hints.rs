//! Hint text for the next canonical edge.
//!
//! Hints are indexed by the number of *correct* connections drawn so far:
//! wrong connections never advance the hint, so a struggling player keeps
//! being pointed at the same next step.

use crate::catalog::station::StationCatalog;
use crate::path::canonical::CanonicalPath;

/// Fallback shown once every canonical edge has been matched.
pub const ENCOURAGEMENT: &str = "You're doing great! Keep thinking about the logical order.";

/// Human-readable suggestion for the canonical edge at position
/// `correct_count`, or [`ENCOURAGEMENT`] when the path is already covered.
pub fn next_hint(
    catalog: &StationCatalog,
    canonical: &CanonicalPath,
    correct_count: usize,
) -> String {
    match canonical.edge_at(correct_count) {
        Some(edge) => format!(
            "Try connecting {} to {}",
            catalog.title_of(edge.from),
            catalog.title_of(edge.to)
        ),
        None => ENCOURAGEMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::apple_journey_catalog;
    use crate::core::types::StationId;
    use crate::engine::session::PathSession;

    #[test]
    fn test_first_hint_is_farm_to_harvest() {
        let catalog = apple_journey_catalog();
        let canonical = CanonicalPath::derive(&catalog);
        assert_eq!(
            next_hint(&catalog, &canonical, 0),
            "Try connecting Farm to Harvest"
        );
    }

    #[test]
    fn test_hint_exhausted_after_all_edges() {
        let catalog = apple_journey_catalog();
        let canonical = CanonicalPath::derive(&catalog);
        assert_eq!(next_hint(&catalog, &canonical, 8), ENCOURAGEMENT);
        assert_eq!(next_hint(&catalog, &canonical, 20), ENCOURAGEMENT);
    }

    #[test]
    fn test_wrong_connections_do_not_advance_hint() {
        let mut session = PathSession::new(apple_journey_catalog());
        session.select_station(StationId::new(1)).unwrap();
        session.select_station(StationId::new(9)).unwrap();
        session.select_station(StationId::new(4)).unwrap();
        session.select_station(StationId::new(8)).unwrap();
        assert_eq!(session.next_hint(), "Try connecting Farm to Harvest");
    }

    #[test]
    fn test_hint_advances_with_correct_connections() {
        let mut session = PathSession::new(apple_journey_catalog());
        session.select_station(StationId::new(1)).unwrap();
        session.select_station(StationId::new(2)).unwrap();
        assert_eq!(session.next_hint(), "Try connecting Harvest to Sort & Clean");
    }
}
