//! The path-drawing session: selection state machine, scoring, and resets.
//!
//! A session owns all mutable play state and exposes it read-only. Every
//! operation runs to completion on the caller's thread; there is exactly one
//! logical actor (the player) driving the state machine.

use crate::catalog::station::StationCatalog;
use crate::core::error::{SessionError, SessionResult};
use crate::core::types::{Score, StationId};
use crate::engine::hints;
use crate::path::canonical::CanonicalPath;
use crate::path::connection::DrawnConnection;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What a call to [`PathSession::select_station`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// No station was pending; this one is now armed as the start of a
    /// connection.
    Selected(StationId),
    /// The pending station was clicked again and has been deselected.
    Deselected(StationId),
    /// A second station completed the gesture; the classified connection has
    /// been appended to the drawn sequence.
    Connected(DrawnConnection),
}

/// Result of checking the drawn path against the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Percentage of canonical edges reproduced, `0..=100`.
    pub score: Score,
    /// How many times the player has checked so far, this check included.
    pub attempts: u32,
    /// Whether the score reached 100 — the completion handoff signal.
    pub is_complete: bool,
}

/// A play-through of the draw-the-path mode against one catalog.
///
/// The two-phase click-to-connect state machine lives in `pending`: `None` is
/// the idle state, `Some(id)` means a start station is armed.
#[derive(Debug, Clone)]
pub struct PathSession {
    catalog: StationCatalog,
    canonical: CanonicalPath,
    drawn: Vec<DrawnConnection>,
    pending: Option<StationId>,
    attempts: u32,
    started: Instant,
}

impl PathSession {
    /// Start a session over a validated catalog.
    pub fn new(catalog: StationCatalog) -> Self {
        let canonical = CanonicalPath::derive(&catalog);
        Self {
            catalog,
            canonical,
            drawn: Vec::new(),
            pending: None,
            attempts: 0,
            started: Instant::now(),
        }
    }

    /// The catalog this session plays against.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// The derived canonical path.
    pub fn canonical(&self) -> &CanonicalPath {
        &self.canonical
    }

    /// Handle a station click.
    ///
    /// First click arms the station, a second click on a different station
    /// draws and classifies a connection, and a second click on the same
    /// station deselects it. Unknown ids are a caller contract violation and
    /// fail fast without touching state.
    pub fn select_station(&mut self, id: StationId) -> SessionResult<SelectionOutcome> {
        if !self.catalog.contains(id) {
            return Err(SessionError::UnknownStation(id));
        }

        let outcome = match self.pending.take() {
            None => {
                self.pending = Some(id);
                SelectionOutcome::Selected(id)
            }
            Some(start) if start == id => SelectionOutcome::Deselected(id),
            Some(start) => {
                let connection = DrawnConnection::classify(start, id, &self.canonical);
                self.drawn.push(connection);
                SelectionOutcome::Connected(connection)
            }
        };
        debug!("select {id}: {outcome:?}");
        Ok(outcome)
    }

    /// Score the drawn path against the canonical edges.
    ///
    /// The denominator is always the canonical edge count, regardless of how
    /// many connections were drawn, and duplicate correct connections each
    /// count. The reported score is clamped to 100. Checking with nothing
    /// drawn is well-defined and scores 0.
    pub fn check_solution(&mut self) -> CheckOutcome {
        self.attempts += 1;

        let required = self.canonical.edge_count();
        let correct = self.correct_count();
        let score = if required == 0 {
            // A single-station journey has nothing to draw.
            100
        } else {
            let raw = (correct as f64 / required as f64 * 100.0).round() as u32;
            raw.min(100) as Score
        };

        info!(
            "check #{}: {correct}/{required} correct, score {score}",
            self.attempts
        );
        CheckOutcome {
            score,
            attempts: self.attempts,
            is_complete: score == 100,
        }
    }

    /// Clear the drawn connections and any pending selection.
    ///
    /// The attempt counter survives: this is the in-session "reset paths"
    /// action, not a new game.
    pub fn reset_paths(&mut self) {
        self.drawn.clear();
        self.pending = None;
    }

    /// Start over completely: clears drawn state, zeroes the attempt counter,
    /// and restarts the session clock.
    pub fn restart(&mut self) {
        self.reset_paths();
        self.attempts = 0;
        self.started = Instant::now();
    }

    /// The drawn connections, oldest first, with their classifications.
    pub fn connections(&self) -> &[DrawnConnection] {
        &self.drawn
    }

    /// The armed start station, if the player is mid-gesture.
    pub fn pending_station(&self) -> Option<StationId> {
        self.pending
    }

    /// How many checks the player has made.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of drawn connections classified correct (duplicates included).
    pub fn correct_count(&self) -> usize {
        self.drawn.iter().filter(|c| c.is_correct).count()
    }

    /// Wall-clock time since the session (re)started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Hint for the next canonical edge, indexed by correct connections made.
    pub fn next_hint(&self) -> String {
        hints::next_hint(&self.catalog, &self.canonical, self.correct_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::apple_journey_catalog;
    use proptest::prelude::*;

    fn session() -> PathSession {
        PathSession::new(apple_journey_catalog())
    }

    fn connect(session: &mut PathSession, a: u32, b: u32) -> DrawnConnection {
        session.select_station(StationId::new(a)).unwrap();
        match session.select_station(StationId::new(b)).unwrap() {
            SelectionOutcome::Connected(conn) => conn,
            other => panic!("expected a connection, got {other:?}"),
        }
    }

    #[test]
    fn test_two_clicks_draw_a_connection() {
        let mut session = session();
        assert_eq!(
            session.select_station(StationId::new(1)).unwrap(),
            SelectionOutcome::Selected(StationId::new(1))
        );
        assert_eq!(session.pending_station(), Some(StationId::new(1)));

        let outcome = session.select_station(StationId::new(2)).unwrap();
        assert!(matches!(outcome, SelectionOutcome::Connected(c) if c.is_correct));
        assert_eq!(session.pending_station(), None);
        assert_eq!(session.connections().len(), 1);
    }

    #[test]
    fn test_same_station_toggles_off() {
        let mut session = session();
        session.select_station(StationId::new(5)).unwrap();
        assert_eq!(
            session.select_station(StationId::new(5)).unwrap(),
            SelectionOutcome::Deselected(StationId::new(5))
        );
        assert_eq!(session.pending_station(), None);
        assert!(session.connections().is_empty());
    }

    #[test]
    fn test_unknown_station_fails_fast() {
        let mut session = session();
        let err = session.select_station(StationId::new(99)).unwrap_err();
        assert_eq!(err, SessionError::UnknownStation(StationId::new(99)));
        // State untouched.
        assert_eq!(session.pending_station(), None);
    }

    #[test]
    fn test_full_correct_path_scores_100() {
        let mut session = session();
        for (a, b) in (1..=8u32).map(|i| (i, i + 1)) {
            assert!(connect(&mut session, a, b).is_correct);
        }
        let outcome = session.check_solution();
        assert_eq!(outcome.score, 100);
        assert!(outcome.is_complete);
        assert_eq!(outcome.attempts, 1);
    }

    #[test]
    fn test_single_edge_scores_13() {
        let mut session = session();
        connect(&mut session, 1, 2);
        let outcome = session.check_solution();
        // round(100 * 1/8)
        assert_eq!(outcome.score, 13);
        assert!(!outcome.is_complete);
    }

    #[test]
    fn test_reversed_edge_counts_as_correct() {
        let mut session = session();
        assert!(connect(&mut session, 2, 1).is_correct);
        assert_eq!(session.check_solution().score, 13);
    }

    #[test]
    fn test_wrong_edge_contributes_nothing() {
        let mut session = session();
        assert!(!connect(&mut session, 1, 9).is_correct);
        let outcome = session.check_solution();
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_check_with_nothing_drawn_scores_zero() {
        let mut session = session();
        let outcome = session.check_solution();
        assert_eq!(outcome.score, 0);
        assert!(!outcome.is_complete);
        assert_eq!(outcome.attempts, 1);
    }

    #[test]
    fn test_duplicates_each_count_and_score_is_clamped() {
        let mut session = session();
        // The same correct edge nine times: more credit than edges exist.
        for _ in 0..9 {
            connect(&mut session, 1, 2);
        }
        let outcome = session.check_solution();
        assert_eq!(session.correct_count(), 9);
        assert_eq!(outcome.score, 100);
    }

    #[test]
    fn test_extra_wrong_connections_do_not_reduce_score() {
        let mut session = session();
        for (a, b) in (1..=8u32).map(|i| (i, i + 1)) {
            connect(&mut session, a, b);
        }
        connect(&mut session, 1, 5);
        connect(&mut session, 3, 9);
        let outcome = session.check_solution();
        assert_eq!(outcome.score, 100);
        assert!(outcome.is_complete);
    }

    #[test]
    fn test_reset_paths_preserves_attempts() {
        let mut session = session();
        connect(&mut session, 1, 2);
        session.check_solution();
        session.check_solution();
        assert_eq!(session.attempts(), 2);

        session.select_station(StationId::new(4)).unwrap();
        session.reset_paths();
        assert!(session.connections().is_empty());
        assert_eq!(session.pending_station(), None);
        assert_eq!(session.attempts(), 2);

        // Idempotent.
        session.reset_paths();
        assert!(session.connections().is_empty());
        assert_eq!(session.pending_station(), None);
    }

    #[test]
    fn test_restart_zeroes_attempts() {
        let mut session = session();
        connect(&mut session, 1, 2);
        session.check_solution();
        session.restart();
        assert_eq!(session.attempts(), 0);
        assert!(session.connections().is_empty());
    }

    #[test]
    fn test_eager_classification_matches_lazy_reclassification() {
        // Storing is_correct at creation is equivalent to re-deriving it at
        // check time, because the canonical path never changes mid-session.
        let mut session = session();
        for (a, b) in [(1u32, 2u32), (3, 2), (4, 7), (9, 8), (5, 5 + 1), (1, 6)] {
            connect(&mut session, a, b);
        }
        let canonical = session.canonical().clone();
        for conn in session.connections() {
            let lazy = canonical.contains_undirected(conn.from, conn.to);
            assert_eq!(conn.is_correct, lazy);
        }
    }

    proptest! {
        /// The score is always within 0..=100, whatever the player draws.
        #[test]
        fn prop_score_bounded(pairs in proptest::collection::vec((1u32..=9, 1u32..=9), 0..40)) {
            let mut session = session();
            for (a, b) in pairs {
                if a != b {
                    connect(&mut session, a, b);
                }
            }
            let outcome = session.check_solution();
            prop_assert!(outcome.score <= 100);
        }

        /// Below the duplicate-credit regime the score follows the formula.
        #[test]
        fn prop_score_matches_formula(correct in 0usize..=8, wrong in 0usize..=10) {
            let mut session = session();
            for i in 0..correct {
                let a = i as u32 + 1;
                connect(&mut session, a, a + 1);
            }
            for _ in 0..wrong {
                connect(&mut session, 1, 9);
            }
            let outcome = session.check_solution();
            let expected = (correct as f64 / 8.0 * 100.0).round() as u8;
            prop_assert_eq!(outcome.score, expected);
        }
    }
}
