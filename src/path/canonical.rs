//! The canonical path: the one correct sequence of stations.
//!
//! Derived once from a catalog and never stored in serialized form; the
//! station table's canonical orders are the source of truth.

use crate::catalog::station::StationCatalog;
use crate::core::types::StationId;
use serde::{Deserialize, Serialize};

/// A directed edge between two consecutive stations in the correct order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalEdge {
    /// The earlier station.
    pub from: StationId,
    /// The station that follows it.
    pub to: StationId,
}

impl CanonicalEdge {
    /// Whether `{a, b}` matches this edge as an unordered pair.
    ///
    /// Drawn connections are undirected, so a player connecting the two
    /// stations in either click order matches the same canonical edge.
    pub fn matches_undirected(&self, a: StationId, b: StationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// The ordered sequence of canonical edges for one journey.
///
/// For a catalog of N stations this is exactly N−1 edges forming a single
/// simple path that visits every station once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPath {
    edges: Vec<CanonicalEdge>,
}

impl CanonicalPath {
    /// Derive the canonical path from a validated catalog.
    pub fn derive(catalog: &StationCatalog) -> Self {
        let ordered: Vec<StationId> = catalog.stations_in_order().map(|s| s.id).collect();
        let edges = ordered
            .windows(2)
            .map(|pair| CanonicalEdge {
                from: pair[0],
                to: pair[1],
            })
            .collect();
        Self { edges }
    }

    /// All edges, first to last.
    pub fn edges(&self) -> &[CanonicalEdge] {
        &self.edges
    }

    /// The edge at a 0-based position, if any.
    pub fn edge_at(&self, index: usize) -> Option<&CanonicalEdge> {
        self.edges.get(index)
    }

    /// Number of edges (`N - 1`).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the unordered pair `{a, b}` is a canonical edge.
    pub fn contains_undirected(&self, a: StationId, b: StationId) -> bool {
        self.edges.iter().any(|edge| edge.matches_undirected(a, b))
    }
}
