//! Guided mode: a linear walkthrough of the journey, one station at a time.
//!
//! No branching and no wrong answers — the player acknowledges each stage in
//! canonical order and a completion counter drives the progress display and
//! final score.

use crate::catalog::station::{Station, StationCatalog};
use crate::core::types::Score;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What a call to [`GuidedWalk::complete_step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidedOutcome {
    /// The current station was acknowledged; play moves to the next one.
    Advanced {
        /// 1-based canonical order of the station now active.
        next_order: u32,
    },
    /// The last station was acknowledged; the walkthrough is done.
    Finished {
        /// Total stations completed.
        completed: u32,
    },
}

/// A guided play-through over one catalog.
#[derive(Debug, Clone)]
pub struct GuidedWalk {
    catalog: StationCatalog,
    completed: u32,
    started: Instant,
}

impl GuidedWalk {
    /// Start a walkthrough at the first station.
    pub fn new(catalog: StationCatalog) -> Self {
        Self {
            catalog,
            completed: 0,
            started: Instant::now(),
        }
    }

    /// The catalog being walked.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// The station currently being explained, or `None` once finished.
    pub fn current_station(&self) -> Option<&Station> {
        self.catalog.get_by_order(self.completed + 1)
    }

    /// Acknowledge the current station and advance.
    ///
    /// Calling after the walkthrough finished keeps reporting `Finished`
    /// without growing the counter.
    pub fn complete_step(&mut self) -> GuidedOutcome {
        let total = self.catalog.station_count() as u32;
        if self.completed < total {
            self.completed += 1;
            debug!("guided step {} of {total} completed", self.completed);
        }
        if self.completed == total {
            GuidedOutcome::Finished {
                completed: self.completed,
            }
        } else {
            GuidedOutcome::Advanced {
                next_order: self.completed + 1,
            }
        }
    }

    /// Stations acknowledged so far.
    pub fn completed_steps(&self) -> u32 {
        self.completed
    }

    /// Whether every station has been acknowledged.
    pub fn is_finished(&self) -> bool {
        self.completed as usize == self.catalog.station_count()
    }

    /// Completion percentage for a progress bar.
    pub fn progress(&self) -> f32 {
        self.completed as f32 / self.catalog.station_count() as f32 * 100.0
    }

    /// Completion score: percentage of stations acknowledged.
    pub fn score(&self) -> Score {
        (self.completed as f64 / self.catalog.station_count() as f64 * 100.0).round() as Score
    }

    /// Wall-clock time since the walkthrough started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Start over from the first station.
    pub fn restart(&mut self) {
        self.completed = 0;
        self.started = Instant::now();
    }
}
