//! Results summary: the numbers and badges shown after a play-through.
//!
//! Pure derivation from the final session state; rendering the summary is the
//! front-end's job.

use crate::core::types::{GameMode, Score};
use crate::engine::session::{CheckOutcome, PathSession};
use crate::guided::GuidedWalk;
use serde::{Deserialize, Serialize};

/// Badges a player can earn in one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Achievement {
    /// Scored exactly 100.
    PerfectScore,
    /// Completed every station of the journey.
    JourneyMaster,
    /// Finished in under a minute.
    SpeedLearner,
    /// Solved draw-the-path mode within three checks.
    CriticalThinker,
    /// Awarded to everyone who finishes a play-through.
    AppleExpert,
}

impl Achievement {
    /// Display title for the badge.
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::PerfectScore => "Perfect Score",
            Achievement::JourneyMaster => "Journey Master",
            Achievement::SpeedLearner => "Speed Learner",
            Achievement::CriticalThinker => "Critical Thinker",
            Achievement::AppleExpert => "Apple Expert",
        }
    }
}

/// Everything the results screen needs about a finished play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// The player's name as entered at the start.
    pub player_name: String,
    /// Which mode was played.
    pub mode: GameMode,
    /// Final score, `0..=100`.
    pub score: Score,
    /// Stations credited as completed.
    pub completed_steps: u32,
    /// Stations in the journey.
    pub total_steps: u32,
    /// Wall-clock play time in whole seconds.
    pub elapsed_secs: u64,
    /// Check attempts; only meaningful for draw-the-path mode.
    pub attempts: Option<u32>,
}

impl GameSummary {
    /// Summarize a finished guided walkthrough.
    pub fn from_guided(player_name: impl Into<String>, walk: &GuidedWalk) -> Self {
        Self {
            player_name: player_name.into(),
            mode: GameMode::Guided,
            score: walk.score(),
            completed_steps: walk.completed_steps(),
            total_steps: walk.catalog().station_count() as u32,
            elapsed_secs: walk.elapsed().as_secs(),
            attempts: None,
        }
    }

    /// Summarize a draw-the-path session from its last check outcome.
    ///
    /// Completed steps are derived from the score: a perfect score credits
    /// the whole journey, anything else a proportional share.
    pub fn from_drawn(
        player_name: impl Into<String>,
        session: &PathSession,
        outcome: CheckOutcome,
    ) -> Self {
        let total = session.catalog().station_count() as u32;
        let completed = if outcome.score == 100 {
            total
        } else {
            (outcome.score as f64 / 100.0 * total as f64).round() as u32
        };
        Self {
            player_name: player_name.into(),
            mode: GameMode::DrawThePath,
            score: outcome.score,
            completed_steps: completed,
            total_steps: total,
            elapsed_secs: session.elapsed().as_secs(),
            attempts: Some(outcome.attempts),
        }
    }

    /// Encouraging message for the score tier.
    pub fn performance_message(&self) -> &'static str {
        match self.score {
            100 => "Perfect! Outstanding work!",
            80..=99 => "Excellent job! Well done!",
            60..=79 => "Good work! Keep it up!",
            40..=59 => "Nice try! You're learning!",
            _ => "Keep practicing! You'll get better!",
        }
    }

    /// The badges earned by this play-through.
    pub fn achievements(&self) -> Vec<Achievement> {
        let mut earned = Vec::new();
        if self.score == 100 {
            earned.push(Achievement::PerfectScore);
        }
        if self.completed_steps == self.total_steps {
            earned.push(Achievement::JourneyMaster);
        }
        if self.elapsed_secs < 60 {
            earned.push(Achievement::SpeedLearner);
        }
        if self.mode == GameMode::DrawThePath
            && self.attempts.is_some_and(|a| (1..=3).contains(&a))
        {
            earned.push(Achievement::CriticalThinker);
        }
        earned.push(Achievement::AppleExpert);
        earned
    }
}
