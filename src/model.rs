//! Core data models for the reaction test.
//! Persisted record, round phase, feedback tier and the target entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted across sessions under `config::GAME_STATE_KEY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub best_reaction_score: u32,
    pub total_games_played: u32,
}

impl GameState {
    /// End-of-round update: best score never decreases, play count grows by one.
    pub fn record_round(&mut self, score: u32) {
        self.best_reaction_score = self.best_reaction_score.max(score);
        self.total_games_played = self.total_games_played.saturating_add(1);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Early,
    Late,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Super,
    Good,
    TryHarder,
}

impl Tier {
    pub fn from_score(score: u32) -> Self {
        if score >= 30 {
            Tier::Super
        } else if score >= 20 {
            Tier::Good
        } else {
            Tier::TryHarder
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Super => "Super!",
            Tier::Good => "Good!",
            Tier::TryHarder => "Try harder!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub u64);

/// Measured size of the play area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// A clickable spaceship. Position is the top-left corner inside the play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    pub size_px: u32,
    pub x: u32,
    pub y: u32,
    /// Round time at spawn.
    pub created_at_ms: u32,
    pub removal_delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub tier: Tier,
    pub best_score: u32,
}
