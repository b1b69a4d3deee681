//! Round timing and spawn tuning.

use crate::model::Phase;

pub const GAME_STATE_KEY: &str = "reactionGameState";
pub const THEME_KEY: &str = "theme";
pub const BUBBLE_COUNT: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    pub duration_ms: u32,
    pub tick_ms: u32,
    /// Elapsed time at which the round switches from Early to Late.
    pub midpoint_ms: u32,
    /// A tick re-arms the spawn cadence when its elapsed time is closer than
    /// this to the midpoint. Must stay below `tick_ms`.
    pub boundary_tolerance_ms: u32,
    pub early_spawn_interval_ms: u32,
    pub early_removal_delay_ms: u32,
    pub late_spawn_interval_ms: u32,
    pub late_removal_delay_ms: u32,
    pub min_target_px: u32,
    /// Exclusive.
    pub max_target_px: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_ms: 60_000,
            tick_ms: 250,
            midpoint_ms: 30_000,
            boundary_tolerance_ms: 200,
            early_spawn_interval_ms: 2000,
            early_removal_delay_ms: 2000,
            late_spawn_interval_ms: 1000,
            late_removal_delay_ms: 1000,
            min_target_px: 30,
            max_target_px: 70,
        }
    }
}

impl RoundConfig {
    pub fn phase_at(&self, elapsed_ms: u32) -> Phase {
        if elapsed_ms < self.midpoint_ms {
            Phase::Early
        } else {
            Phase::Late
        }
    }

    pub fn spawn_interval(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Early => self.early_spawn_interval_ms,
            Phase::Late => self.late_spawn_interval_ms,
        }
    }

    pub fn removal_delay(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Early => self.early_removal_delay_ms,
            Phase::Late => self.late_removal_delay_ms,
        }
    }
}
