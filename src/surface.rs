//! Render-target seam. The session only pushes updates through
//! [`RenderSurface`]; [`Hud`] records them as plain data for the yew view.

use crate::config::RoundConfig;
use crate::model::{Bounds, RoundSummary, Target, TargetId};
use crate::util::format_time;

pub trait RenderSurface {
    fn set_time_text(&mut self, text: &str);
    fn set_score(&mut self, score: u32);
    fn set_progress(&mut self, percent: f64);
    fn add_target(&mut self, target: &Target);
    fn remove_target(&mut self, id: TargetId);
    /// Empties the play area, summary included.
    fn clear_area(&mut self);
    fn show_summary(&mut self, summary: &RoundSummary);
    fn set_start_control(&mut self, label: &str, enabled: bool);
    /// Current measured size of the play area.
    fn play_area(&self) -> Bounds;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub time_text: String,
    pub score: u32,
    pub progress_percent: f64,
    pub targets: Vec<Target>,
    pub summary: Option<RoundSummary>,
    pub start_label: String,
    pub start_enabled: bool,
    pub area: Bounds,
}

impl Hud {
    /// Idle display before any round of `config` has run.
    pub fn for_round(config: &RoundConfig) -> Self {
        Self {
            time_text: format_time(config.duration_ms as i64),
            score: 0,
            progress_percent: 0.0,
            targets: Vec::new(),
            summary: None,
            start_label: "Start".to_string(),
            start_enabled: true,
            area: Bounds::default(),
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::for_round(&RoundConfig::default())
    }
}

impl RenderSurface for Hud {
    fn set_time_text(&mut self, text: &str) {
        self.time_text = text.to_string();
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress_percent = percent.clamp(0.0, 100.0);
    }

    fn add_target(&mut self, target: &Target) {
        self.targets.push(*target);
    }

    fn remove_target(&mut self, id: TargetId) {
        self.targets.retain(|t| t.id != id);
    }

    fn clear_area(&mut self) {
        self.targets.clear();
        self.summary = None;
    }

    fn show_summary(&mut self, summary: &RoundSummary) {
        self.summary = Some(*summary);
    }

    fn set_start_control(&mut self, label: &str, enabled: bool) {
        self.start_label = label.to_string();
        self.start_enabled = enabled;
    }

    fn play_area(&self) -> Bounds {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_time_follows_round_length() {
        let config = RoundConfig { duration_ms: 90_000, ..RoundConfig::default() };
        assert_eq!(Hud::for_round(&config).time_text, "01:30");
        assert_eq!(Hud::default().time_text, format_time(RoundConfig::default().duration_ms as i64));
    }

    #[test]
    fn progress_is_clamped() {
        let mut hud = Hud::default();
        hud.set_progress(140.0);
        assert_eq!(hud.progress_percent, 100.0);
        hud.set_progress(-3.0);
        assert_eq!(hud.progress_percent, 0.0);
    }
}
