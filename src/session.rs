//! Round orchestration: Idle -> Running -> Idle.
//!
//! `GameSession` owns the clock, the spawner and the persisted record, and is
//! driven entirely by [`Task`]s from its scheduler plus target clicks. The
//! surrounding UI only sees the [`RenderSurface`] calls.

use log::{debug, info, warn};
use rand::Rng;

use crate::clock::{ClockEvent, RoundClock};
use crate::config::RoundConfig;
use crate::model::{GameState, Phase, RoundSummary, Target, TargetId, Tier};
use crate::scheduler::{ManualScheduler, Scheduler, Task};
use crate::spawner::TargetSpawner;
use crate::storage::{self, KeyValueStore};
use crate::surface::RenderSurface;
use crate::util::format_time;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Running,
}

/// Per-round scratch state, rebuilt by every `start()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Round {
    pub score: u32,
    pub phase: Phase,
}

pub struct GameSession<S, V, K, R> {
    config: RoundConfig,
    scheduler: S,
    surface: V,
    store: K,
    rng: R,
    state: GameState,
    clock: RoundClock,
    spawner: TargetSpawner,
    status: Status,
    round: Round,
    rounds_completed: u32,
    last_summary: Option<RoundSummary>,
}

impl<S, V, K, R> GameSession<S, V, K, R>
where
    S: Scheduler,
    V: RenderSurface,
    K: KeyValueStore,
    R: Rng,
{
    /// Loads the persisted record and enters Idle.
    pub fn new(config: RoundConfig, scheduler: S, surface: V, store: K, rng: R) -> Self {
        let state = storage::load_game_state(&store);
        debug!("loaded game state {:?}", state);
        let mut session = Self {
            clock: RoundClock::new(config.duration_ms, config.tick_ms),
            spawner: TargetSpawner::new(config.min_target_px, config.max_target_px),
            config,
            scheduler,
            surface,
            store,
            rng,
            state,
            status: Status::Idle,
            round: Round::default(),
            rounds_completed: 0,
            last_summary: None,
        };
        session.reset();
        session
    }

    /// Idle entry. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.clock.reset(&mut self.scheduler);
        self.spawner.clear(&mut self.scheduler);
        self.round = Round::default();
        self.surface.clear_area();
        self.surface.set_time_text(&format_time(self.config.duration_ms as i64));
        self.surface.set_score(0);
        self.surface.set_progress(0.0);
        let label = self.idle_label();
        self.surface.set_start_control(label, true);
    }

    /// Starts a round from Idle; ignored while running.
    pub fn start(&mut self) {
        if self.status == Status::Running {
            return;
        }
        self.status = Status::Running;
        self.round = Round::default();
        self.surface.clear_area();
        self.surface.set_score(0);
        self.surface.set_time_text(&format_time(self.config.duration_ms as i64));
        self.surface.set_progress(0.0);
        self.surface.set_start_control("Playing...", false);
        // Cadence before clock: on a shared deadline the spawn fires first,
        // so the last Early spawn still lands on the midpoint.
        let interval = self.config.spawn_interval(self.round.phase);
        self.spawner.set_cadence(&mut self.scheduler, interval);
        self.clock.arm(&mut self.scheduler, self.config.duration_ms);
        info!("round started, best so far {}", self.state.best_reaction_score);
        // never leave the play area empty at the start
        self.spawn();
    }

    pub fn handle(&mut self, task: Task) {
        match task {
            Task::ClockTick => self.on_clock_tick(),
            Task::Spawn => {
                self.spawn();
            }
            Task::Expire(id) => {
                if self.spawner.expire(&mut self.scheduler, id).is_some() {
                    debug!("target {:?} timed out", id);
                    self.surface.remove_target(id);
                }
            }
        }
    }

    /// Returns true when the click scored.
    pub fn click_target(&mut self, id: TargetId) -> bool {
        if self.spawner.click(&mut self.scheduler, id).is_none() {
            return false;
        }
        self.round.score += 1;
        debug!("target {:?} hit, score {}", id, self.round.score);
        self.surface.set_score(self.round.score);
        self.surface.remove_target(id);
        true
    }

    fn on_clock_tick(&mut self) {
        match self.clock.on_tick(&mut self.scheduler) {
            None => {}
            Some(ClockEvent::Expired) => {
                self.surface.set_time_text(&format_time(0));
                self.end();
            }
            Some(ClockEvent::Tick { remaining_ms, elapsed_ms }) => {
                self.surface.set_time_text(&format_time(remaining_ms as i64));
                if self.clock.is_near(self.config.midpoint_ms, self.config.boundary_tolerance_ms) {
                    self.round.phase = self.config.phase_at(elapsed_ms);
                    let interval = self.config.spawn_interval(self.round.phase);
                    debug!("phase {:?} at {}ms, spawning every {}ms", self.round.phase, elapsed_ms, interval);
                    self.spawner.set_cadence(&mut self.scheduler, interval);
                }
                self.surface.set_progress(self.clock.progress_percent());
            }
        }
    }

    fn spawn(&mut self) -> Option<Target> {
        if self.status != Status::Running {
            return None;
        }
        let delay = self.config.removal_delay(self.round.phase);
        let target = self.spawner.spawn_one(
            &mut self.scheduler,
            &mut self.rng,
            self.surface.play_area(),
            delay,
            self.clock.elapsed_ms(),
        );
        debug!("spawned {:?}", target);
        self.surface.add_target(&target);
        Some(target)
    }

    fn end(&mut self) {
        self.clock.cancel(&mut self.scheduler);
        self.spawner.clear(&mut self.scheduler);
        self.status = Status::Idle;
        self.rounds_completed += 1;

        let score = self.round.score;
        self.state.record_round(score);
        let summary = RoundSummary { score, tier: Tier::from_score(score), best_score: self.state.best_reaction_score };
        self.last_summary = Some(summary);
        self.surface.clear_area();
        self.surface.show_summary(&summary);
        let label = self.idle_label();
        self.surface.set_start_control(label, true);
        info!("round over: score {} ({}), best {}", score, summary.tier, summary.best_score);

        if let Err(e) = storage::save_game_state(&mut self.store, &self.state) {
            warn!("could not save game state: {}", e);
        }
    }

    fn idle_label(&self) -> &'static str {
        if self.rounds_completed == 0 { "Start" } else { "Play Again" }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn cadence_ms(&self) -> Option<u32> {
        self.spawner.cadence_ms()
    }

    pub fn live_targets(&self) -> usize {
        self.spawner.live_count()
    }

    pub fn last_summary(&self) -> Option<RoundSummary> {
        self.last_summary
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<V, K, R> GameSession<ManualScheduler, V, K, R>
where
    V: RenderSurface,
    K: KeyValueStore,
    R: Rng,
{
    /// Runs every task due up to `until_ms` of virtual time, in order.
    pub fn run_until(&mut self, until_ms: u64) {
        while let Some(task) = self.scheduler.pop_due(until_ms) {
            self.handle(task);
        }
        self.scheduler.advance_to(until_ms);
    }
}
