// Whole-round scenarios on virtual time.
// Native only: ManualScheduler, MemoryStore and a seeded SmallRng stand in for the browser.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;

use yew_reaction_rush::config::{GAME_STATE_KEY, RoundConfig};
use yew_reaction_rush::scheduler::ManualScheduler;
use yew_reaction_rush::session::GameSession;
use yew_reaction_rush::storage::{self, KeyValueStore, MemoryStore, StoreError};
use yew_reaction_rush::surface::{Hud, RenderSurface};
use yew_reaction_rush::{Bounds, GameState, RoundSummary, Status, Target, TargetId, Tier};

/// Hud plus a log of every target that came and went.
#[derive(Default)]
struct Recorder {
    hud: Hud,
    spawned: Vec<Target>,
    removed: Vec<TargetId>,
    cleared: Vec<TargetId>,
    summaries: Vec<RoundSummary>,
}

impl RenderSurface for Recorder {
    fn set_time_text(&mut self, text: &str) {
        self.hud.set_time_text(text);
    }
    fn set_score(&mut self, score: u32) {
        self.hud.set_score(score);
    }
    fn set_progress(&mut self, percent: f64) {
        self.hud.set_progress(percent);
    }
    fn add_target(&mut self, target: &Target) {
        self.spawned.push(*target);
        self.hud.add_target(target);
    }
    fn remove_target(&mut self, id: TargetId) {
        self.removed.push(id);
        self.hud.remove_target(id);
    }
    fn clear_area(&mut self) {
        self.cleared.extend(self.hud.targets.iter().map(|t| t.id));
        self.hud.clear_area();
    }
    fn show_summary(&mut self, summary: &RoundSummary) {
        self.summaries.push(*summary);
        self.hud.show_summary(summary);
    }
    fn set_start_control(&mut self, label: &str, enabled: bool) {
        self.hud.set_start_control(label, enabled);
    }
    fn play_area(&self) -> Bounds {
        Bounds { width: 640.0, height: 360.0 }
    }
}

type Session<K> = GameSession<ManualScheduler, Recorder, K, SmallRng>;

fn session_with(store: MemoryStore) -> Session<MemoryStore> {
    GameSession::new(RoundConfig::default(), ManualScheduler::new(), Recorder::default(), store, SmallRng::seed_from_u64(2024))
}

fn stored(best: u32, games: u32) -> MemoryStore {
    let mut store = MemoryStore::new();
    storage::save_game_state(&mut store, &GameState { best_reaction_score: best, total_games_played: games }).unwrap();
    store
}

/// Plays a full round in 250ms steps, clicking live targets until `clicks` is reached.
fn play_round<K: KeyValueStore>(s: &mut Session<K>, clicks: u32) {
    s.start();
    let started = s.scheduler().now_ms();
    let mut t = started;
    while s.is_running() {
        let live: Vec<TargetId> = s.surface().hud.targets.iter().map(|t| t.id).collect();
        for id in live {
            if s.score() < clicks {
                assert!(s.click_target(id));
            }
        }
        t += 250;
        s.run_until(t);
        assert!(t <= started + 60_000, "round overran");
    }
}

#[test]
fn idle_round_scores_zero_and_counts_the_game() {
    let mut s = session_with(stored(14, 6));
    play_round(&mut s, 0);
    assert_eq!(s.status(), Status::Idle);
    assert_eq!(s.scheduler().now_ms(), 60_000);
    let summary = s.last_summary().unwrap();
    assert_eq!(summary, RoundSummary { score: 0, tier: Tier::TryHarder, best_score: 14 });
    assert_eq!(s.state(), GameState { best_reaction_score: 14, total_games_played: 7 });
    assert_eq!(storage::load_game_state(s.store()), s.state());
    let hud = &s.surface().hud;
    assert_eq!(hud.time_text, "00:00");
    assert_eq!(hud.start_label, "Play Again");
    assert!(hud.start_enabled);
    assert!(hud.targets.is_empty());
    assert_eq!(hud.summary, Some(summary));
}

#[test]
fn thirty_clicks_is_super_and_raises_best() {
    let mut s = session_with(stored(12, 2));
    play_round(&mut s, 30);
    let summary = s.last_summary().unwrap();
    assert_eq!(summary.score, 30);
    assert_eq!(summary.tier, Tier::Super);
    assert_eq!(s.state(), GameState { best_reaction_score: 30, total_games_played: 3 });
    assert_eq!(s.surface().summaries, vec![summary]);
}

#[test]
fn lower_score_keeps_previous_best() {
    let mut s = session_with(stored(45, 10));
    play_round(&mut s, 20);
    let summary = s.last_summary().unwrap();
    assert_eq!(summary, RoundSummary { score: 20, tier: Tier::Good, best_score: 45 });
    assert_eq!(s.state(), GameState { best_reaction_score: 45, total_games_played: 11 });
}

#[test]
fn tier_boundaries_through_full_rounds() {
    for (clicks, tier) in [(19, Tier::TryHarder), (20, Tier::Good), (29, Tier::Good), (30, Tier::Super)] {
        let mut s = session_with(MemoryStore::new());
        play_round(&mut s, clicks);
        assert_eq!(s.last_summary().map(|x| (x.score, x.tier)), Some((clicks, tier)));
    }
}

#[test]
fn cadence_and_removal_follow_the_two_phase_schedule() {
    let mut s = session_with(MemoryStore::new());
    s.start();
    // spawns land on whole seconds, so each one is stamped with the step it appeared in
    let mut at: Vec<u64> = vec![0; s.surface().spawned.len()];
    let mut t = 0;
    while s.is_running() {
        t += 250;
        s.run_until(t);
        let n = s.surface().spawned.len();
        at.resize(n, t);
    }
    let mut expected: Vec<u64> = (0..=30_000).step_by(2000).collect();
    expected.extend((31_000..60_000).step_by(1000));
    assert_eq!(at, expected);
    assert_eq!(at.len(), 45);

    for (t, when) in s.surface().spawned.iter().zip(&at) {
        let delay = if *when <= 30_000 { 2000 } else { 1000 };
        assert_eq!(t.removal_delay_ms, delay, "{:?} at {}", t, when);
        // an Early spawn shares its deadline with a clock tick and runs first,
        // so it still reads the previous tick's elapsed time
        let elapsed = if *when == 0 || *when > 30_000 { *when } else { *when - 250 };
        assert_eq!(u64::from(t.created_at_ms), elapsed, "{:?}", t);
    }
}

#[test]
fn every_target_is_resolved_exactly_once() {
    let mut s = session_with(MemoryStore::new());
    s.start();
    let mut t = 0;
    let mut n = 0;
    while s.is_running() {
        // click every third target as soon as it shows up
        let live: Vec<TargetId> = s.surface().hud.targets.iter().map(|t| t.id).collect();
        for id in live {
            if id.0 % 3 == 0 {
                s.click_target(id);
                n += 1;
            }
        }
        t += 250;
        s.run_until(t);
    }
    let rec = s.surface();
    let mut seen: HashMap<TargetId, u32> = HashMap::new();
    for id in rec.removed.iter().chain(rec.cleared.iter()) {
        *seen.entry(*id).or_default() += 1;
    }
    assert_eq!(seen.len(), rec.spawned.len());
    assert!(seen.values().all(|&c| c == 1), "{:?}", seen);
    assert_eq!(s.score(), n);
    assert_eq!(s.scheduler().pending(), 0, "no timer outlives the round");
}

#[test]
fn click_just_before_timeout_wins() {
    let mut s = session_with(MemoryStore::new());
    s.start();
    let first = s.surface().hud.targets[0].id;
    s.run_until(1999);
    assert!(s.click_target(first));
    s.run_until(2000);
    assert_eq!(s.surface().removed.iter().filter(|id| **id == first).count(), 1);
    assert!(!s.click_target(first));
    assert_eq!(s.score(), 1);
}

#[test]
fn rounds_can_be_replayed() {
    let mut s = session_with(MemoryStore::new());
    assert_eq!(s.surface().hud.start_label, "Start");
    play_round(&mut s, 5);
    assert_eq!(s.surface().hud.start_label, "Play Again");
    play_round(&mut s, 3);
    assert_eq!(s.score(), 3);
    assert_eq!(s.state(), GameState { best_reaction_score: 5, total_games_played: 2 });
    assert_eq!(s.scheduler().now_ms(), 120_000);
}

#[test]
fn saved_record_is_loaded_by_the_next_session() {
    let mut first = session_with(MemoryStore::new());
    play_round(&mut first, 8);
    let store = first.store().clone();
    let second = session_with(store);
    assert_eq!(second.state(), GameState { best_reaction_score: 8, total_games_played: 1 });
}

#[test]
fn corrupt_record_starts_from_defaults() {
    let s = session_with(MemoryStore::new().with_item(GAME_STATE_KEY, "{oops"));
    assert_eq!(s.state(), GameState::default());
}

#[test]
fn zero_sized_play_area_spawns_at_origin() {
    let mut s = GameSession::new(RoundConfig::default(), ManualScheduler::new(), Hud::default(), MemoryStore::new(), SmallRng::seed_from_u64(1));
    s.start();
    s.run_until(10_000);
    assert!(!s.surface().targets.is_empty());
    assert!(s.surface().targets.iter().all(|t| t.x == 0 && t.y == 0));
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[test]
fn failed_save_does_not_disturb_the_round() {
    let mut s: Session<ReadOnlyStore> =
        GameSession::new(RoundConfig::default(), ManualScheduler::new(), Recorder::default(), ReadOnlyStore, SmallRng::seed_from_u64(3));
    play_round(&mut s, 4);
    assert_eq!(s.status(), Status::Idle);
    assert_eq!(s.state(), GameState { best_reaction_score: 4, total_games_played: 1 });
}
