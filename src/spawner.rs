//! Creates randomly placed targets and resolves each of them exactly once.

use rand::Rng;
use std::collections::BTreeMap;

use crate::model::{Bounds, Target, TargetId};
use crate::scheduler::{Scheduler, Task, TimerId};

#[derive(Debug)]
struct LiveTarget {
    target: Target,
    expiry: TimerId,
}

#[derive(Debug)]
pub struct TargetSpawner {
    min_px: u32,
    max_px: u32,
    cadence: Option<TimerId>,
    cadence_ms: Option<u32>,
    next_id: u64,
    live: BTreeMap<TargetId, LiveTarget>,
}

impl TargetSpawner {
    /// Target sizes are drawn from `min_px..max_px`.
    pub fn new(min_px: u32, max_px: u32) -> Self {
        Self { min_px, max_px: max_px.max(min_px + 1), cadence: None, cadence_ms: None, next_id: 0, live: BTreeMap::new() }
    }

    /// Replaces the repeating spawn schedule. The old one is dropped, not drained.
    pub fn set_cadence(&mut self, sched: &mut impl Scheduler, interval_ms: u32) {
        self.stop_cadence(sched);
        self.cadence = Some(sched.schedule_repeating(Task::Spawn, interval_ms));
        self.cadence_ms = Some(interval_ms);
    }

    pub fn stop_cadence(&mut self, sched: &mut impl Scheduler) {
        if let Some(id) = self.cadence.take() {
            sched.cancel(id);
        }
        self.cadence_ms = None;
    }

    pub fn cadence_ms(&self) -> Option<u32> {
        self.cadence_ms
    }

    /// Places one target fully inside `area` and arms its removal timeout.
    /// An area smaller than the target pins that axis to zero.
    pub fn spawn_one(
        &mut self,
        sched: &mut impl Scheduler,
        rng: &mut impl Rng,
        area: Bounds,
        removal_delay_ms: u32,
        now_ms: u32,
    ) -> Target {
        let size_px = rng.gen_range(self.min_px..self.max_px);
        let max_left = (area.width - size_px as f64).max(0.0);
        let max_top = (area.height - size_px as f64).max(0.0);
        let x = (rng.r#gen::<f64>() * max_left).floor() as u32;
        let y = (rng.r#gen::<f64>() * max_top).floor() as u32;
        let id = TargetId(self.next_id);
        self.next_id += 1;
        let target = Target { id, size_px, x, y, created_at_ms: now_ms, removal_delay_ms };
        let expiry = sched.schedule_once(Task::Expire(id), removal_delay_ms);
        self.live.insert(id, LiveTarget { target, expiry });
        target
    }

    /// Click resolution. Cancels the pending timeout; `None` if already resolved.
    pub fn click(&mut self, sched: &mut impl Scheduler, id: TargetId) -> Option<Target> {
        let lt = self.live.remove(&id)?;
        sched.cancel(lt.expiry);
        Some(lt.target)
    }

    /// Timeout resolution; `None` if the target was already clicked or cleared.
    /// The fired timer is cancelled too, which releases its browser callback.
    pub fn expire(&mut self, sched: &mut impl Scheduler, id: TargetId) -> Option<Target> {
        let lt = self.live.remove(&id)?;
        sched.cancel(lt.expiry);
        Some(lt.target)
    }

    /// Stops the cadence and removes every live target with its timeout.
    pub fn clear(&mut self, sched: &mut impl Scheduler) -> Vec<Target> {
        self.stop_cadence(sched);
        let live = std::mem::take(&mut self.live);
        live.into_values()
            .map(|lt| {
                sched.cancel(lt.expiry);
                lt.target
            })
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
