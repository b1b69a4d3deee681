//! Fixed-duration countdown ticking at a coarse granularity.

use crate::scheduler::{Scheduler, Task, TimerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    Tick { remaining_ms: u32, elapsed_ms: u32 },
    /// Reported once; the repeating tick is already cancelled.
    Expired,
}

#[derive(Debug)]
pub struct RoundClock {
    duration_ms: u32,
    tick_ms: u32,
    remaining_ms: i64,
    timer: Option<TimerId>,
}

impl RoundClock {
    pub fn new(duration_ms: u32, tick_ms: u32) -> Self {
        Self { duration_ms, tick_ms, remaining_ms: duration_ms as i64, timer: None }
    }

    /// Restarts the countdown. A previous tick timer is cancelled first.
    pub fn arm(&mut self, sched: &mut impl Scheduler, duration_ms: u32) {
        self.cancel(sched);
        self.duration_ms = duration_ms;
        self.remaining_ms = duration_ms as i64;
        self.timer = Some(sched.schedule_repeating(Task::ClockTick, self.tick_ms));
    }

    /// Handles one `Task::ClockTick`. Returns `None` once the clock is stopped.
    pub fn on_tick(&mut self, sched: &mut impl Scheduler) -> Option<ClockEvent> {
        self.timer?;
        self.remaining_ms -= self.tick_ms as i64;
        if self.remaining_ms <= 0 {
            self.remaining_ms = 0;
            self.cancel(sched);
            return Some(ClockEvent::Expired);
        }
        Some(ClockEvent::Tick { remaining_ms: self.remaining_ms(), elapsed_ms: self.elapsed_ms() })
    }

    pub fn cancel(&mut self, sched: &mut impl Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
    }

    /// Cancels and rewinds to the full duration.
    pub fn reset(&mut self, sched: &mut impl Scheduler) {
        self.cancel(sched);
        self.remaining_ms = self.duration_ms as i64;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms.clamp(0, self.duration_ms as i64) as u32
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.duration_ms - self.remaining_ms()
    }

    /// True when elapsed time lies strictly within `tolerance_ms` of `mark_ms`.
    /// Ticks are coarse, so phase boundaries are matched by proximity.
    pub fn is_near(&self, mark_ms: u32, tolerance_ms: u32) -> bool {
        (mark_ms as i64 - self.elapsed_ms() as i64).abs() < tolerance_ms as i64
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.elapsed_ms() as f64 / self.duration_ms as f64 * 100.0
    }
}
