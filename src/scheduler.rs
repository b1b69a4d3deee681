//! Timer seam between the game logic and whatever drives time.
//!
//! Every timer-driven action is a [`Task`]. Owners keep the returned
//! [`TimerId`] and cancel through it; nothing is cancelled implicitly.
//! [`ManualScheduler`] runs on virtual time for tests, [`WindowScheduler`]
//! maps onto `setInterval` / `setTimeout` in the browser.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::model::TargetId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    ClockTick,
    Spawn,
    Expire(TargetId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

pub trait Scheduler {
    fn schedule_repeating(&mut self, task: Task, every_ms: u32) -> TimerId;
    fn schedule_once(&mut self, task: Task, after_ms: u32) -> TimerId;
    /// Unknown or already finished ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug)]
struct Entry {
    task: Task,
    due_ms: u64,
    every_ms: Option<u64>,
}

/// Deterministic virtual-time scheduler. Ties on the deadline fire in
/// timer creation order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Live timers, repeating or not.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Pops the earliest task due at or before `until_ms` and moves virtual
    /// time to its deadline.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Task> {
        let id = self
            .timers
            .iter()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by_key(|(id, e)| (e.due_ms, **id))
            .map(|(id, _)| *id)?;
        let entry = self.timers.get_mut(&id)?;
        let task = entry.task;
        self.now_ms = entry.due_ms;
        match entry.every_ms {
            Some(every) => entry.due_ms += every,
            None => {
                self.timers.remove(&id);
            }
        }
        Some(task)
    }

    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    fn insert(&mut self, task: Task, delay_ms: u32, every_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_ms = self.now_ms + delay_ms as u64;
        self.timers.insert(id, Entry { task, due_ms, every_ms });
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, task: Task, every_ms: u32) -> TimerId {
        // A zero period would never let virtual time advance.
        let every = every_ms.max(1);
        self.insert(task, every, Some(every as u64))
    }

    fn schedule_once(&mut self, task: Task, after_ms: u32) -> TimerId {
        self.insert(task, after_ms, None)
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

struct BrowserTimer {
    handle: i32,
    repeating: bool,
    _closure: Closure<dyn FnMut()>,
}

/// Browser scheduler. Tasks are handed to `sink` from the timer callbacks.
/// A fired one-shot keeps its closure until its owner cancels it, the same
/// way an interval does; the owner may do so from inside the callback.
/// Dropping it clears every timer still registered with the window.
pub struct WindowScheduler {
    window: web_sys::Window,
    sink: Rc<dyn Fn(Task)>,
    next_id: u64,
    live: HashMap<TimerId, BrowserTimer>,
}

impl WindowScheduler {
    pub fn new(window: web_sys::Window, sink: Rc<dyn Fn(Task)>) -> Self {
        Self { window, sink, next_id: 0, live: HashMap::new() }
    }

    /// Timers whose closures are still held.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn register(&mut self, task: Task, ms: u32, repeating: bool) -> TimerId {
        let id = self.next_id();
        let sink = self.sink.clone();
        let closure = Closure::wrap(Box::new(move || sink(task)) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let res = if repeating {
            self.window.set_interval_with_callback_and_timeout_and_arguments_0(callback, ms as i32)
        } else {
            self.window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, ms as i32)
        };
        match res {
            Ok(handle) => {
                self.live.insert(id, BrowserTimer { handle, repeating, _closure: closure });
            }
            Err(e) => log::warn!("could not schedule {:?}: {:?}", task, e),
        }
        id
    }
}

impl Scheduler for WindowScheduler {
    fn schedule_repeating(&mut self, task: Task, every_ms: u32) -> TimerId {
        self.register(task, every_ms, true)
    }

    fn schedule_once(&mut self, task: Task, after_ms: u32) -> TimerId {
        self.register(task, after_ms, false)
    }

    /// Also the release path for a one-shot that already fired.
    fn cancel(&mut self, id: TimerId) {
        if let Some(timer) = self.live.remove(&id) {
            if timer.repeating {
                self.window.clear_interval_with_handle(timer.handle);
            } else {
                self.window.clear_timeout_with_handle(timer.handle);
            }
        }
    }
}

impl Drop for WindowScheduler {
    fn drop(&mut self) {
        let ids: Vec<TimerId> = self.live.keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
    }
}
