//! Reaction Rush: a one-minute "click the spaceship" reaction test.
//!
//! The round logic (clock, spawner, session) is plain Rust driven through
//! the [`scheduler::Scheduler`] and [`surface::RenderSurface`] seams, so it
//! runs natively under `cargo test`. The yew components in [`components`]
//! wire it to browser timers and `localStorage`.

pub mod background;
pub mod clock;
pub mod components;
pub mod config;
pub mod model;
pub mod scheduler;
pub mod session;
pub mod spawner;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod util;

pub use config::RoundConfig;
pub use model::{Bounds, GameState, Phase, RoundSummary, Target, TargetId, Tier};
pub use session::{GameSession, Status};
