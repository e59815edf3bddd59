//! Typewriter title rotator.
//!
//! Cycles through a fixed list of titles, typing and deleting them one
//! character at a time with a pause after each phase, forever.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Rotation state (Typing → PausingAfterType → Deleting → PausingAfterDelete)
//! - `intent.rs` - The single timer event (Tick)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `timings.rs` - Per-phase delays
//! - `scheduler.rs` - One pending timer at a time, activate/deactivate lifecycle

mod intent;
mod reducer;
mod scheduler;
mod state;
mod timings;

pub use intent::RotatorIntent;
pub use reducer::RotatorReducer;
pub use scheduler::{TitleFrame, TitleRotator, TitleSurface};
pub use state::{Phase, RotationError, RotationState};
pub use timings::RotationTimings;
