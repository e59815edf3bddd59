//! Intents for the title rotator.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the rotator reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorIntent {
    /// The pending timer for the current phase elapsed.
    Tick,
}

impl Intent for RotatorIntent {}
