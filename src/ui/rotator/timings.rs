use std::time::Duration;

use crate::config::AnimationConfig;

use super::state::Phase;

/// Delays between rotator ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimings {
    /// Interval between typed characters.
    pub type_interval: Duration,
    /// Interval between deleted characters. Shorter than `type_interval`.
    pub delete_interval: Duration,
    /// Dwell with the full title shown.
    pub pause_after_type: Duration,
    /// Dwell with an empty buffer before the next title.
    pub pause_after_delete: Duration,
}

impl RotationTimings {
    /// Delay before the tick that is applied while in `phase`.
    pub fn delay_for(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Typing => self.type_interval,
            Phase::PausingAfterType => self.pause_after_type,
            Phase::Deleting => self.delete_interval,
            Phase::PausingAfterDelete => self.pause_after_delete,
        }
    }
}

impl Default for RotationTimings {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for RotationTimings {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            type_interval: Duration::from_millis(config.type_ms),
            delete_interval: Duration::from_millis(config.delete_ms),
            pause_after_type: Duration::from_millis(config.pause_after_type_ms),
            pause_after_delete: Duration::from_millis(config.pause_after_delete_ms),
        }
    }
}
