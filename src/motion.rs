//! Reduced-motion preference.
//!
//! The rotator asks a [`MotionPreference`] once at activation. Terminals
//! have no standard accessibility query, so `auto` falls back to the
//! `FOLIO_REDUCED_MOTION` / `REDUCE_MOTION` environment variables.

use serde::{Deserialize, Serialize};

/// Environment variables checked by [`MotionSetting::Auto`], in order.
pub const REDUCED_MOTION_ENV_VARS: [&str; 2] = ["FOLIO_REDUCED_MOTION", "REDUCE_MOTION"];

/// Source of the "prefers reduced motion" signal.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

impl MotionPreference for bool {
    fn prefers_reduced_motion(&self) -> bool {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MotionSetting {
    /// Decide from the environment.
    #[default]
    Auto,
    /// Always reduce motion.
    On,
    /// Always animate.
    Off,
}

impl MotionSetting {
    /// Resolve with a custom environment lookup.
    pub fn resolve_with<F>(self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            MotionSetting::On => true,
            MotionSetting::Off => false,
            MotionSetting::Auto => REDUCED_MOTION_ENV_VARS
                .iter()
                .filter_map(|key| lookup(*key))
                .any(|value| is_truthy(&value)),
        }
    }
}

impl MotionPreference for MotionSetting {
    fn prefers_reduced_motion(&self) -> bool {
        self.resolve_with(|key| std::env::var(key).ok())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
