use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::motion::MotionSetting;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial colour theme.
    #[serde(default)]
    pub theme: ThemeSetting,
    /// Portfolio content file. The built-in content is used when unset.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Title rotator timing and motion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Milliseconds between typed characters (default: 70).
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Milliseconds between deleted characters (default: 30).
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    /// Pause with the full title shown (default: 1500).
    #[serde(default = "default_pause_after_type_ms")]
    pub pause_after_type_ms: u64,
    /// Pause with an empty line before the next title (default: 300).
    #[serde(default = "default_pause_after_delete_ms")]
    pub pause_after_delete_ms: u64,
    /// "auto", "on" or "off".
    #[serde(default)]
    pub reduced_motion: MotionSetting,
}

/// Contact form delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// HTTP endpoint receiving JSON submissions. Without one, messages are
    /// handed to the system mail client.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Recipient for the mail client fallback. Defaults to the profile email.
    #[serde(default)]
    pub email: Option<String>,
    /// Endpoint request timeout in seconds (default: 10).
    #[serde(default = "default_contact_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Guess from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

fn default_type_ms() -> u64 {
    70
}

fn default_delete_ms() -> u64 {
    30
}

fn default_pause_after_type_ms() -> u64 {
    1500
}

fn default_pause_after_delete_ms() -> u64 {
    300
}

fn default_contact_timeout() -> u64 {
    10
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            pause_after_type_ms: default_pause_after_type_ms(),
            pause_after_delete_ms: default_pause_after_delete_ms(),
            reduced_motion: MotionSetting::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            email: None,
            timeout_seconds: default_contact_timeout(),
        }
    }
}
