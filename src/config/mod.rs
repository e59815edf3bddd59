//! Configuration: types, loading and validation.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, Config, ContactConfig, ThemeSetting};
