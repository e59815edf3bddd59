//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ThemeSetting};
use crate::motion::MotionSetting;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio in the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Portfolio content file (TOML), overrides `content_path`
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Colour theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeSetting>,

    /// Reduced motion: stop the title animation
    #[arg(long, value_enum, value_name = "MODE")]
    pub reduced_motion: Option<MotionSetting>,

    /// Contact endpoint receiving JSON submissions
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the portfolio as plain text and exit
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Overlay command-line flags on the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.content {
            config.content_path = Some(path.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(motion) = self.reduced_motion {
            config.animation.reduced_motion = motion;
        }
        if let Some(endpoint) = &self.endpoint {
            config.contact.endpoint = Some(endpoint.clone());
        }
    }
}
