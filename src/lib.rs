pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod metrics;
pub mod motion;
pub mod shutdown;
pub mod ui;
