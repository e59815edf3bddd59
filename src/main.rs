use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use folio::cli::Cli;
use folio::config::Config;
use folio::content::plain::render_plain;
use folio::content::Content;
use folio::logging::{default_log_path, init_tracing};
use folio::metrics::{Mark, PerformanceMonitor};
use folio::ui::runtime::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut monitor = PerformanceMonitor::new();
    monitor.activate();

    if !cli.plain {
        let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
        if let Err(err) = init_tracing(&log_path) {
            eprintln!("Warning: {err}");
        }
    }

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;
    monitor.mark(Mark::ConfigLoaded);

    let content = Content::load(config.content_path.as_deref())?;
    monitor.mark(Mark::ContentLoaded);

    if cli.plain {
        print!("{}", render_plain(&content));
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = run(&config, Arc::new(content), runtime.handle(), &mut monitor);
    monitor.deactivate();
    result?;
    Ok(())
}
