use std::io::{self, Stdout};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::contact::{ContactClient, ContactError, SystemMailClient};
use crate::content::Content;
use crate::metrics::PerformanceMonitor;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::{App, ContactDispatcher};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::rotator::{RotationError, RotationState, RotationTimings, TitleRotator};
use crate::ui::terminal_session::TerminalSession;
use crate::ui::theme::ThemeMode;
use crate::ui::title::{RedrawSurface, SharedTitle};

/// Event loop wake-up interval; also the caret blink period.
const TICK_RATE: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum RunError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("invalid titles: {0}")]
    Rotation(#[from] RotationError),

    #[error("contact client setup failed: {0}")]
    Contact(#[from] ContactError),
}

/// Run the interactive portfolio until the user quits.
///
/// Blocking; background work (title rotation, contact delivery) is spawned
/// on `runtime`.
pub fn run(
    config: &Config,
    content: Arc<Content>,
    runtime: &Handle,
    monitor: &mut PerformanceMonitor,
) -> Result<(), RunError> {
    let state = RotationState::new(content.profile.titles.iter().cloned())?;
    let recipient = config
        .contact
        .email
        .clone()
        .unwrap_or_else(|| content.contact.email.clone());
    let client = ContactClient::new(
        config.contact.endpoint.clone(),
        recipient,
        Duration::from_secs(config.contact.timeout_seconds),
        Arc::new(SystemMailClient),
    )?;

    let shutdown = ShutdownCoordinator::new();
    let mut session = TerminalSession::enter(&format!("{} · folio", content.profile.name))?;
    let events = EventHandler::new(TICK_RATE, shutdown.handle());

    let colorfgbg = std::env::var("COLORFGBG").ok();
    let theme = ThemeMode::from_setting(config.theme, colorfgbg.as_deref());
    let title = SharedTitle::new();
    let mut app = App::new(Arc::clone(&content), theme, title.clone());
    app.attach_contact(ContactDispatcher::new(
        Arc::new(client),
        runtime.clone(),
        events.sender(),
    ));
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let mut rotator = TitleRotator::new(
        state,
        RotationTimings::from(&config.animation),
        Arc::new(RedrawSurface::new(title, events.sender())),
    );
    rotator.activate(runtime, &config.animation.reduced_motion);
    tracing::info!(theme = ?theme, "Portfolio started");

    let result = event_loop(session.terminal_mut(), &mut app, &events, monitor);

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingAnimation);
    rotator.deactivate();
    shutdown.advance(ShutdownPhase::CancellingTasks);
    app.cancel_tasks();
    shutdown.advance(ShutdownPhase::RestoringTerminal);
    let restored = session.restore();
    shutdown.advance(ShutdownPhase::Complete);
    tracing::info!(phase = ?shutdown.phase(), "Portfolio stopped");

    result?;
    restored.map_err(RunError::from)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    monitor: &mut PerformanceMonitor,
) -> io::Result<()> {
    loop {
        let started = Instant::now();
        terminal.draw(|frame| draw(frame, app))?;
        monitor.record_frame(started.elapsed());
        if monitor.report_due(Instant::now()) {
            monitor.report();
        }

        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::TitleChanged) => {}
            Ok(AppEvent::ContactFallback(notice)) => app.on_contact_fallback(notice),
            Ok(AppEvent::ContactHandedOff) => app.on_contact_handed_off(),
            Ok(AppEvent::ContactDelivered(delivery)) => app.on_contact_delivered(delivery),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}
