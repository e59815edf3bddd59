use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Backend = CrosstermBackend<Stdout>;

/// The portfolio's hold on the terminal: raw mode, the alternate screen and
/// a window title naming the profile.
///
/// `restore` hands the terminal back exactly once, whether it runs from the
/// ordered shutdown, from `Drop`, or from the panic hook.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
    restored: Arc<AtomicBool>,
}

impl TerminalSession {
    pub fn enter(window_title: &str) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(Hide)?;
        stdout.execute(SetTitle(window_title))?;

        let restored = Arc::new(AtomicBool::new(false));
        install_panic_hook(Arc::clone(&restored));

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            restored,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }

    /// Leave the alternate screen and raw mode. Later calls do nothing.
    pub fn restore(&self) -> io::Result<()> {
        restore_once(&self.restored, leave_screen)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_once(restored: &AtomicBool, leave: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    if restored.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    leave()
}

fn leave_screen() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    stdout.execute(SetTitle(""))?;
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    raw
}

/// The panic message would be drawn on the alternate screen and lost, so
/// the screen is left first and the panic is also written to the log.
fn install_panic_hook(restored: Arc<AtomicBool>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_once(&restored, leave_screen);
        tracing::error!(panic = %info, "Portfolio panicked");
        default_hook(info);
    }));
}
