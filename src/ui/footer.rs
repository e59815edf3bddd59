use crate::ui::app::App;
use crate::ui::sections::Section;
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = if app.section() == Section::Contact {
            " Tab: Next field │ Enter: Send/newline │ Ctrl+S: Send │ Esc: Back │ Ctrl+Q: Quit"
                .to_string()
        } else {
            format!(
                " ←/→: Sections │ ↑/↓: Scroll │ t: {} │ q: Quit",
                app.theme().switch_label()
            )
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}
