use crate::ui::app::App;
use crate::ui::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Caret glyph drawn after the rotating title.
pub const CARET: &str = "▌";

pub struct Header<'a> {
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let palette = self.palette;
        let profile = &app.content().profile;
        let frame = app.title_frame();

        let name = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(palette.separator)),
            Span::styled(profile.location.clone(), Style::default().fg(palette.muted)),
        ]);

        let mut title = vec![
            Span::raw("  "),
            Span::styled(frame.text.clone(), Style::default().fg(palette.accent)),
        ];
        if app.caret_shown(&frame) {
            title.push(Span::styled(CARET, Style::default().fg(palette.accent)));
        }

        Paragraph::new(vec![name, Line::from(title)]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
