use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::sections::{section_lines, Section};
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

/// Left padding of the section content.
const CONTENT_INSET: u16 = 2;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    let regions = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );
    frame.render_widget(Header::new(palette).widget(app), regions.header);
    frame.render_widget(tabs(app, palette), regions.tabs);
    draw_content(frame, app, palette, regions.content);
    frame.render_widget(Footer::new(palette).widget(app, regions.footer), regions.footer);
}

fn tabs(app: &App, palette: &Palette) -> Tabs<'static> {
    let titles = Section::ALL
        .iter()
        .enumerate()
        .map(|(idx, section)| Line::from(format!("{} {}", idx + 1, section.title())));

    Tabs::new(titles)
        .select(app.section().index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(palette.separator)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
}

fn draw_content(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    if area.width <= CONTENT_INSET || area.height == 0 {
        return;
    }
    let inner = Rect {
        x: area.x + CONTENT_INSET,
        width: area.width - CONTENT_INSET,
        ..area
    };

    let paragraph = Paragraph::new(section_lines(app, palette)).wrap(Wrap { trim: false });
    let limit = wrapped_height(&paragraph, inner.width).saturating_sub(inner.height);
    app.set_scroll_limit(limit);

    frame.render_widget(paragraph.scroll((app.scroll().min(limit), 0)), inner);
}

/// Rows the wrapped paragraph occupies at `width` columns.
fn wrapped_height(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}
