//! Section list and the lines drawn for each section.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::contact::Delivery;
use crate::content::icons::tech_icon;
use crate::content::types::skill_label;
use crate::ui::app::App;
use crate::ui::contact::{FormField, SubmitStatus};
use crate::ui::theme::Palette;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// `'1'`..=`'5'` → section.
    pub fn from_digit(ch: char) -> Option<Self> {
        let index = ch.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

pub fn section_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    match app.section() {
        Section::About => about_lines(app, palette),
        Section::Skills => skills_lines(app, palette),
        Section::Projects => projects_lines(app, palette),
        Section::Experience => experience_lines(app, palette),
        Section::Contact => contact_lines(app, palette),
    }
}

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn text(value: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(value.to_string(), Style::default().fg(palette.text)))
}

fn muted(value: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(value.to_string(), Style::default().fg(palette.muted)))
}

fn link(label: &str, url: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(palette.muted)),
        Span::styled(
            url.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

fn about_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let profile = &app.content().profile;
    let mut lines = vec![
        text(&profile.role, palette),
        muted(&profile.location, palette),
        Line::from(""),
        text(&profile.summary, palette),
        Line::from(""),
    ];

    if !profile.tags.is_empty() {
        let mut spans = Vec::new();
        for tag in &profile.tags {
            spans.push(Span::styled(
                format!(" {} ", tag),
                Style::default().fg(palette.text).bg(palette.highlight),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let links = [
        ("GitHub", profile.links.github.as_deref()),
        ("LinkedIn", profile.links.linkedin.as_deref()),
        ("Website", profile.links.website.as_deref()),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            lines.push(link(label, url, palette));
        }
    }
    lines.push(link("Email", &format!("mailto:{}", profile.email), palette));
    lines
}

fn skills_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in &app.content().skills {
        lines.push(heading(&category.title, palette));
        for item in &category.items {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", tech_icon(item)),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(skill_label(item).to_string(), Style::default().fg(palette.text)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn projects_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for project in &app.content().projects {
        let mut title = vec![Span::styled(
            project.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(highlight) = &project.highlight {
            title.push(Span::raw("  "));
            title.push(Span::styled(
                format!(" {} ", highlight),
                Style::default().fg(palette.accent).bg(palette.highlight),
            ));
        }
        lines.push(Line::from(title));
        lines.push(muted(&project.description, palette));

        if !project.tech.is_empty() {
            let mut spans = Vec::new();
            for tech in &project.tech {
                spans.push(Span::styled(
                    format!("{} {}", tech_icon(tech), tech),
                    Style::default().fg(palette.text),
                ));
                spans.push(Span::raw("   "));
            }
            lines.push(Line::from(spans));
        }

        if let Some(code) = &project.links.code {
            lines.push(link("Code →", code, palette));
        }
        if let Some(demo) = &project.links.demo {
            lines.push(link("Demo →", demo, palette));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn experience_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in app.content().timeline() {
        let item = entry.item;
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}/{}) ", entry.position, entry.total),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} • {} @ {}", item.timeframe, item.role, item.org),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(muted(&format!("      {}", item.summary), palette));
        for detail in &item.details {
            lines.push(muted(&format!("      - {}", detail), palette));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn contact_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let cta = &app.content().contact;
    let form = app.contact_form();
    let mut lines = vec![
        Line::from(Span::styled(
            cta.headline.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        link("Email", &format!("mailto:{}", cta.email), palette),
    ];
    if let Some(linkedin) = &cta.linkedin {
        lines.push(link("LinkedIn", linkedin, palette));
    }
    lines.push(Line::from(""));

    for field in FormField::ALL {
        let focused = form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        if field.is_text() {
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, field.label().to_uppercase()),
                Style::default().fg(if focused { palette.accent } else { palette.muted }),
            )));
            let value = form.value(field);
            let value_lines: Vec<&str> = value.split('\n').collect();
            let last = value_lines.len() - 1;
            for (idx, part) in value_lines.into_iter().enumerate() {
                let caret = if focused && idx == last { "▏" } else { "" };
                let style = if focused {
                    Style::default().fg(palette.text).bg(palette.highlight)
                } else {
                    Style::default().fg(palette.text)
                };
                lines.push(Line::from(Span::styled(format!("    {}{}", part, caret), style)));
            }
        } else {
            let label = match &form.status {
                SubmitStatus::Sending | SubmitStatus::Error(_) => {
                    if app.contact_endpoint().is_some() {
                        "Sending…"
                    } else {
                        "Opening Mail…"
                    }
                }
                SubmitStatus::Sent(_) => "Sent ✔",
                SubmitStatus::Idle => field.label(),
            };
            let style = if focused {
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.accent)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[ {} ]", label), style),
            ]));
        }
    }

    lines.push(Line::from(""));
    if let Some(status) = status_line(app, palette) {
        lines.push(status);
    }
    if let Some(hint) = &form.hint {
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(palette.status_warn),
        )));
    }
    if app.contact_endpoint().is_none() {
        lines.push(muted(
            "Tip: set contact.endpoint in config.toml to enable direct submissions.",
            palette,
        ));
    }
    lines
}

fn status_line(app: &App, palette: &Palette) -> Option<Line<'static>> {
    let (message, color) = match &app.contact_form().status {
        SubmitStatus::Idle => return None,
        SubmitStatus::Sending => {
            if app.contact_endpoint().is_some() {
                return None;
            }
            ("Launching email app…".to_string(), palette.muted)
        }
        SubmitStatus::Error(notice) => (notice.clone(), palette.status_warn),
        SubmitStatus::Sent(Delivery::Endpoint) => {
            ("Message sent successfully!".to_string(), palette.status_ok)
        }
        SubmitStatus::Sent(Delivery::MailClient { opened: true, .. }) => {
            ("Message sent (via mail client).".to_string(), palette.status_ok)
        }
        SubmitStatus::Sent(Delivery::MailClient { url, opened: false }) => (
            format!("No mail client found. Open this link to send: {}", url),
            palette.status_warn,
        ),
    };
    Some(Line::from(Span::styled(message, Style::default().fg(color))))
}
