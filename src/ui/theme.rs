use ratatui::style::Color;

use crate::config::ThemeSetting;

/// Colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub separator: Color,
    pub highlight: Color,
    pub status_ok: Color,
    pub status_warn: Color,
    pub status_error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0a, 0x0a, 0x0a),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0xa3, 0xa3, 0xa3),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    border: Color::Rgb(0x40, 0x40, 0x40),
    separator: Color::Rgb(0x6b, 0x72, 0x80),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    status_ok: Color::Rgb(0x4a, 0xde, 0x80),
    status_warn: Color::Rgb(0xfb, 0xbf, 0x24),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x26, 0x26, 0x26),
    muted: Color::Rgb(0x52, 0x52, 0x52),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    border: Color::Rgb(0xd4, 0xd4, 0xd4),
    separator: Color::Rgb(0x9c, 0xa3, 0xaf),
    highlight: Color::Rgb(0xe5, 0xe5, 0xe5),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_warn: Color::Rgb(0xd9, 0x77, 0x06),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Resolve the configured setting. `Auto` reads a `COLORFGBG` value
    /// ("fg;bg"): background 7 or 15 means a light terminal.
    pub fn from_setting(setting: ThemeSetting, colorfgbg: Option<&str>) -> Self {
        match setting {
            ThemeSetting::Dark => ThemeMode::Dark,
            ThemeSetting::Light => ThemeMode::Light,
            ThemeSetting::Auto => {
                let background = colorfgbg.and_then(|value| value.rsplit(';').next());
                match background.map(str::trim) {
                    Some("7") | Some("15") => ThemeMode::Light,
                    _ => ThemeMode::Dark,
                }
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    /// Footer hint for the toggle key.
    pub fn switch_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        }
    }
}
