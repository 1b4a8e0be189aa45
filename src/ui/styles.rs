use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Display theme, persisted under the `theme` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "claro",
            Theme::Dark => "oscuro",
        }
    }
}

/// Palette for one theme. Celeste/white after the Argentine flag.
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub status_bg: Color,
}

const LIGHT: Palette = Palette {
    fg: Color::Black,
    bg: Color::White,
    primary: Color::Rgb(0, 102, 178),
    accent: Color::Rgb(178, 122, 0),
    muted: Color::Rgb(128, 128, 128),
    error: Color::Rgb(176, 32, 32),
    status_bg: Color::Rgb(224, 232, 240),
};

const DARK: Palette = Palette {
    fg: Color::White,
    bg: Color::Rgb(16, 20, 28),
    primary: Color::Rgb(108, 172, 228),
    accent: Color::Rgb(224, 176, 72),
    muted: Color::Rgb(128, 128, 128),
    error: Color::Rgb(224, 96, 96),
    status_bg: Color::Rgb(32, 40, 52),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

pub fn base_style(theme: Theme) -> Style {
    let p = palette(theme);
    Style::default().fg(p.fg).bg(p.bg)
}

pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).primary)
        .add_modifier(Modifier::BOLD)
}

pub fn month_header_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).primary)
        .add_modifier(Modifier::BOLD)
}

pub fn muted_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).muted)
}

pub fn today_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).accent)
        .add_modifier(Modifier::BOLD)
}

pub fn next_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).accent)
}

pub fn error_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).error)
        .add_modifier(Modifier::BOLD)
}

pub fn status_bar_style(theme: Theme) -> Style {
    let p = palette(theme);
    Style::default().bg(p.status_bg).fg(p.fg)
}

pub fn help_key_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).accent)
        .add_modifier(Modifier::BOLD)
}
