//! Color theme and styling definitions using ratatui colors

use crate::config::ThemeName;
use crate::format::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Title bar
    pub title: Style,

    /// Table header cells
    pub header: Style,

    /// Header cell of the focused column
    pub focused_header: Style,

    /// Row under the cursor
    pub selection: Style,

    /// Secondary text: hints, required markers, empty state
    pub muted: Style,

    /// Popup and panel borders
    pub border: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Status/priority badges, indexed by tone
    badges: [Style; 8],
}

fn tone_index(tone: Tone) -> usize {
    match tone {
        Tone::Blue => 0,
        Tone::Orange => 1,
        Tone::Green => 2,
        Tone::Purple => 3,
        Tone::Gray => 4,
        Tone::Red => 5,
        Tone::Yellow => 6,
        Tone::Neutral => 7,
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        let fg = |color| Style::default().fg(color);
        Self {
            title: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header: Style::default().add_modifier(Modifier::BOLD),
            focused_header: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().bg(Color::DarkGray),
            muted: fg(Color::DarkGray),
            border: fg(Color::Gray),
            status_bg: Color::Blue,
            status_fg: Color::White,
            badges: [
                fg(Color::Blue),
                fg(Color::Rgb(255, 140, 0)),
                fg(Color::Green),
                fg(Color::Magenta),
                fg(Color::Gray),
                fg(Color::Red).add_modifier(Modifier::BOLD),
                fg(Color::Yellow),
                Style::default(),
            ],
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            title: plain.add_modifier(Modifier::REVERSED | Modifier::BOLD),
            header: plain.add_modifier(Modifier::BOLD),
            focused_header: plain.add_modifier(Modifier::REVERSED | Modifier::BOLD),
            selection: plain.add_modifier(Modifier::REVERSED),
            muted: plain.add_modifier(Modifier::DIM),
            border: plain,
            status_bg: Color::Black,
            status_fg: Color::White,
            badges: [
                plain,
                plain.add_modifier(Modifier::BOLD),
                plain,
                plain.add_modifier(Modifier::ITALIC),
                plain.add_modifier(Modifier::DIM),
                plain.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                plain.add_modifier(Modifier::UNDERLINED),
                plain,
            ],
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        let fg = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        Self {
            title: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            header: fg(Color::White),
            focused_header: Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::White).bg(Color::LightBlue),
            muted: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::White),
            status_bg: Color::White,
            status_fg: Color::Black,
            badges: [
                fg(Color::LightBlue),
                fg(Color::LightYellow),
                fg(Color::LightGreen),
                fg(Color::LightMagenta),
                fg(Color::White),
                fg(Color::LightRed),
                fg(Color::Yellow),
                Style::default().fg(Color::White),
            ],
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Style for a status or priority badge.
    pub fn tone_style(&self, tone: Tone) -> Style {
        self.badges[tone_index(tone)]
    }

    pub fn status_style(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.status_fg)
    }
}
