//! Color theme and icons for the prompt.
//!
//! Dark and light variants share a Tailwind-based palette. Every field is
//! public so callers can override single icons or styles.

use ratatui::style::{Color, Modifier, Style};
use strum::{Display, EnumString};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Glyphs drawn by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    /// Prefix before the message while pending.
    pub pending: &'static str,
    /// Prefix before the message once submitted.
    pub done: &'static str,
    pub cursor: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    /// Marker in front of disabled entries.
    pub disabled: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            pending: "?",
            done: "✔",
            cursor: "❯",
            checked: "◉",
            unchecked: "◯",
            disabled: "-",
        }
    }
}

/// Color theme for the prompt.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,
    pub icons: Icons,

    // Header
    pub prefix: Style,
    pub done_prefix: Style,
    pub message: Style,
    pub answer: Style,
    pub help: Style,

    // Items
    pub highlight: Style,
    pub checked: Style,
    pub item: Style,
    pub disabled: Style,

    // Status
    pub error: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);

        let cyan_400 = Color::Rgb(34, 211, 238);
        let green_500 = Color::Rgb(34, 197, 94);
        let red_500 = Color::Rgb(239, 68, 68);
        let blue_400 = Color::Rgb(96, 165, 250);

        Self {
            variant: ThemeVariant::Dark,
            icons: Icons::default(),

            prefix: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            done_prefix: Style::new().fg(green_500).add_modifier(Modifier::BOLD),
            message: Style::new().fg(slate_100).add_modifier(Modifier::BOLD),
            answer: Style::new().fg(cyan_400),
            help: Style::new().fg(slate_500),

            highlight: Style::new().fg(cyan_400),
            checked: Style::new().fg(green_500),
            item: Style::new().fg(slate_300),
            disabled: Style::new().fg(slate_600).add_modifier(Modifier::DIM),

            error: Style::new().fg(red_500),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_900 = Color::Rgb(15, 23, 42);

        let cyan_600 = Color::Rgb(8, 145, 178);
        let green_600 = Color::Rgb(22, 163, 74);
        let red_600 = Color::Rgb(220, 38, 38);
        let blue_700 = Color::Rgb(29, 78, 216);

        Self {
            variant: ThemeVariant::Light,
            icons: Icons::default(),

            prefix: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            done_prefix: Style::new().fg(green_600).add_modifier(Modifier::BOLD),
            message: Style::new().fg(slate_900).add_modifier(Modifier::BOLD),
            answer: Style::new().fg(cyan_600),
            help: Style::new().fg(slate_600),

            highlight: Style::new().fg(cyan_600),
            checked: Style::new().fg(green_600),
            item: Style::new().fg(slate_700),
            disabled: Style::new().fg(slate_400).add_modifier(Modifier::DIM),

            error: Style::new().fg(red_600),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Replace the icon set.
    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
