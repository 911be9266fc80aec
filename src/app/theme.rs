//! UI palettes: every color the view uses lives here, one palette per theme.

use crate::kernel::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub background: Color,
    pub foreground: Color,
    pub muted_fg: Color,
    pub border: Color,
    pub accent_fg: Color,
    pub title_rainbow: [Color; 6],
    pub toggle_fg: Color,
    pub button_fg: Color,
    pub button_border: Color,
    pub button_disabled_fg: Color,
    pub placeholder_fg: Color,
    pub star_lit_fg: Color,
    pub star_dim_fg: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub statement_fg: Color,
    pub pros_heading_fg: Color,
    pub pros_fg: Color,
    pub cons_heading_fg: Color,
    pub cons_fg: Color,
}

/// How many colors a palette may use on the current terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    TrueColor,
    Indexed256,
    Basic,
}

/// Forces a depth: `truecolor`, `256` or `basic`.
pub const COLOR_DEPTH_ENV: &str = "DECISION_COIN_COLORS";

impl ColorDepth {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// The override wins when it parses; otherwise the deepest mode that
    /// `COLORTERM` or `TERM` advertises.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(forced) = var(COLOR_DEPTH_ENV).as_deref().and_then(Self::parse) {
            return forced;
        }

        let advertised: Vec<String> = ["COLORTERM", "TERM"]
            .into_iter()
            .filter_map(&var)
            .map(|value| value.to_ascii_lowercase())
            .collect();
        let any = |needle: &str| advertised.iter().any(|value| value.contains(needle));

        if any("truecolor") || any("24bit") {
            ColorDepth::TrueColor
        } else if any("256") {
            ColorDepth::Indexed256
        } else {
            ColorDepth::Basic
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Some(ColorDepth::TrueColor),
            "256" => Some(ColorDepth::Indexed256),
            "16" | "basic" => Some(ColorDepth::Basic),
            _ => None,
        }
    }
}

impl UiTheme {
    pub fn for_theme(theme: Theme, depth: ColorDepth) -> Self {
        match (depth, theme) {
            (ColorDepth::TrueColor, Theme::Dark) => Self::cosmic_dark(),
            (ColorDepth::TrueColor, Theme::Light) => Self::cosmic_light(),
            (ColorDepth::Indexed256, Theme::Dark) => Self::indexed_dark(),
            (ColorDepth::Indexed256, Theme::Light) => Self::indexed_light(),
            (ColorDepth::Basic, Theme::Dark) => Self::basic_dark(),
            (ColorDepth::Basic, Theme::Light) => Self::basic_light(),
        }
    }

    pub fn cosmic_dark() -> Self {
        Self {
            background: Color::Rgb(0x0F, 0x0A, 0x1F),
            foreground: Color::Rgb(0xF5, 0xF3, 0xFF),
            muted_fg: Color::Rgb(0x8B, 0x7F, 0xB0),
            border: Color::Rgb(0x8B, 0x5C, 0xF6),
            accent_fg: Color::Rgb(0xC4, 0xB5, 0xFD),
            title_rainbow: [
                Color::Rgb(0xF4, 0x72, 0xB6),
                Color::Rgb(0xA7, 0x8B, 0xFA),
                Color::Rgb(0x60, 0xA5, 0xFA),
                Color::Rgb(0x22, 0xD3, 0xEE),
                Color::Rgb(0x4A, 0xDE, 0x80),
                Color::Rgb(0xFA, 0xCC, 0x15),
            ],
            toggle_fg: Color::Rgb(0xFD, 0xE0, 0x47),
            button_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            button_border: Color::Rgb(0xA8, 0x55, 0xF7),
            button_disabled_fg: Color::Rgb(0x5B, 0x52, 0x7A),
            placeholder_fg: Color::Rgb(0xD8, 0xB4, 0xFE),
            star_lit_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            star_dim_fg: Color::Rgb(0x4C, 0x45, 0x6B),
            badge_fg: Color::Rgb(0xFD, 0xE0, 0x47),
            badge_bg: Color::Rgb(0x3B, 0x21, 0x6B),
            statement_fg: Color::Rgb(0xE9, 0xD5, 0xFF),
            pros_heading_fg: Color::Rgb(0x4A, 0xDE, 0x80),
            pros_fg: Color::Rgb(0xBB, 0xF7, 0xD0),
            cons_heading_fg: Color::Rgb(0xF8, 0x71, 0x71),
            cons_fg: Color::Rgb(0xFE, 0xCA, 0xCA),
        }
    }

    pub fn cosmic_light() -> Self {
        Self {
            background: Color::Rgb(0xF5, 0xF3, 0xFF),
            foreground: Color::Rgb(0x1E, 0x1B, 0x4B),
            muted_fg: Color::Rgb(0x6B, 0x62, 0x94),
            border: Color::Rgb(0x7C, 0x3A, 0xED),
            accent_fg: Color::Rgb(0x6D, 0x28, 0xD9),
            title_rainbow: [
                Color::Rgb(0xDB, 0x27, 0x77),
                Color::Rgb(0x7C, 0x3A, 0xED),
                Color::Rgb(0x25, 0x63, 0xEB),
                Color::Rgb(0x08, 0x91, 0xB2),
                Color::Rgb(0x16, 0xA3, 0x4A),
                Color::Rgb(0xCA, 0x8A, 0x04),
            ],
            toggle_fg: Color::Rgb(0x43, 0x38, 0xCA),
            button_fg: Color::Rgb(0x4C, 0x1D, 0x95),
            button_border: Color::Rgb(0x93, 0x33, 0xEA),
            button_disabled_fg: Color::Rgb(0xB8, 0xB1, 0xD6),
            placeholder_fg: Color::Rgb(0x8B, 0x5C, 0xF6),
            star_lit_fg: Color::Rgb(0x4C, 0x1D, 0x95),
            star_dim_fg: Color::Rgb(0xD6, 0xCF, 0xF2),
            badge_fg: Color::Rgb(0x4C, 0x1D, 0x95),
            badge_bg: Color::Rgb(0xE9, 0xD5, 0xFF),
            statement_fg: Color::Rgb(0x58, 0x1C, 0x87),
            pros_heading_fg: Color::Rgb(0x15, 0x80, 0x3D),
            pros_fg: Color::Rgb(0x16, 0x65, 0x34),
            cons_heading_fg: Color::Rgb(0xB9, 0x1C, 0x1C),
            cons_fg: Color::Rgb(0x99, 0x1B, 0x1B),
        }
    }

    /// xterm-256 approximations of the cosmic palettes.
    pub fn indexed_dark() -> Self {
        Self {
            background: Color::Indexed(234),
            foreground: Color::Indexed(255),
            muted_fg: Color::Indexed(103),
            border: Color::Indexed(99),
            accent_fg: Color::Indexed(147),
            title_rainbow: [
                Color::Indexed(205),
                Color::Indexed(141),
                Color::Indexed(75),
                Color::Indexed(45),
                Color::Indexed(84),
                Color::Indexed(220),
            ],
            toggle_fg: Color::Indexed(221),
            button_fg: Color::Indexed(231),
            button_border: Color::Indexed(135),
            button_disabled_fg: Color::Indexed(60),
            placeholder_fg: Color::Indexed(183),
            star_lit_fg: Color::Indexed(231),
            star_dim_fg: Color::Indexed(60),
            badge_fg: Color::Indexed(221),
            badge_bg: Color::Indexed(54),
            statement_fg: Color::Indexed(189),
            pros_heading_fg: Color::Indexed(84),
            pros_fg: Color::Indexed(157),
            cons_heading_fg: Color::Indexed(203),
            cons_fg: Color::Indexed(224),
        }
    }

    pub fn indexed_light() -> Self {
        Self {
            background: Color::Indexed(255),
            foreground: Color::Indexed(17),
            muted_fg: Color::Indexed(60),
            border: Color::Indexed(93),
            accent_fg: Color::Indexed(56),
            title_rainbow: [
                Color::Indexed(162),
                Color::Indexed(93),
                Color::Indexed(26),
                Color::Indexed(31),
                Color::Indexed(28),
                Color::Indexed(136),
            ],
            toggle_fg: Color::Indexed(62),
            button_fg: Color::Indexed(54),
            button_border: Color::Indexed(129),
            button_disabled_fg: Color::Indexed(146),
            placeholder_fg: Color::Indexed(99),
            star_lit_fg: Color::Indexed(54),
            star_dim_fg: Color::Indexed(189),
            badge_fg: Color::Indexed(54),
            badge_bg: Color::Indexed(189),
            statement_fg: Color::Indexed(54),
            pros_heading_fg: Color::Indexed(28),
            pros_fg: Color::Indexed(22),
            cons_heading_fg: Color::Indexed(124),
            cons_fg: Color::Indexed(88),
        }
    }

    pub fn basic_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Indexed(15),  // White
            muted_fg: Color::Indexed(8),     // DarkGray
            border: Color::Indexed(5),       // Magenta
            accent_fg: Color::Indexed(13),   // LightMagenta
            title_rainbow: [
                Color::Indexed(13),
                Color::Indexed(5),
                Color::Indexed(12),
                Color::Indexed(14),
                Color::Indexed(10),
                Color::Indexed(11),
            ],
            toggle_fg: Color::Indexed(11),          // LightYellow
            button_fg: Color::Indexed(15),          // White
            button_border: Color::Indexed(13),      // LightMagenta
            button_disabled_fg: Color::Indexed(8),  // DarkGray
            placeholder_fg: Color::Indexed(5),      // Magenta
            star_lit_fg: Color::Indexed(15),        // White
            star_dim_fg: Color::Indexed(8),         // DarkGray
            badge_fg: Color::Indexed(11),           // LightYellow
            badge_bg: Color::Indexed(5),            // Magenta
            statement_fg: Color::Indexed(13),       // LightMagenta
            pros_heading_fg: Color::Indexed(10),    // LightGreen
            pros_fg: Color::Indexed(2),             // Green
            cons_heading_fg: Color::Indexed(9),     // LightRed
            cons_fg: Color::Indexed(1),             // Red
        }
    }

    pub fn basic_light() -> Self {
        Self {
            background: Color::Indexed(15),
            foreground: Color::Indexed(0),      // Black
            muted_fg: Color::Indexed(8),        // DarkGray
            border: Color::Indexed(5),          // Magenta
            accent_fg: Color::Indexed(4),       // Blue
            title_rainbow: [
                Color::Indexed(5),
                Color::Indexed(4),
                Color::Indexed(6),
                Color::Indexed(2),
                Color::Indexed(3),
                Color::Indexed(1),
            ],
            toggle_fg: Color::Indexed(4),           // Blue
            button_fg: Color::Indexed(5),           // Magenta
            button_border: Color::Indexed(5),       // Magenta
            button_disabled_fg: Color::Indexed(7),  // Gray
            placeholder_fg: Color::Indexed(8),      // DarkGray
            star_lit_fg: Color::Indexed(4),         // Blue
            star_dim_fg: Color::Indexed(7),         // Gray
            badge_fg: Color::Indexed(15),           // White
            badge_bg: Color::Indexed(5),            // Magenta
            statement_fg: Color::Indexed(5),        // Magenta
            pros_heading_fg: Color::Indexed(2),     // Green
            pros_fg: Color::Indexed(2),             // Green
            cons_heading_fg: Color::Indexed(1),     // Red
            cons_fg: Color::Indexed(1),             // Red
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::cosmic_dark()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
