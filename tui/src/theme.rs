//! Color theme and glyphs for the journey screen.
//!
//! Warm dusk palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use tapjourney_engine::UiOptions;

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(18, 18, 26);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_POPUP: Color = Color::Rgb(54, 54, 70);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184);
    pub const BORDER: Color = Color::Rgb(84, 84, 109);
    pub const BUTTON_TAP: Color = Color::Rgb(128, 128, 128);
    pub const BUTTON_GIVE_UP: Color = Color::Rgb(200, 50, 50);
    pub const PEACH: Color = Color::Rgb(255, 160, 102);
    pub const GOLD: Color = Color::Rgb(230, 195, 132);

    // === Stage tints: from cold night to warm light ===
    pub const STAGE_COLD: Color = Color::Rgb(126, 156, 216);
    pub const STAGE_WARMING: Color = Color::Rgb(210, 126, 153);
    pub const STAGE_WARM: Color = Color::Rgb(255, 160, 102);
    pub const STAGE_TRIUMPH: Color = Color::Rgb(230, 195, 132);
    pub const STAGE_GAVE_UP: Color = Color::Rgb(114, 113, 105);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub border: Color,
    pub button_tap: Color,
    pub button_give_up: Color,
    pub peach: Color,
    pub gold: Color,
    pub stage_cold: Color,
    pub stage_warming: Color,
    pub stage_warm: Color,
    pub stage_triumph: Color,
    pub stage_gave_up: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_popup: colors::BG_POPUP,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            border: colors::BORDER,
            button_tap: colors::BUTTON_TAP,
            button_give_up: colors::BUTTON_GIVE_UP,
            peach: colors::PEACH,
            gold: colors::GOLD,
            stage_cold: colors::STAGE_COLD,
            stage_warming: colors::STAGE_WARMING,
            stage_warm: colors::STAGE_WARM,
            stage_triumph: colors::STAGE_TRIUMPH,
            stage_gave_up: colors::STAGE_GAVE_UP,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_popup: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            border: Color::White,
            button_tap: Color::Gray,
            button_give_up: Color::Red,
            peach: Color::Yellow,
            gold: Color::Yellow,
            stage_cold: Color::Cyan,
            stage_warming: Color::Magenta,
            stage_warm: Color::Yellow,
            stage_triumph: Color::Yellow,
            stage_gave_up: Color::Gray,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub border: BorderType,
    pub divider: &'static str,
    pub bullet: &'static str,
    pub waiting: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            border: BorderType::Plain,
            divider: "-",
            bullet: "*",
            waiting: "...",
        }
    } else {
        Glyphs {
            border: BorderType::Rounded,
            divider: "─",
            bullet: "•",
            waiting: "⏳",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(fill: ratatui::style::Color, palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(fill)
            .add_modifier(Modifier::BOLD)
    }
}
