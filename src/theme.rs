//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Accent colors are chosen to read well on both the dark and light base,
//! so only the base colors switch with `Mode`.

use ratatui::style::{Color, Modifier, Style};

/// Base palette mode, toggled with Ctrl+D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    /// Pane background
    pub fn bg(self) -> Color {
        match self {
            Mode::Dark => Color::Rgb(24, 26, 32),
            Mode::Light => Color::Rgb(246, 246, 240),
        }
    }

    /// Default text
    pub fn text(self) -> Color {
        match self {
            Mode::Dark => Color::Rgb(228, 230, 235),
            Mode::Light => Color::Rgb(40, 42, 50),
        }
    }

    /// Secondary text (hints, labels)
    pub fn text_dim(self) -> Color {
        match self {
            Mode::Dark => Color::Rgb(120, 124, 140),
            Mode::Light => Color::Rgb(140, 140, 150),
        }
    }
}

/// Core accent palette shared across components.
pub mod palette {
    use super::*;

    pub const SUCCESS: Color = Color::Rgb(110, 200, 120);
    pub const WARNING: Color = Color::Rgb(250, 210, 80);
    pub const ERROR: Color = Color::Rgb(222, 105, 115);
    pub const ACCENT: Color = Color::Rgb(80, 180, 240);
    pub const ACCENT_ALT: Color = Color::Rgb(190, 140, 240);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Chat input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::ACCENT;
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(100, 104, 120);
    pub const BORDER_DISABLED: Color = Color::Rgb(80, 82, 95);
    pub const DISABLED_HINT: Color = Color::Rgb(120, 124, 140);
}

/// Transcript pane styles
pub mod transcript {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::ACCENT;
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(100, 104, 120);

    pub const USER_LABEL: Color = palette::ACCENT;
    pub const BOT_LABEL: Color = palette::ACCENT_ALT;
    pub const TYPING: Color = Color::Rgb(120, 124, 140);
    pub const COPIED_FLASH: Color = palette::SUCCESS;
    pub const SELECTED_MARKER: Color = palette::WARNING;
}

/// Connection modal styles
pub mod connect {
    use super::*;

    pub const BORDER: Color = palette::ACCENT_ALT;
    pub const FIELD_FOCUSED: Color = palette::ACCENT;
    pub const FIELD_UNFOCUSED: Color = Color::Rgb(100, 104, 120);
    pub const FIELD_DISABLED: Color = Color::Rgb(70, 72, 85);
    pub const STATUS_INFO: Color = palette::ACCENT;
    pub const STATUS_ERROR: Color = palette::ERROR;
}

/// Suggestion popup styles
pub mod suggest {
    use super::*;

    pub const BORDER: Color = Color::Rgb(100, 104, 120);
    pub const BACKGROUND: Color = Color::Rgb(32, 34, 44);
    pub const ITEM_NORMAL: Color = Color::Rgb(200, 203, 212);
    pub const ITEM_SELECTED_FG: Color = Color::Rgb(24, 26, 32);
    pub const ITEM_SELECTED_BG: Color = palette::ACCENT;
}

/// Help line styles
pub mod help {
    use super::*;

    pub const KEY: Color = palette::ACCENT;
    pub const TEXT: Color = Color::Rgb(120, 124, 140);
}
