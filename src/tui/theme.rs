//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const INDEX_COLOR: Color = Color::DarkGray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;
pub const BAR_FILLED: Color = Color::Yellow;
pub const BAR_EMPTY: Color = Color::DarkGray;
pub const DISABLED_CELL: Color = Color::DarkGray;
pub const VALID_STATUS: Color = Color::Green;
pub const INVALID_STATUS: Color = Color::Red;

pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
pub const CELL_SELECTED: Style = Style::new()
    .add_modifier(Modifier::REVERSED)
    .add_modifier(Modifier::BOLD);
