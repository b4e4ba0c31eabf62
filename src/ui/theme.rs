use ratatui::style::Color;

pub const PANEL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACCEPT_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const REJECT_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const AVATAR_BG: Color = Color::Rgb(0x07, 0x8a, 0xc4);
