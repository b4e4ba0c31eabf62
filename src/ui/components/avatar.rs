//! Caller avatar glyph.

use crate::ui::theme::{AVATAR_BG, PANEL_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Width of the rendered glyph badge.
pub const AVATAR_WIDTH: u16 = 4;

/// What the caller badge shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarGlyph {
    /// Initials taken from a display title.
    Initials(String),
    /// Bare phone number caller.
    Number,
    /// Room system or other device caller.
    Device,
    /// Caller-supplied override.
    Custom(String),
}

impl AvatarGlyph {
    pub fn from_title(title: &str) -> Self {
        Self::Initials(initials(title))
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Initials(text) | Self::Custom(text) => text,
            Self::Number => "#",
            Self::Device => "▣",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = Rect {
            width: area.width.min(AVATAR_WIDTH),
            height: area.height.min(1),
            ..area
        };
        let style = Style::default()
            .fg(PANEL_TEXT)
            .bg(AVATAR_BG)
            .add_modifier(Modifier::BOLD);
        let badge = format!("{:^width$}", self.symbol(), width = AVATAR_WIDTH as usize);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(badge, style))), rect);
    }
}

/// Up to two uppercase initials, one per word. `?` when nothing usable.
pub fn initials(title: &str) -> String {
    let letters: String = title
        .split_whitespace()
        .filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}
