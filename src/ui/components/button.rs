//! Single-row bracketed button.

use crate::ui::theme::PANEL_TEXT;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Single-row button drawn as `[ label ]`.
///
/// Rendering returns the rectangle the button occupies so callers can
/// hit-test pointer input against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    aria_label: Option<String>,
    color: Color,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            aria_label: None,
            color: PANEL_TEXT,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text announced for the button; falls back to the visible label.
    pub fn accessible_label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.label.chars().count() + 4).unwrap_or(u16::MAX)
    }

    /// Draw at the top-left corner of `area`, clipped to it.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let rect = Rect {
            x: area.x,
            y: area.y,
            width: self.width().min(area.width),
            height: area.height.min(1),
        };
        if rect.is_empty() {
            return rect;
        }

        let style = Style::default().fg(self.color).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled(format!("[ {} ]", self.label), style)]);
        frame.render_widget(Paragraph::new(line), rect);
        rect
    }
}
