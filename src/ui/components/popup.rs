//! Bordered popup frame.

use crate::ui::theme::POPUP_BORDER;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

/// Cleared, bordered frame for panels drawn above other content.
pub struct PopupFrame<'a> {
    title: &'a str,
    border: Color,
}

impl<'a> PopupFrame<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            border: POPUP_BORDER,
        }
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Draw the frame and return the area inside the borders.
    pub fn render(self, frame: &mut Frame, area: Rect) -> Rect {
        frame.render_widget(Clear, area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        if !self.title.is_empty() {
            block = block
                .title(format!(" {} ", self.title))
                .title_alignment(Alignment::Left);
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}
