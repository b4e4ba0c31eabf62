use crate::ui::theme::{ACCEPT_GREEN, MUTED_TEXT, PANEL_BORDER, PANEL_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    alerts: usize,
    menu_open: bool,
}

impl Header {
    pub fn new(alerts: usize, menu_open: bool) -> Self {
        Self { alerts, menu_open }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(PANEL_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let status_style = Style::default().fg(ACCEPT_GREEN);
        let menu = if self.menu_open { "open" } else { "closed" };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled("callkit", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("alerts: {}", self.alerts), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("menu: {menu}"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
    }
}
