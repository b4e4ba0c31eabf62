use crate::ui::theme::{MUTED_TEXT, PANEL_BORDER, PANEL_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const IDLE_KEYS: &[(&str, &str)] = &[
    ("1", "Person"),
    ("2", "Device"),
    ("3", "Number"),
    ("4", "With devices"),
    ("m", "Menu"),
    ("q", "Quit"),
];

const MENU_KEYS: &[(&str, &str)] = &[
    ("↑↓", "Move"),
    ("→", "Open"),
    ("←", "Back"),
    ("Enter", "Select"),
    ("Tab", "Next menu"),
    ("Esc", "Close"),
];

/// Key hints for whichever widget currently owns the keyboard.
pub struct Footer {
    menu_open: bool,
}

impl Footer {
    pub fn new(menu_open: bool) -> Self {
        Self { menu_open }
    }

    fn keys(&self) -> &'static [(&'static str, &'static str)] {
        if self.menu_open {
            MENU_KEYS
        } else {
            IDLE_KEYS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(PANEL_TEXT).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.keys().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let padding = usize::from(area.width.saturating_sub(2))
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, label_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
    }
}
