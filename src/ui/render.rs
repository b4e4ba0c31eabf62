use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, inset, layout_regions};
use crate::ui::theme::MUTED_TEXT;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (widgets, status) = body_regions(body);

    let header_widget = Header::new(app.alerts().len(), app.menu().is_open());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let status_line = Line::from(Span::styled(
        format!(" {}", app.status()),
        Style::default().fg(MUTED_TEXT),
    ));
    frame.render_widget(Paragraph::new(status_line), status);

    let footer_widget = Footer::new(app.menu().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    // Alerts first so an open menu is drawn above them.
    let (menu, alerts) = app.widgets_mut();
    alerts.render(frame, widgets);
    menu.render(frame, inset(widgets, 1));
}
