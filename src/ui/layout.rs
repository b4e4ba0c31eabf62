use ratatui::layout::Rect;

/// Header, body and footer of the demo screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the widget area and a one-row status line at its bottom.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let status_height = body.height.min(1);
    let widgets = Rect {
        height: body.height - status_height,
        ..body
    };
    let status = Rect {
        y: body.bottom() - status_height,
        height: status_height,
        ..body
    };
    (widgets, status)
}

/// Shrink `area` by `margin` cells on every side.
pub fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin),
        width: area.width.saturating_sub(margin.saturating_mul(2)),
        height: area.height.saturating_sub(margin.saturating_mul(2)),
    }
}
