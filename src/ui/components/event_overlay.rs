//! Default overlay primitive driven by terminal events.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Style;
use ratatui::Frame;

use crate::ui::components::PopupFrame;
use crate::ui::overlay::{Direction, OverlayPrimitive, OverlayProps, OverlaySignal};
use crate::ui::theme::POPUP_BORDER;

/// Anchored overlay that closes on Esc or a press outside its region.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventOverlay;

impl EventOverlay {
    pub fn new() -> Self {
        Self
    }
}

impl OverlayPrimitive for EventOverlay {
    fn place(&self, props: &OverlayProps<'_>, content: Size, area: Rect) -> Rect {
        let width = content.width.saturating_add(2).min(area.width);
        let height = content.height.saturating_add(2).min(area.height);
        let gap = u16::from(props.show_arrow);

        let Some(anchor) = props.anchor.map(|anchor| anchor.area()) else {
            return clamp(
                Rect {
                    x: area.x + area.width.saturating_sub(width) / 2,
                    y: area.y + area.height.saturating_sub(height) / 2,
                    width,
                    height,
                },
                area,
            );
        };

        let center_x = (anchor.x + anchor.width / 2).saturating_sub(width / 2);
        let center_y = (anchor.y + anchor.height / 2).saturating_sub(height / 2);
        let below = anchor.bottom().saturating_add(gap);
        let above = anchor.y.saturating_sub(height.saturating_add(gap));

        let (x, y) = match props.direction {
            Direction::BottomLeft => (anchor.x, below),
            Direction::BottomCenter => (center_x, below),
            Direction::BottomRight => (anchor.right().saturating_sub(width), below),
            Direction::TopLeft => (anchor.x, above),
            Direction::TopCenter => (center_x, above),
            Direction::TopRight => (anchor.right().saturating_sub(width), above),
            Direction::LeftCenter => (anchor.x.saturating_sub(width.saturating_add(gap)), center_y),
            Direction::RightCenter => (anchor.right().saturating_add(gap), center_y),
        };

        clamp(
            Rect {
                x,
                y,
                width,
                height,
            },
            area,
        )
    }

    fn render_frame(&self, frame: &mut Frame, props: &OverlayProps<'_>, region: Rect) -> Rect {
        let title = props.extra.get("title").map(String::as_str).unwrap_or("");
        let inner = PopupFrame::new(title).border(POPUP_BORDER).render(frame, region);

        if props.show_arrow {
            if let Some((position, symbol)) = props
                .anchor
                .and_then(|anchor| arrow(props.direction, anchor.area(), region))
            {
                if let Some(cell) = frame.buffer_mut().cell_mut(position) {
                    cell.set_symbol(symbol).set_style(Style::default().fg(POPUP_BORDER));
                }
            }
        }

        inner
    }

    fn interaction(
        &self,
        props: &OverlayProps<'_>,
        region: Rect,
        event: &Event,
    ) -> Option<OverlaySignal> {
        if !props.is_open || !props.allow_click_away {
            return None;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc => {
                Some(OverlaySignal::Close)
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                let position = Position::new(mouse.column, mouse.row);
                let on_anchor = props.anchor.is_some_and(|anchor| anchor.contains(position));
                (!region.contains(position) && !on_anchor).then_some(OverlaySignal::Close)
            }
            _ => None,
        }
    }
}

/// Keep `rect` inside `area`; `rect` must already fit.
fn clamp(rect: Rect, area: Rect) -> Rect {
    Rect {
        x: rect.x.max(area.x).min(area.right().saturating_sub(rect.width)),
        y: rect.y.max(area.y).min(area.bottom().saturating_sub(rect.height)),
        ..rect
    }
}

/// Arrow cell between the anchor and the body, if there is room for one.
fn arrow(direction: Direction, anchor: Rect, region: Rect) -> Option<(Position, &'static str)> {
    if region.is_empty() {
        return None;
    }
    let anchor_x = (anchor.x + anchor.width / 2).clamp(region.x, region.right().saturating_sub(1));
    let anchor_y = (anchor.y + anchor.height / 2).clamp(region.y, region.bottom().saturating_sub(1));

    match direction {
        Direction::BottomLeft | Direction::BottomCenter | Direction::BottomRight => {
            (region.y > anchor.y).then(|| (Position::new(anchor_x, region.y - 1), "▲"))
        }
        Direction::TopLeft | Direction::TopCenter | Direction::TopRight => {
            (region.bottom() <= anchor.y).then(|| (Position::new(anchor_x, region.bottom()), "▼"))
        }
        Direction::LeftCenter => {
            (region.right() <= anchor.x).then(|| (Position::new(region.right(), anchor_y), "▶"))
        }
        Direction::RightCenter => {
            (region.x > anchor.right()).then(|| (Position::new(region.x - 1, anchor_y), "◀"))
        }
    }
}
