//! The menu overlay widget: trigger, open/closed state and hosted children.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};
use ratatui::Frame;

use crate::ui::components::{Button, EventOverlay};
use crate::ui::mvi::transition;

use super::child::{verify_children, OverlayChild};
use super::dispatcher::{OnSelect, SelectionDispatcher};
use super::error::OverlayError;
use super::intent::OverlayIntent;
use super::menu::{Menu, MenuItem, MenuRow, SelectEvent, SelectionSink};
use super::primitive::{Direction, OverlayPrimitive, OverlayProps, OverlaySignal};
use super::reducer::OverlayReducer;
use super::spec::OverlaySpec;
use super::state::OverlayState;
use super::trigger::{AnchorHandle, MenuTrigger};

/// Row of a hosted menu as last drawn.
#[derive(Debug, Clone, Copy)]
struct MenuHit {
    area: Rect,
    /// Position among the menu children.
    menu: usize,
    row: MenuRow,
}

/// Popup container anchored to a trigger button.
///
/// Hosts [`Menu`] and [`MenuContent`](super::MenuContent) children only.
/// Selecting a leaf item closes the overlay unless the item is marked
/// keep-open; selecting an item with children opens its submenu instead.
pub struct MenuOverlay {
    trigger: MenuTrigger,
    children: Vec<OverlayChild>,
    state: OverlayState,
    direction: Direction,
    show_arrow: bool,
    extra: BTreeMap<String, String>,
    on_select: Option<Box<OnSelect>>,
    primitive: Box<dyn OverlayPrimitive>,
    anchor: Option<AnchorHandle>,
    region: Option<Rect>,
    rows: Vec<MenuHit>,
    active_menu: usize,
}

impl MenuOverlay {
    pub fn new(trigger: impl Into<MenuTrigger>, children: Vec<OverlayChild>) -> Self {
        Self {
            trigger: trigger.into(),
            children,
            state: OverlayState::default(),
            direction: Direction::default(),
            show_arrow: true,
            extra: BTreeMap::new(),
            on_select: None,
            primitive: Box::new(EventOverlay::new()),
            anchor: None,
            region: None,
            rows: Vec::new(),
            active_menu: 0,
        }
    }

    /// Build from a declarative description.
    ///
    /// Every child kind is checked here, once; an overlay with a child that
    /// is neither a menu nor content is never constructed.
    pub fn from_spec(spec: &OverlaySpec) -> Result<Self, OverlayError> {
        let children = verify_children(&spec.children)?;
        Ok(Self::new(Button::new(&spec.trigger), children)
            .direction(spec.direction)
            .show_arrow(spec.show_arrow)
            .extra(spec.extra.clone()))
    }

    pub fn on_select(
        mut self,
        callback: impl FnMut(&SelectEvent, usize, &MenuItem) + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn show_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }

    pub fn extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    pub fn with_primitive(mut self, primitive: impl OverlayPrimitive + 'static) -> Self {
        self.primitive = Box::new(primitive);
        self
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn trigger(&self) -> &MenuTrigger {
        &self.trigger
    }

    /// Trigger position from the last render.
    pub fn anchor(&self) -> Option<AnchorHandle> {
        self.anchor
    }

    /// Overlay body position from the last render while open.
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    pub fn children(&self) -> &[OverlayChild] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<OverlayChild>) {
        self.children = children;
        self.active_menu = 0;
        self.rows.clear();
    }

    pub fn props(&self) -> OverlayProps<'_> {
        OverlayProps {
            is_open: self.is_open(),
            anchor: self.anchor,
            allow_click_away: true,
            direction: self.direction,
            show_arrow: self.show_arrow,
            extra: &self.extra,
        }
    }

    /// Same as clicking the trigger.
    pub fn toggle(&mut self) {
        self.apply(OverlayIntent::ToggleRequested);
    }

    pub fn close(&mut self) {
        self.apply(OverlayIntent::ExplicitClose);
    }

    /// Keyboard input while open. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press || !self.is_open() {
            return false;
        }
        if self.signal(&Event::Key(key)) {
            return true;
        }

        let active = self.active_menu;
        match key.code {
            KeyCode::Up => self.with_menu(active, |menu, _| {
                menu.focus_prev();
                true
            }),
            KeyCode::Down => self.with_menu(active, |menu, _| {
                menu.focus_next();
                true
            }),
            KeyCode::Enter | KeyCode::Char(' ') => self.with_menu(active, |menu, sink| {
                menu.activate(SelectEvent::Key(key), sink)
            }),
            KeyCode::Right => self.with_menu(active, |menu, sink| {
                menu.open_focused(SelectEvent::Key(key), sink)
            }),
            KeyCode::Left | KeyCode::Backspace => self.with_menu(active, |menu, _| menu.back()),
            KeyCode::Tab => {
                let menus = self.menu_count();
                if menus > 1 {
                    self.active_menu = (self.active_menu + 1) % menus;
                }
                menus > 0
            }
            _ => false,
        }
    }

    /// Pointer input. Returns whether the event changed anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let MouseEventKind::Down(button) = mouse.kind else {
            return false;
        };
        let position = Position::new(mouse.column, mouse.row);

        if button == MouseButton::Left {
            if self.anchor.is_some_and(|anchor| anchor.contains(position)) {
                return self.apply(OverlayIntent::ToggleRequested);
            }

            let hit = self
                .rows
                .iter()
                .find(|hit| hit.area.contains(position))
                .copied();
            if let Some(hit) = hit.filter(|_| self.is_open()) {
                self.active_menu = hit.menu;
                return match hit.row {
                    MenuRow::Item(index) => self.with_menu(hit.menu, |menu, sink| {
                        menu.select_at(index, SelectEvent::Mouse(mouse), sink)
                    }),
                    MenuRow::Back => self.with_menu(hit.menu, |menu, _| menu.back()),
                };
            }
        }

        self.is_open() && self.signal(&Event::Mouse(mouse))
    }

    /// Draw the trigger at the top-left of `area` and, while open, the
    /// overlay body positioned by the primitive within the whole frame.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.anchor = Some(self.trigger.render(frame, area));
        self.rows.clear();
        if !self.is_open() {
            self.region = None;
            return;
        }

        let content = self.content_size();
        let props = self.props();
        let region = self.primitive.place(&props, content, frame.area());
        let inner = self.primitive.render_frame(frame, &props, region);

        let mut rows = Vec::new();
        let mut y = inner.y;
        let mut menu_position = 0;
        for child in &self.children {
            if y >= inner.bottom() {
                break;
            }
            let height = child.height().min(inner.bottom() - y);
            if height == 0 {
                menu_position += usize::from(child.as_menu().is_some());
                continue;
            }
            let child_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            match child {
                OverlayChild::Content(content) => content.render(frame, child_area),
                OverlayChild::Menu(menu) => {
                    let active = menu_position == self.active_menu;
                    rows.extend(menu.render(frame, child_area, active).into_iter().map(|hit| {
                        MenuHit {
                            area: hit.area,
                            menu: menu_position,
                            row: hit.row,
                        }
                    }));
                    menu_position += 1;
                }
            }
            y += height;
        }

        self.region = Some(region);
        self.rows = rows;
    }

    fn content_size(&self) -> Size {
        let width = self
            .children
            .iter()
            .map(OverlayChild::width)
            .max()
            .unwrap_or(0)
            .max(self.trigger.button().width());
        let height = self
            .children
            .iter()
            .map(OverlayChild::height)
            .fold(0u16, u16::saturating_add)
            .max(1);
        Size::new(width, height)
    }

    fn menu_count(&self) -> usize {
        self.children
            .iter()
            .filter(|child| child.as_menu().is_some())
            .count()
    }

    /// Run `f` against the `position`-th hosted menu with a dispatcher wired
    /// to the consumer callback, then apply the dispatcher's decision.
    fn with_menu<F>(&mut self, position: usize, f: F) -> bool
    where
        F: FnOnce(&mut Menu, &mut dyn SelectionSink) -> bool,
    {
        let Some(menu) = self
            .children
            .iter_mut()
            .filter_map(OverlayChild::as_menu_mut)
            .nth(position)
        else {
            return false;
        };

        let mut dispatcher = SelectionDispatcher::new(self.on_select.as_deref_mut());
        let handled = f(menu, &mut dispatcher);
        if let Some(intent) = dispatcher.into_intent() {
            self.apply(intent);
        }
        handled
    }

    /// Ask the primitive whether `event` dismisses the overlay.
    fn signal(&mut self, event: &Event) -> bool {
        let region = self.region.unwrap_or_default();
        let signal = self.primitive.interaction(&self.props(), region, event);
        match signal {
            Some(OverlaySignal::Close) => self.apply(OverlayIntent::OutsideInteraction),
            None => false,
        }
    }

    fn apply(&mut self, intent: OverlayIntent) -> bool {
        let was_open = self.is_open();
        let changed = transition::<OverlayReducer>(&mut self.state, intent);
        if changed {
            tracing::debug!(?intent, open = self.is_open(), "Menu overlay transition");
        }
        if was_open && !self.is_open() {
            self.collapse();
        }
        changed
    }

    fn collapse(&mut self) {
        for menu in self.children.iter_mut().filter_map(OverlayChild::as_menu_mut) {
            menu.reset();
        }
        self.region = None;
        self.rows.clear();
        self.active_menu = 0;
    }
}
