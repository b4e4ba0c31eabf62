//! Menu content hosted by the overlay.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT, PANEL_TEXT};

/// The input that caused a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Item flags read when deciding whether a selection dismisses the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuItemMeta {
    pub has_children: bool,
    pub keep_open: bool,
}

impl MenuItemMeta {
    /// Leaf items close the overlay unless they opt out.
    pub fn closes_overlay(self) -> bool {
        !self.has_children && !self.keep_open
    }
}

/// Receives selections from a menu.
///
/// Passed explicitly into [`Menu::activate`] and [`Menu::select_at`]; the
/// menu never holds on to it.
pub trait SelectionSink {
    fn on_select(&mut self, event: &SelectEvent, menu_index: usize, item: &MenuItem);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItem {
    label: String,
    selected_value: Option<String>,
    children: Vec<MenuItem>,
    keep_open: bool,
    disabled: bool,
    header: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Value shown next to the label, e.g. the current choice of a submenu.
    pub fn selected_value(mut self, value: impl Into<String>) -> Self {
        self.selected_value = Some(value.into());
        self
    }

    pub fn child(mut self, item: MenuItem) -> Self {
        self.children.push(item);
        self
    }

    pub fn children(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children.extend(items);
        self
    }

    /// Selecting this item leaves the overlay open.
    pub fn keep_open(mut self) -> Self {
        self.keep_open = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Non-selectable section label.
    pub fn header(mut self) -> Self {
        self.header = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_selectable(&self) -> bool {
        !self.disabled && !self.header
    }

    pub fn meta(&self) -> MenuItemMeta {
        MenuItemMeta {
            has_children: self.has_children(),
            keep_open: self.keep_open,
        }
    }

    fn display_width(&self) -> usize {
        let value = self.selected_value.as_deref().map_or(0, |v| v.chars().count() + 1);
        let own = self.label.chars().count() + value + 4;
        self.children
            .iter()
            .map(MenuItem::display_width)
            .fold(own, usize::max)
    }
}

/// A rendered menu row, for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    /// "Back to parent" row shown inside a submenu.
    Back,
    /// Item at this index of the current level.
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub area: Rect,
    pub row: MenuRow,
}

/// Nested menu with keyboard focus and submenu navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    /// Indices of the items whose submenus are open, outermost first.
    path: Vec<usize>,
    focused: usize,
}

impl Menu {
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut menu = Self {
            items: items.into_iter().collect(),
            path: Vec::new(),
            focused: 0,
        };
        menu.focused = menu.first_selectable();
        menu
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items at the currently open level.
    pub fn level_items(&self) -> &[MenuItem] {
        let mut items = self.items.as_slice();
        for &index in &self.path {
            match items.get(index) {
                Some(item) => items = item.items(),
                None => return &[],
            }
        }
        items
    }

    /// The item whose submenu is currently open.
    pub fn parent(&self) -> Option<&MenuItem> {
        let (&last, rest) = self.path.split_last()?;
        let mut items = self.items.as_slice();
        for &index in rest {
            items = items.get(index)?.items();
        }
        items.get(last)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.step(true);
    }

    pub fn focus_prev(&mut self) {
        self.step(false);
    }

    /// Select the focused item.
    pub fn activate(&mut self, event: SelectEvent, sink: &mut dyn SelectionSink) -> bool {
        self.select_at(self.focused, event, sink)
    }

    /// Open the focused item's submenu, notifying the sink as a selection.
    /// Leaf items are left alone.
    pub fn open_focused(&mut self, event: SelectEvent, sink: &mut dyn SelectionSink) -> bool {
        let opens = self
            .level_items()
            .get(self.focused)
            .is_some_and(MenuItem::has_children);
        opens && self.select_at(self.focused, event, sink)
    }

    /// Select the item at `index` of the current level.
    ///
    /// The sink is notified first; an item with children then opens its
    /// submenu. Headers and disabled items are ignored.
    pub fn select_at(
        &mut self,
        index: usize,
        event: SelectEvent,
        sink: &mut dyn SelectionSink,
    ) -> bool {
        let Some(item) = self.level_items().get(index) else {
            return false;
        };
        if !item.is_selectable() {
            return false;
        }

        sink.on_select(&event, index, item);

        if item.has_children() {
            self.path.push(index);
            self.focused = self.first_selectable();
        } else {
            self.focused = index;
        }
        true
    }

    /// Leave the open submenu. Returns false at the top level.
    pub fn back(&mut self) -> bool {
        match self.path.pop() {
            Some(index) => {
                self.focused = index;
                true
            }
            None => false,
        }
    }

    /// Collapse to the top level.
    pub fn reset(&mut self) {
        self.path.clear();
        self.focused = self.first_selectable();
    }

    pub fn width(&self) -> u16 {
        let widest = self
            .items
            .iter()
            .map(MenuItem::display_width)
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    pub fn height(&self) -> u16 {
        let rows = self.level_items().len() + usize::from(!self.path.is_empty());
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Draw the current level into `area` and return the visible rows.
    pub fn render(&self, frame: &mut Frame, area: Rect, active: bool) -> Vec<RowHit> {
        let mut rows = Vec::new();
        let mut lines = Vec::new();

        if let Some(parent) = self.parent() {
            rows.push(MenuRow::Back);
            lines.push(Line::from(Span::styled(
                format!(" ‹ {}", parent.label()),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            )));
        }

        let width = area.width as usize;
        for (index, item) in self.level_items().iter().enumerate() {
            rows.push(MenuRow::Item(index));
            lines.push(item_line(item, active && index == self.focused, width));
        }

        frame.render_widget(Paragraph::new(lines), area);

        rows.into_iter()
            .zip(area.y..area.bottom())
            .map(|(row, y)| RowHit {
                area: Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: 1,
                },
                row,
            })
            .collect()
    }

    fn first_selectable(&self) -> usize {
        self.level_items()
            .iter()
            .position(MenuItem::is_selectable)
            .unwrap_or(0)
    }

    fn step(&mut self, forward: bool) {
        let len = self.level_items().len();
        if len == 0 {
            return;
        }

        let mut index = self.focused;
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if self.level_items()[index].is_selectable() {
                self.focused = index;
                return;
            }
        }
    }
}

fn item_line(item: &MenuItem, focused: bool, width: usize) -> Line<'static> {
    let style = if item.header {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD)
    } else if item.disabled {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else if focused {
        Style::default()
            .fg(PANEL_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PANEL_TEXT)
    };

    let mut trailing = item.value().map(str::to_string).unwrap_or_default();
    if item.has_children() {
        trailing.push_str(" ›");
    }
    let label = format!(" {}", item.label());
    let padding = width
        .saturating_sub(label.chars().count())
        .saturating_sub(trailing.chars().count())
        .saturating_sub(1); // right margin

    Line::from(vec![
        Span::styled(label, style),
        Span::styled(" ".repeat(padding.max(1)), style),
        Span::styled(trailing, style.fg(MUTED_TEXT)),
        Span::styled(" ", style),
    ])
}

/// Free-form text block shown above or between menus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuContent {
    text: String,
}

impl MenuContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u16 {
        let widest = self
            .text
            .lines()
            .map(|line| line.chars().count() + 2)
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.text.lines().count().max(1)).unwrap_or(u16::MAX)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .text
            .lines()
            .map(|line| Line::from(Span::styled(format!(" {line}"), Style::default().fg(PANEL_TEXT))))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[derive(Default)]
    struct Recorder {
        selected: Vec<(usize, String)>,
    }

    impl SelectionSink for Recorder {
        fn on_select(&mut self, _event: &SelectEvent, menu_index: usize, item: &MenuItem) {
            self.selected.push((menu_index, item.label().to_string()));
        }
    }

    fn enter() -> SelectEvent {
        SelectEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn status_menu() -> Menu {
        Menu::new([
            MenuItem::new("Status")
                .selected_value("Out of office")
                .children([
                    MenuItem::new("Set Do Not Disturb:").header(),
                    MenuItem::new("1 hour").disabled(),
                    MenuItem::new("5 hour").keep_open(),
                    MenuItem::new("8 hour").keep_open(),
                ]),
            MenuItem::new("Settings"),
        ])
    }

    #[test]
    fn meta_defaults_to_closing_leaf() {
        let meta = MenuItem::new("Settings").meta();
        assert!(!meta.has_children);
        assert!(!meta.keep_open);
        assert!(meta.closes_overlay());
    }

    #[test]
    fn meta_reports_children_and_keep_open() {
        assert!(!MenuItem::new("a").child(MenuItem::new("b")).meta().closes_overlay());
        assert!(!MenuItem::new("a").keep_open().meta().closes_overlay());
    }

    #[test]
    fn selecting_parent_notifies_then_descends() {
        let mut menu = status_menu();
        let mut sink = Recorder::default();

        assert!(menu.activate(enter(), &mut sink));
        assert_eq!(sink.selected, vec![(0, "Status".to_string())]);
        assert_eq!(menu.depth(), 1);
        assert_eq!(menu.parent().map(MenuItem::label), Some("Status"));
        // header and disabled rows are skipped
        assert_eq!(menu.focused(), 2);
    }

    #[test]
    fn headers_and_disabled_items_do_not_dispatch() {
        let mut menu = status_menu();
        let mut sink = Recorder::default();
        menu.activate(enter(), &mut sink);
        sink.selected.clear();

        assert!(!menu.select_at(0, enter(), &mut sink));
        assert!(!menu.select_at(1, enter(), &mut sink));
        assert!(sink.selected.is_empty());
    }

    #[test]
    fn focus_wraps_and_skips_unselectable() {
        let mut menu = status_menu();
        let mut sink = Recorder::default();
        menu.activate(enter(), &mut sink);

        menu.focus_next();
        assert_eq!(menu.focused(), 3);
        menu.focus_next();
        assert_eq!(menu.focused(), 2);
        menu.focus_prev();
        assert_eq!(menu.focused(), 3);
    }

    #[test]
    fn back_and_reset_return_to_top_level() {
        let mut menu = status_menu();
        let mut sink = Recorder::default();
        menu.activate(enter(), &mut sink);

        assert!(menu.back());
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.focused(), 0);
        assert!(!menu.back());

        menu.activate(enter(), &mut sink);
        menu.reset();
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.level_items().len(), 2);
    }

    #[test]
    fn height_counts_back_row_in_submenu() {
        let mut menu = status_menu();
        assert_eq!(menu.height(), 2);
        menu.activate(enter(), &mut Recorder::default());
        assert_eq!(menu.height(), 5);
    }

    #[test]
    fn content_size_follows_text() {
        let content = MenuContent::new("Signed in\nas Jefe");
        assert_eq!(content.height(), 2);
        assert_eq!(content.width(), 11);
        assert_eq!(MenuContent::new("").height(), 1);
    }
}
