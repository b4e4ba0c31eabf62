//! Routes menu selections to the overlay's consumer and decides dismissal.

use super::intent::OverlayIntent;
use super::menu::{MenuItem, MenuItemMeta, SelectEvent, SelectionSink};

/// Consumer callback: `(event, menu_index, item)`.
pub type OnSelect = dyn FnMut(&SelectEvent, usize, &MenuItem);

/// Sink handed to a menu for the duration of one input event.
///
/// The consumer callback runs first; the dismissal decision is only
/// recorded, and the container applies it once the menu call returns.
pub struct SelectionDispatcher<'a> {
    callback: Option<&'a mut OnSelect>,
    decision: Option<MenuItemMeta>,
}

impl<'a> SelectionDispatcher<'a> {
    pub fn new(callback: Option<&'a mut OnSelect>) -> Self {
        Self {
            callback,
            decision: None,
        }
    }

    /// The intent to apply for the last selection, if any.
    pub fn into_intent(self) -> Option<OverlayIntent> {
        self.decision.map(OverlayIntent::Select)
    }
}

impl SelectionSink for SelectionDispatcher<'_> {
    fn on_select(&mut self, event: &SelectEvent, menu_index: usize, item: &MenuItem) {
        if let Some(callback) = self.callback.as_deref_mut() {
            callback(event, menu_index, item);
        }

        let meta = item.meta();
        tracing::debug!(
            label = %item.label(),
            menu_index,
            has_children = meta.has_children,
            keep_open = meta.keep_open,
            "Menu item selected"
        );
        self.decision = Some(meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event() -> SelectEvent {
        SelectEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn no_selection_means_no_intent() {
        assert_eq!(SelectionDispatcher::new(None).into_intent(), None);
    }

    #[test]
    fn forwards_to_callback_and_records_meta() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callback: Box<OnSelect> = Box::new(move |_: &SelectEvent, index: usize, item: &MenuItem| {
            sink.borrow_mut().push((index, item.label().to_string()));
        });

        let mut dispatcher = SelectionDispatcher::new(Some(callback.as_mut()));
        dispatcher.on_select(&event(), 2, &MenuItem::new("Settings").keep_open());
        let intent = dispatcher.into_intent();

        assert_eq!(*seen.borrow(), vec![(2, "Settings".to_string())]);
        assert_eq!(
            intent,
            Some(OverlayIntent::Select(MenuItemMeta {
                has_children: false,
                keep_open: true,
            }))
        );
    }

    #[test]
    fn works_without_callback() {
        let mut dispatcher = SelectionDispatcher::new(None);
        dispatcher.on_select(&event(), 0, &MenuItem::new("Settings"));
        assert_eq!(
            dispatcher.into_intent(),
            Some(OverlayIntent::Select(MenuItemMeta::default()))
        );
    }
}
