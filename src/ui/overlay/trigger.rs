//! The trigger button and the anchor handle it hands to the overlay.

use ratatui::layout::{Position, Rect};
use ratatui::Frame;

use crate::ui::components::Button;

/// Where the trigger was last drawn.
///
/// Produced by [`MenuTrigger::render`] and passed by value to the overlay
/// primitive; it is only valid until the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorHandle(Rect);

impl AnchorHandle {
    pub fn new(area: Rect) -> Self {
        Self(area)
    }

    pub fn area(self) -> Rect {
        self.0
    }

    pub fn contains(self, position: Position) -> bool {
        self.0.contains(position)
    }
}

/// The element whose click toggles the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTrigger {
    button: Button,
}

impl MenuTrigger {
    pub fn new(button: Button) -> Self {
        Self { button }
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> AnchorHandle {
        AnchorHandle(self.button.render(frame, area))
    }
}

impl From<Button> for MenuTrigger {
    fn from(button: Button) -> Self {
        Self::new(button)
    }
}
