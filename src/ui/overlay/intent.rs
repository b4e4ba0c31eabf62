//! Intents for the menu overlay.

use crate::ui::mvi::Intent;

use super::menu::MenuItemMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayIntent {
    /// Trigger clicked.
    ToggleRequested,

    /// Pointer press or Esc outside the overlay, reported by the primitive.
    OutsideInteraction,

    /// An item was selected; its flags decide whether the overlay closes.
    Select(MenuItemMeta),

    /// Close requested by the embedding application.
    ExplicitClose,
}

impl Intent for OverlayIntent {}
