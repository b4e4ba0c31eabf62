//! Open/closed state of a menu overlay.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl UiState for OverlayState {}

impl OverlayState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
