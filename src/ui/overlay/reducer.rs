//! Reducer for the menu overlay.

use crate::ui::mvi::Reducer;

use super::intent::OverlayIntent;
use super::state::OverlayState;

pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverlayIntent::ToggleRequested => match state {
                OverlayState::Closed => OverlayState::Open,
                OverlayState::Open => OverlayState::Closed,
            },

            OverlayIntent::OutsideInteraction | OverlayIntent::ExplicitClose => {
                OverlayState::Closed
            }

            OverlayIntent::Select(meta) if state.is_open() && meta.closes_overlay() => {
                OverlayState::Closed
            }

            OverlayIntent::Select(_) => state,
        }
    }
}
