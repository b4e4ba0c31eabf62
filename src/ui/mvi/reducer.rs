//! Reducer trait and the transition helper widgets dispatch through.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Runs `R` over the state stored in `slot` and reports whether it changed.
pub fn transition<R: Reducer>(slot: &mut R::State, intent: R::Intent) -> bool {
    let previous = slot.clone();
    *slot = R::reduce(std::mem::take(slot), intent);
    *slot != previous
}
