//! Unidirectional state primitives shared by the widgets.
//!
//! ```text
//! input event ──→ Intent ──→ Reducer ──→ State ──→ render
//!      ↑                                              │
//!      └──────────────────────────────────────────────┘
//! ```
//!
//! Widgets translate terminal input into intents; the reducer is the only
//! place a widget's state changes. Rendering reads the state and never
//! mutates it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{transition, Reducer};
pub use state::UiState;
