//! Trigger-anchored popup container hosting menu content.
//!
//! # Architecture
//!
//! - `state.rs` / `intent.rs` / `reducer.rs` - Open/closed state machine
//! - `menu.rs` - Menu items, nested navigation and the selection sink trait
//! - `child.rs` - The two accepted child kinds and their validation
//! - `dispatcher.rs` - Consumer notification and auto-close decision
//! - `primitive.rs` - Positioned overlay contract
//! - `trigger.rs` - Trigger button and the anchor handle it produces
//! - `container.rs` - `MenuOverlay`, which wires the above together
//! - `spec.rs` - Serde description of an overlay

mod child;
mod container;
mod dispatcher;
mod error;
mod intent;
mod menu;
mod primitive;
mod reducer;
mod spec;
mod state;
mod trigger;

pub use child::{verify_children, ChildTag, OverlayChild};
pub use container::MenuOverlay;
pub use dispatcher::{OnSelect, SelectionDispatcher};
pub use error::OverlayError;
pub use intent::OverlayIntent;
pub use menu::{
    Menu, MenuContent, MenuItem, MenuItemMeta, MenuRow, RowHit, SelectEvent, SelectionSink,
};
pub use primitive::{Direction, OverlayPrimitive, OverlayProps, OverlaySignal};
pub use reducer::OverlayReducer;
pub use spec::{ChildSpec, ItemSpec, OverlaySpec};
pub use state::OverlayState;
pub use trigger::{AnchorHandle, MenuTrigger};
