//! Stateless building blocks the widgets render with.
//!
//! - `button.rs` - Labelled button that reports its drawn area
//! - `avatar.rs` - Caller identity glyph
//! - `popup.rs` - Bordered, cleared frame for floating panels
//! - `event_overlay.rs` - Default anchored overlay primitive

mod avatar;
mod button;
mod event_overlay;
mod popup;

pub use avatar::{initials, AvatarGlyph, AVATAR_WIDTH};
pub use button::Button;
pub use event_overlay::EventOverlay;
pub use popup::PopupFrame;
