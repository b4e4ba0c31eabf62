//! Marker trait for widget intents.

/// A request to change widget state.
///
/// Intents come from user input (a trigger click, Esc, a menu selection)
/// or from the embedding application (an explicit close).
pub trait Intent: Send + 'static {}
