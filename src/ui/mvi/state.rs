//! Marker trait for widget state.

/// State owned by a single widget instance.
///
/// `Default` is the state at mount time.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
