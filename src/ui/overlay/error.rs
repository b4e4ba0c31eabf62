//! Construction errors for the menu overlay.

use thiserror::Error;

/// Errors raised while building a menu overlay.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// A child was neither a menu nor menu content. Raised once, before the
    /// overlay is constructed; the overlay never renders.
    #[error("MenuOverlay should only contain Menu or MenuContent as children (child {index} is '{kind}')")]
    InvalidChild { index: usize, kind: String },

    #[error("Unknown overlay direction '{0}'")]
    UnknownDirection(String),
}
