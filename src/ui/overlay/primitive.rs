//! Contract for the positioned overlay the menu container renders into.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::Event;
use ratatui::layout::{Rect, Size};
use ratatui::Frame;
use serde::{Deserialize, Serialize};

use super::error::OverlayError;
use super::trigger::AnchorHandle;

/// Where the overlay body sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    BottomLeft,
    BottomCenter,
    BottomRight,
    LeftCenter,
    RightCenter,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::LeftCenter => "left-center",
            Self::RightCenter => "right-center",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = OverlayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "top-left" => Ok(Self::TopLeft),
            "top-center" => Ok(Self::TopCenter),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-center" => Ok(Self::BottomCenter),
            "bottom-right" => Ok(Self::BottomRight),
            "left-center" => Ok(Self::LeftCenter),
            "right-center" => Ok(Self::RightCenter),
            other => Err(OverlayError::UnknownDirection(other.to_string())),
        }
    }
}

/// Everything the container hands to the primitive, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayProps<'a> {
    pub is_open: bool,
    pub anchor: Option<AnchorHandle>,
    pub allow_click_away: bool,
    pub direction: Direction,
    pub show_arrow: bool,
    /// Pass-through options the container does not interpret.
    pub extra: &'a BTreeMap<String, String>,
}

/// Requests the primitive sends back to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySignal {
    Close,
}

/// Positioned overlay capability.
///
/// Implementations place and frame the overlay body relative to the
/// anchor and classify input against the rendered region. They own no
/// open/closed state; the container does.
pub trait OverlayPrimitive {
    /// Rectangle for a body of `content` size, within `area`.
    fn place(&self, props: &OverlayProps<'_>, content: Size, area: Rect) -> Rect;

    /// Draw the frame (and arrow) around `region`; returns the inner area.
    fn render_frame(&self, frame: &mut Frame, props: &OverlayProps<'_>, region: Rect) -> Rect;

    /// `Some(Close)` when `event` is an interaction outside `region` and
    /// click-away is allowed.
    fn interaction(
        &self,
        props: &OverlayProps<'_>,
        region: Rect,
        event: &Event,
    ) -> Option<OverlaySignal>;
}
