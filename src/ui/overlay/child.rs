//! The two kinds of content an overlay may host, and the check that
//! enforces it for overlays described as data.

use super::error::OverlayError;
use super::menu::{Menu, MenuContent, MenuItem};
use super::spec::ChildSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildTag {
    Content,
    Menu,
}

impl ChildTag {
    /// Resolve a declared kind. Accepts `content`/`menu` and the widget
    /// names `MenuContent`/`Menu`, case-insensitively.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "content" | "menucontent" | "menu-content" => Some(Self::Content),
            "menu" => Some(Self::Menu),
            _ => None,
        }
    }
}

/// A direct child of a [`MenuOverlay`](super::MenuOverlay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayChild {
    Content(MenuContent),
    Menu(Menu),
}

impl OverlayChild {
    pub fn tag(&self) -> ChildTag {
        match self {
            Self::Content(_) => ChildTag::Content,
            Self::Menu(_) => ChildTag::Menu,
        }
    }

    pub fn as_menu(&self) -> Option<&Menu> {
        match self {
            Self::Menu(menu) => Some(menu),
            Self::Content(_) => None,
        }
    }

    pub fn as_menu_mut(&mut self) -> Option<&mut Menu> {
        match self {
            Self::Menu(menu) => Some(menu),
            Self::Content(_) => None,
        }
    }

    pub fn width(&self) -> u16 {
        match self {
            Self::Content(content) => content.width(),
            Self::Menu(menu) => menu.width(),
        }
    }

    pub fn height(&self) -> u16 {
        match self {
            Self::Content(content) => content.height(),
            Self::Menu(menu) => menu.height(),
        }
    }

    fn from_spec(index: usize, spec: &ChildSpec) -> Result<Self, OverlayError> {
        match ChildTag::parse(&spec.kind) {
            Some(ChildTag::Content) => Ok(Self::Content(MenuContent::new(&spec.text))),
            Some(ChildTag::Menu) => Ok(Self::Menu(Menu::new(
                spec.items.iter().map(MenuItem::from),
            ))),
            None => Err(OverlayError::InvalidChild {
                index,
                kind: spec.kind.clone(),
            }),
        }
    }
}

impl From<MenuContent> for OverlayChild {
    fn from(content: MenuContent) -> Self {
        Self::Content(content)
    }
}

impl From<Menu> for OverlayChild {
    fn from(menu: Menu) -> Self {
        Self::Menu(menu)
    }
}

/// Resolve every declared child, failing on the first one that is neither
/// menu nor content.
pub fn verify_children(specs: &[ChildSpec]) -> Result<Vec<OverlayChild>, OverlayError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| OverlayChild::from_spec(index, spec))
        .collect()
}
