//! Declarative overlay description, as loaded from configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::menu::MenuItem;
use super::primitive::Direction;

/// A menu overlay described as data.
///
/// Child kinds are plain strings here; they are checked when the overlay is
/// built with [`MenuOverlay::from_spec`](super::MenuOverlay::from_spec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySpec {
    /// Label of the trigger button.
    #[serde(default = "default_trigger")]
    pub trigger: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_show_arrow")]
    pub show_arrow: bool,
    /// Forwarded verbatim to the overlay primitive.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ChildSpec>,
}

/// One direct child of the overlay: `kind` is `"content"` or `"menu"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSpec {
    pub kind: String,
    /// Body of a content child.
    #[serde(default)]
    pub text: String,
    /// Items of a menu child.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemSpec {
    pub label: String,
    #[serde(default)]
    pub selected_value: Option<String>,
    #[serde(default)]
    pub keep_open: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub header: bool,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

fn default_trigger() -> String {
    "Show Menu".to_string()
}

fn default_show_arrow() -> bool {
    true
}

impl ChildSpec {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            kind: "content".to_string(),
            text: text.into(),
            items: Vec::new(),
        }
    }

    pub fn menu(items: Vec<ItemSpec>) -> Self {
        Self {
            kind: "menu".to_string(),
            text: String::new(),
            items,
        }
    }
}

impl ItemSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl From<&ItemSpec> for MenuItem {
    fn from(spec: &ItemSpec) -> Self {
        let mut item = MenuItem::new(&spec.label).children(spec.items.iter().map(MenuItem::from));
        if let Some(value) = &spec.selected_value {
            item = item.selected_value(value);
        }
        if spec.keep_open {
            item = item.keep_open();
        }
        if spec.disabled {
            item = item.disabled();
        }
        if spec.header {
            item = item.header();
        }
        item
    }
}

impl Default for OverlaySpec {
    /// Status, language and settings menu under a short content block.
    fn default() -> Self {
        let status = ItemSpec {
            selected_value: Some("Out of office until 2:00pm".to_string()),
            items: vec![
                ItemSpec {
                    header: true,
                    ..ItemSpec::new("Set Do Not Disturb:")
                },
                ItemSpec {
                    disabled: true,
                    ..ItemSpec::new("1 hour")
                },
                ItemSpec {
                    keep_open: true,
                    ..ItemSpec::new("5 hour")
                },
                ItemSpec {
                    keep_open: true,
                    ..ItemSpec::new("8 hour")
                },
            ],
            ..ItemSpec::new("Status")
        };
        let language = ItemSpec {
            selected_value: Some("English".to_string()),
            items: vec![ItemSpec::new("English"), ItemSpec::new("Spanish")],
            ..ItemSpec::new("Language")
        };

        Self {
            trigger: default_trigger(),
            direction: Direction::default(),
            show_arrow: default_show_arrow(),
            extra: BTreeMap::new(),
            children: vec![
                ChildSpec::content("Content"),
                ChildSpec::menu(vec![status, language, ItemSpec::new("Settings")]),
            ],
        }
    }
}
