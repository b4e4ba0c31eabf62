//! Keyed alerts stacked from the bottom-right corner.

use std::fmt;

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use uuid::Uuid;

use super::{AlertCall, AlertLayout, AlertTarget};

/// Identity of an alert in an [`AlertStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertKey(Uuid);

impl AlertKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlertKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call_alert_{}", self.0.simple())
    }
}

/// Keyed alerts drawn in the bottom-right corner, newest on top.
///
/// The stack does not limit how many alerts it holds; alerts that do not fit
/// vertically are skipped when drawing.
#[derive(Default)]
pub struct AlertStack {
    alerts: Vec<(AlertKey, AlertCall)>,
    layouts: Vec<(AlertKey, AlertLayout)>,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: AlertCall) -> AlertKey {
        self.push_with(|_| alert)
    }

    /// Build the alert with its key in hand, so callbacks can report it.
    pub fn push_with(&mut self, build: impl FnOnce(AlertKey) -> AlertCall) -> AlertKey {
        let key = AlertKey::new();
        self.alerts.push((key, build(key)));
        tracing::debug!(key = %key, count = self.alerts.len(), "Alert pushed");
        key
    }

    pub fn remove(&mut self, key: AlertKey) -> Option<AlertCall> {
        let index = self.alerts.iter().position(|(k, _)| *k == key)?;
        self.layouts.retain(|(k, _)| *k != key);
        let (_, alert) = self.alerts.remove(index);
        tracing::debug!(key = %key, count = self.alerts.len(), "Alert removed");
        Some(alert)
    }

    pub fn get(&self, key: AlertKey) -> Option<&AlertCall> {
        self.alerts.iter().find(|(k, _)| *k == key).map(|(_, alert)| alert)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = AlertKey> + '_ {
        self.alerts.iter().map(|(key, _)| *key)
    }

    /// Layout of `key` from the last render, if it was drawn.
    pub fn layout(&self, key: AlertKey) -> Option<&AlertLayout> {
        self.layouts.iter().find(|(k, _)| *k == key).map(|(_, layout)| layout)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.layouts.clear();
        let mut bottom = area.bottom();

        for (key, alert) in &self.alerts {
            if !alert.is_shown() {
                continue;
            }
            let width = AlertCall::WIDTH.min(area.width);
            let height = alert.height();
            if bottom.saturating_sub(area.y) < height {
                break;
            }
            bottom -= height;

            let slot = Rect {
                x: area.right().saturating_sub(width),
                y: bottom,
                width,
                height,
            };
            if let Some(layout) = alert.render(frame, slot) {
                self.layouts.push((*key, layout));
            }
        }
    }

    /// Fire whatever was pressed and report which alert it belonged to.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<(AlertKey, AlertTarget)> {
        for (key, layout) in &self.layouts {
            if let Some((_, alert)) = self.alerts.iter_mut().find(|(k, _)| k == key) {
                if let Some(target) = alert.handle_mouse(layout, mouse) {
                    return Some((*key, target));
                }
            }
        }
        None
    }
}
