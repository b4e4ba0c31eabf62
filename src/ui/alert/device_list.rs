//! Device picker shown inside an alert when the caller offers alternate devices.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Device;
use crate::ui::theme::{ACCEPT_GREEN, MUTED_TEXT, PANEL_TEXT};

/// Rendered device row, for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRegion {
    pub index: usize,
    pub area: Rect,
}

/// Header plus one row per device, with the default device marked.
///
/// Holds no selection of its own; picking a row only reports the device value.
pub struct DeviceListPicker<'a> {
    header: &'a str,
    devices: &'a [Device],
    default_selected: usize,
}

impl<'a> DeviceListPicker<'a> {
    pub fn new(header: &'a str, devices: &'a [Device], default_selected: usize) -> Self {
        Self {
            header,
            devices,
            default_selected,
        }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.devices.len() + 1).unwrap_or(u16::MAX)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            self.header.to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        ))];

        for (index, device) in self.devices.iter().enumerate() {
            let icon = if device.is_room_device() { "▣" } else { "▭" };
            let row = if index == self.default_selected {
                vec![
                    Span::styled(
                        "● ",
                        Style::default().fg(ACCEPT_GREEN).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{icon} {}", device.name),
                        Style::default().fg(PANEL_TEXT).add_modifier(Modifier::BOLD),
                    ),
                ]
            } else {
                vec![
                    Span::styled("○ ", Style::default().fg(MUTED_TEXT)),
                    Span::styled(format!("{icon} {}", device.name), Style::default().fg(PANEL_TEXT)),
                ]
            };
            lines.push(Line::from(row));
        }
        lines
    }

    /// Draw into `area` and return the device rows that fit.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Vec<DeviceRegion> {
        frame.render_widget(Paragraph::new(self.lines()), area);

        (0..self.devices.len())
            .zip(area.y.saturating_add(1)..area.bottom())
            .map(|(index, y)| DeviceRegion {
                index,
                area: Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: 1,
                },
            })
            .collect()
    }

    /// Report the value of the device at `index`. False when out of range.
    pub fn select(&self, index: usize, on_select: &mut dyn FnMut(&str)) -> bool {
        match self.devices.get(index) {
            Some(device) => {
                on_select(&device.value);
                true
            }
            None => false,
        }
    }
}
