//! A single incoming call alert: caller identity, devices and call controls.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{Caller, CallerKind, Device, DeviceListPicker, DeviceRegion};
use crate::ui::components::{AvatarGlyph, Button, PopupFrame, AVATAR_WIDTH};
use crate::ui::theme::{ACCEPT_GREEN, MUTED_TEXT, PANEL_BORDER, PANEL_TEXT, REJECT_RED};

pub const DEFAULT_DEVICE_LIST_HEADER: &str = "Device selection";
pub const DEFAULT_VIDEO_ARIA_LABEL: &str = "answer call with voice and video";
pub const DEFAULT_VOICE_ARIA_LABEL: &str = "answer call with voice only";
pub const DEFAULT_REJECT_ARIA_LABEL: &str = "reject call";

type Callback = Box<dyn FnMut()>;
type DeviceCallback = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallAction {
    AnswerVideo,
    AnswerVoice,
    Reject,
}

impl CallAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::AnswerVideo => "▶ Video",
            Self::AnswerVoice => "✆ Voice",
            Self::Reject => "✕ Reject",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::AnswerVideo | Self::AnswerVoice => ACCEPT_GREEN,
            Self::Reject => REJECT_RED,
        }
    }
}

/// A control the alert currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallControl<'a> {
    pub action: CallAction,
    pub aria_label: &'a str,
}

impl CallControl<'_> {
    pub fn button(&self) -> Button {
        Button::new(self.action.label())
            .color(self.action.color())
            .aria_label(self.aria_label)
    }
}

/// Something on the alert that can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTarget {
    Control(CallAction),
    Device(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRegion {
    pub action: CallAction,
    pub area: Rect,
    pub aria_label: String,
}

/// Hit regions of a rendered alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertLayout {
    pub area: Rect,
    pub controls: Vec<ControlRegion>,
    pub devices: Vec<DeviceRegion>,
}

impl AlertLayout {
    pub fn hit_test(&self, position: Position) -> Option<AlertTarget> {
        if let Some(control) = self.controls.iter().find(|c| c.area.contains(position)) {
            return Some(AlertTarget::Control(control.action));
        }
        self.devices
            .iter()
            .find(|d| d.area.contains(position))
            .map(|d| AlertTarget::Device(d.index))
    }

    pub fn control(&self, action: CallAction) -> Option<&ControlRegion> {
        self.controls.iter().find(|c| c.action == action)
    }
}

/// Incoming call alert.
///
/// Output depends only on the configured props: the caller decides the
/// avatar, the device list appears only when devices are given, and the
/// voice control only when a voice handler is set.
pub struct AlertCall {
    caller: Caller,
    show: bool,
    title: String,
    avatar: Option<AvatarGlyph>,
    devices: Vec<Device>,
    default_selected_device: usize,
    device_list_header: String,
    on_answer_video: Option<Callback>,
    on_answer_voice: Option<Callback>,
    on_reject: Option<Callback>,
    on_device_select: Option<DeviceCallback>,
    video_aria_label: String,
    voice_aria_label: String,
    reject_aria_label: String,
}

impl AlertCall {
    pub const WIDTH: u16 = 40;

    pub fn new(caller: Caller, show: bool) -> Self {
        Self {
            caller,
            show,
            title: String::new(),
            avatar: None,
            devices: Vec::new(),
            default_selected_device: 0,
            device_list_header: DEFAULT_DEVICE_LIST_HEADER.to_string(),
            on_answer_video: None,
            on_answer_voice: None,
            on_reject: None,
            on_device_select: None,
            video_aria_label: DEFAULT_VIDEO_ARIA_LABEL.to_string(),
            voice_aria_label: DEFAULT_VOICE_ARIA_LABEL.to_string(),
            reject_aria_label: DEFAULT_REJECT_ARIA_LABEL.to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the glyph derived from the caller.
    pub fn avatar(mut self, avatar: AvatarGlyph) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn devices(mut self, devices: impl IntoIterator<Item = Device>) -> Self {
        self.devices = devices.into_iter().collect();
        self
    }

    pub fn default_selected_device(mut self, index: usize) -> Self {
        self.default_selected_device = index;
        self
    }

    pub fn device_list_header(mut self, header: impl Into<String>) -> Self {
        self.device_list_header = header.into();
        self
    }

    pub fn on_answer_video(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_answer_video = Some(Box::new(callback));
        self
    }

    pub fn on_answer_voice(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_answer_voice = Some(Box::new(callback));
        self
    }

    pub fn on_reject(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_reject = Some(Box::new(callback));
        self
    }

    /// Receives the `value` of the picked device.
    pub fn on_device_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_device_select = Some(Box::new(callback));
        self
    }

    pub fn video_aria_label(mut self, label: impl Into<String>) -> Self {
        self.video_aria_label = label.into();
        self
    }

    pub fn voice_aria_label(mut self, label: impl Into<String>) -> Self {
        self.voice_aria_label = label.into();
        self
    }

    pub fn reject_aria_label(mut self, label: impl Into<String>) -> Self {
        self.reject_aria_label = label.into();
        self
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    pub fn is_shown(&self) -> bool {
        self.show
    }

    pub fn glyph(&self) -> AvatarGlyph {
        if let Some(avatar) = &self.avatar {
            return avatar.clone();
        }
        match self.caller.kind {
            CallerKind::Number => AvatarGlyph::Number,
            CallerKind::Device => AvatarGlyph::Device,
            CallerKind::Person => AvatarGlyph::from_title(&self.caller.title),
        }
    }

    /// Controls in display order. Voice is offered only with a handler.
    pub fn controls(&self) -> Vec<CallControl<'_>> {
        let mut controls = vec![CallControl {
            action: CallAction::AnswerVideo,
            aria_label: &self.video_aria_label,
        }];
        if self.on_answer_voice.is_some() {
            controls.push(CallControl {
                action: CallAction::AnswerVoice,
                aria_label: &self.voice_aria_label,
            });
        }
        controls.push(CallControl {
            action: CallAction::Reject,
            aria_label: &self.reject_aria_label,
        });
        controls
    }

    pub fn device_picker(&self) -> Option<DeviceListPicker<'_>> {
        (!self.devices.is_empty()).then(|| {
            DeviceListPicker::new(
                &self.device_list_header,
                &self.devices,
                self.default_selected_device,
            )
        })
    }

    /// Rows including borders.
    pub fn height(&self) -> u16 {
        let picker = self.device_picker().map_or(0, |picker| picker.height());
        // borders, name, subtitle, spacer, controls
        6u16.saturating_add(picker)
    }

    /// Draw at the top-left of `area`. Nothing is drawn when hidden.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Option<AlertLayout> {
        if !self.show {
            return None;
        }

        let area = Rect {
            width: Self::WIDTH.min(area.width),
            height: self.height().min(area.height),
            ..area
        };
        let inner = PopupFrame::new(&self.title)
            .border(PANEL_BORDER)
            .render(frame, area);
        if inner.is_empty() {
            return Some(AlertLayout {
                area,
                ..AlertLayout::default()
            });
        }

        let text_x = inner.x + 1 + AVATAR_WIDTH + 1;
        let text_width = inner.right().saturating_sub(text_x);
        self.glyph().render(
            frame,
            Rect {
                x: inner.x + 1,
                width: AVATAR_WIDTH,
                height: 1,
                ..inner
            },
        );
        let identity = vec![
            Line::from(Span::styled(
                self.caller.title.clone(),
                Style::default().fg(PANEL_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.caller.alt.clone().unwrap_or_default(),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(identity),
            Rect {
                x: text_x,
                width: text_width,
                height: inner.height.min(2),
                ..inner
            },
        );

        let mut layout = AlertLayout {
            area,
            ..AlertLayout::default()
        };

        if let Some(picker) = self.device_picker() {
            let top = inner.y.saturating_add(2);
            let bottom = inner.bottom().saturating_sub(2);
            if top < bottom {
                let picker_area = Rect {
                    x: inner.x + 1,
                    y: top,
                    width: inner.width.saturating_sub(2),
                    height: picker.height().min(bottom - top),
                };
                layout.devices = picker.render(frame, picker_area);
            }
        }

        if inner.height >= 3 {
            let mut x = inner.x + 1;
            let y = inner.bottom() - 1;
            for control in self.controls() {
                let button = control.button();
                let slot = Rect {
                    x,
                    y,
                    width: inner.right().saturating_sub(x),
                    height: 1,
                };
                let drawn = button.render(frame, slot);
                if drawn.is_empty() {
                    break;
                }
                layout.controls.push(ControlRegion {
                    action: control.action,
                    area: drawn,
                    aria_label: control.aria_label.to_string(),
                });
                x = drawn.right().saturating_add(1);
            }
        }

        Some(layout)
    }

    /// Fire the handler behind `target`.
    ///
    /// Returns false when hidden, when the target is not offered, or when no
    /// handler is set.
    pub fn activate(&mut self, target: AlertTarget) -> bool {
        if !self.show {
            return false;
        }

        let fired = match target {
            AlertTarget::Control(CallAction::AnswerVideo) => fire(&mut self.on_answer_video),
            AlertTarget::Control(CallAction::AnswerVoice) => fire(&mut self.on_answer_voice),
            AlertTarget::Control(CallAction::Reject) => fire(&mut self.on_reject),
            AlertTarget::Device(index) => {
                let picker = DeviceListPicker::new(
                    &self.device_list_header,
                    &self.devices,
                    self.default_selected_device,
                );
                match self.on_device_select.as_mut() {
                    Some(callback) => picker.select(index, callback.as_mut()),
                    None => false,
                }
            }
        };

        tracing::debug!(
            caller = %self.caller.title,
            action = ?target,
            fired,
            "Alert target activated"
        );
        fired
    }

    /// Route a left-button press to the control or device row under it.
    pub fn handle_mouse(&mut self, layout: &AlertLayout, mouse: MouseEvent) -> Option<AlertTarget> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let target = layout.hit_test(Position::new(mouse.column, mouse.row))?;
        self.activate(target);
        Some(target)
    }
}

fn fire(callback: &mut Option<Callback>) -> bool {
    match callback.as_mut() {
        Some(callback) => {
            callback();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::Cell;
    use std::rc::Rc;

    fn jefe() -> Caller {
        Caller::new("Jefe Guadelupe").with_alt("+ 1 972-555-1212")
    }

    fn render(alert: &AlertCall) -> Option<AlertLayout> {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        let mut layout = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                layout = alert.render(frame, area);
            })
            .unwrap();
        layout
    }

    fn click(position: Position) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: position.x,
            row: position.y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn glyph_follows_caller_kind() {
        assert_eq!(
            AlertCall::new(jefe(), true).glyph(),
            AvatarGlyph::Initials("JG".into())
        );
        assert_eq!(
            AlertCall::new(Caller::new("x").with_kind(CallerKind::Number), true).glyph(),
            AvatarGlyph::Number
        );
        assert_eq!(
            AlertCall::new(Caller::new("x").with_kind(CallerKind::Device), true).glyph(),
            AvatarGlyph::Device
        );
    }

    #[test]
    fn avatar_override_wins() {
        let alert = AlertCall::new(Caller::new("x").with_kind(CallerKind::Number), true)
            .avatar(AvatarGlyph::Custom("VIP".into()));
        assert_eq!(alert.glyph(), AvatarGlyph::Custom("VIP".into()));
    }

    #[test]
    fn voice_control_needs_handler() {
        let alert = AlertCall::new(jefe(), true);
        let actions: Vec<_> = alert.controls().iter().map(|c| c.action).collect();
        assert_eq!(actions, vec![CallAction::AnswerVideo, CallAction::Reject]);

        let alert = alert.on_answer_voice(|| {});
        let labels: Vec<_> = alert.controls().iter().map(|c| c.aria_label).collect();
        assert_eq!(
            labels,
            vec![
                DEFAULT_VIDEO_ARIA_LABEL,
                DEFAULT_VOICE_ARIA_LABEL,
                DEFAULT_REJECT_ARIA_LABEL
            ]
        );
    }

    #[test]
    fn hidden_alert_renders_nothing_and_ignores_activation() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut alert = AlertCall::new(jefe(), false).on_reject(move || counter.set(counter.get() + 1));

        assert!(render(&alert).is_none());
        assert!(!alert.activate(AlertTarget::Control(CallAction::Reject)));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn missing_handlers_are_no_ops() {
        let mut alert = AlertCall::new(jefe(), true);
        assert!(!alert.activate(AlertTarget::Control(CallAction::AnswerVideo)));
        assert!(!alert.activate(AlertTarget::Control(CallAction::AnswerVoice)));
        assert!(!alert.activate(AlertTarget::Device(0)));
    }

    #[test]
    fn layout_routes_clicks_to_controls() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut alert = AlertCall::new(jefe(), true)
            .on_answer_voice(move || counter.set(counter.get() + 1));

        let layout = render(&alert).unwrap();
        assert_eq!(layout.controls.len(), 3);
        let voice = layout.control(CallAction::AnswerVoice).unwrap().area;
        assert_eq!(voice.y, 4);

        let target = alert.handle_mouse(&layout, click(voice.as_position()));
        assert_eq!(target, Some(AlertTarget::Control(CallAction::AnswerVoice)));
        assert_eq!(count.get(), 1);

        assert_eq!(alert.handle_mouse(&layout, click(Position::new(45, 11))), None);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn device_rows_report_values() {
        let picked = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = picked.clone();
        let mut alert = AlertCall::new(jefe(), true)
            .devices([
                Device::new("SJC21-Babelfish", "1010101").with_kind("device"),
                Device::new("Use my computer", "2020202"),
            ])
            .on_device_select(move |value: &str| sink.borrow_mut().push(value.to_string()));

        let layout = render(&alert).unwrap();
        assert_eq!(layout.devices.len(), 2);
        assert_eq!(alert.height(), 9);

        let second = layout.devices[1].area.as_position();
        assert_eq!(
            alert.handle_mouse(&layout, click(second)),
            Some(AlertTarget::Device(1))
        );
        assert_eq!(*picked.borrow(), vec!["2020202".to_string()]);
    }
}
