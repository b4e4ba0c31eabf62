use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::Position;

use crate::config::{AlertConfig, Config};
use crate::ui::alert::{AlertCall, AlertKey, AlertStack, CallAction, Caller, CallerKind, Device};
use crate::ui::events::AppEvent;
use crate::ui::overlay::{MenuItem, MenuOverlay, OverlayError, SelectEvent};

/// The four callers the demo can raise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DemoCaller {
    Person,
    Device,
    NumberOnly,
    WithDevices,
}

impl DemoCaller {
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::Person),
            '2' => Some(Self::Device),
            '3' => Some(Self::NumberOnly),
            '4' => Some(Self::WithDevices),
            _ => None,
        }
    }

    pub fn caller(self) -> Caller {
        match self {
            Self::Person | Self::WithDevices => {
                Caller::new("Jefe Guadelupe").with_alt("+ 1 972-555-1212")
            }
            Self::Device => Caller::new("SJC21-Babelfish")
                .with_alt("+ 1 408-555-1212")
                .with_kind(CallerKind::Device),
            Self::NumberOnly => Caller::new("+ 1 408-555-1212").with_kind(CallerKind::Number),
        }
    }

    pub fn devices(self) -> Vec<Device> {
        match self {
            Self::WithDevices => vec![
                Device::new("SJC21-Babelfish", "1010101").with_kind("device"),
                Device::new("Use my computer", "2020202"),
            ],
            _ => Vec::new(),
        }
    }
}

/// Demo state: raised alerts, the menu overlay and the last reported event.
pub struct App {
    should_quit: bool,
    alert_config: AlertConfig,
    alerts: AlertStack,
    menu: MenuOverlay,
    status: String,
    tx: Sender<AppEvent>,
}

impl App {
    /// Fails when the configured menu contains a child kind it cannot host.
    pub fn new(config: &Config, tx: Sender<AppEvent>) -> Result<Self, OverlayError> {
        let menu_tx = tx.clone();
        let menu = MenuOverlay::from_spec(&config.menu)?.on_select(
            move |_: &SelectEvent, index: usize, item: &MenuItem| {
                let _ = menu_tx.send(AppEvent::MenuSelected {
                    index,
                    label: item.label().to_string(),
                });
            },
        );

        Ok(Self {
            should_quit: false,
            alert_config: config.alert.clone(),
            alerts: AlertStack::new(),
            menu,
            status: "Press 1-4 to raise a call alert, m for the menu".to_string(),
            tx,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn alerts(&self) -> &AlertStack {
        &self.alerts
    }

    pub fn menu(&self) -> &MenuOverlay {
        &self.menu
    }

    /// Mutable access for drawing, which records hit regions.
    pub fn widgets_mut(&mut self) -> (&mut MenuOverlay, &mut AlertStack) {
        (&mut self.menu, &mut self.alerts)
    }

    pub fn raise(&mut self, kind: DemoCaller) -> AlertKey {
        let config = &self.alert_config;
        let tx = &self.tx;
        let key = self.alerts.push_with(|key| build_alert(kind, config, key, tx));
        tracing::info!(key = %key, caller = ?kind, "Call alert raised");
        self.status = format!("Incoming call {key}");
        key
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        if self.menu.handle_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('m') => self.menu.toggle(),
            KeyCode::Char(ch) => {
                if let Some(kind) = DemoCaller::from_key(ch) {
                    self.raise(kind);
                }
            }
            _ => {}
        }
    }

    /// The open menu is drawn above the alerts, so it sees presses first.
    /// A press outside it closes it and still reaches the alerts below.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.menu.is_open() {
            let position = Position::new(mouse.column, mouse.row);
            let on_menu = self.menu.region().is_some_and(|region| region.contains(position))
                || self.menu.anchor().is_some_and(|anchor| anchor.contains(position));
            self.menu.handle_mouse(mouse);
            if !on_menu {
                self.alerts.handle_mouse(mouse);
            }
            return;
        }
        if self.alerts.handle_mouse(mouse).is_some() {
            return;
        }
        self.menu.handle_mouse(mouse);
    }

    /// Apply a result reported by a widget callback.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Mouse(mouse) => self.on_mouse(mouse),
            AppEvent::Call { key, action } => {
                self.alerts.remove(key);
                let name = match action {
                    CallAction::AnswerVideo => "onAnswerVideo",
                    CallAction::AnswerVoice => "onAnswerVoice",
                    CallAction::Reject => "onRejectCall",
                };
                tracing::info!(key = %key, action = ?action, "Call alert handled");
                self.status = format!("{name} {key}");
            }
            AppEvent::DeviceSelected { key, value } => {
                tracing::info!(key = %key, device = %value, "Device selected");
                self.status = format!("onDeviceSelect {value}");
            }
            AppEvent::MenuSelected { index, label } => {
                tracing::info!(index, label = %label, "Menu item selected");
                self.status = format!("onSelect {index}: {label}");
            }
            AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }
}

fn build_alert(
    kind: DemoCaller,
    config: &AlertConfig,
    key: AlertKey,
    tx: &Sender<AppEvent>,
) -> AlertCall {
    let report = |action: CallAction| {
        let tx = tx.clone();
        move || {
            let _ = tx.send(AppEvent::Call { key, action });
        }
    };
    let device_tx = tx.clone();

    AlertCall::new(kind.caller(), true)
        .title(&config.title)
        .devices(kind.devices())
        .device_list_header(&config.device_list_header)
        .video_aria_label(&config.video_aria_label)
        .voice_aria_label(&config.voice_aria_label)
        .reject_aria_label(&config.reject_aria_label)
        .on_answer_video(report(CallAction::AnswerVideo))
        .on_answer_voice(report(CallAction::AnswerVoice))
        .on_reject(report(CallAction::Reject))
        .on_device_select(move |value: &str| {
            let _ = device_tx.send(AppEvent::DeviceSelected {
                key,
                value: value.to_string(),
            });
        })
}
