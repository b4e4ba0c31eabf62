mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use callkit::ui::alert::{
    AlertCall, AlertLayout, AlertStack, AlertTarget, CallAction, Caller, CallerKind, Device,
};
use callkit::ui::components::AvatarGlyph;
use common::{click, screen, terminal};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn jefe() -> Caller {
    Caller::new("Jefe Guadelupe").with_alt("+ 1 972-555-1212")
}

fn devices() -> Vec<Device> {
    vec![
        Device::new("SJC21-Babelfish", "1010101").with_kind("device"),
        Device::new("Use my computer", "2020202"),
    ]
}

fn render(alert: &AlertCall) -> (Terminal<TestBackend>, Option<AlertLayout>) {
    let mut terminal = terminal(50, 12);
    let mut layout = None;
    terminal
        .draw(|frame| {
            let area = frame.area();
            layout = alert.render(frame, area);
        })
        .unwrap();
    (terminal, layout)
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn hidden_alert_draws_nothing() {
    let alert = AlertCall::new(jefe(), false)
        .title("Incoming Call")
        .devices(devices());
    let (terminal, layout) = render(&alert);
    assert!(layout.is_none());
    assert!(screen(&terminal).chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn person_caller_without_devices_or_voice() {
    let alert = AlertCall::new(jefe(), true).title("Incoming Call");
    let (terminal, layout) = render(&alert);
    let text = screen(&terminal);

    assert!(text.contains("Incoming Call"));
    assert!(text.contains("JG"));
    assert!(text.contains("Jefe Guadelupe"));
    assert!(text.contains("+ 1 972-555-1212"));
    assert!(text.contains("▶ Video"));
    assert!(text.contains("✕ Reject"));
    assert!(!text.contains("Voice"));
    assert!(!text.contains("Device selection"));

    let layout = layout.unwrap();
    assert!(layout.devices.is_empty());
    assert_eq!(
        layout
            .controls
            .iter()
            .map(|c| c.aria_label.as_str())
            .collect::<Vec<_>>(),
        vec!["answer call with voice and video", "reject call"]
    );
}

#[test]
fn glyph_follows_caller_type_and_override() {
    let number = Caller::new("+ 1 408-555-1212").with_kind(CallerKind::Number);
    let device = Caller::new("SJC21-Babelfish").with_kind(CallerKind::Device);
    let unknown = Caller {
        kind: CallerKind::parse("hologram"),
        ..Caller::new("Ana Maria")
    };

    assert_eq!(AlertCall::new(number.clone(), true).glyph(), AvatarGlyph::Number);
    assert_eq!(AlertCall::new(device, true).glyph(), AvatarGlyph::Device);
    assert_eq!(
        AlertCall::new(unknown, true).glyph(),
        AvatarGlyph::Initials("AM".into())
    );
    assert_eq!(
        AlertCall::new(number, true)
            .avatar(AvatarGlyph::Custom("☎".into()))
            .glyph(),
        AvatarGlyph::Custom("☎".into())
    );

    let (terminal, _) =
        render(&AlertCall::new(Caller::new("+ 1 408-555-1212").with_kind(CallerKind::Number), true));
    assert!(screen(&terminal).contains(" # "));
}

#[test]
fn device_list_renders_in_order_with_default_marked() {
    let alert = AlertCall::new(jefe(), true).devices(devices());
    let (terminal, layout) = render(&alert);
    let text = screen(&terminal);

    assert!(text.contains("Device selection"));
    let first = text.find("● ▣ SJC21-Babelfish").unwrap();
    let second = text.find("○ ▭ Use my computer").unwrap();
    assert!(first < second);
    assert_eq!(layout.unwrap().devices.len(), 2);
}

#[test]
fn default_selected_device_and_header_are_configurable() {
    let alert = AlertCall::new(jefe(), true)
        .devices(devices())
        .default_selected_device(1)
        .device_list_header("Answer on");
    let (terminal, _) = render(&alert);
    let text = screen(&terminal);

    assert!(text.contains("Answer on"));
    assert!(text.contains("○ ▣ SJC21-Babelfish"));
    assert!(text.contains("● ▭ Use my computer"));

    let alert = AlertCall::new(jefe(), true)
        .devices(devices())
        .default_selected_device(9);
    let (terminal, _) = render(&alert);
    assert!(!screen(&terminal).contains('●'));
}

#[test]
fn each_control_fires_its_handler_once() {
    let (video, on_video) = counter();
    let (voice, on_voice) = counter();
    let (reject, on_reject) = counter();
    let mut alert = AlertCall::new(jefe(), true)
        .on_answer_video(on_video)
        .on_answer_voice(on_voice)
        .on_reject(on_reject);

    let (_, layout) = render(&alert);
    let layout = layout.unwrap();
    assert_eq!(layout.controls.len(), 3);

    for action in [CallAction::AnswerVideo, CallAction::AnswerVoice, CallAction::Reject] {
        let area = layout.control(action).unwrap().area;
        assert_eq!(
            alert.handle_mouse(&layout, click(area.as_position())),
            Some(AlertTarget::Control(action))
        );
    }
    assert_eq!((video.get(), voice.get(), reject.get()), (1, 1, 1));
}

#[test]
fn custom_aria_labels_are_carried() {
    let alert = AlertCall::new(jefe(), true)
        .on_answer_voice(|| {})
        .video_aria_label("video")
        .voice_aria_label("voice")
        .reject_aria_label("decline");
    let labels: Vec<_> = alert.controls().iter().map(|c| c.aria_label).collect();
    assert_eq!(labels, vec!["video", "voice", "decline"]);
    assert_eq!(alert.controls()[2].button().accessible_label(), "decline");
}

#[test]
fn device_click_reports_value() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    let mut alert = AlertCall::new(jefe(), true)
        .devices(devices())
        .on_device_select(move |value: &str| sink.borrow_mut().push(value.to_string()));

    let (_, layout) = render(&alert);
    let layout = layout.unwrap();
    let row = layout.devices[0].area.as_position();
    assert_eq!(
        alert.handle_mouse(&layout, click(row)),
        Some(AlertTarget::Device(0))
    );
    assert_eq!(*picked.borrow(), vec!["1010101".to_string()]);
}

#[test]
fn stack_routes_to_the_right_alert() {
    let rejected = Rc::new(RefCell::new(Vec::new()));
    let mut stack = AlertStack::new();
    let mut keys = Vec::new();
    for name in ["One", "Two"] {
        let log = Rc::clone(&rejected);
        keys.push(stack.push_with(|key| {
            AlertCall::new(Caller::new(name), true).on_reject(move || log.borrow_mut().push(key))
        }));
    }

    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| {
            let area = frame.area();
            stack.render(frame, area);
        })
        .unwrap();

    let area = stack
        .layout(keys[0])
        .and_then(|layout| layout.control(CallAction::Reject))
        .unwrap()
        .area;
    assert_eq!(
        stack.handle_mouse(click(area.as_position())),
        Some((keys[0], AlertTarget::Control(CallAction::Reject)))
    );
    assert_eq!(*rejected.borrow(), vec![keys[0]]);
}
