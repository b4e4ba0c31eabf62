//! Incoming call alert widget.
//!
//! - `caller.rs` - Caller identity and answer devices
//! - `device_list.rs` - Optional device picker under the caller
//! - `panel.rs` - `AlertCall`, its controls and hit regions
//! - `stack.rs` - Keyed container that stacks alerts on screen

mod caller;
mod device_list;
mod panel;
mod stack;

pub use caller::{Caller, CallerKind, Device};
pub use device_list::{DeviceListPicker, DeviceRegion};
pub use panel::{
    AlertCall, AlertLayout, AlertTarget, CallAction, CallControl, ControlRegion,
    DEFAULT_DEVICE_LIST_HEADER, DEFAULT_REJECT_ARIA_LABEL, DEFAULT_VIDEO_ARIA_LABEL,
    DEFAULT_VOICE_ARIA_LABEL,
};
pub use stack::{AlertKey, AlertStack};
