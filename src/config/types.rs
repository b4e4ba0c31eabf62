use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::alert::{
    DEFAULT_DEVICE_LIST_HEADER, DEFAULT_REJECT_ARIA_LABEL, DEFAULT_VIDEO_ARIA_LABEL,
    DEFAULT_VOICE_ARIA_LABEL,
};
use crate::ui::overlay::OverlaySpec;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub alert: AlertConfig,
    /// Overlay shown by the `m` key.
    #[serde(default)]
    pub menu: OverlaySpec,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: cache dir `callkit/callkit.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Texts applied to every alert the demo raises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Panel title (default: "Incoming Call").
    #[serde(default = "default_alert_title")]
    pub title: String,
    #[serde(default = "default_device_list_header")]
    pub device_list_header: String,
    #[serde(default = "default_video_aria_label")]
    pub video_aria_label: String,
    #[serde(default = "default_voice_aria_label")]
    pub voice_aria_label: String,
    #[serde(default = "default_reject_aria_label")]
    pub reject_aria_label: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_alert_title() -> String {
    "Incoming Call".to_string()
}

fn default_device_list_header() -> String {
    DEFAULT_DEVICE_LIST_HEADER.to_string()
}

fn default_video_aria_label() -> String {
    DEFAULT_VIDEO_ARIA_LABEL.to_string()
}

fn default_voice_aria_label() -> String {
    DEFAULT_VOICE_ARIA_LABEL.to_string()
}

fn default_reject_aria_label() -> String {
    DEFAULT_REJECT_ARIA_LABEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: default_alert_title(),
            device_list_header: default_device_list_header(),
            video_aria_label: default_video_aria_label(),
            voice_aria_label: default_voice_aria_label(),
            reject_aria_label: default_reject_aria_label(),
        }
    }
}
