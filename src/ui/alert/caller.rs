//! Who is calling, and the devices the call can be answered on.

use serde::{Deserialize, Serialize};

/// How the caller is identified on the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CallerKind {
    #[default]
    Person,
    Number,
    Device,
}

impl CallerKind {
    /// Unknown values fall back to `Person`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "number" => Self::Number,
            "device" => Self::Device,
            _ => Self::Person,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "",
            Self::Number => "number",
            Self::Device => "device",
        }
    }
}

impl From<String> for CallerKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CallerKind> for String {
    fn from(kind: CallerKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Caller {
    pub title: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: CallerKind,
}

impl Caller {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Secondary line under the name, usually the number.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_kind(mut self, kind: CallerKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Alternate endpoint the call can be answered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Device {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is_room_device(&self) -> bool {
        self.kind.as_deref() == Some("device")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_degrades_to_person() {
        assert_eq!(CallerKind::parse("number"), CallerKind::Number);
        assert_eq!(CallerKind::parse(" Device "), CallerKind::Device);
        assert_eq!(CallerKind::parse(""), CallerKind::Person);
        assert_eq!(CallerKind::parse("robot"), CallerKind::Person);
    }

    #[test]
    fn caller_deserializes_type_field() {
        let caller: Caller =
            toml::from_str("title = \"SJC21-Babelfish\"\nalt = \"+ 1 408-555-1212\"\ntype = \"device\"")
                .unwrap();
        assert_eq!(caller.kind, CallerKind::Device);
        assert_eq!(caller.alt.as_deref(), Some("+ 1 408-555-1212"));

        let caller: Caller = toml::from_str("title = \"x\"\ntype = \"fax\"").unwrap();
        assert_eq!(caller.kind, CallerKind::Person);
    }

    #[test]
    fn device_kind_is_optional() {
        let device: Device = toml::from_str("name = \"Use my computer\"\nvalue = \"2020202\"").unwrap();
        assert_eq!(device, Device::new("Use my computer", "2020202"));
        assert!(!device.is_room_device());
        assert!(Device::new("a", "b").with_kind("device").is_room_device());
    }
}
