use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque value that ties a tab to its panel. Compared by equality only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabModel(pub serde_json::Value);

impl From<&str> for TabModel {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for TabModel {
    fn from(value: String) -> Self {
        Self(serde_json::Value::String(value))
    }
}

impl From<i64> for TabModel {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl From<serde_json::Value> for TabModel {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Identity of a mounted component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceKey(Uuid);

impl InstanceKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceKind {
    TabList,
    Tab,
    TabPanel,
}

impl InstanceKind {
    pub fn code(&self) -> &'static str {
        match self {
            InstanceKind::TabList => "tab-list",
            InstanceKind::Tab => "tab",
            InstanceKind::TabPanel => "panel",
        }
    }

    /// Generated DOM id, used when the caller does not pass an explicit `id`.
    pub fn element_id(&self, prefix: &str, key: InstanceKey) -> String {
        format!("{}-{}-{}", prefix, self.code(), key)
    }
}

/// A tab as seen by its tab list.
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    pub key: InstanceKey,
    pub element_id: String,
    pub model: Option<TabModel>,
}

/// A panel as seen by the tabs container.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry {
    pub key: InstanceKey,
    pub element_id: String,
    pub model: Option<TabModel>,
}
