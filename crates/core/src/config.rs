use crate::error::TabsError;
use serde::{Deserialize, Serialize};

/// Presentation settings shared by every component of one tabset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// CSS class applied to the selected tab and its panel
    pub active_class: String,
    pub tab_role: String,
    pub tab_list_role: String,
    pub tab_panel_role: String,
    /// Render tabs as `<a href="#panel">` instead of `<li>`
    pub link_tabs: bool,
    /// Prefix of generated element ids
    pub id_prefix: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"{
    "active_class": "active",
    "tab_role": "tab",
    "tab_list_role": "tablist",
    "tab_panel_role": "tabpanel",
    "link_tabs": true,
    "id_prefix": "tabset"
}"#;

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            tab_role: "tab".to_string(),
            tab_list_role: "tablist".to_string(),
            tab_panel_role: "tabpanel".to_string(),
            link_tabs: true,
            id_prefix: "tabset".to_string(),
        }
    }
}

impl TabsConfig {
    /// Parse a (possibly partial) JSON config; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, TabsError> {
        let config: TabsConfig =
            serde_json::from_str(json).map_err(|e| TabsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded defaults, parsed the same way as user config.
    pub fn embedded() -> Result<Self, TabsError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<(), TabsError> {
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(TabsError::InvalidConfig(format!(
                "active_class must be a single class token, got '{}'",
                self.active_class
            )));
        }
        for (name, value) in [
            ("tab_role", &self.tab_role),
            ("tab_list_role", &self.tab_list_role),
            ("tab_panel_role", &self.tab_panel_role),
            ("id_prefix", &self.id_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(TabsError::InvalidConfig(format!("{} is empty", name)));
            }
        }
        Ok(())
    }
}
