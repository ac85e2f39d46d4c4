//! Derived presentation state. Each struct is a pure function of the
//! selection, so components recompute it in a memo and bind the fields.

use crate::config::TabsConfig;

/// Attributes of one tab element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabAttributes {
    pub role: String,
    /// `active_class` when selected
    pub active_class: Option<String>,
    pub aria_selected: &'static str,
    /// Mirrors `aria_selected`
    pub aria_expanded: &'static str,
    /// Element id of the controlled panel
    pub aria_controls: Option<String>,
    pub selected: Option<&'static str>,
    /// `0` when selected; absent keeps the tab out of the tab order
    pub tabindex: Option<i32>,
    /// Only set for link tabs
    pub href: Option<String>,
}

impl TabAttributes {
    pub fn derive(is_selected: bool, panel_element_id: Option<&str>, config: &TabsConfig) -> Self {
        let aria_selected = if is_selected { "true" } else { "false" };
        Self {
            role: config.tab_role.clone(),
            active_class: is_selected.then(|| config.active_class.clone()),
            aria_selected,
            aria_expanded: aria_selected,
            aria_controls: panel_element_id.map(str::to_string),
            selected: is_selected.then_some("selected"),
            tabindex: is_selected.then_some(0),
            href: config
                .link_tabs
                .then(|| format!("#{}", panel_element_id.unwrap_or_default())),
        }
    }

    pub fn class_list(&self, base: &str) -> String {
        join_classes(base, self.active_class.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabListAttributes {
    pub role: String,
    /// Only one tab can be selected at a time.
    pub aria_multiselectable: &'static str,
}

impl TabListAttributes {
    pub fn derive(config: &TabsConfig) -> Self {
        Self {
            role: config.tab_list_role.clone(),
            aria_multiselectable: "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanelAttributes {
    pub role: String,
    pub aria_labelledby: Option<String>,
    pub active_class: Option<String>,
    pub hidden: bool,
}

impl TabPanelAttributes {
    pub fn derive(is_selected: bool, tab_element_id: Option<&str>, config: &TabsConfig) -> Self {
        Self {
            role: config.tab_panel_role.clone(),
            aria_labelledby: tab_element_id.map(str::to_string),
            active_class: is_selected.then(|| config.active_class.clone()),
            hidden: !is_selected,
        }
    }

    pub fn class_list(&self, base: &str) -> String {
        join_classes(base, self.active_class.as_deref())
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tab_attributes() {
        let attrs = TabAttributes::derive(true, Some("panel1"), &TabsConfig::default());
        assert_eq!(attrs.active_class.as_deref(), Some("active"));
        assert_eq!(attrs.selected, Some("selected"));
        assert_eq!(attrs.aria_selected, "true");
        assert_eq!(attrs.aria_expanded, "true");
        assert_eq!(attrs.tabindex, Some(0));
        assert_eq!(attrs.aria_controls.as_deref(), Some("panel1"));
        assert_eq!(attrs.href.as_deref(), Some("#panel1"));
        assert_eq!(attrs.role, "tab");
        assert_eq!(attrs.class_list("tabset-tab"), "tabset-tab active");
    }

    #[test]
    fn test_deselected_tab_attributes() {
        let attrs = TabAttributes::derive(false, Some("panel2"), &TabsConfig::default());
        assert_eq!(attrs.active_class, None);
        assert_eq!(attrs.selected, None);
        assert_eq!(attrs.aria_selected, "false");
        assert_eq!(attrs.aria_expanded, "false");
        assert_eq!(attrs.tabindex, None);
        assert_eq!(attrs.class_list("tabset-tab"), "tabset-tab");
    }

    #[test]
    fn test_href_without_panel() {
        let attrs = TabAttributes::derive(false, None, &TabsConfig::default());
        assert_eq!(attrs.href.as_deref(), Some("#"));
        assert_eq!(attrs.aria_controls, None);
    }

    #[test]
    fn test_no_href_for_non_link_tabs() {
        let config = TabsConfig {
            link_tabs: false,
            ..TabsConfig::default()
        };
        assert_eq!(TabAttributes::derive(true, Some("p"), &config).href, None);
    }

    #[test]
    fn test_custom_active_class() {
        let config = TabsConfig {
            active_class: "current".to_string(),
            ..TabsConfig::default()
        };
        let attrs = TabAttributes::derive(true, None, &config);
        assert_eq!(attrs.active_class.as_deref(), Some("current"));
    }

    #[test]
    fn test_tab_list_attributes() {
        let attrs = TabListAttributes::derive(&TabsConfig::default());
        assert_eq!(attrs.role, "tablist");
        assert_eq!(attrs.aria_multiselectable, "false");
    }

    #[test]
    fn test_panel_attributes() {
        let shown = TabPanelAttributes::derive(true, Some("tab1"), &TabsConfig::default());
        assert_eq!(shown.role, "tabpanel");
        assert_eq!(shown.aria_labelledby.as_deref(), Some("tab1"));
        assert!(!shown.hidden);
        assert_eq!(shown.class_list("tabset-tab-panel"), "tabset-tab-panel active");

        let hidden = TabPanelAttributes::derive(false, Some("tab2"), &TabsConfig::default());
        assert!(hidden.hidden);
        assert_eq!(hidden.active_class, None);
    }
}
