//! Tab ↔ panel association.
//!
//! A tab with a model owns the first panel carrying an equal model. A tab
//! without a model owns the panel at its own position.

use crate::model::{InstanceKey, PanelEntry, TabEntry, TabModel};

pub fn resolve_panel<'a>(
    panels: &'a [PanelEntry],
    model: Option<&TabModel>,
    tab_index: Option<usize>,
) -> Option<&'a PanelEntry> {
    match model {
        Some(model) => panels.iter().find(|panel| panel.model.as_ref() == Some(model)),
        None => tab_index.and_then(|index| panels.get(index)),
    }
}

/// Panel owned by the tab at `index`.
pub fn panel_for_tab<'a>(
    tabs: &[TabEntry],
    panels: &'a [PanelEntry],
    index: usize,
) -> Option<&'a PanelEntry> {
    let tab = tabs.get(index)?;
    resolve_panel(panels, tab.model.as_ref(), Some(index))
}

/// First tab whose resolved panel is `panel_key`.
pub fn tab_for_panel<'a>(
    tabs: &'a [TabEntry],
    panels: &[PanelEntry],
    panel_key: InstanceKey,
) -> Option<&'a TabEntry> {
    tabs.iter().enumerate().find_map(|(index, tab)| {
        resolve_panel(panels, tab.model.as_ref(), Some(index))
            .filter(|panel| panel.key == panel_key)
            .map(|_| tab)
    })
}
