use leptos::prelude::*;
use tabset_core::navigation::{next_index, previous_index, select_previous_after_removal};
use tabset_core::panel::{panel_for_tab, resolve_panel, tab_for_panel};
use tabset_core::{
    InstanceKey, NavigationKey, PanelEntry, Registry, TabEntry, TabModel, TabsConfig, TabsError,
};

/// State of one `Tabs` container, shared with its lists and panels.
#[derive(Clone, Copy)]
pub struct TabsContext {
    /// Authoritative selection
    pub selected_index: RwSignal<usize>,
    pub tab_lists: RwSignal<Vec<TabListContext>>,
    pub panels: RwSignal<Registry<PanelEntry>>,
    config: StoredValue<TabsConfig>,
    on_select: Option<Callback<usize>>,
}

impl TabsContext {
    pub fn new(
        selected_index: RwSignal<usize>,
        on_select: Option<Callback<usize>>,
        config: TabsConfig,
    ) -> Self {
        Self {
            selected_index,
            tab_lists: RwSignal::new(vec![]),
            panels: RwSignal::new(Registry::new()),
            config: StoredValue::new(config),
            on_select,
        }
    }

    pub fn config(&self) -> TabsConfig {
        self.config.get_value()
    }

    /// Apply a selection request: the caller's handler wins, otherwise the
    /// index is written straight into `selected_index`.
    pub fn request_select(&self, index: usize) {
        leptos::logging::log!("🔶 request_select: index={}", index);
        match self.on_select {
            Some(handler) => handler.run(index),
            None => self.selected_index.set(index),
        }
    }

    pub fn register_tab_list(&self, tab_list: TabListContext) {
        self.tab_lists.update(|lists| lists.push(tab_list));
    }

    pub fn unregister_tab_list(&self, key: InstanceKey) {
        self.tab_lists
            .try_update(|lists| lists.retain(|list| list.key != key));
    }

    pub fn register_panel(&self, panel: PanelEntry) {
        self.panels.update(|panels| panels.register(panel));
    }

    pub fn unregister_panel(&self, key: InstanceKey) {
        self.panels.try_update(|panels| panels.unregister(key));
    }

    /// Lists after the first are navigable but do not drive panels.
    pub fn primary_tab_list(&self) -> Option<TabListContext> {
        self.tab_lists.with(|lists| lists.first().copied())
    }

    /// Panel resolved by the currently selected tab.
    pub fn selected_panel(&self) -> Option<PanelEntry> {
        let tab_list = self.primary_tab_list()?;
        let index = self.selected_index.get();
        tab_list.tabs.with(|tabs| {
            self.panels.with(|panels| {
                panel_for_tab(tabs.as_slice(), panels.as_slice(), index).cloned()
            })
        })
    }

    pub fn panel_is_selected(&self, panel_key: InstanceKey) -> bool {
        self.selected_panel()
            .is_some_and(|panel| panel.key == panel_key)
    }

    /// Tab that labels the panel, if any.
    pub fn tab_for_panel(&self, panel_key: InstanceKey) -> Option<TabEntry> {
        let tab_list = self.primary_tab_list()?;
        tab_list.tabs.with(|tabs| {
            self.panels.with(|panels| {
                tab_for_panel(tabs.as_slice(), panels.as_slice(), panel_key).cloned()
            })
        })
    }
}

/// State of one `TabList`. The selection itself lives in the container.
#[derive(Clone, Copy)]
pub struct TabListContext {
    pub key: InstanceKey,
    pub tabs: RwSignal<Registry<TabEntry>>,
    pub container: TabsContext,
    on_select: Option<Callback<usize>>,
}

impl TabListContext {
    pub fn new(key: InstanceKey, container: TabsContext, on_select: Option<Callback<usize>>) -> Self {
        Self {
            key,
            tabs: RwSignal::new(Registry::new()),
            container,
            on_select,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.container.selected_index.get()
    }

    pub fn selected_tab(&self) -> Option<TabEntry> {
        let index = self.selected_index();
        self.tabs.with(|tabs| tabs.get(index).cloned())
    }

    pub fn selected_tab_untracked(&self) -> Option<TabEntry> {
        let index = self.container.selected_index.get_untracked();
        self.tabs.with_untracked(|tabs| tabs.get(index).cloned())
    }

    pub fn is_selected(&self, key: InstanceKey) -> bool {
        self.selected_tab().is_some_and(|tab| tab.key == key)
    }

    pub fn index_of(&self, key: InstanceKey) -> Option<usize> {
        self.tabs.with(|tabs| tabs.index_of(key))
    }

    /// Panel of the tab, matched by model (first match wins) or, for a tab
    /// without a model, by position.
    pub fn tab_panel(&self, key: InstanceKey) -> Option<PanelEntry> {
        let (index, model) = self.tabs.with(|tabs| {
            let index = tabs.index_of(key);
            let model = tabs.find(key).and_then(|tab| tab.model.clone());
            (index, model)
        });
        index?;
        self.container
            .panels
            .with(|panels| resolve_panel(panels.as_slice(), model.as_ref(), index).cloned())
    }

    pub fn register_tab(&self, tab: TabEntry) {
        leptos::logging::log!("✅ register_tab: '{}'", tab.element_id);
        self.tabs.update(|tabs| tabs.register(tab));
    }

    /// Remove a tab and keep the selection on a sensible neighbour.
    pub fn unregister_tab(&self, key: InstanceKey) {
        let Some(selected) = self.container.selected_index.try_get_untracked() else {
            return;
        };
        let Some(was_selected) = self
            .tabs
            .try_with_untracked(|tabs| tabs.get(selected).is_some_and(|tab| tab.key == key))
        else {
            return;
        };
        let Some(removed) = self.tabs.try_update(|tabs| tabs.unregister(key)).flatten() else {
            return;
        };
        leptos::logging::log!("🔴 unregister_tab: index={}, selected={}", removed, selected);

        if select_previous_after_removal(removed, selected, was_selected) {
            self.select_previous_tab();
        }
    }

    pub fn select_next_tab(&self) {
        let len = self.tabs.with_untracked(|tabs| tabs.len());
        let index = next_index(self.container.selected_index.get_untracked(), len);
        self.select_tab_by_index(index);
    }

    pub fn select_previous_tab(&self) {
        let len = self.tabs.with_untracked(|tabs| tabs.len());
        let index = previous_index(self.container.selected_index.get_untracked(), len);
        self.select_tab_by_index(index);
    }

    pub fn navigate(&self, key: NavigationKey) {
        match key {
            NavigationKey::Previous => self.select_previous_tab(),
            NavigationKey::Next => self.select_next_tab(),
        }
    }

    pub fn select_tab(&self, key: InstanceKey) {
        match self.tabs.with_untracked(|tabs| tabs.index_of(key)) {
            Some(index) => self.select_tab_by_index(index),
            None => log::warn!("select_tab: {}", TabsError::NotRegistered),
        }
    }

    /// Click/touch on a tab: the tab's own handler receives its model,
    /// otherwise the tab selects itself through this list.
    pub fn select_from_tab(
        &self,
        key: InstanceKey,
        model: Option<TabModel>,
        on_select: Option<Callback<Option<TabModel>>>,
    ) {
        match on_select {
            Some(handler) => handler.run(model),
            None => self.select_tab(key),
        }
    }

    /// The index is passed through unchecked.
    pub fn select_tab_by_index(&self, index: usize) {
        match self.on_select {
            Some(handler) => handler.run(index),
            None => self.container.request_select(index),
        }
    }
}

pub fn use_tabs_context() -> Result<TabsContext, TabsError> {
    use_context::<TabsContext>().ok_or(TabsError::MissingContext("TabsContext"))
}

pub fn use_tab_list_context() -> Result<TabListContext, TabsError> {
    use_context::<TabListContext>().ok_or(TabsError::MissingContext("TabListContext"))
}
