use super::context::use_tabs_context;
use crate::runloop;
use leptos::logging::log;
use leptos::prelude::*;
use tabset_core::{DeferredAction, InstanceKey, InstanceKind, PanelEntry, TabModel, TabPanelAttributes};

/// Content pane shown while its tab is selected.
#[component]
pub fn TabPanel(
    #[prop(optional, into)] model: Option<TabModel>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let container = match use_tabs_context() {
        Ok(container) => container,
        Err(err) => {
            log::error!("TabPanel: {}", err);
            return view! { <div class="tabset-tab-panel">{children()}</div> }.into_any();
        }
    };
    let config = container.config();
    let key = InstanceKey::new();
    let element_id =
        id.unwrap_or_else(|| InstanceKind::TabPanel.element_id(&config.id_prefix, key));

    log!("🔨 TabPanel CREATED: '{}'", element_id);

    let entry = PanelEntry {
        key,
        element_id: element_id.clone(),
        model,
    };
    runloop::schedule_once(key, DeferredAction::RegisterPanel, move || {
        container.register_panel(entry)
    });
    on_cleanup(move || {
        runloop::schedule_once(key, DeferredAction::UnregisterPanel, move || {
            container.unregister_panel(key)
        });
    });

    let is_selected = Memo::new(move |_| container.panel_is_selected(key));
    let tab_id = Memo::new(move |_| container.tab_for_panel(key).map(|tab| tab.element_id));
    let role = config.tab_panel_role.clone();
    let attrs = Memo::new(move |_| {
        TabPanelAttributes::derive(is_selected.get(), tab_id.get().as_deref(), &config)
    });

    let class_list = move || {
        let base = match class.get() {
            Some(extra) => format!("tabset-tab-panel {}", extra),
            None => "tabset-tab-panel".to_string(),
        };
        attrs.with(|attrs| attrs.class_list(&base))
    };

    view! {
        <div
            id=element_id
            class=class_list
            role=role
            aria-labelledby=move || attrs.with(|attrs| attrs.aria_labelledby.clone())
            hidden=move || attrs.with(|attrs| attrs.hidden)
        >
            {children()}
        </div>
    }
    .into_any()
}
