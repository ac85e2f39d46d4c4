use super::context::{use_tab_list_context, TabListContext};
use crate::runloop;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use tabset_core::{
    DeferredAction, InstanceKey, InstanceKind, TabAttributes, TabEntry, TabModel, TabsConfig,
};

/// A single selectable tab.
///
/// The tab holds no selection state of its own: `aria-selected`, the active
/// class, `tabindex` and the rest are derived from the container's index
/// and this tab's position in its `TabList`.
#[component]
pub fn Tab(
    /// Ties the tab to the `TabPanel` with an equal model. Without one the
    /// tab pairs with the panel at its own position.
    #[prop(optional, into)]
    model: Option<TabModel>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Receives the model on click; without it the tab selects itself
    #[prop(optional)]
    on_select: Option<Callback<Option<TabModel>>>,
    children: Children,
) -> impl IntoView {
    let tab_list = match use_tab_list_context() {
        Ok(tab_list) => tab_list,
        Err(err) => {
            log::error!("Tab: {}", err);
            return view! { <span class="tabset-tab">{children()}</span> }.into_any();
        }
    };
    let config = tab_list.container.config();
    let key = InstanceKey::new();
    let element_id = id.unwrap_or_else(|| InstanceKind::Tab.element_id(&config.id_prefix, key));

    log!("🔨 Tab CREATED: '{}'", element_id);

    let entry = TabEntry {
        key,
        element_id: element_id.clone(),
        model: model.clone(),
    };
    runloop::schedule_once(key, DeferredAction::RegisterTab, move || {
        tab_list.register_tab(entry)
    });
    let element_id_for_cleanup = element_id.clone();
    on_cleanup(move || {
        log!("💥 Tab DESTROYED: '{}'", element_id_for_cleanup);
        runloop::schedule_once(key, DeferredAction::UnregisterTab, move || {
            tab_list.unregister_tab(key)
        });
    });

    let role = config.tab_role.clone();
    let link_tabs = config.link_tabs;
    let attrs = tab_attributes(tab_list, key, config);

    let model = StoredValue::new(model);
    let select = move || tab_list.select_from_tab(key, model.get_value(), on_select);
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        select();
    };
    let on_touchend = move |ev: ev::TouchEvent| {
        ev.prevent_default();
        select();
    };

    let class_list = move || {
        let base = match class.get() {
            Some(extra) => format!("tabset-tab {}", extra),
            None => "tabset-tab".to_string(),
        };
        attrs.with(|attrs| attrs.class_list(&base))
    };
    let aria_controls = move || attrs.with(|attrs| attrs.aria_controls.clone());
    let aria_selected = move || attrs.with(|attrs| attrs.aria_selected);
    let aria_expanded = move || attrs.with(|attrs| attrs.aria_expanded);
    let selected = selected_binding(attrs);
    let tabindex = move || attrs.with(|attrs| attrs.tabindex.map(|index| index.to_string()));

    if link_tabs {
        let href = move || attrs.with(|attrs| attrs.href.clone());
        view! {
            <a
                id=element_id
                class=class_list
                role=role
                href=href
                aria-controls=aria_controls
                aria-selected=aria_selected
                aria-expanded=aria_expanded
                tabindex=tabindex
                on:click=on_click
                on:touchend=on_touchend
            >
                {children()}
            </a>
        }
        .attr("selected", selected)
        .into_any()
    } else {
        view! {
            <li
                id=element_id
                class=class_list
                role=role
                aria-controls=aria_controls
                aria-selected=aria_selected
                aria-expanded=aria_expanded
                tabindex=tabindex
                on:click=on_click
                on:touchend=on_touchend
            >
                {children()}
            </li>
        }
        .attr("selected", selected)
        .into_any()
    }
}

/// Attributes of the tab `key`, recomputed when the selection or the panel
/// registry changes.
fn tab_attributes(tab_list: TabListContext, key: InstanceKey, config: TabsConfig) -> Memo<TabAttributes> {
    let is_selected = Memo::new(move |_| tab_list.is_selected(key));
    let panel_id = Memo::new(move |_| tab_list.tab_panel(key).map(|panel| panel.element_id));
    Memo::new(move |_| TabAttributes::derive(is_selected.get(), panel_id.get().as_deref(), &config))
}

/// Value of the `selected` attribute: `"selected"` or absent.
fn selected_binding(attrs: Memo<TabAttributes>) -> impl Fn() -> Option<&'static str> + Copy {
    move || attrs.with(|attrs| attrs.selected)
}
