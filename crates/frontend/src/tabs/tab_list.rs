use super::context::{use_tabs_context, TabListContext};
use crate::runloop;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use tabset_core::{
    DeferredAction, InstanceKey, InstanceKind, NavigationKey, TabListAttributes, TabsError,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Ordered list of `Tab`s with arrow-key navigation.
///
/// Left/Up selects the previous tab and Right/Down the next one, wrapping at
/// both ends; focus follows the selection after the next render.
#[component]
pub fn TabList(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Receives the requested index instead of the container
    #[prop(optional)]
    on_select: Option<Callback<usize>>,
    children: Children,
) -> impl IntoView {
    let container = match use_tabs_context() {
        Ok(container) => container,
        Err(err) => {
            log::error!("TabList: {}", err);
            return view! { <ul class="tabset-tab-list">{children()}</ul> }.into_any();
        }
    };
    let config = container.config();
    let key = InstanceKey::new();
    let tab_list = TabListContext::new(key, container, on_select);
    provide_context(tab_list);

    let element_id = id.unwrap_or_else(|| InstanceKind::TabList.element_id(&config.id_prefix, key));
    log!("🔨 TabList CREATED: '{}'", element_id);

    runloop::schedule_once(key, DeferredAction::RegisterTabList, move || {
        container.register_tab_list(tab_list)
    });
    on_cleanup(move || {
        runloop::schedule_once(key, DeferredAction::UnregisterTabList, move || {
            container.unregister_tab_list(key)
        });
    });

    let attrs = TabListAttributes::derive(&config);

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(navigation) =
            NavigationKey::from_key(&ev.key()).or_else(|| NavigationKey::from_key_code(ev.key_code()))
        else {
            return;
        };

        tab_list.navigate(navigation);
        ev.prevent_default();
        runloop::after_render(move || {
            if let Err(err) = focus_selected_tab(&tab_list) {
                log::warn!("TabList: focus skipped, {}", err);
            }
        });
    };

    let class_list = move || match class.get() {
        Some(extra) => format!("tabset-tab-list {}", extra),
        None => "tabset-tab-list".to_string(),
    };

    view! {
        <ul
            id=element_id
            class=class_list
            role=attrs.role
            aria-multiselectable=attrs.aria_multiselectable
            on:keydown=on_keydown
        >
            {children()}
        </ul>
    }
    .into_any()
}

/// Move keyboard focus to the element of the selected tab.
pub fn focus_selected_tab(tab_list: &TabListContext) -> Result<(), TabsError> {
    let tab = tab_list
        .selected_tab_untracked()
        .ok_or(TabsError::NoSelectedTab)?;
    let element = document()
        .get_element_by_id(&tab.element_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| TabsError::ElementNotFound(tab.element_id.clone()))?;
    element
        .focus()
        .map_err(|_| TabsError::ElementNotFound(tab.element_id))
}
