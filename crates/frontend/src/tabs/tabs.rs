use super::context::TabsContext;
use leptos::prelude::*;
use tabset_core::TabsConfig;

/// Outer tabs container. Owns the selected index and shares it, together
/// with the presentation config, with nested `TabList`s and `TabPanel`s.
///
/// Pass `selected_index` to control the selection from outside, and
/// `on_select` to intercept selection requests instead of applying them.
#[component]
pub fn Tabs(
    #[prop(optional)] selected_index: Option<RwSignal<usize>>,
    #[prop(optional)] on_select: Option<Callback<usize>>,
    #[prop(optional)] config: Option<TabsConfig>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let config = match config.map(|config| config.validate().map(|_| config)) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("Tabs: {}, falling back to defaults", err);
            TabsConfig::default()
        }
        None => TabsConfig::default(),
    };
    let selected_index = selected_index.unwrap_or_else(|| RwSignal::new(0));

    provide_context(TabsContext::new(selected_index, on_select, config));

    let class_list = move || match class.get() {
        Some(extra) => format!("tabset {}", extra),
        None => "tabset".to_string(),
    };

    view! {
        <div id=id class=class_list>
            {children()}
        </div>
    }
}
