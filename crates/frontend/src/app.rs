use crate::tabs::{Tab, TabList, TabPanel, Tabs};
use leptos::prelude::*;
use tabset_core::{TabModel, TabsConfig};

/// Demo settings; shows that partial JSON config keeps the other defaults.
const DEMO_CONFIG: &str = r#"{ "id_prefix": "demo" }"#;

#[component]
pub fn App() -> impl IntoView {
    let config = TabsConfig::from_json(DEMO_CONFIG).unwrap_or_else(|err| {
        log::warn!("App: {}", err);
        TabsConfig::default()
    });

    // Selection is owned here so the buttons below can drive it.
    let selected_index = RwSignal::new(0);
    let show_extra = RwSignal::new(false);
    let last_model = RwSignal::new(None::<TabModel>);

    let on_extra_select = Callback::new(move |model: Option<TabModel>| {
        last_model.set(model);
        selected_index.set(2);
    });

    view! {
        <main class="tabset-demo">
            <Tabs selected_index=selected_index config=config>
                <TabList id="tablist">
                    <Tab id="tab1">"Overview"</Tab>
                    <Tab id="tab2">"Details"</Tab>
                    <Show when=move || show_extra.get()>
                        <Tab id="tab3" model="extra" on_select=on_extra_select>
                            "Extra"
                        </Tab>
                    </Show>
                </TabList>
                <TabPanel id="panel1">"Overview panel"</TabPanel>
                <TabPanel id="panel2">"Details panel"</TabPanel>
                <Show when=move || show_extra.get()>
                    <TabPanel id="panel3" model="extra">"Extra panel"</TabPanel>
                </Show>
            </Tabs>

            <div class="tabset-demo__controls">
                <button on:click=move |_| selected_index.set(1)>"Select details"</button>
                <button on:click=move |_| show_extra.update(|show| *show = !*show)>
                    "Toggle extra tab"
                </button>
            </div>
            <p>"Selected index: " {move || selected_index.get()}</p>
            <p>
                "Last model: "
                {move || last_model.get().map(|model| model.0.to_string()).unwrap_or_default()}
            </p>
        </main>
    }
}
