//! Tab components
//!
//! Contains:
//! - `tabs` - the `Tabs` container, sole owner of the selected index
//! - `tab_list` - list of tabs, keyboard navigation
//! - `tab` - a single tab with its ARIA attributes
//! - `tab_panel` - content pane, visible only for the selected tab
//! - `context` - reactive contexts that tie the components together

pub mod context;
pub mod tab;
pub mod tab_list;
pub mod tab_panel;
#[allow(clippy::module_inception)]
pub mod tabs;

pub use context::{use_tab_list_context, use_tabs_context, TabListContext, TabsContext};
pub use tab::Tab;
pub use tab_list::TabList;
pub use tab_panel::TabPanel;
pub use tabs::Tabs;
