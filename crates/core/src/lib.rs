//! Framework-independent coordination logic for tabsets.
//!
//! Everything here is plain data plus small functions over it: the Leptos
//! components in `tabset_ui` keep these values inside signals and call into
//! this crate to register members, navigate and derive ARIA attributes.

pub mod attributes;
pub mod config;
pub mod deferred;
pub mod error;
pub mod keyboard;
pub mod model;
pub mod navigation;
pub mod panel;
pub mod registry;

pub use attributes::{TabAttributes, TabListAttributes, TabPanelAttributes};
pub use config::TabsConfig;
pub use deferred::{DeferredAction, DeferredQueue};
pub use error::TabsError;
pub use keyboard::NavigationKey;
pub use model::{InstanceKey, InstanceKind, PanelEntry, TabEntry, TabModel};
pub use registry::{Keyed, Registry};
