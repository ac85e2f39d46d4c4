use thiserror::Error;

/// Errors raised while wiring tabs, lists and panels together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    #[error("{0} context not found")]
    MissingContext(&'static str),

    #[error("instance is not registered")]
    NotRegistered,

    #[error("no tab is selected")]
    NoSelectedTab,

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
