//! Failure modes for reading/writing the preference and touching the DOM.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("no document body")]
    NoDocument,
    #[error("element not found: #{0}")]
    ElementMissing(String),
    #[error("element #{0} is not a checkbox input")]
    NotACheckbox(String),
    #[error("class list error: {0}")]
    ClassList(String),
    #[error("could not attach change listener: {0}")]
    Listener(String),
    #[error("invalid theme mode: {0:?}")]
    InvalidMode(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
