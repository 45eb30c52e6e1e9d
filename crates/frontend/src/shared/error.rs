use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser environment.
///
/// None of these are fatal for the page: callers log them and carry on.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("session storage is not available")]
    NoSessionStorage,

    #[error("`{0}` is not loaded")]
    ActivatorMissing(&'static str),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}
