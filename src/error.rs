//! Crate error type.
//!
//! Browser calls fail with opaque `JsValue`s; those are flattened into
//! [`SiteError::Dom`] so component code can propagate with `?` and log once at
//! the event-handler boundary.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "browser")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
