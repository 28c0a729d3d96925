//! Browser environment errors.
//!
//! These only ever disable the feature that hit them; startup logs the error
//! and moves on to the next feature.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("missing element: {0}")]
    Missing(String),
    #[error("element {selector} is not a {expected}")]
    WrongType { selector: String, expected: &'static str },
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    pub fn js(context: &'static str, err: &JsValue) -> Self {
        Self::Js { context, message: js_message(err) }
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
