//! System clipboard access through `navigator.clipboard.writeText`.
//!
//! Looked up with `Reflect` so the build does not depend on web-sys'
//! clipboard bindings; browsers without the API (or insecure origins)
//! return an [`AppError::Clipboard`].

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

fn js_error(context: &str, err: JsValue) -> AppError {
    let message = js_sys::Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown JS error".to_string());
    AppError::Clipboard(format!("{}: {}", context, message))
}

/// Write plain text to the system clipboard.
pub async fn write_text(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("no global window".into()))?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| js_error("navigator.clipboard", e))?;
    if clipboard.is_null() || clipboard.is_undefined() {
        return Err(AppError::Clipboard("clipboard API not available".into()));
    }

    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| js_error("clipboard.writeText", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| AppError::Clipboard("clipboard.writeText is not a function".into()))?;

    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| js_error("writeText call", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".into()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| js_error("writeText rejected", e))?;

    log::debug!("📋 Copied {} characters to clipboard", text.len());
    Ok(())
}
