//! Browser-side dataset fetch.
//!
//! A single `fetch()` of the static export. No retry: a failure is handed back
//! to the caller, which records the dataset as unavailable.

use dwd_pow::{Dataset, LoadError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch and decode the dataset at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Request("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Request("response body is not text".to_string()))?;

    log::info!("loader: Fetched {} bytes from {}", text.len(), url);
    Dataset::from_json_str(&text)
}

fn js_error(value: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Request(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
