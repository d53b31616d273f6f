//! Browser-side catalog requests
//!
//! Uses `window.fetch` directly; the body text is handed to the core decoder
//! so the browser and native clients classify responses identically.

use freeplay_core::{decode_games_text, FetchError, FetchRequest, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Build stamp exported by build.rs
pub const BUILD_HASH: &str = env!("BUILD_HASH");
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

/// Catalog prefix; override at build time with `FREEPLAY_API_BASE`
pub fn api_base() -> &'static str {
    option_env!("FREEPLAY_API_BASE").unwrap_or(freeplay_core::config::PROXY_API_BASE)
}

/// Best human-readable text for a rejected JS promise
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn http_get_text(url: &str) -> Result<String, FetchError> {
    use web_sys::{console, Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    console::log_1(&format!("http_get: Fetching {}", url).into());
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| {
        console::error_1(&format!("http_get: Request creation failed: {:?}", e).into());
        FetchError::Transport(js_error_message(&e))
    })?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| FetchError::Transport(js_error_message(&e)))?;

    let window = web_sys::window().ok_or_else(|| FetchError::Transport("No window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            console::error_1(&format!("http_get: Fetch failed: {:?}", e).into());
            FetchError::Transport(js_error_message(&e))
        })?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| FetchError::Transport(js_error_message(&e)))?;
    console::log_1(&format!("http_get: Response status {}", resp.status()).into());

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| FetchError::Transport(js_error_message(&e)))?,
    )
    .await
    .map_err(|e| {
        console::error_1(&format!("http_get: Reading body failed: {:?}", e).into());
        FetchError::Transport(js_error_message(&e))
    })?;

    text.as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))
}

/// Perform a request issued by the reducer
pub async fn fetch_games(request: &FetchRequest) -> Result<Vec<Game>, FetchError> {
    let body = http_get_text(&request.url).await?;
    decode_games_text(&body)
}
