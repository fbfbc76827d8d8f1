//! Server API Bindings
//!
//! Frontend bindings to the REST collection API, over the browser Fetch
//! API. Every binding resolves to a single undifferentiated failure on a
//! non-2xx status or a network/parse error.

mod todo;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use todo::*;

/// Issue a JSON request and hand back the decoded response body.
pub(crate) async fn fetch_json(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    if has_body {
        request
            .headers()
            .set("content-type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("{} {} failed with status {}", method, url, response.status()));
    }

    let json = response.json().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(json).await.map_err(|e| format!("{:?}", e))
}
