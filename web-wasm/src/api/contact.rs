//! Contact form submission via `fetch`
//!
//! One POST per submission, form-encoded. Any HTTP status is handed back to the
//! controller as-is; a rejected fetch (offline, CORS, DNS) becomes a transport
//! failure. The controller decides what counts as success.

use js_sys::Error as JsError;
use portfolio_common::contact::encode_form_fields;
use portfolio_common::SubmitOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form endpoint baked in at build time from `PORTFOLIO_CONTACT_ENDPOINT`
pub const CONTACT_ENDPOINT: Option<&str> = option_env!("PORTFOLIO_CONTACT_ENDPOINT");

/// Post the fields to `endpoint` and classify the result
pub async fn submit_contact(endpoint: Option<&str>, fields: &[(&'static str, String)]) -> SubmitOutcome {
    let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) else {
        gloo::console::warn!("contact endpoint not configured");
        return SubmitOutcome::NotConfigured;
    };
    let body = encode_form_fields(fields);
    match post_form(endpoint, &body).await {
        Ok(status) => SubmitOutcome::Status(status),
        Err(err) => {
            let reason = js_error_message(&err);
            gloo::console::warn!(format!("contact submission failed: {}", reason));
            SubmitOutcome::Transport(reason)
        }
    }
}

async fn post_form(endpoint: &str, body: &str) -> Result<u16, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("Content-Type", FORM_CONTENT_TYPE)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    Ok(resp.status())
}

/// Readable text for a rejected promise
fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<JsError>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
