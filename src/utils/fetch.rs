//! Network fetching utilities with timeout support.

use js_sys::{Array, Date, Promise};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, so a promise that itself
/// resolves to `undefined` is reported as [`RaceResult::TimedOut`].
pub async fn race_with_timeout(promise: Promise, timeout_ms: u32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let delay = i32::try_from(timeout_ms).unwrap_or(i32::MAX);
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, FetchError> {
    let text = fetch_url(url, timeout_ms).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL using the Fetch API, failing after `timeout_ms`.
///
/// The budget covers the whole exchange: the body read gets whatever time
/// the response headers left over.
async fn fetch_url(url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let started = Date::now();

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            let remaining =
                remaining_budget(timeout_ms, Date::now() - started).ok_or(FetchError::Timeout)?;
            let body = read_text(&resp, remaining).await?;

            if !resp.ok() {
                return Err(status_error(resp.status(), &body));
            }

            Ok(body)
        }
    }
}

async fn read_text(resp: &Response, timeout_ms: u32) -> Result<String, FetchError> {
    let promise = resp.text().map_err(|_| FetchError::ResponseReadFailed)?;

    match race_with_timeout(promise, timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(_) => Err(FetchError::ResponseReadFailed),
        RaceResult::Completed(text) => text.as_string().ok_or(FetchError::InvalidContent),
    }
}

/// Milliseconds left of `timeout_ms` after `elapsed_ms`, or `None` once the
/// budget is spent.
fn remaining_budget(timeout_ms: u32, elapsed_ms: f64) -> Option<u32> {
    let left = f64::from(timeout_ms) - elapsed_ms.max(0.0);
    (left >= 1.0).then(|| left as u32)
}

/// Error body produced by the backend's error handler.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Build the error for a non-2xx response, keeping the backend's message
/// when the body carries one.
pub(crate) fn status_error(status: u16, body: &str) -> FetchError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => FetchError::Api {
            status,
            message: parsed.error,
        },
        _ => FetchError::HttpError(status),
    }
}
