//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::models::ScrollMetrics;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Get the query string of the current URL (including the leading '?').
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Show or hide an element through its inline `display` style.
pub fn set_display(element: &Element, visible: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let value = if visible { "block" } else { "none" };
        let _ = html.style().set_property("display", value);
    }
}

/// Current viewport, scroll offset and document height.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let body = window.document()?.body()?;

    Some(ScrollMetrics {
        viewport_height: window.inner_height().ok()?.as_f64()?,
        scroll_y: window.scroll_y().ok()?,
        document_height: f64::from(body.scroll_height()),
    })
}
