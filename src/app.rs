//! Root application module.
//!
//! Mounts the page skeleton, wires the browser implementations of the
//! catalog seams together and starts the page flow for the current URL.

use std::rc::Rc;

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::{CatalogShell, DomSurface};
use crate::config::CatalogConfig;
use crate::core::{BrowserSession, HttpCatalogApi, PageContext, PageController, Platform};
use crate::models::PageMode;
use crate::utils::BrowserImageProbe;
use crate::utils::dom;

// ============================================================================
// Browser platform
// ============================================================================

/// The live page: HTTP API, `sessionStorage`, the document and `<img>` probes.
pub struct Browser;

impl Platform for Browser {
    type Api = HttpCatalogApi;
    type Store = BrowserSession;
    type Surface = DomSurface;
    type Probe = BrowserImageProbe;
}

// ============================================================================
// Components
// ============================================================================

/// Root application component.
///
/// Renders the static skeleton only. Content is filled in by [`start`] once
/// the skeleton is mounted.
#[component]
pub fn App() -> impl IntoView {
    let query = PageMode::from_query(&dom::location_search())
        .query()
        .unwrap_or_default()
        .to_string();

    view! { <CatalogShell query=query /> }
}

// ============================================================================
// Startup
// ============================================================================

/// Run the page flow for the current URL.
pub fn start(config: CatalogConfig) {
    let mode = PageMode::from_query(&dom::location_search());
    log!("starting in {:?} mode", mode);

    let api = HttpCatalogApi::new(&config.api);
    let ctx = Rc::new(PageContext::<Browser>::new(
        config,
        api,
        BrowserSession,
        DomSurface::new(),
        BrowserImageProbe,
    ));

    wasm_bindgen_futures::spawn_local(Rc::new(PageController::new(ctx, mode)).start());
}
