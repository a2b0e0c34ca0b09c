//! The seams between catalog logic and the browser.
//!
//! A [`Platform`] names one implementation of each collaborator: the backend
//! API, session storage, the page surface and the image probe. The browser
//! build wires in the real ones; tests use in-memory fakes.

use std::rc::Rc;

use leptos::logging::{log, warn};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::CatalogConfig;
use crate::core::api::CatalogApi;
use crate::core::cache::{CacheKey, ResponseCache, SessionStore};
use crate::core::poster::{self, ImageProbe, LocalTask, PosterCard};
use crate::core::render::CardRenderer;
use crate::models::{Movie, ScrollMetrics};

/// DOM operations the catalog needs. Targets are element ids.
pub trait Surface {
    type Card: PosterCard + 'static;

    fn set_visible(&self, target: &str, visible: bool);
    /// Replace the element's content with plain text.
    fn set_text(&self, target: &str, text: &str);
    /// Insert markup at the end of the element.
    fn append_markup(&self, target: &str, markup: &str);
    /// Replace the element's content with markup.
    fn replace_markup(&self, target: &str, markup: &str);
    /// The movie cards currently inside the element.
    fn cards(&self, target: &str) -> Vec<Self::Card>;
    /// Run a task in the background.
    fn detach(&self, task: LocalTask);
    /// Current viewport and document measurements, if they can be read.
    fn scroll_metrics(&self) -> Option<ScrollMetrics>;
    /// Call `handler` on every page scroll for the rest of the page's life.
    fn on_scroll(&self, handler: Box<dyn Fn()>);
}

/// One implementation of every collaborator.
pub trait Platform: 'static {
    type Api: CatalogApi;
    type Store: SessionStore;
    type Surface: Surface;
    type Probe: ImageProbe + 'static;
}

/// Everything a page flow needs, shared by the controller and the loader.
pub struct PageContext<P: Platform> {
    pub config: CatalogConfig,
    pub api: P::Api,
    pub cache: ResponseCache<P::Store>,
    pub surface: P::Surface,
    pub probe: Rc<P::Probe>,
    pub cards: CardRenderer,
}

impl<P: Platform> PageContext<P> {
    pub fn new(
        config: CatalogConfig,
        api: P::Api,
        store: P::Store,
        surface: P::Surface,
        probe: P::Probe,
    ) -> Self {
        let cards = CardRenderer::new(&config.cards);
        Self {
            config,
            api,
            cache: ResponseCache::new(store),
            surface,
            probe: Rc::new(probe),
            cards,
        }
    }

    /// Look up a cached response.
    pub fn cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let hit = self.cache.get(key);
        if hit.is_some() {
            log!("cache hit: {}", key);
        }
        hit
    }

    /// Store a response. Failures are logged and otherwise ignored.
    pub fn remember<T: Serialize>(&self, key: &CacheKey, value: &T) {
        if let Err(e) = self.cache.set(key, value) {
            warn!("not caching {}: {}", key, e);
        }
    }

    /// Render movies into `target` and start verifying their posters.
    pub fn show_movies(&self, target: &str, movies: &[Movie]) {
        self.surface
            .replace_markup(target, &self.cards.render_all(movies));
        self.verify_posters(target);
    }

    /// Start poster verification for every card inside `target`.
    pub fn verify_posters(&self, target: &str) {
        for task in poster::verify(self.surface.cards(target), &self.probe) {
            self.surface.detach(task);
        }
    }
}
