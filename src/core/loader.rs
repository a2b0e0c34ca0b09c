//! Lazy section loading for the infinite-scroll homepage.
//!
//! The loader walks a fixed list of section names. Each [`SectionLoader::advance`]
//! claims the next name, inserts an empty section at once so the page grows
//! before any data arrives, then fills it from the session cache or the API.
//! A busy flag turns overlapping calls into no-ops; it is held by a guard for
//! the whole cycle and released on every exit path.

use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::{error, log};

use crate::config::{SECTION_ERROR_MESSAGE, grid_ids};
use crate::core::api::CatalogApi;
use crate::core::cache::CacheKey;
use crate::core::error::CatalogError;
use crate::core::platform::{PageContext, Platform, Surface};
use crate::core::render::{render_notice, render_section};
use crate::models::{Movie, Region, SectionName};
use crate::utils::format::{grid_id, section_title};

/// Outcome of one [`SectionLoader::advance`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// Another section is still loading; nothing was claimed.
    Busy,
    /// Every section has been claimed.
    Exhausted,
    /// The section was rendered.
    Loaded(SectionName),
    /// The section was claimed but its movies could not be loaded.
    Failed(SectionName),
}

/// Holds the busy flag for its lifetime.
struct BusyGuard<'a>(&'a Cell<bool>);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct SectionLoader<P: Platform> {
    ctx: Rc<PageContext<P>>,
    sections: Vec<SectionName>,
    cursor: Cell<usize>,
    busy: Cell<bool>,
}

impl<P: Platform> SectionLoader<P> {
    /// Create a loader over the configured lazy sections.
    pub fn new(ctx: Rc<PageContext<P>>) -> Self {
        let sections = ctx.config.home.lazy_sections.clone();
        Self {
            ctx,
            sections,
            cursor: Cell::new(0),
            busy: Cell::new(false),
        }
    }

    /// Index of the next section to claim.
    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.get() >= self.sections.len()
    }

    /// Claim and render the next section.
    pub async fn advance(&self) -> Advance {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return Advance::Busy;
        };
        let Some(name) = self.sections.get(self.cursor.get()).cloned() else {
            return Advance::Exhausted;
        };
        // Claimed before the first suspension point.
        self.cursor.set(self.cursor.get() + 1);

        let surface = &self.ctx.surface;
        let grid = grid_id(grid_ids::LAZY, name.as_str());
        surface.append_markup(
            Region::Sections.id(),
            &render_section(&grid, &section_title(name.as_str())),
        );

        match self.movies(&name).await {
            Ok(movies) => {
                self.ctx.show_movies(&grid, &movies);
                Advance::Loaded(name)
            }
            Err(e) => {
                error!("failed to load section {}: {}", name, e);
                surface.replace_markup(&grid, &render_notice(SECTION_ERROR_MESSAGE));
                Advance::Failed(name)
            }
        }
    }

    async fn movies(&self, name: &SectionName) -> Result<Vec<Movie>, CatalogError> {
        let key = CacheKey::Section(name.clone());
        if let Some(movies) = self.ctx.cached(&key) {
            return Ok(movies);
        }

        log!("fetching section {}", name);
        let mut bundle = self.ctx.api.sections(std::slice::from_ref(name)).await?;
        let movies = bundle.take(name.as_str()).unwrap_or_default();
        self.ctx.remember(&key, &movies);
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cache::MemoryStore;
    use crate::core::testing::{FakeApi, context, context_with_store, movies};

    fn name(s: &'static str) -> SectionName {
        SectionName::known(s)
    }

    fn genre_api() -> FakeApi {
        FakeApi::default()
            .with_section("action", movies("act", 5))
            .with_section("comedy", movies("com", 3))
            .with_section("drama", movies("dra", 6))
    }

    #[tokio::test]
    async fn test_sections_load_in_order_then_exhaust() {
        let ctx = context(genre_api());
        let loader = SectionLoader::new(Rc::clone(&ctx));

        assert_eq!(loader.advance().await, Advance::Loaded(name("action")));
        assert_eq!(loader.advance().await, Advance::Loaded(name("comedy")));
        assert_eq!(loader.advance().await, Advance::Loaded(name("drama")));
        assert_eq!(loader.advance().await, Advance::Exhausted);
        assert_eq!(loader.advance().await, Advance::Exhausted);

        let surface = &ctx.surface;
        assert_eq!(
            surface.appended_ids(Region::Sections.id()),
            vec!["dynamic-action", "dynamic-comedy", "dynamic-drama"]
        );
        assert_eq!(surface.card_count("dynamic-action"), 5);
        assert_eq!(surface.card_count("dynamic-comedy"), 3);
        assert_eq!(surface.card_count("dynamic-drama"), 6);
        assert_eq!(loader.cursor(), 3);
        assert!(loader.is_exhausted());
        assert!(!loader.is_busy());
    }

    #[tokio::test]
    async fn test_overlapping_calls_claim_one_section() {
        let ctx = context(genre_api());
        let loader = SectionLoader::new(Rc::clone(&ctx));

        let (first, second) = tokio::join!(loader.advance(), loader.advance());
        let outcomes = [first, second];

        assert!(outcomes.contains(&Advance::Loaded(name("action"))));
        assert!(outcomes.contains(&Advance::Busy));
        assert_eq!(loader.cursor(), 1);
        assert_eq!(ctx.api.calls(), vec!["sections=action"]);
        assert_eq!(ctx.surface.appended_ids(Region::Sections.id()), vec!["dynamic-action"]);

        assert_eq!(loader.advance().await, Advance::Loaded(name("comedy")));
    }

    #[tokio::test]
    async fn test_cached_sections_skip_the_network() {
        let ctx = context(genre_api());
        let first = SectionLoader::new(Rc::clone(&ctx));
        first.advance().await;
        first.advance().await;
        assert_eq!(ctx.api.calls().len(), 2);

        // A new page in the same session reads from the cache.
        let again = SectionLoader::new(Rc::clone(&ctx));
        assert_eq!(again.advance().await, Advance::Loaded(name("action")));
        assert_eq!(ctx.api.calls().len(), 2);
        assert_eq!(ctx.cache.store().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_releases_busy_flag() {
        let ctx = context(genre_api().failing());
        let loader = SectionLoader::new(Rc::clone(&ctx));

        assert_eq!(loader.advance().await, Advance::Failed(name("action")));
        assert!(!loader.is_busy());
        assert!(
            ctx.surface
                .markup("dynamic-action")
                .contains("Could not load this section.")
        );

        // The failed section is not retried; loading continues with the next.
        ctx.api.recover();
        assert_eq!(loader.advance().await, Advance::Loaded(name("comedy")));
        assert_eq!(ctx.cache.store().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_bucket_renders_empty_section() {
        let ctx = context(FakeApi::default());
        let loader = SectionLoader::new(Rc::clone(&ctx));

        assert_eq!(loader.advance().await, Advance::Loaded(name("action")));
        assert_eq!(ctx.surface.card_count("dynamic-action"), 0);
    }

    #[tokio::test]
    async fn test_unavailable_cache_falls_back_to_network() {
        let ctx = context_with_store(genre_api(), MemoryStore::unavailable());
        let first = SectionLoader::new(Rc::clone(&ctx));
        let second = SectionLoader::new(Rc::clone(&ctx));

        assert_eq!(first.advance().await, Advance::Loaded(name("action")));
        assert_eq!(second.advance().await, Advance::Loaded(name("action")));
        assert_eq!(ctx.api.calls(), vec!["sections=action", "sections=action"]);
    }

    #[tokio::test]
    async fn test_posters_verified_after_render() {
        let ctx = context(genre_api());
        let loader = SectionLoader::new(Rc::clone(&ctx));
        loader.advance().await;

        ctx.surface.settle().await;
        assert_eq!(ctx.probe.probed().len(), 5);
    }
}
