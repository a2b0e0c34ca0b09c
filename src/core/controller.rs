//! Page entry point: picks Home or Search mode and runs its flow.

use std::rc::Rc;

use leptos::logging::{error, log};

use crate::config::{LOAD_ERROR_MESSAGE, grid_ids};
use crate::core::api::CatalogApi;
use crate::core::cache::CacheKey;
use crate::core::error::CatalogError;
use crate::core::loader::{Advance, SectionLoader};
use crate::core::platform::{PageContext, Platform, Surface};
use crate::core::render::render_section;
use crate::models::{Movie, PageMode, Region, ScrollMetrics, SearchResults, SectionsBundle};
use crate::utils::format::{grid_id, section_title};

pub struct PageController<P: Platform> {
    ctx: Rc<PageContext<P>>,
    mode: PageMode,
    loader: Rc<SectionLoader<P>>,
}

impl<P: Platform> PageController<P> {
    pub fn new(ctx: Rc<PageContext<P>>, mode: PageMode) -> Self {
        let loader = Rc::new(SectionLoader::new(Rc::clone(&ctx)));
        Self { ctx, mode, loader }
    }

    /// Show the layout for the current mode and load its content.
    ///
    /// Failures are shown on the page in place of the loading indicator and
    /// also returned.
    pub async fn run(&self) -> Result<(), CatalogError> {
        let surface = &self.ctx.surface;
        let home = self.mode == PageMode::Home;
        surface.set_visible(Region::HomeLayout.id(), home);
        surface.set_visible(Region::SearchLayout.id(), !home);

        let (status, result) = match &self.mode {
            PageMode::Home => (Region::HomeStatus, self.load_home().await),
            PageMode::Search(query) => (Region::SearchStatus, self.load_search(query).await),
        };

        if result.is_err() {
            surface.set_text(status.id(), LOAD_ERROR_MESSAGE);
            surface.set_visible(status.id(), true);
            if status == Region::SearchStatus {
                surface.set_visible(Region::SearchResultsBlock.id(), false);
                surface.set_visible(Region::RecommendationsBlock.id(), false);
            }
        }
        result
    }

    /// Run the page, then in home mode keep lazy sections coming as the
    /// reader scrolls.
    ///
    /// Lazy sections are fetched on their own, so the scroll listener is
    /// attached even when the homepage bundle failed to load.
    pub async fn start(self: Rc<Self>) {
        if let Err(e) = self.run().await {
            error!("page load failed: {}", e);
        }
        if self.mode != PageMode::Home {
            return;
        }

        let controller = Rc::clone(&self);
        self.ctx.surface.on_scroll(Box::new(move || {
            let task = Rc::clone(&controller);
            controller
                .ctx
                .surface
                .detach(Box::pin(async move { task.fill().await }));
        }));
        self.fill().await;
    }

    /// Load lazy sections while the page is scrolled near its bottom.
    ///
    /// Every loaded section changes the page height, so the check repeats
    /// until the page is tall enough or a load does not complete.
    pub async fn fill(&self) {
        while let Some(metrics) = self.ctx.surface.scroll_metrics() {
            if !self.wants_more(&metrics) {
                break;
            }
            match self.loader.advance().await {
                Advance::Loaded(_) => continue,
                Advance::Busy | Advance::Exhausted | Advance::Failed(_) => break,
            }
        }
    }

    /// Whether a scroll position should reveal another lazy section.
    pub fn wants_more(&self, metrics: &ScrollMetrics) -> bool {
        self.mode == PageMode::Home
            && !self.loader.is_exhausted()
            && metrics.near_bottom(f64::from(self.ctx.config.home.scroll_threshold_px))
    }

    async fn load_home(&self) -> Result<(), CatalogError> {
        let key = CacheKey::Homepage;
        let bundle = match self.ctx.cached::<SectionsBundle>(&key) {
            Some(bundle) => bundle,
            None => {
                log!("fetching homepage sections");
                let bundle = self.ctx.api.sections(&[]).await?;
                self.ctx.remember(&key, &bundle);
                bundle
            }
        };

        self.render_home(&bundle);
        Ok(())
    }

    fn render_home(&self, bundle: &SectionsBundle) {
        let surface = &self.ctx.surface;
        let min_items = self.ctx.config.home.min_section_items;

        surface.set_visible(Region::HomeStatus.id(), false);
        surface.replace_markup(Region::Sections.id(), "");

        for (name, movies) in bundle.iter().filter(|(_, movies)| movies.len() >= min_items) {
            let grid = grid_id(grid_ids::HOME, name);
            surface.append_markup(Region::Sections.id(), &render_section(&grid, &section_title(name)));
            self.ctx.show_movies(&grid, movies);
        }
    }

    async fn load_search(&self, query: &str) -> Result<(), CatalogError> {
        let key = CacheKey::search(query);
        let results = match self.ctx.cached::<SearchResults>(&key) {
            Some(results) => results,
            None => {
                log!("searching for {:?}", query);
                let results = self.ctx.api.search(query).await?;
                self.ctx.remember(&key, &results);
                results
            }
        };

        self.render_search(query, &results);
        Ok(())
    }

    fn render_search(&self, query: &str, results: &SearchResults) {
        self.show_list(
            Region::SearchResultsBlock,
            Region::SearchResults,
            &results.search_results,
        );
        self.show_list(
            Region::RecommendationsBlock,
            Region::Recommendations,
            &results.recommendations,
        );

        let surface = &self.ctx.surface;
        if results.is_empty() {
            surface.set_text(
                Region::SearchStatus.id(),
                &format!("No results for \"{}\".", query),
            );
            surface.set_visible(Region::SearchStatus.id(), true);
        } else {
            surface.set_visible(Region::SearchStatus.id(), false);
        }
    }

    /// Fill a result grid, hiding its whole block when there is nothing to show.
    fn show_list(&self, block: Region, grid: Region, movies: &[Movie]) {
        let surface = &self.ctx.surface;
        if movies.is_empty() {
            surface.set_visible(block.id(), false);
        } else {
            surface.set_visible(block.id(), true);
            self.ctx.show_movies(grid.id(), movies);
        }
    }
}
