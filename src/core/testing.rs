//! In-memory platform for tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::config::CatalogConfig;
use crate::core::api::CatalogApi;
use crate::core::cache::MemoryStore;
use crate::core::error::{CatalogError, FetchError, PosterError};
use crate::core::platform::{PageContext, Platform, Surface};
use crate::core::poster::{ImageProbe, LocalTask, PosterCard};
use crate::models::{Movie, ScrollMetrics, SearchResults, SectionName, SectionsBundle};

pub struct Fake;

impl Platform for Fake {
    type Api = FakeApi;
    type Store = MemoryStore;
    type Surface = FakeSurface;
    type Probe = FakeProbe;
}

pub fn context(api: FakeApi) -> Rc<PageContext<Fake>> {
    context_with_store(api, MemoryStore::default())
}

pub fn context_with_store(api: FakeApi, store: MemoryStore) -> Rc<PageContext<Fake>> {
    Rc::new(PageContext::new(
        CatalogConfig::default(),
        api,
        store,
        FakeSurface::default(),
        FakeProbe::default(),
    ))
}

pub fn movie(title: &str) -> Movie {
    let slug = title.to_lowercase().replace(' ', "-");
    Movie {
        title: Some(title.to_string()),
        poster_url: Some(format!("http://img.example/{}.jpg", slug)),
        ..Default::default()
    }
}

pub fn movies(prefix: &str, count: usize) -> Vec<Movie> {
    (0..count).map(|i| movie(&format!("{} {}", prefix, i))).collect()
}

// ============================================================================
// API
// ============================================================================

/// Serves canned responses. Every call yields once before answering so
/// concurrent callers interleave.
#[derive(Default)]
pub struct FakeApi {
    home: SectionsBundle,
    sections: HashMap<String, Vec<Movie>>,
    searches: HashMap<String, SearchResults>,
    failing: Cell<bool>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_home(mut self, bundle: SectionsBundle) -> Self {
        self.home = bundle;
        self
    }

    pub fn with_section(mut self, name: &str, movies: Vec<Movie>) -> Self {
        self.sections.insert(name.to_string(), movies);
        self
    }

    pub fn with_search(mut self, query: &str, results: SearchResults) -> Self {
        self.searches.insert(query.to_lowercase(), results);
        self
    }

    pub fn failing(self) -> Self {
        self.failing.set(true);
        self
    }

    pub fn recover(&self) {
        self.failing.set(false);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn respond(&self, call: String) -> Result<(), CatalogError> {
        self.calls.borrow_mut().push(call);
        tokio::task::yield_now().await;
        if self.failing.get() {
            return Err(CatalogError::Network(FetchError::Timeout));
        }
        Ok(())
    }
}

impl CatalogApi for FakeApi {
    async fn sections(&self, names: &[SectionName]) -> Result<SectionsBundle, CatalogError> {
        let joined = names
            .iter()
            .map(SectionName::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.respond(format!("sections={}", joined)).await?;

        if names.is_empty() {
            return Ok(self.home.clone());
        }
        Ok(names
            .iter()
            .filter_map(|name| {
                self.sections
                    .get(name.as_str())
                    .map(|movies| (name.as_str(), movies.clone()))
            })
            .collect())
    }

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        self.respond(format!("q={}", query)).await?;
        Ok(self
            .searches
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Probe
// ============================================================================

#[derive(Default)]
pub struct FakeProbe {
    broken: RefCell<HashSet<String>>,
    probed: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn failing(urls: &[&str]) -> Self {
        let probe = Self::default();
        for url in urls {
            probe.fail(url);
        }
        probe
    }

    pub fn fail(&self, url: &str) {
        self.broken.borrow_mut().insert(url.to_string());
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl ImageProbe for FakeProbe {
    async fn load(&self, url: &str) -> Result<(), PosterError> {
        self.probed.borrow_mut().push(url.to_string());
        tokio::task::yield_now().await;
        if self.broken.borrow().contains(url) {
            Err(PosterError::LoadFailed(url.to_string()))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Cards and surface
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum PosterState {
    Hidden,
    Poster(String),
    Placeholder,
}

/// A card that records what it was told to reveal.
#[derive(Clone)]
pub struct TestCard {
    url: Option<String>,
    state: Rc<RefCell<(PosterState, usize)>>,
}

impl TestCard {
    pub fn new(url: Option<&str>) -> Self {
        Self {
            url: url.map(String::from),
            state: Rc::new(RefCell::new((PosterState::Hidden, 0))),
        }
    }

    pub fn state(&self) -> PosterState {
        self.state.borrow().0.clone()
    }

    /// How many times either element was revealed.
    pub fn reveals(&self) -> usize {
        self.state.borrow().1
    }

    fn set(&self, state: PosterState) {
        let mut current = self.state.borrow_mut();
        current.0 = state;
        current.1 += 1;
    }
}

impl PosterCard for TestCard {
    fn poster_url(&self) -> Option<String> {
        self.url.clone()
    }

    fn reveal_poster(&self, url: &str) {
        self.set(PosterState::Poster(url.to_string()));
    }

    fn reveal_placeholder(&self) {
        self.set(PosterState::Placeholder);
    }
}

/// Records markup per element id. Ids found in appended markup become
/// addressable elements of their own.
#[derive(Default)]
pub struct FakeSurface {
    markup: RefCell<HashMap<String, String>>,
    appended: RefCell<HashMap<String, Vec<String>>>,
    visible: RefCell<HashMap<String, bool>>,
    text: RefCell<HashMap<String, String>>,
    cards: RefCell<HashMap<String, Vec<TestCard>>>,
    tasks: RefCell<Vec<LocalTask>>,
    metrics: Cell<Option<ScrollMetrics>>,
    scroll_handlers: RefCell<Vec<Box<dyn Fn()>>>,
}

impl FakeSurface {
    pub fn markup(&self, target: &str) -> String {
        self.markup.borrow().get(target).cloned().unwrap_or_default()
    }

    /// Ids of the elements appended into `target`, in order.
    pub fn appended_ids(&self, target: &str) -> Vec<String> {
        self.appended.borrow().get(target).cloned().unwrap_or_default()
    }

    pub fn is_visible(&self, target: &str) -> Option<bool> {
        self.visible.borrow().get(target).copied()
    }

    pub fn text(&self, target: &str) -> String {
        self.text.borrow().get(target).cloned().unwrap_or_default()
    }

    pub fn card_count(&self, target: &str) -> usize {
        self.markup(target).matches("data-poster=\"").count()
    }

    pub fn poster_state(&self, target: &str, index: usize) -> PosterState {
        self.cards
            .borrow()
            .get(target)
            .and_then(|cards| cards.get(index))
            .map(TestCard::state)
            .unwrap_or(PosterState::Hidden)
    }

    pub fn set_scroll_metrics(&self, metrics: ScrollMetrics) {
        self.metrics.set(Some(metrics));
    }

    pub fn scroll_listeners(&self) -> usize {
        self.scroll_handlers.borrow().len()
    }

    /// Fire a scroll event at every listener.
    pub fn scroll(&self) {
        for handler in self.scroll_handlers.borrow().iter() {
            handler();
        }
    }

    /// Run every detached task to completion.
    pub async fn settle(&self) {
        loop {
            let tasks: Vec<LocalTask> = self.tasks.borrow_mut().drain(..).collect();
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                task.await;
            }
        }
    }
}

/// Values of every `data-poster="..."` attribute in `markup`.
fn poster_attributes(markup: &str) -> Vec<String> {
    markup
        .split("data-poster=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(|raw| html_escape::decode_html_entities(raw).into_owned())
        .collect()
}

/// Values of every `id="..."` attribute in `markup`.
fn element_ids(markup: &str) -> Vec<String> {
    markup
        .split(" id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect()
}

impl Surface for FakeSurface {
    type Card = TestCard;

    fn set_visible(&self, target: &str, visible: bool) {
        self.visible.borrow_mut().insert(target.to_string(), visible);
    }

    fn set_text(&self, target: &str, text: &str) {
        self.text
            .borrow_mut()
            .insert(target.to_string(), text.to_string());
    }

    fn append_markup(&self, target: &str, markup: &str) {
        let ids = element_ids(markup);
        {
            let mut elements = self.markup.borrow_mut();
            elements.entry(target.to_string()).or_default().push_str(markup);
            for id in &ids {
                elements.entry(id.clone()).or_default();
            }
        }
        self.appended
            .borrow_mut()
            .entry(target.to_string())
            .or_default()
            .extend(ids);
    }

    fn replace_markup(&self, target: &str, markup: &str) {
        self.markup
            .borrow_mut()
            .insert(target.to_string(), markup.to_string());
        self.appended.borrow_mut().remove(target);
        self.cards.borrow_mut().remove(target);
    }

    fn cards(&self, target: &str) -> Vec<TestCard> {
        let cards: Vec<TestCard> = poster_attributes(&self.markup(target))
            .iter()
            .map(|url| TestCard::new(Some(url)))
            .collect();
        self.cards
            .borrow_mut()
            .insert(target.to_string(), cards.clone());
        cards
    }

    fn detach(&self, task: LocalTask) {
        self.tasks.borrow_mut().push(task);
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.metrics.get()
    }

    fn on_scroll(&self, handler: Box<dyn Fn()>) {
        self.scroll_handlers.borrow_mut().push(handler);
    }
}
