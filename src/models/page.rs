//! Page mode selection and the fixed regions of the page layout.

use crate::config::QUERY_PARAM;

/// Which layout the page shows. Chosen once per page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageMode {
    /// Homepage with curated and lazily loaded sections.
    Home,
    /// Search results and recommendations for a query.
    Search(String),
}

impl PageMode {
    /// Select the mode from a URL query string (`location.search`).
    ///
    /// A missing or empty `q` parameter selects [`PageMode::Home`]. Only the
    /// first `q` is considered.
    pub fn from_query(search: &str) -> Self {
        let query = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key) == QUERY_PARAM).then(|| decode_component(value))
            })
            .next();

        match query {
            Some(q) if !q.is_empty() => Self::Search(q),
            _ => Self::Home,
        }
    }

    /// The active search term, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Search(q) => Some(q),
        }
    }
}

/// Decode a form-encoded query component (`+` is a space).
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Fixed elements of the page skeleton, addressed by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    HomeLayout,
    HomeStatus,
    Sections,
    SearchLayout,
    SearchStatus,
    SearchResultsBlock,
    SearchResults,
    RecommendationsBlock,
    Recommendations,
}

impl Region {
    pub const fn id(self) -> &'static str {
        match self {
            Self::HomeLayout => "home-mode",
            Self::HomeStatus => "loading-placeholder",
            Self::Sections => "dynamic-sections",
            Self::SearchLayout => "search-mode",
            Self::SearchStatus => "search-status",
            Self::SearchResultsBlock => "search-results-container",
            Self::SearchResults => "search-results",
            Self::RecommendationsBlock => "recommendations-container",
            Self::Recommendations => "recommendations",
        }
    }
}

/// Viewport and document measurements used by the infinite-scroll trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Whether the viewport bottom is within `threshold` pixels of the
    /// document bottom.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - threshold
    }
}
