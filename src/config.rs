//! Application configuration.
//!
//! Fixed identifiers live here as constants. Tunable behavior (endpoints,
//! lazy sections, thresholds, placeholder style) is read from
//! `assets/catalog.toml`, which is embedded at compile time.

use leptos::logging::warn;
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::SectionName;

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the masthead.
pub const APP_NAME: &str = "CineDeck";

/// Page URL query parameter holding the search term.
pub const QUERY_PARAM: &str = "q";

/// Embedded catalog configuration.
pub const CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

// =============================================================================
// Messages
// =============================================================================

/// Shown in place of the loading indicator when a page load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading content.";

/// Shown inside a lazy section whose movies could not be loaded.
pub const SECTION_ERROR_MESSAGE: &str = "Could not load this section.";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache key layout.
pub mod cache {
    /// Key for the homepage bundle.
    pub const HOMEPAGE_KEY: &str = "homepage_sections_cache";
    /// Prefix for search results, followed by the lowercased query.
    pub const SEARCH_PREFIX: &str = "search_";
    /// Prefix for lazy sections, followed by the section name.
    pub const SECTION_PREFIX: &str = "section_cache_";
}

// =============================================================================
// Markup
// =============================================================================

/// CSS classes emitted in card and section markup.
///
/// These are global (unhashed) because the markup is produced as strings and
/// queried back from the DOM.
pub mod classes {
    pub const CARD: &str = "movie-card";
    pub const POSTER_WRAPPER: &str = "poster-wrapper";
    pub const POSTER: &str = "poster";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const CARD_TITLE: &str = "card-title";
    pub const HOVER_INFO: &str = "hover-info";
    pub const OVERVIEW: &str = "overview";
    pub const META: &str = "meta";
    pub const SECTION: &str = "section-block";
    pub const SECTION_TITLE: &str = "section-title";
    pub const GRID: &str = "movie-grid";
    pub const NOTICE: &str = "section-notice";
}

/// Element id prefixes for section grids.
pub mod grid_ids {
    /// Grids of homepage buckets (`section-popular`).
    pub const HOME: &str = "section";
    /// Grids of lazily loaded sections (`dynamic-action`).
    pub const LAZY: &str = "dynamic";
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Lazy sections used when the configuration does not list any.
const DEFAULT_LAZY_SECTIONS: &[&str] = &["action", "comedy", "drama"];

/// Complete client configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub home: HomeConfig,
    pub cards: CardConfig,
}

/// Backend endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub catalog_url: String,
    pub search_url: String,
    /// Fetch request timeout in milliseconds. Must be positive.
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            catalog_url: "/api/catalog".to_string(),
            search_url: "/api/catalog/search".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Homepage layout behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Sections revealed one at a time while scrolling.
    pub lazy_sections: Vec<SectionName>,
    /// Homepage buckets with fewer movies are not displayed.
    pub min_section_items: usize,
    /// Distance from the bottom of the page that triggers the next section.
    pub scroll_threshold_px: u32,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            lazy_sections: DEFAULT_LAZY_SECTIONS
                .iter()
                .map(|name| SectionName::known(name))
                .collect(),
            min_section_items: 4,
            scroll_threshold_px: 200,
        }
    }
}

/// Movie card rendering.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Characters of the overview shown before the ellipsis.
    pub overview_chars: usize,
    pub placeholder: Placeholder,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            overview_chars: 80,
            placeholder: Placeholder::default(),
        }
    }
}

/// What a card shows when its poster is missing or broken.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placeholder {
    /// A fallback image.
    Image { src: String },
    /// Inline text.
    Text { label: String },
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::Image {
            src: "/static/imgs/no_img.png".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults.
    pub fn load() -> Self {
        Self::parse(CATALOG_TOML).unwrap_or_else(|e| {
            warn!("invalid embedded catalog config, using defaults: {}", e);
            Self::default()
        })
    }
}
