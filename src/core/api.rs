//! Catalog backend client.

use crate::config::ApiConfig;
use crate::core::error::CatalogError;
use crate::models::{CatalogPayload, SearchResults, SectionName, SectionsBundle};
use crate::utils::fetch_json;

/// The two catalog endpoints.
pub trait CatalogApi {
    /// Fetch the named sections, or the default homepage bundle when `names`
    /// is empty.
    async fn sections(&self, names: &[SectionName]) -> Result<SectionsBundle, CatalogError>;

    /// Fetch search results and recommendations for a query.
    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError>;
}

/// [`CatalogApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalogApi {
    catalog_url: String,
    search_url: String,
    timeout_ms: u32,
}

impl HttpCatalogApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            catalog_url: config.catalog_url.clone(),
            search_url: config.search_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// `{catalog}?sections=a,b` (empty value for the homepage bundle).
    fn sections_url(&self, names: &[SectionName]) -> String {
        let joined = names
            .iter()
            .map(SectionName::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}?sections={}", self.catalog_url, joined)
    }

    /// `{search}?q=<encoded query>`.
    fn search_url(&self, query: &str) -> String {
        format!("{}?q={}", self.search_url, urlencoding::encode(query))
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn sections(&self, names: &[SectionName]) -> Result<SectionsBundle, CatalogError> {
        let payload: CatalogPayload = fetch_json(&self.sections_url(names), self.timeout_ms).await?;
        Ok(payload.into())
    }

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        Ok(fetch_json(&self.search_url(query), self.timeout_ms).await?)
    }
}
