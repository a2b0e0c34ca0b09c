//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Movie`], [`ReleaseYear`] - Movie records from the catalog API
//! - [`SectionName`], [`SectionsBundle`], [`SearchResults`] - API payloads
//! - [`PageMode`], [`Region`], [`ScrollMetrics`] - Page layout and scrolling

mod movie;
mod page;
mod section;

pub use movie::{Movie, ReleaseYear};
pub use page::{PageMode, Region, ScrollMetrics};
pub use section::{CatalogPayload, SearchResults, SectionName, SectionsBundle};
