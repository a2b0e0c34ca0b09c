//! Core catalog logic, independent of the browser.
//!
//! This module provides:
//! - [`PageController`] - Home/Search mode selection and page flows
//! - [`SectionLoader`] - Busy-guarded lazy section loading
//! - [`ResponseCache`] - Session-scoped JSON cache
//! - [`CardRenderer`] - Movie card markup
//! - [`poster`] - Poster verification
//! - [`Platform`] - The seams to the API, storage, DOM and image loading

pub mod api;
pub mod cache;
mod controller;
pub mod error;
mod loader;
mod platform;
pub mod poster;
pub mod render;
#[cfg(test)]
pub mod testing;

pub use api::HttpCatalogApi;
pub use cache::BrowserSession;
pub use controller::PageController;
pub use platform::{PageContext, Platform, Surface};
pub use poster::{ImageProbe, LocalTask, PosterCard};
