//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`BrowserImageProbe`] - Poster load checks
//! - [`format`] - Section titles and element ids

pub mod dom;
mod fetch;
pub mod format;
mod image;

pub use fetch::fetch_json;
pub use image::BrowserImageProbe;
