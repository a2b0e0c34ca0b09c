//! UI components built with Leptos.
//!
//! - [`CatalogShell`] - Page skeleton with the home and search layouts
//! - [`DomSurface`] - Catalog surface over the live document

mod shell;
mod surface;

pub use shell::CatalogShell;
pub use surface::DomSurface;
