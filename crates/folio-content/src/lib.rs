//! Project catalog, HTML escaping, and card markup.
//!
//! This crate knows what a project card looks like but nothing about how it
//! reaches the page; `folio-ui` drives insertion through the host.
//!
//! # Modules
//!
//! - [`catalog`]: Project records and the embedded TOML catalog
//! - [`html`]: Escaping and card markup
//!
//! # Example
//!
//! ```rust
//! use folio_content::{card_markup, SiteDocument};
//!
//! let site = SiteDocument::builtin().unwrap();
//! let first = site.catalog.get(0).unwrap();
//! assert!(card_markup(first).contains("Project Nightfall"));
//! ```

pub mod catalog;
pub mod html;

// Re-export commonly used types
pub use catalog::{BUILTIN_CATALOG, Catalog, LinkRecord, ProjectRecord, SiteDocument};
pub use html::{card_markup, escape_html, link_markup};
