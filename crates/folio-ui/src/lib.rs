//! Page behavior for the Folio portfolio.
//!
//! Everything here is written against [`folio_core::Host`], so the same code
//! drives a real browser document (through `folio-web`) and the in-memory
//! host used in tests.
//!
//! # Modules
//!
//! - [`context`]: Host, catalog, and configuration bundle
//! - [`render`]: Project card rendering
//! - [`scroll`]: Smooth scrolling for in-page anchors
//! - [`reveal`]: One-shot entrance animations
//! - [`nav`]: Active-section highlighting
//! - [`app`]: Startup orchestration
//!
//! # Example
//!
//! ```rust
//! use folio_core::host::memory::MemoryHost;
//! use folio_ui::PortfolioApp;
//! use std::rc::Rc;
//!
//! let host = Rc::new(MemoryHost::new());
//! host.insert(host.body(), "div", &[("id", "projects-grid")]);
//!
//! let app = PortfolioApp::start(host).unwrap();
//! assert_eq!(app.cards().len(), 4);
//! ```

pub mod app;
pub mod context;
pub mod nav;
pub mod render;
pub mod reveal;
pub mod scroll;

// Re-export key types at crate root for convenience
pub use app::PortfolioApp;
pub use context::PortfolioContext;
pub use nav::{NavHighlighter, SectionMark, active_section};
pub use render::{create_project_card, render_projects};
pub use reveal::RevealObserver;
pub use scroll::{fragment_target, install_scroll_navigation};
