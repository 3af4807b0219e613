//! Explicit context shared by every startup step.

use folio_content::{Catalog, SiteDocument};
use folio_core::{Host, PortfolioConfig};
use std::fmt;
use std::rc::Rc;

/// Host handle, catalog, and configuration for one page.
///
/// Cheap to clone (Rc internals).
pub struct PortfolioContext<H: Host> {
    host: Rc<H>,
    catalog: Rc<Catalog>,
    config: Rc<PortfolioConfig>,
}

impl<H: Host> PortfolioContext<H> {
    /// Create a context.
    pub fn new(host: Rc<H>, catalog: Catalog, config: PortfolioConfig) -> Self {
        Self {
            host,
            catalog: Rc::new(catalog),
            config: Rc::new(config),
        }
    }

    /// Create a context from a parsed site document.
    pub fn from_site(host: Rc<H>, site: SiteDocument) -> Self {
        Self::new(host, site.catalog, site.page)
    }

    /// The host environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Shared handle to the host, for listeners that outlive a call.
    pub fn host_rc(&self) -> &Rc<H> {
        &self.host
    }

    /// The project catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Page configuration.
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }
}

impl<H: Host> Clone for PortfolioContext<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            catalog: Rc::clone(&self.catalog),
            config: Rc::clone(&self.config),
        }
    }
}

impl<H: Host> fmt::Debug for PortfolioContext<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioContext")
            .field("projects", &self.catalog.len())
            .field("container_id", &self.config.container_id)
            .finish()
    }
}
