//! Page orchestration.
//!
//! [`PortfolioApp::init`] runs the startup steps in order: render cards,
//! install smooth scrolling, install reveal observation, install nav
//! highlighting. Cards are rendered first so the reveal observer has them to
//! watch. A failing step is logged and the remaining steps still run.

use crate::context::PortfolioContext;
use crate::nav::NavHighlighter;
use crate::render::render_projects;
use crate::reveal::RevealObserver;
use crate::scroll::install_scroll_navigation;
use folio_content::SiteDocument;
use folio_core::{Error, Host, Result};
use std::fmt;
use std::rc::Rc;

/// A running portfolio page.
pub struct PortfolioApp<H: Host + 'static> {
    context: PortfolioContext<H>,
    cards: Vec<H::Element>,
    anchors: usize,
    reveal: Option<RevealObserver<H::Element>>,
    nav: Option<NavHighlighter<H>>,
}

impl<H: Host + 'static> PortfolioApp<H> {
    /// Parse the built-in site document and start the page on `host`.
    ///
    /// Only a broken embedded catalog is returned as an error; everything
    /// after that degrades per step.
    pub fn start(host: Rc<H>) -> Result<Self> {
        let site = SiteDocument::builtin()?;
        Ok(Self::init(PortfolioContext::from_site(host, site)))
    }

    /// Run every startup step against `context`.
    pub fn init(context: PortfolioContext<H>) -> Self {
        let cards = render_projects(&context).unwrap_or_else(|err| {
            report("Project cards", &err);
            Vec::new()
        });

        let anchors = install_scroll_navigation(&context).unwrap_or_else(|err| {
            report("Smooth scrolling", &err);
            0
        });

        let reveal = RevealObserver::install(&context)
            .inspect_err(|err| report("Reveal animations", err))
            .ok();

        let nav = NavHighlighter::install(&context)
            .inspect_err(|err| report("Nav highlighting", err))
            .ok();

        log::info!(
            "Portfolio ready: {} cards, {} anchors",
            cards.len(),
            anchors
        );

        Self {
            context,
            cards,
            anchors,
            reveal,
            nav,
        }
    }

    /// Shared context.
    pub fn context(&self) -> &PortfolioContext<H> {
        &self.context
    }

    /// Rendered card elements, in catalog order.
    pub fn cards(&self) -> &[H::Element] {
        &self.cards
    }

    /// Number of anchors wired for smooth scrolling.
    pub fn anchor_count(&self) -> usize {
        self.anchors
    }

    /// The reveal observer, if it was installed.
    pub fn reveal(&self) -> Option<&RevealObserver<H::Element>> {
        self.reveal.as_ref()
    }

    /// The nav highlighter, if it was installed.
    pub fn nav(&self) -> Option<&NavHighlighter<H>> {
        self.nav.as_ref()
    }
}

impl<H: Host + 'static> fmt::Debug for PortfolioApp<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("cards", &self.cards.len())
            .field("anchors", &self.anchors)
            .field("reveal", &self.reveal)
            .field("nav", &self.nav)
            .finish()
    }
}

fn report(step: &str, err: &Error) {
    if err.is_degradation() {
        log::warn!("{step} skipped: {err}");
    } else {
        log::error!("{step} failed: {err}");
    }
}
