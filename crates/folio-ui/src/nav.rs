//! Active-section navigation highlighting.
//!
//! The active section is the last section, in document order, whose top edge
//! is at or above `scroll_y + offset`. It is recomputed on every scroll
//! event; the nav link pointing at it carries the active class and every
//! other nav link does not. Before the first section is reached, a bare `#`
//! link (if any) is the one highlighted.

use crate::context::PortfolioContext;
use folio_core::{Host, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A section's id and top offset at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMark {
    /// Section element id.
    pub id: String,
    /// Distance from the document top, in px.
    pub top: f64,
}

impl SectionMark {
    /// Create a mark.
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Resolve the active section for a scroll position.
///
/// # Example
///
/// ```rust
/// use folio_ui::nav::{active_section, SectionMark};
///
/// let sections = [
///     SectionMark::new("home", 0.0),
///     SectionMark::new("projects", 500.0),
///     SectionMark::new("contact", 1000.0),
/// ];
/// assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
/// assert_eq!(active_section(&sections, 550.0, 100.0), Some("projects"));
/// assert_eq!(active_section(&sections, 1050.0, 100.0), Some("contact"));
/// ```
pub fn active_section(sections: &[SectionMark], scroll_y: f64, offset: f64) -> Option<&str> {
    let line = scroll_y + offset;
    sections
        .iter()
        .filter(|s| s.top <= line)
        .next_back()
        .map(|s| s.id.as_str())
}

// ============================================================================
// NavHighlighter
// ============================================================================

struct NavInner<H: Host> {
    host: Weak<H>,
    sections: Vec<(String, H::Element)>,
    links: Vec<H::Element>,
    offset: f64,
    active_class: String,
    active: RefCell<Option<String>>,
}

impl<H: Host> NavInner<H> {
    fn evaluate(&self) -> Result<Option<String>> {
        let Some(host) = self.host.upgrade() else {
            return Ok(self.active.borrow().clone());
        };

        let marks: Vec<SectionMark> = self
            .sections
            .iter()
            .map(|(id, element)| SectionMark::new(id.clone(), host.offset_top(element)))
            .collect();
        let current = active_section(&marks, host.scroll_y(), self.offset).map(str::to_string);

        // With no active section the bare "#" link matches.
        let wanted = format!("#{}", current.as_deref().unwrap_or(""));
        for link in &self.links {
            host.remove_class(link, &self.active_class)?;
            if host.attribute(link, "href").as_deref() == Some(wanted.as_str()) {
                host.add_class(link, &self.active_class)?;
            }
        }

        let mut active = self.active.borrow_mut();
        if *active != current {
            log::debug!(
                "Active section: {} -> {}",
                active.as_deref().unwrap_or("none"),
                current.as_deref().unwrap_or("none")
            );
            *active = current.clone();
        }
        Ok(current)
    }
}

/// Handle to the installed nav highlighter.
///
/// Cheap to clone; clones share state with the live scroll listener.
pub struct NavHighlighter<H: Host> {
    inner: Rc<NavInner<H>>,
}

impl<H: Host + 'static> NavHighlighter<H> {
    /// Collect sections and nav links, evaluate once, and re-evaluate on
    /// every scroll event.
    pub fn install(ctx: &PortfolioContext<H>) -> Result<Self> {
        let host = ctx.host();
        let config = ctx.config();

        let sections = host
            .query_all(&config.section_selector)?
            .into_iter()
            .filter_map(|element| {
                host.attribute(&element, "id")
                    .filter(|id| !id.is_empty())
                    .map(|id| (id, element))
            })
            .collect();
        let links = host.query_all(&config.nav_link_selector)?;

        let inner = Rc::new(NavInner {
            host: Rc::downgrade(ctx.host_rc()),
            sections,
            links,
            offset: config.nav_offset_px,
            active_class: config.active_class.clone(),
            active: RefCell::new(None),
        });

        inner.evaluate()?;

        let listener = Rc::clone(&inner);
        host.on_scroll(Box::new(move || {
            if let Err(err) = listener.evaluate() {
                log::warn!("Nav highlight update failed: {err}");
            }
        }))?;

        log::debug!(
            "Highlighting {} nav links across {} sections",
            inner.links.len(),
            inner.sections.len()
        );
        Ok(Self { inner })
    }

    /// Recompute the active section now.
    pub fn evaluate(&self) -> Result<Option<String>> {
        self.inner.evaluate()
    }

    /// The active section from the last evaluation.
    pub fn active(&self) -> Option<String> {
        self.inner.active.borrow().clone()
    }

    /// Section ids considered, in document order.
    pub fn section_ids(&self) -> Vec<String> {
        self.inner.sections.iter().map(|(id, _)| id.clone()).collect()
    }
}

impl<H: Host> Clone for NavHighlighter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: Host> fmt::Debug for NavHighlighter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHighlighter")
            .field("sections", &self.inner.sections.len())
            .field("links", &self.inner.links.len())
            .field("active", &self.inner.active.borrow())
            .finish()
    }
}
