//! Host environment capability.
//!
//! Page behavior never touches `document` or `window` directly. Everything
//! goes through [`Host`], which exposes queries, element creation and
//! mutation, geometry, and event subscription. The browser implementation
//! lives in `folio-web`; [`memory::MemoryHost`] is an in-memory document for
//! tests.
//!
//! Event handlers are plain boxed closures. Execution is single-threaded, so
//! nothing here is `Send`.

pub mod memory;
pub mod selector;

use crate::Result;
use std::fmt;

/// A click delivered to a listener.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    /// Create a fresh, non-cancelled click.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the browser's default navigation for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener suppressed default navigation.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// One element's intersection state, as reported by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<E> {
    /// The observed element.
    pub target: E,
    /// Whether any part of the element is inside the root.
    pub is_intersecting: bool,
    /// Visible fraction of the element, in `[0, 1]`.
    pub ratio: f64,
}

/// Trigger settings for an intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionOptions {
    /// Visible fraction at which the observer reports.
    pub threshold: f64,
    /// Distance the root's bottom edge is pulled in, in px.
    pub bottom_inset_px: f64,
}

impl IntersectionOptions {
    /// CSS root margin string equivalent to these options.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset_px)
    }
}

/// Handler for click events.
pub type ClickHandler = Box<dyn FnMut(&mut ClickEvent)>;

/// Handler for window scroll events.
pub type ScrollHandler = Box<dyn FnMut()>;

/// Handler for batches of intersection changes.
pub type IntersectionHandler<E> = Box<dyn FnMut(&[IntersectionEntry<E>])>;

/// Capability interface over the host document and window.
pub trait Host {
    /// Handle to a document element.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Read an attribute.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Set an attribute.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;

    /// Replace the element's children with parsed markup.
    fn set_inner_html(&self, element: &Self::Element, html: &str) -> Result<()>;

    /// Set one inline style property.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;

    /// Add a class.
    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Remove a class. Removing an absent class is not an error.
    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Distance from the element's top edge to the document top, in px.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Current vertical scroll position of the window.
    fn scroll_y(&self) -> f64;

    /// Smoothly scroll the window so `element`'s top edge meets the
    /// viewport top.
    fn scroll_into_view(&self, element: &Self::Element) -> Result<()>;

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register a click listener on an element.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<()>;

    /// Register a window scroll listener.
    fn on_scroll(&self, handler: ScrollHandler) -> Result<()>;

    /// Observe `targets` for viewport intersection.
    ///
    /// Hosts report an initial entry for every target, then further entries
    /// whenever a target crosses the threshold.
    fn observe_intersections(
        &self,
        targets: &[Self::Element],
        options: IntersectionOptions,
        handler: IntersectionHandler<Self::Element>,
    ) -> Result<()>;
}
