//! In-memory [`Host`] implementation.
//!
//! [`MemoryHost`] models just enough of a browser document to drive the page
//! behavior without one: an element tree with attributes, inline styles and
//! raw inner HTML, per-element vertical layout, a scrollable viewport, and
//! listener dispatch for clicks, scrolls, and intersection changes.
//!
//! # Example
//!
//! ```rust
//! use folio_core::host::memory::MemoryHost;
//! use folio_core::host::Host;
//!
//! let host = MemoryHost::new();
//! let grid = host.insert(host.body(), "div", &[("id", "projects-grid")]);
//! assert_eq!(host.element_by_id("projects-grid"), Some(grid));
//! ```

use super::selector::{SelectorList, SelectorTarget};
use super::{
    ClickEvent, ClickHandler, Host, IntersectionEntry, IntersectionHandler, IntersectionOptions,
    ScrollHandler,
};
use crate::geometry::{Span, Viewport, intersection_ratio};
use crate::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

/// Default viewport height for a fresh host, in px.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// ============================================================================
// Document
// ============================================================================

/// Handle to an element in a [`MemoryHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    inner_html: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    span: Span,
}

#[derive(Debug)]
struct Document {
    nodes: Vec<Node>,
}

impl Document {
    const ROOT: NodeId = NodeId(0);

    fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                ..Default::default()
            }],
        }
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::host(format!("Unknown element {id}")))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::host(format!("Unknown element {id}")))
    }

    /// Attached elements in document order, root included.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    fn detach(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|c| *c != id);
        }
        Ok(())
    }

    fn is_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes.get(id.0).and_then(|n| n.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

#[derive(Clone, Copy)]
struct NodeView<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl SelectorTarget for NodeView<'_> {
    fn tag_name(&self) -> String {
        self.doc
            .nodes
            .get(self.id.0)
            .map(|n| n.tag.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.doc.nodes.get(self.id.0)?.attributes.get(name).cloned()
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.doc.nodes.get(self.id.0)?.parent?;
        Some(NodeView {
            doc: self.doc,
            id: parent,
        })
    }
}

// ============================================================================
// Listeners
// ============================================================================

type Shared<T> = Rc<RefCell<T>>;

struct Observer {
    targets: Vec<NodeId>,
    options: IntersectionOptions,
    handler: Shared<IntersectionHandler<NodeId>>,
    /// Last reported "at or past threshold" state per target.
    reported: HashMap<NodeId, bool>,
}

// ============================================================================
// MemoryHost
// ============================================================================

/// An in-memory document and window.
pub struct MemoryHost {
    doc: RefCell<Document>,
    viewport: Cell<Viewport>,
    clicks: RefCell<Vec<(NodeId, Shared<ClickHandler>)>>,
    scrolls: RefCell<Vec<Shared<ScrollHandler>>>,
    observers: RefCell<Vec<Observer>>,
    scroll_requests: RefCell<Vec<NodeId>>,
    style_writes: RefCell<HashMap<(NodeId, String), usize>>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("nodes", &self.doc.borrow().nodes.len())
            .field("viewport", &self.viewport.get())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl MemoryHost {
    /// Create an empty document with an 800 px tall viewport at the top.
    pub fn new() -> Self {
        Self::with_viewport_height(DEFAULT_VIEWPORT_HEIGHT)
    }

    /// Create an empty document with the given viewport height.
    pub fn with_viewport_height(height: f64) -> Self {
        Self {
            doc: RefCell::new(Document::new()),
            viewport: Cell::new(Viewport::new(0.0, height)),
            clicks: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            scroll_requests: RefCell::new(Vec::new()),
            style_writes: RefCell::new(HashMap::new()),
        }
    }

    /// The document body.
    pub fn body(&self) -> NodeId {
        Document::ROOT
    }

    // ------------------------------------------------------------------
    // Building
    // ------------------------------------------------------------------

    /// Create an element with attributes and append it to `parent`.
    ///
    /// Panics on an unknown parent; this is a fixture helper.
    pub fn insert(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        doc.nodes.push(Node {
            tag: tag.to_lowercase(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            parent: Some(parent),
            ..Default::default()
        });
        doc.nodes[parent.0].children.push(id);
        id
    }

    /// Place an element in the layout.
    pub fn set_span(&self, id: NodeId, span: Span) {
        if let Some(node) = self.doc.borrow_mut().nodes.get_mut(id.0) {
            node.span = span;
        }
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    /// Scroll the window, firing scroll listeners and then any
    /// intersection changes.
    pub fn scroll_to(&self, y: f64) {
        let mut viewport = self.viewport.get();
        viewport.scroll_y = y.max(0.0);
        self.viewport.set(viewport);

        let handlers: Vec<_> = self.scrolls.borrow().iter().cloned().collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
        self.refresh_intersections();
    }

    /// Click an element. Returns the event so callers can check whether
    /// default navigation was prevented.
    pub fn click(&self, id: NodeId) -> ClickEvent {
        let mut event = ClickEvent::new();
        let handlers: Vec<_> = self
            .clicks
            .borrow()
            .iter()
            .filter(|(target, _)| *target == id)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            (handler.borrow_mut())(&mut event);
        }
        event
    }

    /// Recompute intersections against the current viewport and deliver
    /// entries for every target whose threshold state changed.
    pub fn refresh_intersections(&self) {
        let viewport = self.viewport.get();
        let mut batches = Vec::new();
        {
            let doc = self.doc.borrow();
            let mut observers = self.observers.borrow_mut();
            for observer in observers.iter_mut() {
                let root = viewport.root(observer.options.bottom_inset_px);
                let mut entries = Vec::new();
                for &target in &observer.targets {
                    let span = doc.nodes.get(target.0).map(|n| n.span).unwrap_or_default();
                    let ratio = intersection_ratio(span, root);
                    let is_intersecting = ratio > 0.0;
                    let reached = is_intersecting && ratio >= observer.options.threshold;
                    if observer.reported.get(&target) != Some(&reached) {
                        observer.reported.insert(target, reached);
                        entries.push(IntersectionEntry {
                            target,
                            is_intersecting,
                            ratio,
                        });
                    }
                }
                if !entries.is_empty() {
                    batches.push((Rc::clone(&observer.handler), entries));
                }
            }
        }
        for (handler, entries) in batches {
            (handler.borrow_mut())(&entries);
        }
    }

    /// Deliver hand-made intersection entries to every observer watching
    /// their targets, bypassing layout.
    pub fn dispatch_intersections(&self, entries: &[IntersectionEntry<NodeId>]) {
        let batches: Vec<_> = self
            .observers
            .borrow()
            .iter()
            .filter_map(|observer| {
                let relevant: Vec<_> = entries
                    .iter()
                    .filter(|e| observer.targets.contains(&e.target))
                    .cloned()
                    .collect();
                (!relevant.is_empty()).then(|| (Rc::clone(&observer.handler), relevant))
            })
            .collect();
        for (handler, entries) in batches {
            (handler.borrow_mut())(&entries);
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Attached child elements, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.doc
            .borrow()
            .nodes
            .get(id.0)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Lowercase tag name.
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        self.doc.borrow().nodes.get(id.0).map(|n| n.tag.clone())
    }

    /// Raw inner HTML last assigned to the element.
    pub fn inner_html(&self, id: NodeId) -> String {
        self.doc
            .borrow()
            .nodes
            .get(id.0)
            .map(|n| n.inner_html.clone())
            .unwrap_or_default()
    }

    /// Inline style property value.
    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.doc.borrow().nodes.get(id.0)?.styles.get(property).cloned()
    }

    /// How many times a style property was written on an element.
    pub fn style_write_count(&self, id: NodeId, property: &str) -> usize {
        self.style_writes
            .borrow()
            .get(&(id, property.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        let doc = self.doc.borrow();
        NodeView { doc: &doc, id }.has_class(class)
    }

    /// Every `scroll_into_view` request received, oldest first.
    pub fn scroll_requests(&self) -> Vec<NodeId> {
        self.scroll_requests.borrow().clone()
    }

    /// Number of click listeners registered on an element.
    pub fn click_listener_count(&self, id: NodeId) -> usize {
        self.clicks.borrow().iter().filter(|(t, _)| *t == id).count()
    }

    /// Number of registered scroll listeners.
    pub fn scroll_listener_count(&self) -> usize {
        self.scrolls.borrow().len()
    }

    fn update_classes(&self, id: NodeId, update: impl FnOnce(&mut Vec<String>)) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        let node = doc.node_mut(id)?;
        let mut classes: Vec<String> = node
            .attributes
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        update(&mut classes);
        node.attributes.insert("class".to_string(), classes.join(" "));
        Ok(())
    }
}

impl Host for MemoryHost {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.walk()
            .into_iter()
            .find(|n| doc.nodes[n.0].attributes.get("id").map(String::as_str) == Some(id))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        let doc = self.doc.borrow();
        Ok(doc
            .walk()
            .into_iter()
            .filter(|&id| list.matches(&NodeView { doc: &doc, id }))
            .collect())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let doc = self.doc.borrow();
        NodeView {
            doc: &doc,
            id: *element,
        }
        .attribute(name)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        if tag.is_empty() {
            return Err(Error::host("Cannot create an element without a tag"));
        }
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        doc.nodes.push(Node {
            tag: tag.to_lowercase(),
            ..Default::default()
        });
        Ok(id)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        doc.node(*parent)?;
        doc.node(*child)?;
        if doc.is_ancestor(*child, *parent) {
            return Err(Error::host(format!(
                "Cannot append {child} inside its own subtree"
            )));
        }
        doc.detach(*child)?;
        doc.node_mut(*child)?.parent = Some(*parent);
        doc.node_mut(*parent)?.children.push(*child);
        Ok(())
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<()> {
        self.doc
            .borrow_mut()
            .node_mut(*element)?
            .attributes
            .insert(name.to_lowercase(), value.to_string());
        Ok(())
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        let children = std::mem::take(&mut doc.node_mut(*element)?.children);
        for child in children {
            doc.node_mut(child)?.parent = None;
        }
        doc.node_mut(*element)?.inner_html = html.to_string();
        Ok(())
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        self.doc
            .borrow_mut()
            .node_mut(*element)?
            .styles
            .insert(property.to_string(), value.to_string());
        *self
            .style_writes
            .borrow_mut()
            .entry((*element, property.to_string()))
            .or_insert(0) += 1;
        Ok(())
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<()> {
        self.update_classes(*element, |classes| {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<()> {
        self.update_classes(*element, |classes| classes.retain(|c| c != class))
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.doc
            .borrow()
            .nodes
            .get(element.0)
            .map_or(0.0, |n| n.span.top)
    }

    fn scroll_y(&self) -> f64 {
        self.viewport.get().scroll_y
    }

    fn scroll_into_view(&self, element: &NodeId) -> Result<()> {
        let top = self.doc.borrow().node(*element)?.span.top;
        self.scroll_requests.borrow_mut().push(*element);
        self.scroll_to(top);
        Ok(())
    }

    fn on_click(&self, element: &NodeId, handler: ClickHandler) -> Result<()> {
        self.doc.borrow().node(*element)?;
        self.clicks
            .borrow_mut()
            .push((*element, Rc::new(RefCell::new(handler))));
        Ok(())
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Result<()> {
        self.scrolls.borrow_mut().push(Rc::new(RefCell::new(handler)));
        Ok(())
    }

    fn observe_intersections(
        &self,
        targets: &[NodeId],
        options: IntersectionOptions,
        handler: IntersectionHandler<NodeId>,
    ) -> Result<()> {
        {
            let doc = self.doc.borrow();
            for target in targets {
                doc.node(*target)?;
            }
        }
        let handler = Rc::new(RefCell::new(handler));
        let mut reported = HashMap::new();
        let mut initial = Vec::new();
        {
            let doc = self.doc.borrow();
            let root = self.viewport.get().root(options.bottom_inset_px);
            for &target in targets {
                let ratio = intersection_ratio(doc.nodes[target.0].span, root);
                let is_intersecting = ratio > 0.0;
                reported.insert(target, is_intersecting && ratio >= options.threshold);
                initial.push(IntersectionEntry {
                    target,
                    is_intersecting,
                    ratio,
                });
            }
        }
        self.observers.borrow_mut().push(Observer {
            targets: targets.to_vec(),
            options,
            handler: Rc::clone(&handler),
            reported,
        });
        if !initial.is_empty() {
            (handler.borrow_mut())(&initial);
        }
        Ok(())
    }
}
