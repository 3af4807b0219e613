//! Vertical viewport geometry.
//!
//! Only the vertical axis matters for the page: cards and sections are laid
//! out in a single scrolling column.

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    /// Distance from the document top, in px.
    pub top: f64,
    /// Element height, in px.
    pub height: f64,
}

impl Span {
    /// Create a span.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge in document coordinates.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Current vertical scroll position.
    pub scroll_y: f64,
    /// Viewport height, in px.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// The region used for intersection tests, with the bottom edge pulled
    /// up by `bottom_inset` px.
    pub fn root(&self, bottom_inset: f64) -> Span {
        Span::new(self.scroll_y, (self.height - bottom_inset).max(0.0))
    }
}

/// Fraction of `target` that lies within `root`, in `[0, 1]`.
///
/// A zero-height target counts as fully visible when its top lies inside the
/// root, matching how browsers report empty elements.
///
/// ```rust
/// use folio_core::geometry::{intersection_ratio, Span};
///
/// let root = Span::new(0.0, 600.0);
/// assert_eq!(intersection_ratio(Span::new(100.0, 200.0), root), 1.0);
/// assert_eq!(intersection_ratio(Span::new(500.0, 200.0), root), 0.5);
/// assert_eq!(intersection_ratio(Span::new(900.0, 200.0), root), 0.0);
/// ```
pub fn intersection_ratio(target: Span, root: Span) -> f64 {
    if target.height <= 0.0 {
        return if target.top >= root.top && target.top <= root.bottom() {
            1.0
        } else {
            0.0
        };
    }
    let visible = target.bottom().min(root.bottom()) - target.top.max(root.top);
    (visible / target.height).clamp(0.0, 1.0)
}
