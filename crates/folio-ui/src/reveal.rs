//! One-shot entrance animations on scroll.
//!
//! Every element matching the reveal selector is handed to the host's
//! intersection observer. The first time an element is reported at or past
//! the visibility threshold its `animation` style is set and it is flagged as
//! revealed; later entries for a revealed element are ignored, so the
//! animation never replays.

use crate::context::PortfolioContext;
use folio_core::{Host, IntersectionEntry, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Slack when comparing reported ratios to the threshold; browsers report
/// the crossing ratio with float rounding.
const RATIO_TOLERANCE: f64 = 1e-3;

struct Tracked<E> {
    element: E,
    revealed: bool,
}

struct RevealState<E> {
    tracked: Vec<Tracked<E>>,
    threshold: f64,
    animation: String,
}

impl<E: PartialEq> RevealState<E> {
    fn qualifies(&self, entry: &IntersectionEntry<E>) -> bool {
        entry.is_intersecting && entry.ratio + RATIO_TOLERANCE >= self.threshold
    }

    /// Apply a batch of entries; returns how many elements were revealed.
    fn apply<H: Host<Element = E>>(&mut self, host: &H, entries: &[IntersectionEntry<E>]) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if !self.qualifies(entry) {
                continue;
            }
            let Some(tracked) = self.tracked.iter_mut().find(|t| t.element == entry.target) else {
                continue;
            };
            if tracked.revealed {
                continue;
            }
            match host.set_style(&tracked.element, "animation", &self.animation) {
                Ok(()) => {
                    tracked.revealed = true;
                    revealed += 1;
                }
                Err(err) => log::warn!("Reveal animation failed: {err}"),
            }
        }
        revealed
    }
}

/// Handle to the installed reveal observer.
///
/// Cheap to clone; clones share state with the live listener.
pub struct RevealObserver<E> {
    state: Rc<RefCell<RevealState<E>>>,
}

impl<E: Clone + PartialEq + fmt::Debug + 'static> RevealObserver<E> {
    /// Observe every element matching the configured reveal selector.
    pub fn install<H>(ctx: &PortfolioContext<H>) -> Result<Self>
    where
        H: Host<Element = E> + 'static,
    {
        let host = ctx.host();
        let config = ctx.config();
        let targets = host.query_all(&config.reveal_selector)?;

        let state = Rc::new(RefCell::new(RevealState {
            tracked: targets
                .iter()
                .map(|element| Tracked {
                    element: element.clone(),
                    revealed: false,
                })
                .collect(),
            threshold: config.reveal.threshold,
            animation: config.reveal.animation.clone(),
        }));

        let weak: Weak<H> = Rc::downgrade(ctx.host_rc());
        let listener_state = Rc::clone(&state);
        host.observe_intersections(
            &targets,
            config.reveal.intersection_options(),
            Box::new(move |entries: &[IntersectionEntry<E>]| {
                let Some(host) = weak.upgrade() else {
                    return;
                };
                let count = listener_state.borrow_mut().apply(&*host, entries);
                if count > 0 {
                    log::debug!("Revealed {count} elements");
                }
            }),
        )?;

        log::debug!("Observing {} elements for reveal", targets.len());
        Ok(Self { state })
    }

    /// Number of observed elements.
    pub fn tracked_count(&self) -> usize {
        self.state.borrow().tracked.len()
    }

    /// Number of elements already revealed.
    pub fn revealed_count(&self) -> usize {
        self.state
            .borrow()
            .tracked
            .iter()
            .filter(|t| t.revealed)
            .count()
    }

    /// Whether `element` has been revealed.
    pub fn is_revealed(&self, element: &E) -> bool {
        self.state
            .borrow()
            .tracked
            .iter()
            .any(|t| t.revealed && t.element == *element)
    }
}

impl<E> Clone for RevealObserver<E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<E> fmt::Debug for RevealObserver<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RevealObserver")
            .field("tracked", &state.tracked.len())
            .field("threshold", &state.threshold)
            .finish()
    }
}
