//! Smooth scrolling for in-page anchors.

use crate::context::PortfolioContext;
use folio_core::{ClickEvent, Host, Result};
use std::rc::Rc;

/// The element id an in-page `href` points at.
///
/// A bare `#` has no target.
///
/// ```rust
/// use folio_ui::scroll::fragment_target;
///
/// assert_eq!(fragment_target("#projects"), Some("projects"));
/// assert_eq!(fragment_target("#"), None);
/// assert_eq!(fragment_target("https://example.com"), None);
/// ```
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Install one click listener per in-page anchor.
///
/// Each click suppresses default navigation and smooth-scrolls the matching
/// element into view, top-aligned. Unknown targets are ignored. Returns the
/// number of listeners installed.
pub fn install_scroll_navigation<H: Host + 'static>(ctx: &PortfolioContext<H>) -> Result<usize> {
    let host = ctx.host();
    let anchors = host.query_all(&ctx.config().anchor_selector)?;

    for anchor in &anchors {
        let weak = Rc::downgrade(ctx.host_rc());
        let target = anchor.clone();
        host.on_click(
            anchor,
            Box::new(move |event: &mut ClickEvent| {
                event.prevent_default();
                if let Some(host) = weak.upgrade() {
                    scroll_to_anchor_target(&*host, &target);
                }
            }),
        )?;
    }

    log::debug!("Installed smooth scrolling on {} anchors", anchors.len());
    Ok(anchors.len())
}

fn scroll_to_anchor_target<H: Host>(host: &H, anchor: &H::Element) {
    let Some(href) = host.attribute(anchor, "href") else {
        return;
    };
    let Some(target) = fragment_target(&href).and_then(|id| host.element_by_id(id)) else {
        return;
    };
    if let Err(err) = host.scroll_into_view(&target) {
        log::warn!("Smooth scroll to {href} failed: {err}");
    }
}
