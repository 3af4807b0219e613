//! Card rendering.
//!
//! Appends one card per catalog record to the container, in catalog order.
//! Rendering is not idempotent: a second call appends a second set of cards.

use crate::context::PortfolioContext;
use folio_content::{ProjectRecord, card_markup};
use folio_core::{Error, Host, PortfolioConfig, Result};

/// Render every project into the configured container.
///
/// Returns the created card elements in catalog order, or
/// [`Error::ContainerNotFound`] without touching the document if the
/// container is absent.
pub fn render_projects<H: Host>(ctx: &PortfolioContext<H>) -> Result<Vec<H::Element>> {
    let host = ctx.host();
    let config = ctx.config();
    let container = host
        .element_by_id(&config.container_id)
        .ok_or_else(|| Error::container_not_found(&config.container_id))?;

    let mut cards = Vec::with_capacity(ctx.catalog().len());
    for (index, project) in ctx.catalog().iter().enumerate() {
        let card = create_project_card(host, config, project, index)?;
        host.append_child(&container, &card)?;
        log::debug!("Rendered card {index}: {}", project.title);
        cards.push(card);
    }

    log::info!("Rendered {} project cards", cards.len());
    Ok(cards)
}

/// Create one detached card element.
///
/// The card starts transparent with an animation delay staggered by
/// `index`, ready for the reveal animation.
pub fn create_project_card<H: Host>(
    host: &H,
    config: &PortfolioConfig,
    project: &ProjectRecord,
    index: usize,
) -> Result<H::Element> {
    let card = host.create_element("div")?;
    host.set_attribute(&card, "class", &config.card_class)?;
    host.set_style(&card, "opacity", "0")?;
    host.set_style(&card, "animation-delay", &config.stagger_delay(index))?;
    host.set_inner_html(&card, &card_markup(project))?;
    Ok(card)
}
