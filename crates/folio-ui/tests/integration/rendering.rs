//! Integration tests for project card rendering.

use crate::common::TestPage;
use folio_content::{Catalog, LinkRecord, ProjectRecord, SiteDocument};
use folio_core::{Error, PortfolioConfig};
use folio_ui::{PortfolioContext, render_projects};
use std::rc::Rc;

fn context(page: &TestPage) -> PortfolioContext<folio_core::host::memory::MemoryHost> {
    let site = SiteDocument::builtin().unwrap();
    PortfolioContext::from_site(Rc::clone(&page.host), site)
}

#[test]
fn test_cards_are_hidden_and_staggered() {
    let page = TestPage::new();
    let cards = render_projects(&context(&page)).unwrap();

    for card in &cards {
        assert!(page.host.has_class(*card, "project-card"));
        assert_eq!(page.host.style(*card, "opacity").as_deref(), Some("0"));
    }
    let delays: Vec<_> = cards
        .iter()
        .map(|card| page.host.style(*card, "animation-delay").unwrap())
        .collect();
    assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
}

#[test]
fn test_external_links_open_in_new_context() {
    let page = TestPage::new();
    let cards = render_projects(&context(&page)).unwrap();
    let html = page.host.inner_html(cards[0]);

    assert!(html.contains(
        r#"<a href="https://github.com/Aethelbrad/planes-pygame" class="project-link" target="_blank" rel="noopener noreferrer">GitHub →</a>"#
    ));
    assert!(html.contains(r##"<a href="#" class="project-link">View Live →</a>"##));
}

#[test]
fn test_render_twice_duplicates_cards() {
    let page = TestPage::new();
    let ctx = context(&page);
    render_projects(&ctx).unwrap();
    render_projects(&ctx).unwrap();

    assert_eq!(page.host.children(page.grid.unwrap()).len(), 8);
}

#[test]
fn test_render_missing_container() {
    let page = TestPage::without_grid();
    let err = render_projects(&context(&page)).unwrap_err();

    assert!(matches!(err, Error::ContainerNotFound { .. }));
    assert!(err.is_degradation());
    assert_eq!(err.to_string(), "Container not found: #projects-grid");
}

#[test]
fn test_render_escapes_catalog_text() {
    let page = TestPage::new();
    let catalog = Catalog::new(vec![ProjectRecord {
        title: "<img src=x onerror=alert(1)>".to_string(),
        description: "Tom & Jerry".to_string(),
        tech_stack: vec!["C<>".to_string()],
        links: vec![LinkRecord::new("Go\"", "https://example.com/?a=1&b=2")],
    }])
    .unwrap();
    let ctx = PortfolioContext::new(Rc::clone(&page.host), catalog, PortfolioConfig::default());

    let cards = render_projects(&ctx).unwrap();
    let html = page.host.inner_html(cards[0]);
    assert!(html.starts_with("<h3>&lt;img src=x onerror=alert(1)&gt;</h3>"));
    assert!(html.contains("<p>Tom &amp; Jerry</p>"));
    assert!(html.contains(r#"<span class="tech-tag">C&lt;&gt;</span>"#));
    assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
    assert!(html.contains(">Go&quot;</a>"));
}
