//! Integration tests for the full startup sequence.

use crate::common::TestPage;
use folio_ui::PortfolioApp;
use std::rc::Rc;

#[test]
fn test_startup_renders_builtin_catalog() {
    let page = TestPage::new();
    let app = PortfolioApp::start(Rc::clone(&page.host)).expect("builtin catalog parses");

    let grid = page.grid.unwrap();
    assert_eq!(page.host.children(grid), app.cards().to_vec());
    assert_eq!(app.cards().len(), 4);

    let headings: Vec<_> = app
        .cards()
        .iter()
        .map(|card| page.host.inner_html(*card))
        .collect();
    assert!(headings[0].starts_with("<h3>Project Nightfall</h3>"));
    assert!(headings[1].starts_with("<h3>Trimet Data Derby</h3>"));
    assert!(headings[2].starts_with("<h3>Arcane Dashboard</h3>"));
    assert!(headings[3].starts_with("<h3>Shadowforge API</h3>"));
}

#[test]
fn test_startup_wires_fragment_anchors() {
    let page = TestPage::new();
    let app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    // Five nav links plus the hero call to action. Card markup is opaque to
    // the in-memory host, so card links are not counted here.
    assert_eq!(app.anchor_count(), 6);
    assert_eq!(page.host.click_listener_count(page.hero_cta), 1);
    assert_eq!(page.host.scroll_listener_count(), 1);
}

#[test]
fn test_startup_highlights_first_section() {
    let page = TestPage::new();
    let app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    assert_eq!(app.nav().unwrap().active().as_deref(), Some("home"));
    assert_eq!(page.highlighted(), vec!["home"]);
    assert_eq!(
        app.nav().unwrap().section_ids(),
        vec!["home", "about", "projects", "skills", "contact"]
    );
}

#[test]
fn test_startup_without_grid_keeps_page_usable() {
    let page = TestPage::without_grid();
    let app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    assert!(app.cards().is_empty());
    assert_eq!(app.anchor_count(), 6);
    assert_eq!(app.reveal().unwrap().tracked_count(), 2);

    let event = page.host.click(page.link("contact"));
    assert!(event.default_prevented());
    assert_eq!(page.highlighted(), vec!["contact"]);
}

#[test]
fn test_startup_on_empty_document() {
    let page = folio_core::host::memory::MemoryHost::new();
    let app = PortfolioApp::start(Rc::new(page)).unwrap();

    assert!(app.cards().is_empty());
    assert_eq!(app.anchor_count(), 0);
    assert_eq!(app.reveal().unwrap().tracked_count(), 0);
    assert_eq!(app.nav().unwrap().active(), None);
}
