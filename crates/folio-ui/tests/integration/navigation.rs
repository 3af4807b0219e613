//! Integration tests for smooth scrolling and nav highlighting.

use crate::common::{SECTIONS, TestPage};
use folio_core::Host;
use folio_ui::PortfolioApp;
use std::rc::Rc;

#[test]
fn test_highlight_follows_scroll_position() {
    let page = TestPage::new();
    let app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();
    let nav = app.nav().unwrap();

    for (scroll, expected) in [
        (0.0, "home"),
        (399.0, "home"),
        (400.0, "about"),
        (550.0, "about"),
        (1050.0, "projects"),
        (2150.0, "skills"),
        (5000.0, "contact"),
    ] {
        page.host.scroll_to(scroll);
        assert_eq!(nav.active().as_deref(), Some(expected), "at {scroll}");
        assert_eq!(page.highlighted(), vec![expected], "at {scroll}");
    }
}

#[test]
fn test_scrolling_back_up_restores_highlight() {
    let page = TestPage::new();
    let _app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    page.host.scroll_to(3000.0);
    assert_eq!(page.highlighted(), vec!["contact"]);
    page.host.scroll_to(0.0);
    assert_eq!(page.highlighted(), vec!["home"]);
}

#[test]
fn test_nav_click_scrolls_and_highlights() {
    let page = TestPage::new();
    let _app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    let event = page.host.click(page.link("skills"));

    assert!(event.default_prevented());
    let skills = page.host.element_by_id("skills").unwrap();
    assert_eq!(page.host.scroll_requests(), vec![skills]);
    assert_eq!(page.host.viewport().scroll_y, 2200.0);
    assert_eq!(page.highlighted(), vec!["skills"]);
}

#[test]
fn test_hero_call_to_action_scrolls_to_projects() {
    let page = TestPage::new();
    let _app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    page.host.click(page.hero_cta);

    assert_eq!(page.host.viewport().scroll_y, 1000.0);
    assert_eq!(page.highlighted(), vec!["projects"]);
}

#[test]
fn test_every_nav_link_reaches_its_section() {
    let page = TestPage::new();
    let _app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    for (id, top) in SECTIONS {
        page.host.click(page.link(id));
        assert_eq!(page.host.viewport().scroll_y, top);
        assert_eq!(page.highlighted(), vec![id]);
    }
    assert_eq!(page.host.scroll_requests().len(), SECTIONS.len());
}

#[test]
fn test_link_to_missing_section_is_ignored() {
    let page = TestPage::new();
    let broken = page
        .host
        .insert(page.host.body(), "a", &[("href", "#nowhere")]);
    let _app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();

    let event = page.host.click(broken);

    assert!(event.default_prevented());
    assert!(page.host.scroll_requests().is_empty());
    assert_eq!(page.host.viewport().scroll_y, 0.0);
}
