//! Integration tests for scroll reveal animations.

use crate::common::TestPage;
use folio_content::SiteDocument;
use folio_core::host::memory::{MemoryHost, NodeId};
use folio_ui::{PortfolioApp, PortfolioContext, RevealObserver, render_projects};
use std::rc::Rc;

const ANIMATION: &str = "fadeInUp 0.8s ease-out forwards";

/// Render and lay out cards, then start observing.
fn observed_page() -> (TestPage, Vec<NodeId>, RevealObserver<NodeId>) {
    let page = TestPage::new();
    let site = SiteDocument::builtin().unwrap();
    let ctx: PortfolioContext<MemoryHost> = PortfolioContext::from_site(Rc::clone(&page.host), site);

    let cards = render_projects(&ctx).unwrap();
    page.place_cards(&cards);
    let reveal = RevealObserver::install(&ctx).unwrap();
    (page, cards, reveal)
}

#[test]
fn test_nothing_revealed_above_the_fold() {
    let (page, cards, reveal) = observed_page();

    assert_eq!(reveal.tracked_count(), cards.len() + page.skill_cards.len());
    assert_eq!(reveal.revealed_count(), 0);
    for card in &cards {
        assert_eq!(page.host.style(*card, "animation"), None);
    }
}

#[test]
fn test_cards_reveal_row_by_row() {
    let (page, cards, reveal) = observed_page();

    // Trigger line sits 100px above the viewport bottom.
    page.host.scroll_to(500.0);
    assert!(reveal.is_revealed(&cards[0]));
    assert!(reveal.is_revealed(&cards[1]));
    assert!(!reveal.is_revealed(&cards[2]));
    assert_eq!(page.host.style(cards[0], "animation").as_deref(), Some(ANIMATION));

    page.host.scroll_to(1000.0);
    assert!(reveal.is_revealed(&cards[3]));
    assert_eq!(reveal.revealed_count(), 4);
}

#[test]
fn test_barely_visible_element_waits_for_threshold() {
    let (page, cards, reveal) = observed_page();

    // 20px of a 400px card is 5%, below the 10% threshold.
    page.host.scroll_to(420.0);
    assert!(!reveal.is_revealed(&cards[0]));

    page.host.scroll_to(440.0);
    assert!(reveal.is_revealed(&cards[0]));
}

#[test]
fn test_reveal_never_replays() {
    let (page, cards, reveal) = observed_page();

    for scroll in [1000.0, 0.0, 1000.0, 0.0, 1200.0] {
        page.host.scroll_to(scroll);
    }

    assert_eq!(reveal.revealed_count(), 4);
    for card in &cards {
        assert_eq!(page.host.style_write_count(*card, "animation"), 1);
    }
}

#[test]
fn test_skill_cards_reveal_with_projects() {
    let (page, _cards, reveal) = observed_page();

    page.host.scroll_to(2000.0);
    for card in &page.skill_cards {
        assert!(reveal.is_revealed(card));
        assert_eq!(page.host.style(*card, "animation").as_deref(), Some(ANIMATION));
    }
}

#[test]
fn test_full_startup_observes_rendered_cards() {
    let page = TestPage::new();
    let app = PortfolioApp::start(Rc::clone(&page.host)).unwrap();
    let reveal = app.reveal().unwrap();

    assert_eq!(reveal.tracked_count(), 6);
    for card in app.cards() {
        assert!(page.host.has_class(*card, "project-card"));
    }
    for card in &page.skill_cards {
        assert!(!reveal.is_revealed(card));
    }

    page.host.scroll_to(2000.0);
    assert!(page.skill_cards.iter().all(|card| reveal.is_revealed(card)));
}
