//! Shared page fixture for integration tests.

use folio_core::geometry::Span;
use folio_core::host::memory::{MemoryHost, NodeId};
use std::rc::Rc;

/// Section ids in document order, with their top offsets.
pub const SECTIONS: [(&str, f64); 5] = [
    ("home", 0.0),
    ("about", 500.0),
    ("projects", 1000.0),
    ("skills", 2200.0),
    ("contact", 3000.0),
];

/// A portfolio page in memory.
pub struct TestPage {
    /// The host document.
    pub host: Rc<MemoryHost>,
    /// Navigation links, one per section, in order.
    pub nav_links: Vec<NodeId>,
    /// The project card container, if the page has one.
    pub grid: Option<NodeId>,
    /// Static skill cards inside the skills section.
    pub skill_cards: Vec<NodeId>,
    /// Call-to-action anchor in the hero pointing at the projects section.
    pub hero_cta: NodeId,
}

impl TestPage {
    /// The stock page: nav, five sections, an empty project grid, and two
    /// skill cards.
    pub fn new() -> Self {
        Self::build(true)
    }

    /// The stock page without the project grid.
    pub fn without_grid() -> Self {
        Self::build(false)
    }

    fn build(with_grid: bool) -> Self {
        let host = Rc::new(MemoryHost::new());
        let body = host.body();

        let nav = host.insert(body, "ul", &[("class", "nav-links")]);
        let nav_links = SECTIONS
            .iter()
            .map(|(id, _)| {
                let href = format!("#{id}");
                host.insert(nav, "a", &[("href", href.as_str())])
            })
            .collect();

        let mut grid = None;
        let mut skill_cards = Vec::new();
        let mut hero_cta = None;
        for (index, (id, top)) in SECTIONS.iter().enumerate() {
            let height = SECTIONS
                .get(index + 1)
                .map_or(800.0, |(_, next)| next - top);
            let section = host.insert(body, "section", &[("id", *id)]);
            host.set_span(section, Span::new(*top, height));

            match *id {
                "home" => {
                    let cta = host.insert(section, "a", &[("href", "#projects"), ("class", "btn")]);
                    host.set_span(cta, Span::new(300.0, 40.0));
                    hero_cta = Some(cta);
                }
                "projects" if with_grid => {
                    grid = Some(host.insert(section, "div", &[("id", "projects-grid")]));
                }
                "skills" => {
                    for offset in [100.0, 400.0] {
                        let card = host.insert(section, "div", &[("class", "skill-card")]);
                        host.set_span(card, Span::new(top + offset, 200.0));
                        skill_cards.push(card);
                    }
                }
                _ => {}
            }
        }

        Self {
            host,
            nav_links,
            grid,
            skill_cards,
            hero_cta: hero_cta.expect("home section has a call to action"),
        }
    }

    /// The nav link for `section`.
    pub fn link(&self, section: &str) -> NodeId {
        let index = SECTIONS
            .iter()
            .position(|(id, _)| *id == section)
            .expect("known section");
        self.nav_links[index]
    }

    /// Ids of sections whose nav link carries the active class.
    pub fn highlighted(&self) -> Vec<&'static str> {
        SECTIONS
            .iter()
            .zip(&self.nav_links)
            .filter(|(_, link)| self.host.has_class(**link, "active"))
            .map(|((id, _), _)| *id)
            .collect()
    }

    /// Lay out rendered cards inside the projects section, two per row.
    pub fn place_cards(&self, cards: &[NodeId]) {
        for (index, card) in cards.iter().enumerate() {
            let row = (index / 2) as f64;
            self.host.set_span(*card, Span::new(1100.0 + row * 450.0, 400.0));
        }
    }
}
