//! Card markup.
//!
//! Builds the inner HTML of a project card. The card element itself (class,
//! inline styles) is created by the renderer through the host; this module
//! only produces the markup placed inside it.
//!
//! ```html
//! <h3>{title}</h3>
//! <p>{description}</p>
//! <div class="tech-stack"><span class="tech-tag">{tech}</span>…</div>
//! <div class="project-links"><a href="{url}" class="project-link">{text}</a>…</div>
//! ```

use super::escape_html;
use crate::catalog::{LinkRecord, ProjectRecord};

/// Attributes added to links that leave the page.
pub const EXTERNAL_LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Inner HTML for one project card. All record text is escaped.
///
/// # Example
///
/// ```rust
/// use folio_content::catalog::{LinkRecord, ProjectRecord};
/// use folio_content::html::card_markup;
///
/// let project = ProjectRecord {
///     title: "Tom & Jerry".to_string(),
///     description: "Cat <and> mouse".to_string(),
///     tech_stack: vec!["Rust".to_string()],
///     links: vec![LinkRecord::new("Live", "#")],
/// };
/// let html = card_markup(&project);
/// assert!(html.starts_with("<h3>Tom &amp; Jerry</h3>"));
/// assert!(html.contains("<p>Cat &lt;and&gt; mouse</p>"));
/// ```
pub fn card_markup(project: &ProjectRecord) -> String {
    let mut html = format!(
        "<h3>{}</h3><p>{}</p>",
        escape_html(&project.title),
        escape_html(&project.description)
    );

    html.push_str(r#"<div class="tech-stack">"#);
    for tech in &project.tech_stack {
        html.push_str(&format!(
            r#"<span class="tech-tag">{}</span>"#,
            escape_html(tech)
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="project-links">"#);
    for link in &project.links {
        html.push_str(&link_markup(link));
    }
    html.push_str("</div>");

    html
}

/// Markup for a single project link.
///
/// ```rust
/// use folio_content::catalog::LinkRecord;
/// use folio_content::html::link_markup;
///
/// assert_eq!(
///     link_markup(&LinkRecord::new("Live", "#")),
///     r##"<a href="#" class="project-link">Live</a>"##
/// );
/// ```
pub fn link_markup(link: &LinkRecord) -> String {
    let target = if link.is_external() {
        format!(" {EXTERNAL_LINK_ATTRS}")
    } else {
        String::new()
    };
    format!(
        r#"<a href="{}" class="project-link"{}>{}</a>"#,
        escape_html(&link.url),
        target,
        escape_html(&link.text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nightfall() -> ProjectRecord {
        ProjectRecord {
            title: "Project Nightfall".to_string(),
            description: "A shoot 'em up".to_string(),
            tech_stack: vec!["Python".to_string(), "Pygame-CE".to_string()],
            links: vec![
                LinkRecord::new("View Live →", "#"),
                LinkRecord::new("GitHub →", "https://github.com/Aethelbrad/planes-pygame"),
            ],
        }
    }

    #[test]
    fn test_card_structure() {
        let html = card_markup(&nightfall());
        assert_eq!(
            html,
            concat!(
                "<h3>Project Nightfall</h3>",
                "<p>A shoot &#39;em up</p>",
                r#"<div class="tech-stack">"#,
                r#"<span class="tech-tag">Python</span>"#,
                r#"<span class="tech-tag">Pygame-CE</span>"#,
                "</div>",
                r#"<div class="project-links">"#,
                r##"<a href="#" class="project-link">View Live →</a>"##,
                r#"<a href="https://github.com/Aethelbrad/planes-pygame" class="project-link" target="_blank" rel="noopener noreferrer">GitHub →</a>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_tech_tags_in_order() {
        let html = card_markup(&nightfall());
        let python = html.find(">Python<").unwrap_or(usize::MAX);
        let pygame = html.find(">Pygame-CE<").unwrap_or(0);
        assert!(python < pygame);
    }

    #[test]
    fn test_empty_lists_still_render_containers() {
        let project = ProjectRecord {
            title: "Bare".to_string(),
            description: String::new(),
            tech_stack: Vec::new(),
            links: Vec::new(),
        };
        assert_eq!(
            card_markup(&project),
            r#"<h3>Bare</h3><p></p><div class="tech-stack"></div><div class="project-links"></div>"#
        );
    }

    #[test]
    fn test_hostile_fields_are_escaped() {
        let project = ProjectRecord {
            title: "<img src=x onerror=alert(1)>".to_string(),
            description: "a & b".to_string(),
            tech_stack: vec!["<script>".to_string()],
            links: vec![LinkRecord::new(
                "</a><script>",
                r#"https://x.test/" onmouseover="evil()"#,
            )],
        };
        let html = card_markup(&project);
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"href="https://x.test/&quot; onmouseover=&quot;evil()""#));
        assert!(html.contains("&lt;/a&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_external_link_opens_new_context() {
        let html = link_markup(&LinkRecord::new("GitHub", "http://example.com"));
        assert!(html.contains(EXTERNAL_LINK_ATTRS));
    }

    #[test]
    fn test_placeholder_link_stays_in_page() {
        let html = link_markup(&LinkRecord::new("Docs", "#"));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }
}
