//! The project catalog.
//!
//! The catalog is configuration data: an ordered list of projects parsed once
//! at startup and never mutated. It ships embedded in the binary as TOML,
//! alongside an optional `[page]` table of [`PortfolioConfig`] overrides.
//!
//! # Example
//!
//! ```rust
//! use folio_content::catalog::SiteDocument;
//!
//! let site = SiteDocument::builtin().unwrap();
//! assert_eq!(site.catalog.len(), 4);
//! assert_eq!(site.catalog.get(0).unwrap().title, "Project Nightfall");
//! ```

use folio_core::{Error, PortfolioConfig, Result};
use serde::{Deserialize, Serialize};

/// Embedded catalog source.
pub const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Prefix that marks a link as leaving the page.
pub const EXTERNAL_PREFIX: &str = "http";

// ============================================================================
// Records
// ============================================================================

/// A labelled link attached to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Link label.
    pub text: String,
    /// Target address; `#` is a placeholder.
    pub url: String,
}

impl LinkRecord {
    /// Create a link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Whether the link points at an absolute external address and should
    /// open in a new browsing context.
    pub fn is_external(&self) -> bool {
        self.url.starts_with(EXTERNAL_PREFIX)
    }
}

/// One project shown as a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Technologies, shown as tags in order.
    pub tech_stack: Vec<String>,
    /// Links, shown in order.
    pub links: Vec<LinkRecord>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, immutable list of projects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating each one.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        for (index, project) in projects.iter().enumerate() {
            validate_project(index, project)?;
        }
        Ok(Self { projects })
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project at `index`.
    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    /// Projects in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

fn validate_project(index: usize, project: &ProjectRecord) -> Result<()> {
    if project.title.trim().is_empty() {
        return Err(Error::validation_field(
            format!("projects[{index}].title"),
            "must not be empty",
        ));
    }
    for (link_index, link) in project.links.iter().enumerate() {
        if link.url.trim().is_empty() {
            return Err(Error::validation_field(
                format!("projects[{index}].links[{link_index}].url"),
                "must not be empty",
            ));
        }
    }
    Ok(())
}

// ============================================================================
// SiteDocument
// ============================================================================

#[derive(Deserialize)]
struct RawSite {
    #[serde(default)]
    page: PortfolioConfig,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Page configuration plus catalog, as parsed from one TOML document.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteDocument {
    /// Page configuration from the `[page]` table.
    pub page: PortfolioConfig,
    /// Projects from the `[[projects]]` array.
    pub catalog: Catalog,
}

impl SiteDocument {
    /// Parse and validate a site document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawSite = toml::from_str(text)?;
        raw.page.validate()?;
        let catalog = Catalog::new(raw.projects)?;
        log::debug!("Parsed catalog with {} projects", catalog.len());
        Ok(Self {
            page: raw.page,
            catalog,
        })
    }

    /// The site document compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }
}
