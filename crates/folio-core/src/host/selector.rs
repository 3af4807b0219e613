//! A small CSS selector engine.
//!
//! Covers the selectors the page actually uses: type, `#id`, `.class`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, the descendant combinator, and
//! comma-separated lists. Anything else is a parse error.
//!
//! # Example
//!
//! ```rust
//! use folio_core::host::selector::SelectorList;
//!
//! let list = SelectorList::parse(".project-card, .skill-card").unwrap();
//! assert_eq!(list.len(), 2);
//! assert!(SelectorList::parse("div > p").is_err());
//! ```

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*|[A-Za-z][A-Za-z0-9-]*)").expect("Invalid tag regex"));

static PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"#([\w-]+)|\.([\w-]+)|\[\s*([\w-]+)\s*(?:(\^?=)\s*(?:"([^"]*)"|'([^']*)'|([^\]\s"']+))\s*)?\]"#,
    )
    .expect("Invalid selector part regex")
});

/// The element interface a selector is matched against.
pub trait SelectorTarget: Sized {
    /// Lowercase tag name.
    fn tag_name(&self) -> String;

    /// Attribute value, if present. `id` and `class` are plain attributes.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Parent element, if any.
    fn parent(&self) -> Option<Self>;

    /// Whether the whitespace-separated `class` attribute contains `class`.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }
}

// ============================================================================
// Selector model
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
enum AttributeTest {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

impl AttributeTest {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        match self {
            Self::Exists(name) => target.attribute(name).is_some(),
            Self::Equals(name, value) => target.attribute(name).as_deref() == Some(value.as_str()),
            Self::Prefix(name, prefix) => target
                .attribute(name)
                .is_some_and(|v| v.starts_with(prefix.as_str())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeTest>,
}

impl Compound {
    fn parse(text: &str) -> Result<Self> {
        let mut compound = Compound::default();
        let mut rest = text;

        if let Some(m) = TAG_RE.find(rest) {
            if m.as_str() != "*" {
                compound.tag = Some(m.as_str().to_lowercase());
            }
            rest = &rest[m.end()..];
        }

        while !rest.is_empty() {
            let caps = PART_RE
                .captures(rest)
                .filter(|c| c.get(0).is_some_and(|m| m.start() == 0))
                .ok_or_else(|| Error::parse(format!("Unsupported selector syntax: '{text}'")))?;

            if let Some(id) = caps.get(1) {
                compound.id = Some(id.as_str().to_string());
            } else if let Some(class) = caps.get(2) {
                compound.classes.push(class.as_str().to_string());
            } else if let Some(name) = caps.get(3) {
                let name = name.as_str().to_lowercase();
                let value = caps
                    .get(5)
                    .or_else(|| caps.get(6))
                    .or_else(|| caps.get(7))
                    .map(|m| m.as_str().to_string());
                let test = match (caps.get(4).map(|m| m.as_str()), value) {
                    (Some("^="), Some(v)) => AttributeTest::Prefix(name, v),
                    (Some(_), Some(v)) => AttributeTest::Equals(name, v),
                    _ => AttributeTest::Exists(name),
                };
                compound.attributes.push(test);
            }

            let consumed = caps.get(0).map_or(0, |m| m.end());
            rest = &rest[consumed..];
        }

        Ok(compound)
    }

    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        if let Some(tag) = &self.tag
            && target.tag_name() != *tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && target.attribute("id").as_deref() != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|c| target.has_class(c))
            && self.attributes.iter().all(|a| a.matches(target))
    }
}

/// Compounds joined by descendant combinators; the last one is the subject.
#[derive(Clone, Debug, PartialEq)]
struct Complex {
    compounds: Vec<Compound>,
}

impl Complex {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(target) {
            return false;
        }

        // Greedy ancestor walk: each remaining compound must match some
        // ancestor further up than the previous one.
        let mut current = target.parent();
        for compound in ancestors.iter().rev() {
            loop {
                match current {
                    Some(node) => {
                        let found = compound.matches(&node);
                        current = node.parent();
                        if found {
                            break;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }
}

// ============================================================================
// SelectorList
// ============================================================================

/// A parsed, comma-separated selector list.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorList {
    selectors: Vec<Complex>,
}

impl SelectorList {
    /// Parse selector text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut selectors = Vec::new();
        for part in split_top_level(text, |c| c == ',') {
            let compounds = split_top_level(&part, char::is_whitespace)
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(|s| Compound::parse(&s))
                .collect::<Result<Vec<_>>>()?;
            if compounds.is_empty() {
                return Err(Error::parse(format!("Empty selector in '{text}'")));
            }
            selectors.push(Complex { compounds });
        }
        Ok(Self { selectors })
    }

    /// Number of comma-separated selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether the list holds no selectors.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Whether any selector in the list matches `target`.
    pub fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        self.selectors.iter().any(|s| s.matches(target))
    }
}

/// Split on `is_sep` outside of brackets and quotes.
fn split_top_level(text: &str, is_sep: impl Fn(char) -> bool) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, _) if depth == 0 && is_sep(c) => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    parts.push(current);
    parts.into_iter().map(|p| p.trim().to_string()).collect()
}
