//! Page configuration.
//!
//! [`PortfolioConfig`] names every piece of the host document the page
//! behavior depends on (container id, selectors, class names) together with
//! the tuning values for scrolling and reveal animations. All fields have
//! defaults matching the stock page markup, so an empty TOML table is a valid
//! configuration.
//!
//! ```rust
//! use folio_core::config::PortfolioConfig;
//!
//! let config = PortfolioConfig::from_toml_str("nav_offset_px = 80.0").unwrap();
//! assert_eq!(config.nav_offset_px, 80.0);
//! assert_eq!(config.container_id, "projects-grid");
//! ```

use crate::host::IntersectionOptions;
use crate::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// RevealConfig
// ============================================================================

/// Trigger and animation settings for scroll reveals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// Distance the trigger line sits above the viewport bottom, in px.
    pub bottom_inset_px: f64,
    /// CSS `animation` shorthand applied on reveal.
    pub animation: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_inset_px: 100.0,
            animation: "fadeInUp 0.8s ease-out forwards".to_string(),
        }
    }
}

impl RevealConfig {
    /// Observer trigger options for these settings.
    ///
    /// ```rust
    /// use folio_core::config::RevealConfig;
    ///
    /// let options = RevealConfig::default().intersection_options();
    /// assert_eq!(options.root_margin(), "0px 0px -100px 0px");
    /// ```
    pub fn intersection_options(&self) -> IntersectionOptions {
        IntersectionOptions {
            threshold: self.threshold,
            bottom_inset_px: self.bottom_inset_px,
        }
    }
}

// ============================================================================
// PortfolioConfig
// ============================================================================

/// Selectors, class names, and tuning values for the portfolio page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Id of the element that receives project cards.
    pub container_id: String,
    /// Class given to every rendered card.
    pub card_class: String,
    /// Anchors whose clicks are turned into smooth scrolls.
    pub anchor_selector: String,
    /// Elements that get a one-shot entrance animation.
    pub reveal_selector: String,
    /// Sections considered by the nav highlighter.
    pub section_selector: String,
    /// Navigation links toggled by the nav highlighter.
    pub nav_link_selector: String,
    /// Class marking the active navigation link.
    pub active_class: String,
    /// How far past a section's top the reader must scroll before it activates.
    pub nav_offset_px: f64,
    /// Per-card animation delay step, in milliseconds.
    pub stagger_ms: u32,
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Reveal trigger and animation.
    pub reveal: RevealConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            container_id: "projects-grid".to_string(),
            card_class: "project-card".to_string(),
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            reveal_selector: ".project-card, .skill-card".to_string(),
            section_selector: "section[id]".to_string(),
            nav_link_selector: ".nav-links a".to_string(),
            active_class: "active".to_string(),
            nav_offset_px: 100.0,
            stagger_ms: 100,
            log_level: "info".to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(Error::validation_field(
                "container_id",
                "must not be empty",
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::validation_field(
                "reveal.threshold",
                format!("must be within [0, 1], got {}", self.reveal.threshold),
            ));
        }
        if self.nav_offset_px < 0.0 {
            return Err(Error::validation_field(
                "nav_offset_px",
                format!("must not be negative, got {}", self.nav_offset_px),
            ));
        }
        if self.reveal.bottom_inset_px < 0.0 {
            return Err(Error::validation_field(
                "reveal.bottom_inset_px",
                format!("must not be negative, got {}", self.reveal.bottom_inset_px),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Resolve [`log_level`](Self::log_level) to a `log` filter.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| Error::config(format!("Unknown log level '{}'", self.log_level)))
    }

    /// Animation delay for the card at `index`, as a CSS time value.
    ///
    /// ```rust
    /// use folio_core::config::PortfolioConfig;
    ///
    /// let config = PortfolioConfig::default();
    /// assert_eq!(config.stagger_delay(0), "0s");
    /// assert_eq!(config.stagger_delay(3), "0.3s");
    /// ```
    pub fn stagger_delay(&self, index: usize) -> String {
        let millis = index as u64 * u64::from(self.stagger_ms);
        format!("{}s", millis as f64 / 1000.0)
    }
}
