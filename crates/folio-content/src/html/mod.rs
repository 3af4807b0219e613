//! HTML generation for project cards.
//!
//! - [`escape`]: entity escaping for untrusted text
//! - [`card`]: card and link markup

pub mod card;
pub mod escape;

pub use card::{EXTERNAL_LINK_ATTRS, card_markup, link_markup};
pub use escape::escape_html;
