//! HTML entity escaping.
//!
//! Catalog text is never trusted as markup. Every field passes through
//! [`escape_html`] before it is placed into card markup, in text or
//! attribute position alike.

use std::borrow::Cow;

/// Escape the five HTML-significant characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Example
///
/// ```rust
/// use folio_content::html::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
