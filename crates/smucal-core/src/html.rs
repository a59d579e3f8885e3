//! Plain-text extraction from rich-text article bodies.
//!
//! Article bodies come from a web editor and carry HTML markup. The ICS
//! description field wants plain text, so we keep only text-node content.

use scraper::Html;

/// Extracts the concatenated text-node content of an HTML fragment.
///
/// Tags and attributes are discarded; character references are resolved to
/// their literal characters (`&amp;` → `&`). Parsing is permissive:
/// malformed markup never produces an error, and plain text passes through
/// unchanged.
pub fn extract_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    Html::parse_fragment(html).root_element().text().collect()
}
