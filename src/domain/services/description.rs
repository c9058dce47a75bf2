//! Item description cleanup
//!
//! Descriptions are stored as rich-text HTML with embedded document
//! references (`@UUID[Item.abc]{Quick}`, `@Compendium[swade.edges]`). The
//! detail view shows plain text, so markup is stripped on a best-effort
//! basis.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when an item has no usable description
pub const NO_DESCRIPTION: &str = "No description available";

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// `@Kind[locator]{label}`
static LABELLED_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@[A-Za-z]+\[[^\]]+\]\{([^}]+)\}").expect("Invalid labelled reference regex")
});

/// `@Kind[locator]`
static BARE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@[A-Za-z]+\[[^\]]+\]").expect("Invalid bare reference regex")
});

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid bracket regex"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Turn a raw item description into display text.
///
/// Returns [`NO_DESCRIPTION`] when the input is missing or nothing is left
/// after cleanup.
pub fn sanitize_description(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return NO_DESCRIPTION.to_string();
    };

    let text = HTML_TAG.replace_all(raw, "");
    let text = LABELLED_REFERENCE.replace_all(&text, "$1");
    let text = BARE_REFERENCE.replace_all(&text, "");
    let text = BRACKETED.replace_all(&text, "$1");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    if text.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        text.to_string()
    }
}
