//! Markup helpers shared by the static extractors.
//!
//! Field lookups return `Option` so callers choose their own default;
//! nothing here fails on a missing node.

use scraper::{ElementRef, Selector};

use crate::app::{HarvestError, Result};

/// Compile a CSS selector, reporting the offending string on failure.
pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| HarvestError::Selector(css.to_string()))
}

pub fn compile_all(css: &[String]) -> Result<Vec<Selector>> {
    css.iter().map(|s| compile(s)).collect()
}

/// Visible text of an element: each text fragment trimmed, blanks dropped,
/// the rest joined with `separator`.
pub fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Text of the first descendant matching `selector`.
pub fn select_text(element: ElementRef<'_>, selector: &Selector, separator: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|node| element_text(node, separator))
}

/// Text of the first descendant matched by the earliest selector that matches anything.
pub fn select_text_any(
    element: ElementRef<'_>,
    selectors: &[Selector],
    separator: &str,
) -> Option<String> {
    selectors
        .iter()
        .find_map(|selector| select_text(element, selector, separator))
}

/// Attribute value on the first descendant matching `selector`.
pub fn select_attr(element: ElementRef<'_>, selector: &Selector, attribute: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|node| node.value().attr(attribute))
        .map(String::from)
}

/// Number of descendants matching `selector`.
pub fn count(element: ElementRef<'_>, selector: &Selector) -> u32 {
    element.select(selector).count() as u32
}
