use crate::parsers::text;
use scraper::ElementRef;

/// Collects the text content of an element and normalizes it
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    text::normalize_text(&raw)
}

/// Reads a link target from either a classic `href` or a script-driven
/// `data-url` attribute, whichever is present and non-empty
pub fn href_like(element: ElementRef<'_>) -> Option<&str> {
    let value = element.value();
    value
        .attr("href")
        .filter(|href| !href.trim().is_empty())
        .or_else(|| value.attr("data-url").filter(|url| !url.trim().is_empty()))
}

/// Returns true if the element carries the given class
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Returns true for form fields that receive typed text
pub fn is_text_input(tag_name: &str) -> bool {
    matches!(tag_name.to_lowercase().as_str(), "input" | "textarea")
}
