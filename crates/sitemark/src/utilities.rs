//! Utility functions for embedding rendered documents into pages.

/// Opening tag of the document root
pub const ROOT_OPEN: &str = "<div>";

/// Closing tag of the document root
pub const ROOT_CLOSE: &str = "</div>";

/// Remove the `<div>...</div>` wrapper around a serialized document.
///
/// The input is returned unchanged unless it both starts and ends with the
/// wrapper tags.
pub fn strip_root_wrapper(html: &str) -> &str {
    html.strip_prefix(ROOT_OPEN)
        .and_then(|inner| inner.strip_suffix(ROOT_CLOSE))
        .unwrap_or(html)
}

/// Replace every occurrence of each placeholder with its value, in order
pub fn fill_template(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |page, &(placeholder, value)| {
            page.replace(placeholder, value)
        })
}
