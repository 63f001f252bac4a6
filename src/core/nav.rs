/// Section id named by an in-page `#fragment` href.
///
/// Returns `None` for external links and for a bare `#`. A page script that
/// compares `href` against `"#" + activeId` would mark a bare `#` link active
/// while no section is crossed (empty id); here it never binds to a section.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Selector for the element an in-page href points at.
#[inline]
pub fn anchor_selector(href: &str) -> Option<String> {
    anchor_target(href).map(|id| format!("#{}", id))
}
