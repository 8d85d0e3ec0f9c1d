use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Fragment of an in-page link (`#services`, `/#services`), if it has one.
pub fn section_id(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

/// Smoothly scrolls the element with `id` into view. Returns false when the
/// current page has no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scrolls to the section named in the current URL's hash, if any.
pub fn scroll_to_location_hash() -> bool {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    section_id(&hash).map(scroll_to_section).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_extracted_from_links() {
        assert_eq!(section_id("#services"), Some("services"));
        assert_eq!(section_id("/#contact"), Some("contact"));
        assert_eq!(section_id("https://example.com/faq#fees"), Some("fees"));
    }

    #[test]
    fn links_without_a_fragment_have_no_section() {
        assert_eq!(section_id("/faq"), None);
        assert_eq!(section_id("/#"), None);
        assert_eq!(section_id(""), None);
    }
}
