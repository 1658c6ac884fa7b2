//! Scroll-spy bookkeeping for the side navigation.

/// `href` of the nav link pointing at section `id`.
pub fn href_for(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Section id an in-page link points at, if it is one.
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Index of the link that should be highlighted when `section_id` scrolls
/// into view.
pub fn active_link<'a>(
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
    section_id: &str,
) -> Option<usize> {
    let wanted = href_for(section_id);
    hrefs.into_iter().position(|h| h == Some(wanted.as_str()))
}
