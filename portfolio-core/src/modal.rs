//! What the detail modal shows for a clicked item.

use crate::i18n::{Dictionary, ImageEntry, Lang};
use crate::switcher::{ATTR_DESC, ATTR_DESC_KEY, ATTR_IMAGES, Node};

/// Items with this class take their title from the dictionary.
pub const ABOUT_CLASS: &str = "about-btn";
pub const ABOUT_TITLE_KEY: &str = "about_btn";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    /// Markup, inserted as HTML.
    pub description: String,
    pub images: Vec<ImageEntry>,
}

impl ModalContent {
    /// Resolve the modal for `node` in `lang`.
    ///
    /// A malformed `data-images` payload does not prevent the modal from
    /// opening: the gallery stays empty and the parse error is handed back
    /// for the caller to report.
    pub fn for_item(
        dict: &Dictionary,
        lang: Lang,
        node: &impl Node,
    ) -> (ModalContent, Option<serde_json::Error>) {
        let (images, err) = match gallery(node) {
            Ok(images) => (images, None),
            Err(e) => (Vec::new(), Some(e)),
        };
        let content = ModalContent {
            title: title(dict, lang, node),
            description: description(dict, lang, node),
            images,
        };
        (content, err)
    }
}

pub fn title(dict: &Dictionary, lang: Lang, node: &impl Node) -> String {
    if node.has_class(ABOUT_CLASS)
        && let Some(t) = dict.text(lang, ABOUT_TITLE_KEY)
    {
        return t.to_string();
    }
    match node.heading_text() {
        Some(h) => h.trim().to_string(),
        None => node.text().trim().to_string(),
    }
}

/// Dictionary text for the item's description key, falling back to the
/// description stored on the element.
pub fn description(dict: &Dictionary, lang: Lang, node: &impl Node) -> String {
    node.attr(ATTR_DESC_KEY)
        .and_then(|key| dict.text(lang, &key).filter(|d| !d.is_empty()).map(str::to_string))
        .or_else(|| node.attr(ATTR_DESC))
        .unwrap_or_default()
}

/// Parse the element's stored image list. No attribute means no images.
pub fn gallery(node: &impl Node) -> Result<Vec<ImageEntry>, serde_json::Error> {
    match node.attr(ATTR_IMAGES) {
        Some(json) if !json.is_empty() => serde_json::from_str(&json),
        _ => Ok(Vec::new()),
    }
}
