//! Language switching over an explicit element registry.
//!
//! The switcher never queries the page itself. The host hands it a [`Page`]
//! (the bound elements) and the switcher rewrites those elements in place.

use crate::i18n::{Dictionary, Lang};

/// Key of the display string that replaces an element's content.
pub const ATTR_I18N: &str = "data-i18n";
/// Key of the long-form description shown in the detail modal.
pub const ATTR_DESC_KEY: &str = "data-desc-key";
/// Key of the image list shown in the detail modal.
pub const ATTR_IMAGES_KEY: &str = "data-images-key";
/// Resolved description for the active language.
pub const ATTR_DESC: &str = "data-desc";
/// Resolved image list for the active language, as JSON.
pub const ATTR_IMAGES: &str = "data-images";

/// The slice of element behaviour the page runtime needs.
pub trait Node {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&mut self, name: &str, value: &str);
    /// Replace the element's children with parsed markup.
    fn set_html(&mut self, html: &str);
    fn set_text(&mut self, text: &str);
    fn text(&self) -> String;
    /// Text of the element's first `h3`, if it has one.
    fn heading_text(&self) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
}

/// Elements bound once at start-up.
pub trait Page {
    type Node: Node;

    /// Elements carrying [`ATTR_I18N`].
    fn localized(&mut self) -> &mut [Self::Node];
    /// Elements that open the detail modal.
    fn interactive(&mut self) -> &mut [Self::Node];
    fn lang_toggle(&mut self) -> Option<&mut Self::Node>;
}

/// Rewrite `page` for `lang`. Elements whose keys do not resolve are left
/// exactly as they were.
pub fn apply<P: Page>(dict: &Dictionary, lang: Lang, page: &mut P) {
    for node in page.localized() {
        if let Some(key) = node.attr(ATTR_I18N)
            && let Some(html) = dict.text(lang, &key)
        {
            node.set_html(html);
        }
    }

    for node in page.interactive() {
        if let Some(key) = node.attr(ATTR_DESC_KEY)
            && let Some(desc) = dict.text(lang, &key)
        {
            node.set_attr(ATTR_DESC, desc);
        }
        if let Some(key) = node.attr(ATTR_IMAGES_KEY)
            && let Some(json) = dict.images_json(lang, &key)
        {
            node.set_attr(ATTR_IMAGES, &json);
        }
    }

    if let Some(toggle) = page.lang_toggle() {
        toggle.set_text(lang.toggle_label());
    }
}

/// The active language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Locale {
    current: Lang,
}

impl Locale {
    pub fn new(lang: Lang) -> Self {
        Locale { current: lang }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn switch<P: Page>(&mut self, dict: &Dictionary, lang: Lang, page: &mut P) {
        self.current = lang;
        apply(dict, lang, page);
    }

    /// Flip to the other language and return it.
    pub fn toggle<P: Page>(&mut self, dict: &Dictionary, page: &mut P) -> Lang {
        let next = self.current.other();
        self.switch(dict, next, page);
        next
    }
}
