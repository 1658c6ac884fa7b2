//! Elements the runtime works on, looked up once at start-up.

use portfolio_core::switcher::ATTR_I18N;
use portfolio_core::{Node, Page};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Items that open the detail modal when clicked.
pub const INTERACTIVE_SELECTOR: &str = ".skill-tag, .interactive-item, .about-btn";
pub const LANG_SWITCH_ID: &str = "lang-switch";

/// A page element seen through the [`Node`] interface.
#[derive(Clone, Debug)]
pub struct DomNode(pub Element);

impl Node for DomNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn set_html(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn heading_text(&self) -> Option<String> {
        self.0
            .query_selector("h3")
            .ok()
            .flatten()
            .map(|h| h.text_content().unwrap_or_default())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

pub struct Registry {
    pub localized: Vec<DomNode>,
    pub interactive: Vec<DomNode>,
    pub lang_toggle: Option<DomNode>,
}

impl Registry {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let nodes = |sel: &str| -> Result<Vec<DomNode>, JsValue> {
            Ok(query_all(document, sel)?.into_iter().map(DomNode).collect())
        };
        Ok(Registry {
            localized: nodes(&format!("[{ATTR_I18N}]"))?,
            interactive: nodes(INTERACTIVE_SELECTOR)?,
            lang_toggle: document.get_element_by_id(LANG_SWITCH_ID).map(DomNode),
        })
    }
}

impl Page for Registry {
    type Node = DomNode;

    fn localized(&mut self) -> &mut [DomNode] {
        &mut self.localized
    }

    fn interactive(&mut self) -> &mut [DomNode] {
        &mut self.interactive
    }

    fn lang_toggle(&mut self) -> Option<&mut DomNode> {
        self.lang_toggle.as_mut()
    }
}
