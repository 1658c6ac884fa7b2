// In-memory stand-ins for page elements so the switcher and modal can be
// exercised without a browser.
#![allow(dead_code)]

use std::collections::HashMap;

use portfolio_core::{Node, Page};

#[derive(Clone, Debug, Default)]
pub struct FakeNode {
    pub attrs: HashMap<String, String>,
    pub html: String,
    pub classes: Vec<String>,
    pub heading: Option<String>,
}

impl FakeNode {
    pub fn tagged(key: &str, html: &str) -> Self {
        FakeNode::default().with_attr("data-i18n", key).with_html(html)
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_heading(mut self, heading: &str) -> Self {
        self.heading = Some(heading.to_string());
        self
    }
}

impl Node for FakeNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }
    fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }
    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
    }
    fn set_text(&mut self, text: &str) {
        self.html = text.to_string();
    }
    fn text(&self) -> String {
        self.html.clone()
    }
    fn heading_text(&self) -> Option<String> {
        self.heading.clone()
    }
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakePage {
    pub localized: Vec<FakeNode>,
    pub interactive: Vec<FakeNode>,
    pub toggle: Option<FakeNode>,
}

impl FakePage {
    pub fn contents(&self) -> Vec<String> {
        self.localized.iter().map(|n| n.html.clone()).collect()
    }
}

impl Page for FakePage {
    type Node = FakeNode;

    fn localized(&mut self) -> &mut [FakeNode] {
        &mut self.localized
    }
    fn interactive(&mut self) -> &mut [FakeNode] {
        &mut self.interactive
    }
    fn lang_toggle(&mut self) -> Option<&mut FakeNode> {
        self.toggle.as_mut()
    }
}
