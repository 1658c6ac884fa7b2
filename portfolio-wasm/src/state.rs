use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{Dictionary, Lang, Locale};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::modal::ModalView;
use crate::registry::Registry;

/// Page state shared by the event callbacks behind an `Rc<RefCell<_>>`.
/// The particle background keeps its own state and is not part of this.
pub struct State {
    pub document: Document,
    pub dict: Dictionary,
    pub locale: Locale,
    pub registry: Registry,
    pub modal: Option<ModalView>,
}

impl State {
    pub fn new(
        document: Document,
        dict: Dictionary,
        lang: Lang,
    ) -> Result<Self, JsValue> {
        let registry = Registry::bind(&document)?;
        let modal = ModalView::bind(&document);
        Ok(State {
            document,
            dict,
            locale: Locale::new(lang),
            registry,
            modal,
        })
    }

    pub fn switch_language(&mut self, lang: Lang) {
        let State {
            dict,
            locale,
            registry,
            ..
        } = self;
        locale.switch(dict, lang, registry);
    }

    pub fn toggle_language(&mut self) -> Lang {
        let State {
            dict,
            locale,
            registry,
            ..
        } = self;
        locale.toggle(dict, registry)
    }
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r#"
        <button id="lang-switch"></button>
        <a data-i18n="nav_home">首頁</a>
        <span data-i18n="only_zh">原文</span>
        <div class="skill-tag" data-desc-key="d" data-images-key="imgs">Rust</div>"#;

    const DICT: &str = r#"{
        "zh": { "nav_home": "首頁", "only_zh": "中文", "d": "<p>甲</p>", "imgs": [] },
        "en": { "nav_home": "Home", "d": "<p>A</p>", "imgs": [{ "src": "a.png", "caption": "c" }] }
    }"#;

    fn setup() -> State {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(PAGE);
        let dict = Dictionary::from_json(DICT).unwrap();
        State::new(document, dict, Lang::Zh).unwrap()
    }

    #[wasm_bindgen_test]
    fn switching_rewrites_tagged_elements() {
        let mut state = setup();
        state.switch_language(Lang::Zh);
        let toggle = state.document.get_element_by_id("lang-switch").unwrap();
        assert_eq!(toggle.text_content().unwrap(), "EN / 中");

        state.switch_language(Lang::En);
        let link = &state.registry.localized[0].0;
        assert_eq!(link.inner_html(), "Home");
        assert_eq!(toggle.text_content().unwrap(), "中 / EN");

        state.switch_language(Lang::En);
        assert_eq!(link.inner_html(), "Home");
    }

    #[wasm_bindgen_test]
    fn untranslated_key_keeps_previous_text() {
        let mut state = setup();
        state.switch_language(Lang::Zh);
        let span = state.registry.localized[1].0.clone();
        assert_eq!(span.inner_html(), "中文");
        state.switch_language(Lang::En);
        assert_eq!(span.inner_html(), "中文");
    }

    #[wasm_bindgen_test]
    fn toggle_flips_and_stores_item_data() {
        let mut state = setup();
        state.switch_language(Lang::Zh);
        assert_eq!(state.toggle_language(), Lang::En);
        assert_eq!(state.locale.current(), Lang::En);

        let tag = &state.registry.interactive[0].0;
        assert_eq!(tag.get_attribute("data-desc").unwrap(), "<p>A</p>");
        assert_eq!(
            tag.get_attribute("data-images").unwrap(),
            r#"[{"src":"a.png","caption":"c"}]"#
        );
        assert_eq!(state.toggle_language(), Lang::Zh);
    }
}
