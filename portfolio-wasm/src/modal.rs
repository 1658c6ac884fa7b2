//! Detail dialog opened by skill tags, project cards and the about button.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::ModalContent;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlImageElement};

use crate::registry::DomNode;
use crate::state::State;
use crate::utils::error;

pub const MODAL_ID: &str = "skill-modal";
pub const TITLE_ID: &str = "modal-title";
pub const DESC_ID: &str = "modal-desc";
pub const IMAGES_ID: &str = "modal-images";
const CLOSE_SELECTOR: &str = ".close-modal";
const OPEN_CLASS: &str = "active";

pub struct ModalView {
    root: Element,
    title: Element,
    desc: Element,
    images: Element,
}

impl ModalView {
    /// `None` when any of the dialog's parts is missing from the page.
    pub fn bind(document: &Document) -> Option<Self> {
        Some(ModalView {
            root: document.get_element_by_id(MODAL_ID)?,
            title: document.get_element_by_id(TITLE_ID)?,
            desc: document.get_element_by_id(DESC_ID)?,
            images: document.get_element_by_id(IMAGES_ID)?,
        })
    }

    pub fn show(&self, document: &Document, content: &ModalContent) -> Result<(), JsValue> {
        self.title.set_text_content(Some(&content.title));
        self.desc.set_inner_html(&content.description);

        self.images.set_inner_html("");
        for entry in &content.images {
            let item = document.create_element("div")?;
            item.set_class_name("modal-image-item");

            let img = document
                .create_element("img")?
                .dyn_into::<HtmlImageElement>()?;
            img.set_src(&entry.src);
            img.set_alt(&entry.caption);

            let caption = document.create_element("p")?;
            caption.set_class_name("modal-image-caption");
            caption.set_text_content(Some(&entry.caption));

            item.append_child(&img)?;
            item.append_child(&caption)?;
            self.images.append_child(&item)?;
        }
        self.root.class_list().add_1(OPEN_CLASS)
    }

    pub fn hide(&self) -> Result<(), JsValue> {
        self.root.class_list().remove_1(OPEN_CLASS)
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains(OPEN_CLASS)
    }
}

/// Fill and open the dialog for `node` in the current language.
pub fn open_for(state: &State, node: &DomNode) -> Result<(), JsValue> {
    let Some(view) = state.modal.as_ref() else {
        return Ok(());
    };
    let (content, bad_gallery) = ModalContent::for_item(&state.dict, state.locale.current(), node);
    if let Some(e) = bad_gallery {
        error(&format!("Error parsing images data: {e}"));
    }
    view.show(&state.document, &content)
}

// Wires item clicks, the close control and backdrop clicks.
pub fn attach(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (root, items) = {
        let s = state.borrow();
        let Some(view) = s.modal.as_ref() else {
            return Ok(());
        };
        (view.root.clone(), s.registry.interactive.clone())
    };

    for node in items {
        let st = state.clone();
        let target = node.0.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Err(e) = open_for(&st.borrow(), &node) {
                error(&format!("Failed to open details: {e:?}"));
            }
        }));
        target.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Only clicks landing on the backdrop itself close the dialog.
    let st = state.clone();
    let backdrop = root.clone();
    let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
        let on_backdrop = e
            .target()
            .is_some_and(|t| js_sys::Object::is(t.as_ref(), backdrop.as_ref()));
        if on_backdrop
            && let Some(view) = st.borrow().modal.as_ref()
            && view.is_open()
        {
            let _ = view.hide();
        }
    }));
    root.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();

    if let Some(close) = root.query_selector(CLOSE_SELECTOR)? {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(view) = st.borrow().modal.as_ref() {
                let _ = view.hide();
            }
        }));
        close.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}
