//! Browser runtime of the portfolio page.
//!
//! `start` runs once the module is instantiated: it starts the particle
//! background, wires the navigation, binds the localized elements and the
//! detail modal, applies the initial language and installs the cursor effects.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{Dictionary, Lang};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

mod background;
mod canvas;
mod cursor;
mod modal;
mod nav;
mod registry;
mod state;
mod utils;

use crate::registry::LANG_SWITCH_ID;
use crate::state::{STATE, State};
use crate::utils::{error, get_query_param, log};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    background::start(&window, &document)?;
    nav::attach(&document)?;

    let dict = Dictionary::bundled().unwrap_or_else(|e| {
        error(&format!("Failed to parse bundled translations: {e}"));
        Dictionary::default()
    });
    let lang = initial_language(&window);
    let state = Rc::new(RefCell::new(State::new(document.clone(), dict, lang)?));
    STATE.with(|st| st.replace(Some(state.clone())));

    state.borrow_mut().switch_language(lang);
    attach_lang_toggle(state.clone())?;
    modal::attach(state)?;
    cursor::attach(&window, &document)?;
    Ok(())
}

/// Switch the page to `code` (`"zh"` or `"en"`). Returns `false` for an
/// unknown code or before `start` has run.
#[wasm_bindgen]
pub fn switch_language(code: &str) -> bool {
    let Some(lang) = Lang::from_code(code) else {
        log(&format!("Unsupported language '{code}'"));
        return false;
    };
    STATE.with(|st| match st.borrow().as_ref() {
        Some(state) => {
            state.borrow_mut().switch_language(lang);
            true
        }
        None => false,
    })
}

/// Code of the active language.
#[wasm_bindgen]
pub fn current_language() -> String {
    STATE.with(|st| {
        st.borrow()
            .as_ref()
            .map(|s| s.borrow().locale.current())
            .unwrap_or_default()
            .code()
            .to_string()
    })
}

// `?lang=en` starts the page in English; anything else starts in Chinese.
fn initial_language(window: &Window) -> Lang {
    window
        .location()
        .search()
        .ok()
        .and_then(|search| get_query_param(&search, "lang"))
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

fn attach_lang_toggle(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let Some(btn) = state.borrow().document.get_element_by_id(LANG_SWITCH_ID) else {
        return Ok(());
    };
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        state.borrow_mut().toggle_language();
    }));
    btn.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}
