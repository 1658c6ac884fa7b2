//! Custom cursor halo and the ripple left behind by clicks.

use portfolio_core::constants::RIPPLE_MS;
use portfolio_core::cursor::{halo_transform, halo_vars, is_primary, px};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

const CURSOR_ID: &str = "custom-cursor";
const CLICKING_CLASS: &str = "clicking";
const RIPPLE_CLASS: &str = "data-ripple";

pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let cursor = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    cursor.set_id(CURSOR_ID);
    body.append_child(&cursor)?;

    let c = cursor.clone();
    let onmove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        let style = c.style();
        for (name, value) in halo_vars(x, y) {
            let _ = style.set_property(name, &value);
        }
        // While clicking the CSS animation owns the transform.
        if !c.class_list().contains(CLICKING_CLASS) {
            let _ = style.set_property("transform", &halo_transform(x, y));
        }
    }));
    document.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
    onmove.forget();

    let c = cursor.clone();
    let win = window.clone();
    let doc = document.clone();
    let onpress = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        if !is_primary(e.button()) {
            return;
        }
        let classes = c.class_list();
        let _ = classes.remove_1(CLICKING_CLASS);
        // Force a reflow so re-adding the class restarts the animation.
        let _ = c.offset_width();
        let _ = classes.add_1(CLICKING_CLASS);

        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        if let Err(err) = spawn_ripple(&win, &doc, &body, x, y) {
            crate::utils::error(&format!("Failed to create ripple: {err:?}"));
        }
    }));
    document.add_event_listener_with_callback("mousedown", onpress.as_ref().unchecked_ref())?;
    onpress.forget();

    let c = cursor.clone();
    let onend = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        let _ = c.class_list().remove_1(CLICKING_CLASS);
    }));
    cursor.add_event_listener_with_callback("animationend", onend.as_ref().unchecked_ref())?;
    onend.forget();
    Ok(())
}

fn spawn_ripple(
    window: &Window,
    document: &Document,
    body: &HtmlElement,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let ripple = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;
    let style = ripple.style();
    style.set_property("left", &px(x))?;
    style.set_property("top", &px(y))?;
    body.append_child(&ripple)?;

    let remove = Closure::once_into_js(move || ripple.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        RIPPLE_MS,
    )?;
    Ok(())
}
