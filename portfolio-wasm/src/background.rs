//! Full-viewport particle animation behind the page.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{FieldConfig, ParticleField};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::canvas::CanvasPainter;
use crate::utils::viewport_size;

pub const CANVAS_ID: &str = "bg-canvas";

struct Background {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
}

impl Background {
    /// Match the canvas to the viewport and respawn every particle.
    fn resize(&mut self) {
        let (w, h) = viewport_size(&self.window);
        fit_canvas(&self.canvas, w, h);
        self.field.resize(w, h, &mut js_sys::Math::random);
    }

    fn frame(&mut self) {
        self.field.frame(&mut CanvasPainter(&self.ctx));
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

fn init_canvas(document: &Document) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let cv = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    let ctx = cv
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((cv, ctx))
}

/// Start the background. Without a canvas or a 2D context the page simply
/// has no background.
pub fn start(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some((canvas, ctx)) = init_canvas(document) else {
        return Ok(());
    };
    let (w, h) = viewport_size(window);
    fit_canvas(&canvas, w, h);
    let field = ParticleField::new(w, h, FieldConfig::default(), &mut js_sys::Math::random);
    let bg = Rc::new(RefCell::new(Background {
        window: window.clone(),
        canvas,
        ctx,
        field,
    }));

    let st = bg.clone();
    let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        st.borrow_mut().resize();
    }));
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();

    start_animation(window.clone(), bg);
    Ok(())
}

fn start_animation(window: Window, bg: Rc<RefCell<Background>>) {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        bg.borrow_mut().frame();
        if let Some(cb) = f.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
