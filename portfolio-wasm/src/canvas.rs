use std::f64::consts::PI;

use portfolio_core::Painter;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter<'a>(pub &'a CanvasRenderingContext2d);

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        let ctx = self.0;
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
        set_fill_style(ctx, color);
        ctx.fill();
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        let ctx = self.0;
        ctx.begin_path();
        set_stroke_style(ctx, color);
        ctx.set_line_width(width);
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke();
    }
}
