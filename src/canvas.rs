use crate::core::RoundedRect;
use crate::render::{CssColor, Surface};
use web_sys as web;

/// [`Surface`] backed by a browser 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn rounded_rect_path(&self, r: RoundedRect) {
        let RoundedRect {
            x,
            y,
            width: w,
            height: h,
            radius,
        } = r;
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + radius, y);
        ctx.line_to(x + w - radius, y);
        ctx.quadratic_curve_to(x + w, y, x + w, y + radius);
        ctx.line_to(x + w, y + h - radius);
        ctx.quadratic_curve_to(x + w, y + h, x + w - radius, y + h);
        ctx.line_to(x + radius, y + h);
        ctx.quadratic_curve_to(x, y + h, x, y + h - radius);
        ctx.line_to(x, y + radius);
        ctx.quadratic_curve_to(x, y, x + radius, y);
        ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: CssColor) {
        self.rounded_rect_path(rect);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
