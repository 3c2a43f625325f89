//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::GameState;

const BACKGROUND: &str = "#202020";
const FOREGROUND: &str = "#f1f1f1";
const TITLE: &str = "PONG";
const TITLE_FONT: &str = "bold 40px sans-serif";
const LABEL_FONT: &str = "500 20px sans-serif";

/// Owns the 2D context and the device pixel ratio
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Read once at startup. Goes stale if the window moves to a display
    /// with a different ratio; a known limitation.
    dpr: f64,
}

impl CanvasRenderer {
    /// Acquire the 2D context, or `None` when the canvas cannot provide one
    pub fn new(canvas: HtmlCanvasElement, dpr: f64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx, dpr })
    }

    /// Size the backing store to physical pixels and rescale to logical units
    ///
    /// Assigning width/height resets the context transform, so the DPR scale
    /// is re-applied here every time.
    pub fn resize(&self, logical_w: f64, logical_h: f64) {
        self.canvas.set_width((logical_w * self.dpr) as u32);
        self.canvas.set_height((logical_h * self.dpr) as u32);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{logical_w}px"));
        let _ = style.set_property("height", &format!("{logical_h}px"));

        let _ = self.ctx.scale(self.dpr, self.dpr);
    }

    /// Full repaint: background, title, placeholder score labels, ball,
    /// both platforms
    pub fn render(&self, state: &GameState) {
        let w = f64::from(state.viewport.width);
        let h = f64::from(state.viewport.height);
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        ctx.set_font(TITLE_FONT);
        let _ = ctx.fill_text(TITLE, w / 2.0, 70.0);

        // Placeholder labels; scoring is out of scope
        ctx.set_font(LABEL_FONT);
        let _ = ctx.fill_text("Left player: 0", 300.0, 150.0);
        let _ = ctx.fill_text("Right player: 0", w - 300.0, 150.0);

        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(state.ball.pos.x),
            f64::from(state.ball.pos.y),
            f64::from(state.ball.radius),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();

        let ph = f64::from(state.tuning.platform_height);
        self.fill_rounded_rect(
            f64::from(LEFT_PLATFORM_X),
            f64::from(state.left.y),
            f64::from(PLATFORM_WIDTH),
            ph,
        );
        self.fill_rounded_rect(
            w - f64::from(RIGHT_PLATFORM_INSET),
            f64::from(state.right.y),
            f64::from(PLATFORM_WIDTH),
            ph,
        );
    }

    /// Trace and fill a rounded rectangle with `arc_to`
    ///
    /// `roundRect` is not exposed by stable web-sys, so the path is built by
    /// hand.
    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        let r = PLATFORM_CORNER_RADIUS;
        let ctx = &self.ctx;

        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
        ctx.fill();
    }
}
