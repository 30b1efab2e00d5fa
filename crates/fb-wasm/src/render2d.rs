//! Canvas2D chrome renderer.
//!
//! Paints the builder surface under the DOM input overlays: field frames,
//! captions, the delete button, and the resize handle. The live input
//! controls themselves are DOM elements positioned from `fields_json()`.

use fb_core::FieldId;
use fb_core::model::{FormField, Rect};
use fb_render::hit::{delete_button_rect, resize_handle_rect};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

/// Gap between a field's top edge and the baseline of its caption.
const CAPTION_OFFSET: f64 = 8.0;
const FRAME_WIDTH: f64 = 2.0;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub frame: &'static str,
    pub frame_fill: &'static str,
    pub selected_frame: &'static str,
    pub selected_fill: &'static str,
    pub caption: &'static str,
    pub delete_fill: &'static str,
    pub delete_glyph: &'static str,
    pub handle: &'static str,
}

impl CanvasTheme {
    pub fn light() -> Self {
        Self {
            bg: "#FFFFFF",
            frame: "#D1D5DB",
            frame_fill: "#FFFFFF",
            selected_frame: "#3B82F6",
            selected_fill: "#EFF6FF",
            caption: "#4B5563",
            delete_fill: "#EF4444",
            delete_glyph: "#FFFFFF",
            handle: "#3B82F6",
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            frame: "#48484A",
            frame_fill: "#2C2C2E",
            selected_frame: "#0A84FF",
            selected_fill: "rgba(10, 132, 255, 0.12)",
            caption: "#98989D",
            delete_fill: "#FF453A",
            delete_glyph: "#FFFFFF",
            handle: "#0A84FF",
        }
    }
}

/// Render every field's chrome in z-order.
pub fn render_fields(
    ctx: &CanvasRenderingContext2d,
    fields: &[FormField],
    selected: Option<FieldId>,
    canvas_width: f64,
    canvas_height: f64,
    theme: &CanvasTheme,
) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    for field in fields {
        render_field(ctx, field, selected == Some(field.id), theme);
    }
}

fn render_field(
    ctx: &CanvasRenderingContext2d,
    field: &FormField,
    selected: bool,
    theme: &CanvasTheme,
) {
    let b = field.bounds();
    let (frame, fill) = if selected {
        (theme.selected_frame, theme.selected_fill)
    } else {
        (theme.frame, theme.frame_fill)
    };

    ctx.set_fill_style_str(fill);
    ctx.fill_rect(b.x as f64, b.y as f64, b.width as f64, b.height as f64);
    ctx.set_stroke_style_str(frame);
    ctx.set_line_width(FRAME_WIDTH);
    ctx.stroke_rect(b.x as f64, b.y as f64, b.width as f64, b.height as f64);

    ctx.set_font("500 12px system-ui, sans-serif");
    ctx.set_fill_style_str(theme.caption);
    if let Err(e) = ctx.fill_text(&field.label, b.x as f64, b.y as f64 - CAPTION_OFFSET) {
        log::trace!("caption for {} not drawn: {e:?}", field.id);
    }

    render_delete_button(ctx, delete_button_rect(b), theme);

    let handle = resize_handle_rect(b);
    ctx.set_fill_style_str(theme.handle);
    ctx.fill_rect(
        handle.x as f64,
        handle.y as f64,
        handle.width as f64,
        handle.height as f64,
    );
}

fn render_delete_button(ctx: &CanvasRenderingContext2d, r: Rect, theme: &CanvasTheme) {
    let cx = (r.x + r.width / 2.0) as f64;
    let cy = (r.y + r.height / 2.0) as f64;
    let radius = (r.width / 2.0) as f64;

    ctx.begin_path();
    if ctx.arc(cx, cy, radius, 0.0, TAU).is_err() {
        return;
    }
    ctx.set_fill_style_str(theme.delete_fill);
    ctx.fill();

    // Cross glyph.
    let arm = radius * 0.4;
    ctx.begin_path();
    ctx.move_to(cx - arm, cy - arm);
    ctx.line_to(cx + arm, cy + arm);
    ctx.move_to(cx + arm, cy - arm);
    ctx.line_to(cx - arm, cy + arm);
    ctx.set_stroke_style_str(theme.delete_glyph);
    ctx.set_line_width(1.5);
    ctx.stroke();
}
