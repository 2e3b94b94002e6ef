//! Fill, line, rectangle and text primitives.
//!
//! Each primitive resolves its color once and then issues a fixed sequence of
//! [`DrawingSurface`] calls. A missing context or degenerate size makes the call a
//! silent no-op: these run inside per-frame paint loops where an error would only
//! interrupt the frame. Later calls paint over earlier ones; nothing is batched.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::DrawingSurface;

/// Fills the `width` x `height` area anchored at the origin with `color`.
///
/// No-op if `ctx` is `None` or either dimension is not strictly positive.
pub fn fill_background<S>(ctx: Option<&S>, width: f64, height: f64, color: &str)
where
    S: DrawingSurface + ?Sized,
{
    let Some(ctx) = ctx else {
        return;
    };
    if !is_positive(width) || !is_positive(height) {
        return;
    }

    ctx.set_source_color(Color::resolve(color));
    ctx.rectangle(0.0, 0.0, width, height);
    ctx.fill();
}

/// Strokes a one-unit-wide line from (x1, y1) to (x2, y2).
pub fn draw_line<S>(ctx: Option<&S>, x1: f64, y1: f64, x2: f64, y2: f64, color: &str)
where
    S: DrawingSurface + ?Sized,
{
    let Some(ctx) = ctx else {
        return;
    };

    ctx.set_source_color(Color::resolve(color));
    ctx.set_line_width(1.0);
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Shows `text` with its baseline origin at (x, y) using
/// [`FontDescriptor::text_default`].
pub fn draw_text<S>(ctx: Option<&S>, x: f64, y: f64, text: &str, color: &str)
where
    S: DrawingSurface + ?Sized,
{
    let Some(ctx) = ctx else {
        return;
    };

    let font = FontDescriptor::text_default();
    ctx.set_source_color(Color::resolve(color));
    ctx.select_font_face(&font.family, font.slant, font.weight);
    ctx.set_font_size(font.size);
    ctx.move_to(x, y);
    ctx.show_text(text);
}

/// Fills the rectangle at (x, y) sized `w` x `h`.
///
/// No-op if `ctx` is `None` or either dimension is not strictly positive.
pub fn draw_rect<S>(ctx: Option<&S>, x: f64, y: f64, w: f64, h: f64, color: &str)
where
    S: DrawingSurface + ?Sized,
{
    let Some(ctx) = ctx else {
        return;
    };
    if !is_positive(w) || !is_positive(h) {
        return;
    }

    ctx.set_source_color(Color::resolve(color));
    ctx.rectangle(x, y, w, h);
    ctx.fill();
}

// NaN is not positive.
fn is_positive(value: f64) -> bool {
    value > 0.0
}
