//! Backend operation set the drawing primitives are issued against.

use super::color::Color;
use super::font::{FontSlant, FontWeight};

/// Abstraction over a 2D drawing context and its current paint state.
///
/// The primitives in [`ops`](super::ops) only ever talk to this trait, so they can be
/// tested against a recording stub. Production code passes a `cairo::Context`.
///
/// Implementations absorb backend failures: a fill or stroke that fails leaves the
/// surface untouched and the caller is not told.
pub trait DrawingSurface {
    fn set_source_color(&self, color: Color);
    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64);
    /// Fills the current path using the backend's default (non-zero) fill rule.
    fn fill(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn set_line_width(&self, width: f64);
    fn stroke(&self);
    fn select_font_face(&self, family: &str, slant: FontSlant, weight: FontWeight);
    fn set_font_size(&self, size: f64);
    /// Shows `text` with its baseline origin at the current point.
    fn show_text(&self, text: &str);
}

impl DrawingSurface for cairo::Context {
    fn set_source_color(&self, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) {
        cairo::Context::rectangle(self, x, y, width, height);
    }

    fn fill(&self) {
        if let Err(err) = cairo::Context::fill(self) {
            log::trace!("cairo fill failed: {}", err);
        }
    }

    fn move_to(&self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn set_line_width(&self, width: f64) {
        cairo::Context::set_line_width(self, width);
    }

    fn stroke(&self) {
        if let Err(err) = cairo::Context::stroke(self) {
            log::trace!("cairo stroke failed: {}", err);
        }
    }

    fn select_font_face(&self, family: &str, slant: FontSlant, weight: FontWeight) {
        cairo::Context::select_font_face(self, family, slant.into(), weight.into());
    }

    fn set_font_size(&self, size: f64) {
        cairo::Context::set_font_size(self, size);
    }

    fn show_text(&self, text: &str) {
        if let Err(err) = cairo::Context::show_text(self, text) {
            log::trace!("cairo show_text failed: {}", err);
        }
    }
}
