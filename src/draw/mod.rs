//! Drawing primitives (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color with the textual color resolver
//! - [`DrawingSurface`]: the backend operation set the primitives are issued against
//! - [`FontDescriptor`]: the face used for text primitives
//! - [`fill_background`], [`draw_line`], [`draw_rect`], [`draw_text`]: the primitives

pub mod color;
pub mod font;
pub mod ops;
pub mod surface;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use font::{FontDescriptor, FontSlant, FontWeight};
pub use ops::{draw_line, draw_rect, draw_text, fill_background};
pub use surface::DrawingSurface;

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
