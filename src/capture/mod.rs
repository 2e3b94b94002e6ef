//! Off-screen render capture for visual tests.
//!
//! This module provides:
//! - [`render_and_save`]: rasterize a render node and write it as PNG
//! - [`emit_clicked`]: synthetic "clicked" signal emission
//! - [`render_snapshot`]: capture into the configured snapshot directory
//! - [`SoftwareToolkit`]: a cairo-backed [`RenderBackend`] that needs no display

pub mod backend;
pub mod file;
pub mod software;
pub mod types;

mod harness;

pub use backend::RenderBackend;
pub use harness::{CLICKED_SIGNAL, emit_clicked, render_and_save, render_snapshot};
pub use software::SoftwareToolkit;
pub use types::{
    CaptureError, NodeHandle, RendererHandle, TextureHandle, Viewport, WidgetHandle,
};
