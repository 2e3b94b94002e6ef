use std::path::Path;

use crate::capture::types::{NodeHandle, RendererHandle, TextureHandle, Viewport, WidgetHandle};

/// Abstraction over the toolkit operations the capture harness needs.
///
/// Implemented by [`SoftwareToolkit`](super::SoftwareToolkit) and by native toolkit
/// bindings; tests substitute counting mocks.
pub trait RenderBackend {
    /// Rasterizes `node` into a new texture. With `viewport == None` the backend uses
    /// the node's own bounds. Returns `None` when nothing could be rasterized.
    fn render_texture(
        &self,
        renderer: RendererHandle,
        node: NodeHandle,
        viewport: Option<Viewport>,
    ) -> Option<TextureHandle>;

    /// Writes `texture` to `path` as PNG.
    fn save_texture_to_png(&self, texture: TextureHandle, path: &Path) -> bool;

    /// Drops the caller's reference to `texture`.
    fn release(&self, texture: TextureHandle);

    /// Emits the named signal on `widget`.
    fn emit_signal(&self, widget: WidgetHandle, signal: &str);
}
