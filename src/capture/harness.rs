use std::path::{Path, PathBuf};

use crate::capture::{
    backend::RenderBackend,
    file,
    types::{NodeHandle, RendererHandle, TextureHandle, WidgetHandle},
};
use crate::config::CaptureConfig;

/// Signal emitted by [`emit_clicked`].
pub const CLICKED_SIGNAL: &str = "clicked";

/// Owns a texture for the rest of a scope and releases it exactly once on drop.
pub(crate) struct TextureGuard<'a, B: RenderBackend + ?Sized> {
    backend: &'a B,
    texture: TextureHandle,
}

impl<'a, B: RenderBackend + ?Sized> TextureGuard<'a, B> {
    pub(crate) fn new(backend: &'a B, texture: TextureHandle) -> Self {
        Self { backend, texture }
    }

    pub(crate) fn texture(&self) -> TextureHandle {
        self.texture
    }
}

impl<B: RenderBackend + ?Sized> Drop for TextureGuard<'_, B> {
    fn drop(&mut self) {
        log::trace!("Releasing texture {}", self.texture.as_raw());
        self.backend.release(self.texture);
    }
}

/// Rasterizes `node` with `renderer` at the node's own bounds and writes the result
/// to `path` as PNG.
///
/// Returns `false` if either handle is null, rasterization produced no texture, or
/// the file could not be written. The intermediate texture is always released
/// before returning.
pub fn render_and_save<B>(
    backend: &B,
    renderer: RendererHandle,
    node: NodeHandle,
    path: &Path,
) -> bool
where
    B: RenderBackend + ?Sized,
{
    if renderer.is_null() || node.is_null() {
        log::debug!("render_and_save called with a null renderer or node");
        return false;
    }

    let Some(texture) = backend.render_texture(renderer, node, None) else {
        log::warn!("Rasterizing node {} produced no texture", node.as_raw());
        return false;
    };
    let guard = TextureGuard::new(backend, texture);

    let saved = backend.save_texture_to_png(guard.texture(), path);
    if saved {
        log::debug!("Saved render of node {} to {}", node.as_raw(), path.display());
    } else {
        log::warn!("Failed to save render to {}", path.display());
    }
    saved
}

/// Emits the "clicked" signal on `widget` to simulate user interaction.
///
/// No-op for a null widget.
pub fn emit_clicked<B>(backend: &B, widget: WidgetHandle)
where
    B: RenderBackend + ?Sized,
{
    if widget.is_null() {
        return;
    }
    backend.emit_signal(widget, CLICKED_SIGNAL);
}

/// Renders `node` into the configured snapshot directory.
///
/// The file is named `<name>.png`, or after the configured filename template when
/// `name` is `None`. Returns the written path, or `None` if the name or template is
/// unusable, the directory could not be prepared, or the capture failed.
pub fn render_snapshot<B>(
    backend: &B,
    renderer: RendererHandle,
    node: NodeHandle,
    name: Option<&str>,
    config: &CaptureConfig,
) -> Option<PathBuf>
where
    B: RenderBackend + ?Sized,
{
    let path = match file::snapshot_path(config, name) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Cannot build snapshot path: {}", e);
            return None;
        }
    };

    render_and_save(backend, renderer, node, &path).then_some(path)
}
