//! In-process toolkit backend built on cairo surfaces.
//!
//! Render nodes are cairo recording surfaces whose natural bounds are their ink
//! extents; textures are ARGB32 image surfaces. This lets the capture harness run
//! end-to-end in tests without a display server or a native toolkit.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    fs::File,
    path::Path,
    rc::Rc,
};

use cairo::{Content, Context, Format, ImageSurface, RecordingSurface};

use crate::capture::{
    backend::RenderBackend,
    types::{CaptureError, NodeHandle, RendererHandle, TextureHandle, Viewport, WidgetHandle},
};

type SignalHandler = Rc<dyn Fn(WidgetHandle)>;

struct Node {
    recording: RecordingSurface,
    bounds: Viewport,
}

#[derive(Default)]
struct Widget {
    handlers: HashMap<String, Vec<SignalHandler>>,
}

/// Software [`RenderBackend`] with handle tables for renderers, nodes, textures
/// and widgets.
///
/// Single-threaded like the toolkits it stands in for.
pub struct SoftwareToolkit {
    next_id: Cell<usize>,
    renderers: RefCell<HashSet<usize>>,
    nodes: RefCell<HashMap<usize, Node>>,
    textures: RefCell<HashMap<usize, ImageSurface>>,
    widgets: RefCell<HashMap<usize, Widget>>,
}

impl Default for SoftwareToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareToolkit {
    pub fn new() -> Self {
        Self {
            // 0 is reserved for the null handle.
            next_id: Cell::new(1),
            renderers: RefCell::new(HashSet::new()),
            nodes: RefCell::new(HashMap::new()),
            textures: RefCell::new(HashMap::new()),
            widgets: RefCell::new(HashMap::new()),
        }
    }

    fn allocate_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn create_renderer(&self) -> RendererHandle {
        let id = self.allocate_id();
        self.renderers.borrow_mut().insert(id);
        RendererHandle::from_raw(id)
    }

    /// Records a render node by running `draw` against a recording context.
    ///
    /// The node's bounds are the ink extents of whatever `draw` painted.
    pub fn create_node<F>(&self, draw: F) -> Result<NodeHandle, CaptureError>
    where
        F: FnOnce(&Context),
    {
        let recording = RecordingSurface::create(Content::ColorAlpha, None)?;
        {
            let ctx = Context::new(&recording)?;
            draw(&ctx);
            ctx.status()?;
        }
        recording.flush();

        let (x, y, width, height) = recording.ink_extents();
        let id = self.allocate_id();
        log::debug!(
            "Recorded node {} with bounds {:.1},{:.1} {:.1}x{:.1}",
            id,
            x,
            y,
            width,
            height
        );
        self.nodes.borrow_mut().insert(
            id,
            Node {
                recording,
                bounds: Viewport {
                    x,
                    y,
                    width,
                    height,
                },
            },
        );
        Ok(NodeHandle::from_raw(id))
    }

    /// Natural bounds of a recorded node.
    pub fn node_bounds(&self, node: NodeHandle) -> Option<Viewport> {
        self.nodes.borrow().get(&node.as_raw()).map(|n| n.bounds)
    }

    pub fn remove_node(&self, node: NodeHandle) -> bool {
        self.nodes.borrow_mut().remove(&node.as_raw()).is_some()
    }

    pub fn create_widget(&self) -> WidgetHandle {
        let id = self.allocate_id();
        self.widgets.borrow_mut().insert(id, Widget::default());
        WidgetHandle::from_raw(id)
    }

    /// Connects `handler` to `signal` on `widget`. Handlers run in connection order.
    pub fn connect<F>(&self, widget: WidgetHandle, signal: &str, handler: F) -> bool
    where
        F: Fn(WidgetHandle) + 'static,
    {
        let mut widgets = self.widgets.borrow_mut();
        let Some(entry) = widgets.get_mut(&widget.as_raw()) else {
            log::warn!("Cannot connect '{}' on unknown widget {}", signal, widget.as_raw());
            return false;
        };
        entry
            .handlers
            .entry(signal.to_string())
            .or_default()
            .push(Rc::new(handler));
        true
    }

    /// Number of textures produced and not yet released.
    pub fn live_textures(&self) -> usize {
        self.textures.borrow().len()
    }

    /// Pixel size of a live texture.
    pub fn texture_size(&self, texture: TextureHandle) -> Option<(i32, i32)> {
        self.textures
            .borrow()
            .get(&texture.as_raw())
            .map(|surface| (surface.width(), surface.height()))
    }

    fn rasterize(
        &self,
        renderer: RendererHandle,
        node: NodeHandle,
        viewport: Option<Viewport>,
    ) -> Result<TextureHandle, CaptureError> {
        if !self.renderers.borrow().contains(&renderer.as_raw()) {
            return Err(CaptureError::UnknownHandle {
                kind: "renderer",
                raw: renderer.as_raw(),
            });
        }

        let nodes = self.nodes.borrow();
        let node = nodes
            .get(&node.as_raw())
            .ok_or(CaptureError::UnknownHandle {
                kind: "node",
                raw: node.as_raw(),
            })?;

        let area = viewport.unwrap_or(node.bounds);
        let width = area.width.ceil() as i32;
        let height = area.height.ceil() as i32;
        if width <= 0 || height <= 0 {
            return Err(CaptureError::EmptyBounds);
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)?;
        {
            let ctx = Context::new(&image)?;
            ctx.set_source_surface(&node.recording, -area.x, -area.y)?;
            ctx.paint()?;
        }
        image.flush();

        let id = self.allocate_id();
        self.textures.borrow_mut().insert(id, image);
        Ok(TextureHandle::from_raw(id))
    }

    fn write_png(&self, texture: TextureHandle, path: &Path) -> Result<(), CaptureError> {
        let textures = self.textures.borrow();
        let image = textures
            .get(&texture.as_raw())
            .ok_or(CaptureError::UnknownHandle {
                kind: "texture",
                raw: texture.as_raw(),
            })?;

        let mut file = File::create(path)?;
        image.write_to_png(&mut file)?;
        Ok(())
    }
}

impl RenderBackend for SoftwareToolkit {
    fn render_texture(
        &self,
        renderer: RendererHandle,
        node: NodeHandle,
        viewport: Option<Viewport>,
    ) -> Option<TextureHandle> {
        match self.rasterize(renderer, node, viewport) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("Rasterization failed: {}", e);
                None
            }
        }
    }

    fn save_texture_to_png(&self, texture: TextureHandle, path: &Path) -> bool {
        match self.write_png(texture, path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Saving texture to {} failed: {}", path.display(), e);
                false
            }
        }
    }

    fn release(&self, texture: TextureHandle) {
        if self.textures.borrow_mut().remove(&texture.as_raw()).is_none() {
            log::warn!("Release of unknown texture {}", texture.as_raw());
        }
    }

    fn emit_signal(&self, widget: WidgetHandle, signal: &str) {
        // Clone the handlers out so they may call back into the toolkit.
        let handlers: Vec<SignalHandler> = match self.widgets.borrow().get(&widget.as_raw()) {
            Some(entry) => entry.handlers.get(signal).cloned().unwrap_or_default(),
            None => {
                log::warn!("Signal '{}' emitted on unknown widget {}", signal, widget.as_raw());
                return;
            }
        };

        log::debug!(
            "Emitting '{}' on widget {} ({} handlers)",
            signal,
            widget.as_raw(),
            handlers.len()
        );
        for handler in handlers {
            handler(widget);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{draw_rect, fill_background};

    #[test]
    fn test_node_bounds_follow_ink() {
        let toolkit = SoftwareToolkit::new();
        let node = toolkit
            .create_node(|ctx| draw_rect(Some(ctx), 10.0, 20.0, 30.0, 40.0, "red"))
            .unwrap();
        let bounds = toolkit.node_bounds(node).unwrap();
        assert_eq!(
            (bounds.x, bounds.y, bounds.width, bounds.height),
            (10.0, 20.0, 30.0, 40.0)
        );
    }

    #[test]
    fn test_texture_matches_bounds() {
        let toolkit = SoftwareToolkit::new();
        let renderer = toolkit.create_renderer();
        let node = toolkit
            .create_node(|ctx| fill_background(Some(ctx), 64.0, 32.0, "white"))
            .unwrap();

        let texture = toolkit.render_texture(renderer, node, None).unwrap();
        assert_eq!(toolkit.texture_size(texture), Some((64, 32)));
        assert_eq!(toolkit.live_textures(), 1);

        toolkit.release(texture);
        assert_eq!(toolkit.live_textures(), 0);
    }

    #[test]
    fn test_viewport_overrides_bounds() {
        let toolkit = SoftwareToolkit::new();
        let renderer = toolkit.create_renderer();
        let node = toolkit
            .create_node(|ctx| fill_background(Some(ctx), 64.0, 32.0, "white"))
            .unwrap();
        let viewport = Viewport {
            x: 0.0,
            y: 0.0,
            width: 8.0,
            height: 4.0,
        };

        let texture = toolkit
            .render_texture(renderer, node, Some(viewport))
            .unwrap();
        assert_eq!(toolkit.texture_size(texture), Some((8, 4)));
        toolkit.release(texture);
    }

    #[test]
    fn test_empty_node_yields_no_texture() {
        let toolkit = SoftwareToolkit::new();
        let renderer = toolkit.create_renderer();
        let node = toolkit.create_node(|_| {}).unwrap();
        assert!(toolkit.render_texture(renderer, node, None).is_none());
        assert_eq!(toolkit.live_textures(), 0);
    }

    #[test]
    fn test_unknown_handles_yield_no_texture() {
        let toolkit = SoftwareToolkit::new();
        let renderer = toolkit.create_renderer();
        let node = toolkit
            .create_node(|ctx| fill_background(Some(ctx), 4.0, 4.0, "blue"))
            .unwrap();

        assert!(
            toolkit
                .render_texture(RendererHandle::from_raw(999), node, None)
                .is_none()
        );
        assert!(toolkit.remove_node(node));
        assert!(toolkit.render_texture(renderer, node, None).is_none());
    }

    #[test]
    fn test_signal_handlers_run_in_order() {
        let toolkit = SoftwareToolkit::new();
        let widget = toolkit.create_widget();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = seen.clone();
            assert!(toolkit.connect(widget, "clicked", move |_| seen.borrow_mut().push(tag)));
        }
        let other = seen.clone();
        toolkit.connect(widget, "toggled", move |_| other.borrow_mut().push("toggled"));

        toolkit.emit_signal(widget, "clicked");
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_connect_to_unknown_widget_fails() {
        let toolkit = SoftwareToolkit::new();
        assert!(!toolkit.connect(WidgetHandle::from_raw(5), "clicked", |_| {}));
    }
}
