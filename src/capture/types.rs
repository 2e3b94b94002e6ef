//! Handle and error types for render capture.

use thiserror::Error;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// The null handle. Entry points treat it as "no object".
            pub const NULL: Self = Self(0);

            pub const fn from_raw(raw: usize) -> Self {
                Self(raw)
            }

            pub const fn as_raw(self) -> usize {
                self.0
            }

            pub const fn is_null(self) -> bool {
                self.0 == 0
            }
        }
    };
}

opaque_handle!(
    /// Borrowed handle to the object that rasterizes render nodes.
    RendererHandle
);
opaque_handle!(
    /// Borrowed handle to a render node (the root of a render tree).
    NodeHandle
);
opaque_handle!(
    /// Handle to a rasterized pixel buffer. Owned by whoever produced it until released.
    TextureHandle
);
opaque_handle!(
    /// Borrowed handle to a widget that can receive signals.
    WidgetHandle
);

/// Explicit region to rasterize, overriding a node's own bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Errors raised inside capture backends and snapshot file handling.
///
/// These never cross the harness boundary: [`render_and_save`](super::render_and_save)
/// reports a plain `bool`.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Unknown {kind} handle {raw}")]
    UnknownHandle { kind: &'static str, raw: usize },

    #[error("Invalid snapshot filename template '{0}'")]
    InvalidTemplate(String),

    #[error("Snapshot name '{0}' is not a plain file name")]
    InvalidName(String),

    #[error("Render node has empty bounds")]
    EmptyBounds,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}
