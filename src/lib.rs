//! Cairo drawing primitives and an off-screen render-capture harness.
//!
//! - [`draw`] resolves textual color specs and dispatches the fill/line/rect/text
//!   primitives onto any [`draw::DrawingSurface`] (a `cairo::Context` in production).
//! - [`capture`] rasterizes a render node through a [`capture::RenderBackend`] and
//!   writes the result to a PNG so tests can make pixel-level assertions.
//! - [`config`] holds the capture harness settings loaded from TOML.

pub mod capture;
pub mod config;
pub mod draw;

pub use config::Config;
