mod color;
mod frame;
mod null_renderer;
mod primitives;

pub use color::Color;
pub use frame::{FrameStats, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, WedgePrimitive,
};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// A backend owns exactly one surface. It receives a fully materialized,
/// deterministic `RenderFrame`, clears its surface to the frame background and
/// paints every primitive, so drawing code stays isolated from chart geometry.
pub trait Renderer {
    /// Current pixel size of the owned surface.
    fn viewport(&self) -> Viewport;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "raster-backend")]
mod raster_backend;
#[cfg(feature = "raster-backend")]
pub use raster_backend::RasterRenderer;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderer};
