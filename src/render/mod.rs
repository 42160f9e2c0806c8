mod frame;
mod label_font;
mod layer_stack;
mod null_renderer;
mod primitives;
mod raster_backend;

pub use frame::{LayerPrimitives, RenderFrame};
pub use label_font::{LABEL_FONT_FAMILY, label_font_available, register_label_font};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use raster_backend::{RasterRenderStats, RasterRenderer};

use crate::error::ProfileResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from profile extraction and chart layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ProfileResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
