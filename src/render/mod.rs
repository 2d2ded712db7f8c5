mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
pub mod scene;
mod svg;

pub use frame::{FrameStats, LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, Paint, PathPrimitive, RectPrimitive, Stroke,
    TextHAlign, TextPrimitive,
};
pub use scene::{SceneTheme, area_chart_frame, bar_chart_frame, donut_chart_frame};
pub use svg::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from layout math and hover handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
