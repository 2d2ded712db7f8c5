use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives of one canvas layer.
///
/// Backends paint paths, then rects, circles, lines and finally texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            paths: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    /// Creates a frame with every canonical layer present and empty.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    /// Mutable access to a layer, appending it when missing.
    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn with_path(mut self, kind: CanvasLayerKind, path: PathPrimitive) -> Self {
        self.layer_mut(kind).paths.push(path);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, kind: CanvasLayerKind, rect: RectPrimitive) -> Self {
        self.layer_mut(kind).rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, kind: CanvasLayerKind, line: LinePrimitive) -> Self {
        self.layer_mut(kind).lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: CanvasLayerKind, text: TextPrimitive) -> Self {
        self.layer_mut(kind).texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.layers
            .iter()
            .fold(FrameStats::default(), |stats, layer| FrameStats {
                paths: stats.paths + layer.paths.len(),
                rects: stats.rects + layer.rects.len(),
                circles: stats.circles + layer.circles.len(),
                lines: stats.lines + layer.lines.len(),
                texts: stats.texts + layer.texts.len(),
            })
    }
}

/// Primitive counts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub paths: usize,
    pub rects: usize,
    pub circles: usize,
    pub lines: usize,
    pub texts: usize,
}
