use serde::{Deserialize, Serialize};

/// Canvas layers of one chart, painted back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
    Axis,
    Overlay,
}

impl CanvasLayerKind {
    /// Paint order shared by every chart kind.
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Grid, Self::Series, Self::Axis, Self::Overlay];
}
