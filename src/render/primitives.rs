use serde::{Deserialize, Serialize};

use crate::core::{PathCommand, PathCommands};
use crate::error::{ChartError, ChartResult};

pub use crate::core::Color;

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_stroke_width(width: f64, what: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Fill paint for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    /// Linear gradient from `top` at `y0` to `bottom` at `y1`.
    VerticalGradient {
        top: Color,
        bottom: Color,
        y0: f64,
        y1: f64,
    },
}

impl Paint {
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid { color } => color.validate(),
            Self::VerticalGradient {
                top,
                bottom,
                y0,
                y1,
            } => {
                ensure_finite(&[y0, y1], "gradient stops")?;
                top.validate()?;
                bottom.validate()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_stroke_width(self.width, "path")?;
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        ensure_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Filled rectangle, optionally rounded and bordered.
///
/// `index` ties the rectangle to its source sample for pointer routing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    pub corner_radius: f64,
    pub border: Option<Stroke>,
    pub index: Option<usize>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            corner_radius: 0.0,
            border: None,
            index: None,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border: Stroke) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub const fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(
            &[self.x, self.y, self.width, self.height, self.corner_radius],
            "rect geometry",
        )?;
        if self.width < 0.0 || self.height < 0.0 || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size and corner radius must be >= 0".to_owned(),
            ));
        }
        if let Some(border) = self.border {
            border.validate()?;
        }
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub index: Option<usize>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            index: None,
        }
    }

    #[must_use]
    pub const fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy, self.radius], "circle geometry")?;
        if self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Arbitrary path with optional fill and stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: PathCommands,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
    pub index: Option<usize>,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(commands: PathCommands, fill: Paint) -> Self {
        Self {
            commands,
            fill: Some(fill),
            stroke: None,
            index: None,
        }
    }

    #[must_use]
    pub fn stroked(commands: PathCommands, stroke: Stroke) -> Self {
        Self {
            commands,
            fill: None,
            stroke: Some(stroke),
            index: None,
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "path primitive needs a fill or a stroke".to_owned(),
            ));
        }
        for command in &self.commands {
            let coordinates = match *command {
                PathCommand::MoveTo { x, y }
                | PathCommand::LineTo { x, y } => [x, y, 0.0],
                PathCommand::Arc { radius, x, y, .. } => [x, y, radius],
                PathCommand::Close => continue,
            };
            ensure_finite(&coordinates, "path coordinates")?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text coordinates")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
