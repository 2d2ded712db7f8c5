use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Drawable area in pixels (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One labeled value fed to a chart generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Sample {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds a sample from an exact decimal amount (revenue figures and the like).
    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(value, "sample value")?))
    }
}

/// Rejects samples whose value would poison scale math.
pub(crate) fn validate_samples(samples: &[Sample]) -> ChartResult<()> {
    if let Some((index, sample)) = samples
        .iter()
        .enumerate()
        .find(|(_, sample)| !sample.value.is_finite())
    {
        return Err(ChartError::InvalidData(format!(
            "sample {index} (`{}`) value must be finite",
            sample.label
        )));
    }
    Ok(())
}

/// A position in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians and `radius` from `self`, y-down.
    #[must_use]
    pub fn polar_offset(self, angle: f64, radius: f64) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }
}
