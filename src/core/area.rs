use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::color::{Color, DEFAULT_PALETTE};
use crate::core::path::PathCommands;
use crate::core::scale::LinearScale;
use crate::core::types::{Sample, Viewport, validate_samples};
use crate::error::{ChartError, ChartResult};

/// Ratios of the plot height where horizontal gridlines are drawn.
pub const GRIDLINE_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Area chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default = "default_gradient")]
    pub gradient: bool,
}

impl Default for AreaChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            color: default_color(),
            gradient: default_gradient(),
        }
    }
}

impl AreaChartConfig {
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "area padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.viewport().is_valid() || self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        self.color.validate()
    }
}

fn default_width() -> f64 {
    400.0
}

fn default_height() -> f64 {
    300.0
}

fn default_padding() -> f64 {
    40.0
}

fn default_color() -> Color {
    DEFAULT_PALETTE[0]
}

fn default_gradient() -> bool {
    true
}

/// A sample placed in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

/// Paint for the region under the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaFill {
    /// Vertical gradient from `top_opacity` at the plot top to `bottom_opacity` at the baseline.
    Gradient {
        color: Color,
        top_opacity: f64,
        bottom_opacity: f64,
    },
    Flat {
        color: Color,
        opacity: f64,
    },
}

impl AreaFill {
    #[must_use]
    pub fn from_config(config: &AreaChartConfig) -> Self {
        if config.gradient {
            Self::Gradient {
                color: config.color,
                top_opacity: 0.3,
                bottom_opacity: 0.0,
            }
        } else {
            Self::Flat {
                color: config.color,
                opacity: 0.1,
            }
        }
    }
}

/// Horizontal gridline across the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub ratio: f64,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Area chart geometry.
///
/// `fill_path` is closed against `baseline_y`, the bottom edge of the plot,
/// not the zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaChartLayout {
    pub viewport: Viewport,
    pub points: Vec<ScaledPoint>,
    pub line_path: PathCommands,
    pub fill_path: PathCommands,
    pub baseline_y: f64,
    pub fill: AreaFill,
    pub line_color: Color,
    pub gridlines: Vec<Gridline>,
}

impl AreaChartLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lays out an area chart.
///
/// With one sample the point sits at `x = padding`. With a flat series every
/// point sits on the baseline.
pub fn build_area_chart(samples: &[Sample], config: &AreaChartConfig) -> ChartResult<AreaChartLayout> {
    config.validate()?;
    validate_samples(samples)?;

    let padding = config.padding;
    let baseline_y = config.height - padding;
    let gridlines = GRIDLINE_RATIOS
        .iter()
        .map(|&ratio| Gridline {
            ratio,
            x1: padding,
            x2: config.width - padding,
            y: padding + ratio * config.plot_height(),
        })
        .collect();

    let mut layout = AreaChartLayout {
        viewport: config.viewport(),
        points: Vec::new(),
        line_path: PathCommands::new(),
        fill_path: PathCommands::new(),
        baseline_y,
        fill: AreaFill::from_config(config),
        line_color: config.color,
        gridlines,
    };

    let Some(y_scale) = LinearScale::from_values(
        samples.iter().map(|sample| sample.value),
        baseline_y,
        padding,
    )?
    else {
        debug!("area chart has no samples");
        return Ok(layout);
    };

    let last_index = samples.len().saturating_sub(1);
    let place_x = |index: usize| {
        if last_index == 0 {
            padding
        } else {
            padding + (index as f64 / last_index as f64) * config.plot_width()
        }
    };
    trace!(
        count = samples.len(),
        flat = y_scale.is_degenerate(),
        "area chart scales"
    );

    layout.points = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| ScaledPoint {
            index,
            x: place_x(index),
            y: y_scale.map(sample.value),
            label: sample.label.clone(),
            value: sample.value,
        })
        .collect();

    let mut line_path = PathCommands::with_capacity(layout.points.len());
    for point in &layout.points {
        if line_path.is_empty() {
            line_path.move_to(point.x, point.y);
        } else {
            line_path.line_to(point.x, point.y);
        }
    }

    let first_x = layout.points[0].x;
    let last_x = layout.points[layout.points.len() - 1].x;
    let mut fill_path = line_path.clone();
    fill_path
        .line_to(last_x, baseline_y)
        .line_to(first_x, baseline_y)
        .close();

    layout.line_path = line_path;
    layout.fill_path = fill_path;
    debug!(count = layout.points.len(), "built area chart");
    Ok(layout)
}
