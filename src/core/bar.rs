use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::area::GRIDLINE_RATIOS;
use crate::core::color::{Color, DEFAULT_PALETTE, resolve_series_color};
use crate::core::primitives::value_extent;
use crate::core::types::{Sample, Viewport, validate_samples};
use crate::error::{ChartError, ChartResult};

/// Bar chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Space between neighbouring bars.
    #[serde(default = "default_gap")]
    pub gap: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default)]
    pub horizontal: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            gap: default_gap(),
            palette: default_palette(),
            horizontal: false,
        }
    }
}

impl BarChartConfig {
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
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
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

    /// Extent along which bars grow: plot height, or plot width when horizontal.
    #[must_use]
    pub fn value_extent_px(&self) -> f64 {
        if self.horizontal {
            self.plot_width()
        } else {
            self.plot_height()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [("padding", self.padding), ("gap", self.gap)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar {name} must be finite and >= 0"
                )));
            }
        }
        if !self.viewport().is_valid() || self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "bar palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
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

fn default_gap() -> f64 {
    10.0
}

pub(crate) fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.to_vec()
}

/// One bar rectangle in pixel space. `y` is the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub label: String,
    pub value: f64,
}

impl Bar {
    /// Center of the category slot along the category axis.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Value axis tick.
///
/// Vertical charts keep `x` on the axis line and vary `y`; horizontal charts
/// keep `y` on the baseline and vary `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub ratio: f64,
    pub value: f64,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Bar chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartLayout {
    pub viewport: Viewport,
    pub horizontal: bool,
    pub bars: Vec<Bar>,
    pub axis_ticks: Vec<AxisTick>,
    /// Position of the value axis origin: a y for vertical charts, an x for horizontal ones.
    pub baseline: f64,
    pub padding: f64,
    pub max_value: f64,
}

impl BarChartLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Slot geometry shared by every bar of one layout.
#[derive(Debug, Clone, Copy)]
struct BarSlots {
    origin: f64,
    thickness: f64,
    step: f64,
    baseline: f64,
    extent_px: f64,
    max_value: f64,
    horizontal: bool,
}

impl BarSlots {
    fn length_for(self, value: f64) -> f64 {
        if self.max_value <= 0.0 || value <= 0.0 {
            return 0.0;
        }
        (value / self.max_value * self.extent_px).min(self.extent_px)
    }

    fn project(self, index: usize, sample: &Sample, palette: &[Color]) -> Bar {
        let length = self.length_for(sample.value);
        let offset = self.origin + index as f64 * self.step;
        let (x, y, width, height) = if self.horizontal {
            (self.baseline, offset, length, self.thickness)
        } else {
            (offset, self.baseline - length, self.thickness, length)
        };
        Bar {
            index,
            x,
            y,
            width,
            height,
            color: resolve_series_color(sample.color, palette, index),
            label: sample.label.clone(),
            value: sample.value,
        }
    }
}

/// Lays out a bar chart.
///
/// Bars grow from a fixed baseline. When no value is positive every bar has
/// zero length instead of dividing by zero.
pub fn build_bar_chart(samples: &[Sample], config: &BarChartConfig) -> ChartResult<BarChartLayout> {
    config.validate()?;
    validate_samples(samples)?;

    let padding = config.padding;
    let extent_px = config.value_extent_px();
    let max_value = value_extent(samples.iter().map(|sample| sample.value))
        .map_or(0.0, |(_, max)| max);
    if !samples.is_empty() && max_value <= 0.0 {
        warn!(max_value, "bar chart has no positive values; bars collapse to zero length");
    }

    let baseline = if config.horizontal {
        padding
    } else {
        config.height - padding
    };

    let axis_ticks = GRIDLINE_RATIOS
        .iter()
        .map(|&ratio| {
            let value = (max_value.max(0.0) * ratio).round();
            let (x, y) = if config.horizontal {
                (baseline + ratio * extent_px, config.height - padding)
            } else {
                (padding, baseline - ratio * extent_px)
            };
            AxisTick {
                ratio,
                value,
                label: format!("{value}"),
                x,
                y,
            }
        })
        .collect();

    let category_extent = if config.horizontal {
        config.plot_height()
    } else {
        config.plot_width()
    };
    let count = samples.len().max(1) as f64;
    let slot = category_extent / count;
    let gap = config.gap.min(slot);
    if gap < config.gap {
        debug!(slot, gap = config.gap, "bar slots narrower than the gap; bars collapse to zero width");
    }
    let slots = BarSlots {
        origin: padding,
        thickness: slot - gap,
        step: slot,
        baseline,
        extent_px,
        max_value,
        horizontal: config.horizontal,
    };

    let bars = project_bars(samples, slots, &config.palette);
    debug!(
        count = bars.len(),
        max_value,
        horizontal = config.horizontal,
        "built bar chart"
    );

    Ok(BarChartLayout {
        viewport: config.viewport(),
        horizontal: config.horizontal,
        bars,
        axis_ticks,
        baseline,
        padding,
        max_value,
    })
}

#[cfg(not(feature = "parallel-projection"))]
fn project_bars(samples: &[Sample], slots: BarSlots, palette: &[Color]) -> Vec<Bar> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| slots.project(index, sample, palette))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_bars(samples: &[Sample], slots: BarSlots, palette: &[Color]) -> Vec<Bar> {
    use rayon::prelude::*;

    samples
        .par_iter()
        .enumerate()
        .map(|(index, sample)| slots.project(index, sample, palette))
        .collect()
}
