use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::bar::default_palette;
use crate::core::color::{Color, resolve_series_color};
use crate::core::path::PathCommands;
use crate::core::types::{PixelPoint, Sample, Viewport, validate_samples};
use crate::error::{ChartError, ChartResult};

/// Donut chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartConfig {
    /// Width and height of the square drawing area.
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    /// Gap between the outer ring and the drawing area edge.
    #[serde(default = "default_ring_margin")]
    pub ring_margin: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            inner_radius: default_inner_radius(),
            ring_margin: default_ring_margin(),
            palette: default_palette(),
        }
    }
}

impl DonutChartConfig {
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size, self.size)
    }

    #[must_use]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.size / 2.0, self.size / 2.0)
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.size / 2.0 - self.ring_margin
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.size,
                height: self.size,
            });
        }
        if !self.ring_margin.is_finite() || self.ring_margin < 0.0 || self.outer_radius() <= 0.0 {
            return Err(ChartError::InvalidData(
                "donut ring margin must be >= 0 and leave a positive outer radius".to_owned(),
            ));
        }
        if !self.inner_radius.is_finite()
            || self.inner_radius < 0.0
            || self.inner_radius >= self.outer_radius()
        {
            return Err(ChartError::InvalidData(format!(
                "donut inner radius must be in [0, {})",
                self.outer_radius()
            )));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "donut palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
    }
}

fn default_size() -> f64 {
    200.0
}

fn default_inner_radius() -> f64 {
    60.0
}

fn default_ring_margin() -> f64 {
    20.0
}

/// The four corners of a wedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcCorners {
    pub outer_start: PixelPoint,
    pub outer_end: PixelPoint,
    pub inner_end: PixelPoint,
    pub inner_start: PixelPoint,
}

/// One donut wedge. Angles are radians, clockwise on screen from the +x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub percentage: f64,
    pub color: Color,
    pub label: String,
    pub value: f64,
    pub large_arc: bool,
    pub corners: ArcCorners,
    pub path: PathCommands,
}

impl ArcSegment {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway through the wedge, for label placement.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Point on the ring centerline at [`ArcSegment::mid_angle`].
    #[must_use]
    pub fn label_anchor(&self, center: PixelPoint) -> PixelPoint {
        center.polar_offset(
            self.mid_angle(),
            (self.inner_radius + self.outer_radius) / 2.0,
        )
    }
}

/// Donut chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub viewport: Viewport,
    pub segments: Vec<ArcSegment>,
    pub total: f64,
    pub center: PixelPoint,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl DonutLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Angular span of one wedge before any geometry is attached.
#[derive(Debug, Clone, Copy)]
struct Sweep {
    start: f64,
    end: f64,
    percentage: f64,
}

/// Lays out a donut chart by sweeping cumulative angles over the samples.
///
/// A zero total yields zero-width wedges with `percentage == 0`. Negative
/// values are treated as zero weight.
pub fn build_donut_chart(samples: &[Sample], config: &DonutChartConfig) -> ChartResult<DonutLayout> {
    config.validate()?;
    validate_samples(samples)?;

    let negative = samples.iter().filter(|sample| sample.value < 0.0).count();
    if negative > 0 {
        warn!(negative, "donut chart ignores negative sample values");
    }

    let total: f64 = samples.iter().map(|sample| weight(sample.value)).sum();
    // Overflowing sums are recomputed relative to the largest weight.
    let (unit, share_total) = if total.is_finite() {
        (1.0, total)
    } else {
        let peak = samples
            .iter()
            .map(|sample| weight(sample.value))
            .fold(0.0, f64::max);
        warn!(peak, "donut chart total overflows; shares computed relative to the largest value");
        let scaled: f64 = samples.iter().map(|sample| weight(sample.value) / peak).sum();
        (peak, scaled)
    };
    let center = config.center();
    let outer_radius = config.outer_radius();
    let inner_radius = config.inner_radius;

    let segments = samples
        .iter()
        .scan(0.0_f64, |cumulative, sample| {
            let percentage = if share_total > 0.0 {
                weight(sample.value) / unit / share_total
            } else {
                0.0
            };
            let start = *cumulative;
            let end = start + percentage * TAU;
            *cumulative = end;
            Some(Sweep {
                start,
                end,
                percentage,
            })
        })
        .zip(samples)
        .enumerate()
        .map(|(index, (sweep, sample))| {
            let angle = sweep.end - sweep.start;
            let corners = ArcCorners {
                outer_start: center.polar_offset(sweep.start, outer_radius),
                outer_end: center.polar_offset(sweep.end, outer_radius),
                inner_end: center.polar_offset(sweep.end, inner_radius),
                inner_start: center.polar_offset(sweep.start, inner_radius),
            };
            let large_arc = angle > PI;
            let path = if angle >= TAU {
                full_ring_path(center, sweep.start, outer_radius, inner_radius, corners)
            } else {
                wedge_path(outer_radius, inner_radius, large_arc, corners)
            };

            ArcSegment {
                index,
                start_angle: sweep.start,
                end_angle: sweep.end,
                inner_radius,
                outer_radius,
                percentage: sweep.percentage,
                color: resolve_series_color(sample.color, &config.palette, index),
                label: sample.label.clone(),
                value: sample.value,
                large_arc,
                corners,
                path,
            }
        })
        .collect::<Vec<_>>();

    if !samples.is_empty() && total <= 0.0 {
        debug!(count = samples.len(), "donut chart total is zero; wedges are empty");
    }
    debug!(count = segments.len(), total, "built donut chart");

    Ok(DonutLayout {
        viewport: config.viewport(),
        segments,
        total,
        center,
        outer_radius,
        inner_radius,
    })
}

fn weight(value: f64) -> f64 {
    value.max(0.0)
}

fn wedge_path(outer_radius: f64, inner_radius: f64, large_arc: bool, corners: ArcCorners) -> PathCommands {
    let mut path = PathCommands::with_capacity(5);
    path.move_to(corners.outer_start.x, corners.outer_start.y)
        .arc_to(outer_radius, large_arc, true, corners.outer_end.x, corners.outer_end.y)
        .line_to(corners.inner_end.x, corners.inner_end.y)
        .arc_to(inner_radius, large_arc, false, corners.inner_start.x, corners.inner_start.y)
        .close();
    path
}

/// An arc whose end point equals its start point draws nothing, so a wedge
/// covering the whole circle is split into two half arcs per ring.
fn full_ring_path(
    center: PixelPoint,
    start: f64,
    outer_radius: f64,
    inner_radius: f64,
    corners: ArcCorners,
) -> PathCommands {
    let outer_mid = center.polar_offset(start + PI, outer_radius);
    let inner_mid = center.polar_offset(start + PI, inner_radius);

    let mut path = PathCommands::with_capacity(7);
    path.move_to(corners.outer_start.x, corners.outer_start.y)
        .arc_to(outer_radius, false, true, outer_mid.x, outer_mid.y)
        .arc_to(outer_radius, false, true, corners.outer_end.x, corners.outer_end.y)
        .line_to(corners.inner_end.x, corners.inner_end.y)
        .arc_to(inner_radius, false, false, inner_mid.x, inner_mid.y)
        .arc_to(inner_radius, false, false, corners.inner_start.x, corners.inner_start.y)
        .close();
    path
}
