//! Hover-dependent overlays: markers, tooltips, donut center text and legends.

use serde::{Deserialize, Serialize};

use crate::core::area::{AreaChartLayout, ScaledPoint};
use crate::core::bar::{Bar, BarChartLayout};
use crate::core::color::Color;
use crate::core::donut::DonutLayout;
use crate::core::hover::HoverState;

pub const AREA_MARKER_RADIUS: f64 = 4.0;
pub const AREA_MARKER_RADIUS_ACTIVE: f64 = 6.0;
pub const TOOLTIP_CORNER_RADIUS: f64 = 4.0;
/// Distance of category labels above the bottom edge of a bar chart.
pub const BAR_CATEGORY_LABEL_INSET: f64 = 15.0;

/// Value bubble drawn next to the active primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub text: String,
    pub text_x: f64,
    pub text_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub active: bool,
}

/// Text shown in the donut hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterLabel {
    pub value_text: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub percent_label: String,
    pub color: Color,
    pub active: bool,
}

/// Category label under a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

#[must_use]
pub fn area_markers(layout: &AreaChartLayout, hover: HoverState) -> Vec<Marker> {
    layout
        .points
        .iter()
        .map(|point| {
            let active = hover.is_active(point.index);
            Marker {
                index: point.index,
                x: point.x,
                y: point.y,
                radius: if active {
                    AREA_MARKER_RADIUS_ACTIVE
                } else {
                    AREA_MARKER_RADIUS
                },
                active,
            }
        })
        .collect()
}

#[must_use]
pub fn area_tooltip(layout: &AreaChartLayout, hover: HoverState) -> Option<Tooltip> {
    hover.resolve(&layout.points).map(point_tooltip)
}

fn point_tooltip(point: &ScaledPoint) -> Tooltip {
    Tooltip {
        index: point.index,
        x: point.x - 30.0,
        y: point.y - 35.0,
        width: 60.0,
        height: 25.0,
        corner_radius: TOOLTIP_CORNER_RADIUS,
        text: format_value(point.value),
        text_x: point.x,
        text_y: point.y - 18.0,
    }
}

#[must_use]
pub fn bar_tooltip(layout: &BarChartLayout, hover: HoverState) -> Option<Tooltip> {
    hover.resolve(&layout.bars).map(bar_value_tooltip)
}

fn bar_value_tooltip(bar: &Bar) -> Tooltip {
    let center_x = bar.center_x();
    Tooltip {
        index: bar.index,
        x: center_x - 20.0,
        y: bar.y - 25.0,
        width: 40.0,
        height: 20.0,
        corner_radius: TOOLTIP_CORNER_RADIUS,
        text: format_value(bar.value),
        text_x: center_x,
        text_y: bar.y - 12.0,
    }
}

/// Category labels: centered under vertical bars, left of horizontal ones.
#[must_use]
pub fn bar_category_labels(layout: &BarChartLayout) -> Vec<CategoryLabel> {
    layout
        .bars
        .iter()
        .map(|bar| {
            let (x, y) = if layout.horizontal {
                (layout.baseline - 5.0, bar.center_y())
            } else {
                (
                    bar.center_x(),
                    layout.viewport.height - BAR_CATEGORY_LABEL_INSET,
                )
            };
            CategoryLabel {
                index: bar.index,
                text: bar.label.clone(),
                x,
                y,
            }
        })
        .collect()
}

#[must_use]
pub fn donut_center_label(layout: &DonutLayout, hover: HoverState) -> CenterLabel {
    match hover.resolve(&layout.segments) {
        Some(segment) => CenterLabel {
            value_text: format_value(segment.value),
            caption: segment.label.clone(),
        },
        None => CenterLabel {
            value_text: format_value(layout.total),
            caption: "Total".to_owned(),
        },
    }
}

#[must_use]
pub fn donut_legend(layout: &DonutLayout, hover: HoverState) -> Vec<LegendEntry> {
    layout
        .segments
        .iter()
        .map(|segment| LegendEntry {
            index: segment.index,
            label: segment.label.clone(),
            value: segment.value,
            percent_label: format!("{}%", (segment.percentage * 100.0).round()),
            color: segment.color,
            active: hover.is_active(segment.index),
        })
        .collect()
}
