//! Turns chart layouts plus caller-owned hover state into render frames.

use serde::{Deserialize, Serialize};

use crate::core::annotations::{
    Tooltip, area_markers, area_tooltip, bar_category_labels, bar_tooltip, donut_center_label,
};
use crate::core::{AreaChartLayout, AreaFill, BarChartLayout, Color, DonutLayout, HoverState};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, Paint, PathPrimitive, RectPrimitive,
    RenderFrame, Stroke, TextHAlign, TextPrimitive,
};

/// Non-data colors and sizes used when building frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTheme {
    pub grid_color: Color,
    pub axis_color: Color,
    pub text_color: Color,
    pub muted_text_color: Color,
    pub tooltip_fill: Color,
    pub tooltip_border: Color,
    pub line_width: f64,
    pub label_font_size_px: f64,
    pub center_value_font_size_px: f64,
    pub bar_corner_radius: f64,
    pub bar_opacity: f64,
    pub bar_opacity_active: f64,
    pub segment_opacity: f64,
    pub segment_opacity_active: f64,
}

impl Default for SceneTheme {
    fn default() -> Self {
        Self {
            grid_color: Color::from_rgb8(0x71, 0x71, 0x7a).with_alpha(0.2),
            axis_color: Color::from_rgb8(0xe4, 0xe4, 0xe7),
            text_color: Color::from_rgb8(0x09, 0x09, 0x0b),
            muted_text_color: Color::from_rgb8(0x71, 0x71, 0x7a),
            tooltip_fill: Color::rgb(1.0, 1.0, 1.0),
            tooltip_border: Color::from_rgb8(0xe4, 0xe4, 0xe7),
            line_width: 2.0,
            label_font_size_px: 12.0,
            center_value_font_size_px: 24.0,
            bar_corner_radius: 4.0,
            bar_opacity: 0.7,
            bar_opacity_active: 0.8,
            segment_opacity: 0.8,
            segment_opacity_active: 0.9,
        }
    }
}

/// Builds the frame for an area chart.
#[must_use]
pub fn area_chart_frame(
    layout: &AreaChartLayout,
    hover: HoverState,
    theme: &SceneTheme,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);

    let grid = frame.layer_mut(CanvasLayerKind::Grid);
    for gridline in &layout.gridlines {
        grid.lines.push(LinePrimitive::new(
            gridline.x1,
            gridline.y,
            gridline.x2,
            gridline.y,
            1.0,
            theme.grid_color,
        ));
    }

    if layout.is_empty() {
        return frame;
    }

    let top_y = layout
        .points
        .iter()
        .map(|point| point.y)
        .fold(layout.baseline_y, f64::min);
    let fill = match layout.fill {
        AreaFill::Gradient {
            color,
            top_opacity,
            bottom_opacity,
        } => Paint::VerticalGradient {
            top: color.with_alpha(top_opacity),
            bottom: color.with_alpha(bottom_opacity),
            y0: top_y,
            y1: layout.baseline_y,
        },
        AreaFill::Flat { color, opacity } => Paint::solid(color.with_alpha(opacity)),
    };

    let series = frame.layer_mut(CanvasLayerKind::Series);
    series
        .paths
        .push(PathPrimitive::filled(layout.fill_path.clone(), fill));
    series.paths.push(PathPrimitive::stroked(
        layout.line_path.clone(),
        Stroke::new(layout.line_color, theme.line_width),
    ));
    for marker in area_markers(layout, hover) {
        series.circles.push(
            CirclePrimitive::new(marker.x, marker.y, marker.radius, layout.line_color)
                .with_index(marker.index),
        );
    }

    let axis = frame.layer_mut(CanvasLayerKind::Axis);
    for point in &layout.points {
        if point.label.is_empty() {
            continue;
        }
        axis.texts.push(TextPrimitive::new(
            point.label.clone(),
            point.x,
            layout.baseline_y + 20.0,
            theme.label_font_size_px,
            theme.muted_text_color,
            TextHAlign::Center,
        ));
    }

    if let Some(tooltip) = area_tooltip(layout, hover) {
        push_tooltip(&mut frame, &tooltip, theme);
    }
    frame
}

/// Builds the frame for a bar chart.
#[must_use]
pub fn bar_chart_frame(
    layout: &BarChartLayout,
    hover: HoverState,
    theme: &SceneTheme,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    let viewport = layout.viewport;

    let series = frame.layer_mut(CanvasLayerKind::Series);
    for bar in &layout.bars {
        let opacity = if hover.is_active(bar.index) {
            theme.bar_opacity_active
        } else {
            theme.bar_opacity
        };
        series.rects.push(
            RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                Paint::solid(bar.color.with_alpha(opacity)),
            )
            .with_corner_radius(theme.bar_corner_radius)
            .with_index(bar.index),
        );
    }

    // Axis lines frame the plot on the left and bottom in both orientations.
    let padding = layout.padding;
    let bottom = viewport.height - padding;
    let axis = frame.layer_mut(CanvasLayerKind::Axis);
    axis.lines.push(LinePrimitive::new(
        padding,
        padding,
        padding,
        bottom,
        1.0,
        theme.axis_color,
    ));
    axis.lines.push(LinePrimitive::new(
        padding,
        bottom,
        viewport.width - padding,
        bottom,
        1.0,
        theme.axis_color,
    ));

    for tick in &layout.axis_ticks {
        if layout.horizontal {
            axis.lines.push(LinePrimitive::new(
                tick.x,
                tick.y,
                tick.x,
                tick.y + 5.0,
                1.0,
                theme.axis_color,
            ));
            axis.texts.push(TextPrimitive::new(
                tick.label.clone(),
                tick.x,
                tick.y + 15.0,
                theme.label_font_size_px,
                theme.muted_text_color,
                TextHAlign::Center,
            ));
        } else {
            axis.lines.push(LinePrimitive::new(
                tick.x - 5.0,
                tick.y,
                tick.x,
                tick.y,
                1.0,
                theme.axis_color,
            ));
            axis.texts.push(TextPrimitive::new(
                tick.label.clone(),
                tick.x - 10.0,
                tick.y + 3.0,
                theme.label_font_size_px,
                theme.muted_text_color,
                TextHAlign::Right,
            ));
        }
    }

    let category_align = if layout.horizontal {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    };
    for label in bar_category_labels(layout) {
        if label.text.is_empty() {
            continue;
        }
        axis.texts.push(TextPrimitive::new(
            label.text,
            label.x,
            label.y,
            theme.label_font_size_px,
            theme.muted_text_color,
            category_align,
        ));
    }

    if let Some(tooltip) = bar_tooltip(layout, hover) {
        push_tooltip(&mut frame, &tooltip, theme);
    }
    frame
}

/// Builds the frame for a donut chart, including the center label.
#[must_use]
pub fn donut_chart_frame(layout: &DonutLayout, hover: HoverState, theme: &SceneTheme) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);

    let series = frame.layer_mut(CanvasLayerKind::Series);
    for segment in &layout.segments {
        let opacity = if hover.is_active(segment.index) {
            theme.segment_opacity_active
        } else {
            theme.segment_opacity
        };
        series.paths.push(
            PathPrimitive::filled(
                segment.path.clone(),
                Paint::solid(segment.color.with_alpha(opacity)),
            )
            .with_index(segment.index),
        );
    }

    let center_label = donut_center_label(layout, hover);
    let overlay = frame.layer_mut(CanvasLayerKind::Overlay);
    overlay.texts.push(TextPrimitive::new(
        center_label.value_text,
        layout.center.x,
        layout.center.y - 5.0,
        theme.center_value_font_size_px,
        theme.text_color,
        TextHAlign::Center,
    ));
    if !center_label.caption.is_empty() {
        overlay.texts.push(TextPrimitive::new(
            center_label.caption,
            layout.center.x,
            layout.center.y + 15.0,
            theme.label_font_size_px,
            theme.muted_text_color,
            TextHAlign::Center,
        ));
    }
    frame
}

fn push_tooltip(frame: &mut RenderFrame, tooltip: &Tooltip, theme: &SceneTheme) {
    let overlay = frame.layer_mut(CanvasLayerKind::Overlay);
    overlay.rects.push(
        RectPrimitive::new(
            tooltip.x,
            tooltip.y,
            tooltip.width,
            tooltip.height,
            Paint::solid(theme.tooltip_fill),
        )
        .with_corner_radius(tooltip.corner_radius)
        .with_border(Stroke::new(theme.tooltip_border, 1.0)),
    );
    overlay.texts.push(TextPrimitive::new(
        tooltip.text.clone(),
        tooltip.text_x,
        tooltip.text_y,
        theme.label_font_size_px,
        theme.text_color,
        TextHAlign::Center,
    ));
}
