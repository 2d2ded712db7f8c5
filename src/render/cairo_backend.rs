use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LayerPrimitives, Paint, PathPrimitive, RectPrimitive, RenderFrame, Renderer, Stroke,
    TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into a host-owned Cairo context (for example a
/// GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders either offscreen into its own image surface through
/// `Renderer::render`, or in place on an external context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for path in &layer.paths {
        append_path(context, path);
        fill_and_stroke(context, path.fill, path.stroke)?;
        stats.paths_drawn += 1;
    }

    for rect in &layer.rects {
        append_rect_path(context, *rect);
        fill_and_stroke(context, Some(rect.fill), rect.border)?;
        stats.rects_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_sub_path();
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
        apply_color(context, circle.fill);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        // Pango positions by the top of the layout; `text.y` is the baseline.
        context.move_to(x, text.y - f64::from(text_height) * 0.8);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn fill_and_stroke(context: &Context, fill: Option<Paint>, stroke: Option<Stroke>) -> ChartResult<()> {
    if let Some(fill) = fill {
        apply_paint(context, fill)?;
        let filled = if stroke.is_some() {
            context.fill_preserve()
        } else {
            context.fill()
        };
        filled.map_err(|err| map_backend_error("failed to fill shape", err))?;
    }
    if let Some(stroke) = stroke {
        apply_color(context, stroke.color);
        context.set_line_width(stroke.width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke shape", err))?;
    }
    Ok(())
}

fn append_path(context: &Context, path: &PathPrimitive) {
    context.new_path();
    let mut current = (0.0, 0.0);
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                context.move_to(x, y);
                current = (x, y);
            }
            PathCommand::LineTo { x, y } => {
                context.line_to(x, y);
                current = (x, y);
            }
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => {
                append_svg_arc(context, current, radius, large_arc, sweep, (x, y));
                current = (x, y);
            }
            PathCommand::Close => context.close_path(),
        }
    }
}

/// Converts an SVG circular arc (endpoint form) into a Cairo center-form arc.
fn append_svg_arc(
    context: &Context,
    from: (f64, f64),
    radius: f64,
    large_arc: bool,
    sweep: bool,
    to: (f64, f64),
) {
    let (dx, dy) = ((to.0 - from.0) / 2.0, (to.1 - from.1) / 2.0);
    let half_chord = dx.hypot(dy);
    if radius <= 0.0 || half_chord == 0.0 {
        context.line_to(to.0, to.1);
        return;
    }

    let radius = radius.max(half_chord);
    let offset = (radius * radius - half_chord * half_chord).max(0.0).sqrt();
    let (mid_x, mid_y) = (from.0 + dx, from.1 + dy);
    // Unit normal of the chord; the center sits on the side picked by the flags.
    let (nx, ny) = (-dy / half_chord, dx / half_chord);
    let side = if large_arc == sweep { -1.0 } else { 1.0 };
    let (cx, cy) = (mid_x + side * offset * nx, mid_y + side * offset * ny);

    let start = (from.1 - cy).atan2(from.0 - cx);
    let end = (to.1 - cy).atan2(to.0 - cx);
    if sweep {
        context.arc(cx, cy, radius, start, end);
    } else {
        context.arc_negative(cx, cy, radius, start, end);
    }
}

fn apply_paint(context: &Context, paint: Paint) -> ChartResult<()> {
    match paint {
        Paint::Solid { color } => {
            apply_color(context, color);
            Ok(())
        }
        Paint::VerticalGradient {
            top,
            bottom,
            y0,
            y1,
        } => {
            let gradient = LinearGradient::new(0.0, y0, 0.0, y1);
            gradient.add_color_stop_rgba(0.0, top.red, top.green, top.blue, top.alpha);
            gradient.add_color_stop_rgba(1.0, bottom.red, bottom.green, bottom.blue, bottom.alpha);
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    context.new_path();
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
