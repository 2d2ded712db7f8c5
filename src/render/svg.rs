use std::fmt::Write as _;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::render::{LayerPrimitives, Paint, RenderFrame, Renderer, Stroke, TextHAlign};

/// Renders frames into standalone SVG documents.
///
/// Primitives that carry a sample index get a `data-index` attribute so hosts
/// can attach pointer listeners per sample.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG text of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    /// Validates and serializes one frame.
    pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;
        write_document(frame).map_err(|err| {
            ChartError::InvalidData(format!("failed to write svg document: {err}"))
        })
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.document = Self::render_to_string(frame)?;
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    let mut gradients = 0usize;
    let mut defs = String::new();
    let mut body = String::new();
    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        write_layer(&mut body, &mut defs, &mut gradients, layer)?;
    }

    if !defs.is_empty() {
        writeln!(out, "<defs>")?;
        out.push_str(&defs);
        writeln!(out, "</defs>")?;
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    Ok(out)
}

fn write_layer(
    out: &mut String,
    defs: &mut String,
    gradients: &mut usize,
    layer: &LayerPrimitives,
) -> std::fmt::Result {
    writeln!(out, r#"<g data-layer="{:?}">"#, layer.kind)?;

    for path in &layer.paths {
        write!(out, r#"<path d="{}""#, path.commands)?;
        match path.fill {
            Some(fill) => write_fill(out, defs, gradients, fill)?,
            None => out.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = path.stroke {
            write_stroke(out, stroke)?;
        }
        write_index(out, path.index)?;
        out.push_str("/>\n");
    }

    for rect in &layer.rects {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x, rect.y, rect.width, rect.height
        )?;
        if rect.corner_radius > 0.0 {
            write!(out, r#" rx="{}""#, rect.corner_radius)?;
        }
        write_fill(out, defs, gradients, rect.fill)?;
        if let Some(border) = rect.border {
            write_stroke(out, border)?;
        }
        write_index(out, rect.index)?;
        out.push_str("/>\n");
    }

    for circle in &layer.circles {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.cx, circle.cy, circle.radius
        )?;
        write_color_attr(out, "fill", circle.fill)?;
        write_index(out, circle.index)?;
        out.push_str("/>\n");
    }

    for line in &layer.lines {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            line.x1, line.y1, line.x2, line.y2, line.stroke_width
        )?;
        write_color_attr(out, "stroke", line.color)?;
        out.push_str("/>\n");
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
            text.x, text.y, text.font_size_px
        )?;
        write_color_attr(out, "fill", text.color)?;
        writeln!(out, ">{}</text>", escape_xml(&text.text))?;
    }

    writeln!(out, "</g>")
}

fn write_fill(
    out: &mut String,
    defs: &mut String,
    gradients: &mut usize,
    paint: Paint,
) -> std::fmt::Result {
    match paint {
        Paint::Solid { color } => write_color_attr(out, "fill", color),
        Paint::VerticalGradient {
            top,
            bottom,
            y0,
            y1,
        } => {
            *gradients += 1;
            let id = format!("fill-gradient-{gradients}");
            writeln!(
                defs,
                r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{y0}" x2="0" y2="{y1}">"#
            )?;
            for (offset, color) in [("0%", top), ("100%", bottom)] {
                writeln!(
                    defs,
                    r#"<stop offset="{offset}" stop-color="{}" stop-opacity="{}"/>"#,
                    color.with_alpha(1.0).to_hex(),
                    color.alpha
                )?;
            }
            writeln!(defs, "</linearGradient>")?;
            write!(out, r#" fill="url(#{id})""#)
        }
    }
}

fn write_stroke(out: &mut String, stroke: Stroke) -> std::fmt::Result {
    write_color_attr(out, "stroke", stroke.color)?;
    write!(out, r#" stroke-width="{}""#, stroke.width)
}

fn write_color_attr(out: &mut String, name: &str, color: Color) -> std::fmt::Result {
    write!(out, r#" {name}="{}""#, color.with_alpha(1.0).to_hex())?;
    if color.alpha < 1.0 {
        write!(out, r#" {name}-opacity="{}""#, color.alpha)?;
    }
    Ok(())
}

fn write_index(out: &mut String, index: Option<usize>) -> std::fmt::Result {
    match index {
        Some(index) => write!(out, r#" data-index="{index}""#),
        None => Ok(()),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
