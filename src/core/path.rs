use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One drawing command in chart pixel space.
///
/// `Arc` follows SVG elliptical-arc semantics: it draws from the current point
/// to `(x, y)` on a circle of `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        radius: f64,
        large_arc: bool,
        /// `true` sweeps in the positive-angle direction (clockwise on screen).
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Ordered path command list.
///
/// Donut wedges need at most 9 commands, so those stay inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathCommands(SmallVec<[PathCommand; 9]>);

impl PathCommands {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.0.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.0.push(PathCommand::LineTo { x, y });
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        self.0.push(PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.0.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.0.last(), Some(PathCommand::Close))
    }

    /// Last explicit end point, if any.
    #[must_use]
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.0.iter().rev().find_map(|command| match *command {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::Arc { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        })
    }

    /// SVG `d` attribute text, e.g. `M 40 210 L 360 40`.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        self.to_string()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.0.iter()
    }
}

impl fmt::Display for PathCommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *command {
                PathCommand::MoveTo { x, y } => write!(out, "M {x} {y}")?,
                PathCommand::LineTo { x, y } => write!(out, "L {x} {y}")?,
                PathCommand::Arc {
                    radius,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    out,
                    "A {radius} {radius} 0 {} {} {x} {y}",
                    u8::from(large_arc),
                    u8::from(sweep)
                )?,
                PathCommand::Close => out.push('Z'),
            }
        }
        f.write_str(&out)
    }
}

impl<'a> IntoIterator for &'a PathCommands {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<PathCommand> for PathCommands {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
