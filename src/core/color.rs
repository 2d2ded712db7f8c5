use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ChartError::InvalidColor(format!(
                "`{input}` is not a hex color"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> ChartResult<u8> {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ChartError::InvalidColor(format!("`{input}` is not a hex color")))
        };

        let (red, green, blue, alpha) = match digits.len() {
            3 => {
                let expand = |i: usize| -> ChartResult<u8> { Ok(channel(i..i + 1)? * 17) };
                (expand(0)?, expand(1)?, expand(2)?, 255)
            }
            6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
            8 => (
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            ),
            _ => {
                return Err(ChartError::InvalidColor(format!(
                    "`{input}` must have 3, 6 or 8 hex digits"
                )));
            }
        };

        Ok(Self::from_rgb8(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (red, green, blue) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            let alpha = byte(self.alpha);
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Fallback series colors, assigned cyclically by `index % len`.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
    Color::from_rgb8(0x84, 0xcc, 0x16),
];

/// Resolves the fill for sample `index`: the explicit override, else the palette entry.
///
/// An empty palette falls back to [`DEFAULT_PALETTE`].
#[must_use]
pub fn resolve_series_color(explicit: Option<Color>, palette: &[Color], index: usize) -> Color {
    if let Some(color) = explicit {
        return color;
    }
    let palette = if palette.is_empty() {
        &DEFAULT_PALETTE[..]
    } else {
        palette
    };
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms_parse_to_same_color() {
        let long = Color::from_hex("#8b5cf6").expect("long form");
        let bare = Color::from_hex("8b5cf6").expect("bare form");
        assert_eq!(long, bare);
        assert_eq!(long, DEFAULT_PALETTE[0]);

        let short = Color::from_hex("#fff").expect("short form");
        assert_eq!(short, Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn hex_output_keeps_palette_text() {
        assert_eq!(DEFAULT_PALETTE[6].to_hex(), "#06b6d4");
        let translucent = DEFAULT_PALETTE[0].with_alpha(0.0);
        assert_eq!(translucent.to_hex(), "#8b5cf600");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ü0000").is_err());
    }

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(resolve_series_color(None, &DEFAULT_PALETTE, 9), DEFAULT_PALETTE[1]);
        let explicit = Color::rgb(0.0, 0.0, 0.0);
        assert_eq!(resolve_series_color(Some(explicit), &DEFAULT_PALETTE, 9), explicit);
        assert_eq!(resolve_series_color(None, &[], 3), DEFAULT_PALETTE[3]);
    }
}
