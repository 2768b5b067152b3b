use serde::{Deserialize, Serialize};

use crate::core::PathDescription;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
    /// and `transparent`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::rgba(0.0, 0.0, 0.0, 0.0));
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lowered.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lowered.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid_color(input));
        };
        let body = body.strip_suffix(')').ok_or_else(|| invalid_color(input))?;
        parse_functional(body, expects_alpha).ok_or_else(|| invalid_color(input))
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    /// Formats as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (red, green, blue) = (channel(self.red), channel(self.green), channel(self.blue));
        if self.alpha >= 1.0 {
            format!("rgb({red}, {green}, {blue})")
        } else {
            format!("rgba({red}, {green}, {blue}, {})", self.alpha.max(0.0))
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

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidColor(format!("unsupported css color `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    let unit = |value: u8| f64::from(value) / 255.0;

    let (red, green, blue, alpha) = match hex.len() {
        3 | 4 => {
            let expand = |value: u8| value * 17;
            let alpha = if hex.len() == 4 {
                expand(nibble(3)?)
            } else {
                255
            };
            (
                expand(nibble(0)?),
                expand(nibble(1)?),
                expand(nibble(2)?),
                alpha,
            )
        }
        6 | 8 => {
            let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
            (byte(0)?, byte(2)?, byte(4)?, alpha)
        }
        _ => return None,
    };

    Some(Color::rgba(
        unit(red),
        unit(green),
        unit(blue),
        unit(alpha),
    ))
}

fn parse_functional(body: &str, expects_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |token: &str| -> Option<f64> {
        let value = token.parse::<f64>().ok()?;
        (value.is_finite() && (0.0..=255.0).contains(&value)).then(|| value / 255.0)
    };

    match (parts.as_slice(), expects_alpha) {
        ([red, green, blue], false) => {
            Some(Color::rgb(channel(*red)?, channel(*green)?, channel(*blue)?))
        }
        ([red, green, blue, alpha], true) => {
            let alpha = alpha.parse::<f64>().ok()?;
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color::rgba(
                channel(*red)?,
                channel(*green)?,
                channel(*blue)?,
                alpha,
            ))
        }
        _ => None,
    }
}

/// Filled area outline of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPrimitive {
    pub path: PathDescription,
    pub fill_color: Color,
}

impl AreaPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        self.fill_color.validate()
    }
}

/// Stroked polyline of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePathPrimitive {
    pub path: PathDescription,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl LinePathPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidGeometry(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_color.validate()
    }
}

/// Hover cursor: a vertical guide at `x` spanning `height`, with a marker at `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPrimitive {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub color: Color,
}

impl CursorPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidGeometry(
                "cursor coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
