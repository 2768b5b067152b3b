use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

pub const DEFAULT_FILL: &str = "#FFEBC5";
pub const DEFAULT_STROKE: &str = "#FFB119";

/// Fill/stroke pair as CSS color strings supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub fill: String,
    pub stroke: String,
}

impl ColorSpec {
    #[must_use]
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
        }
    }

    pub fn resolve(&self) -> ChartResult<SeriesColors> {
        Ok(SeriesColors {
            fill: Color::parse_css(&self.fill)?,
            stroke: Color::parse_css(&self.stroke)?,
        })
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FILL, DEFAULT_STROKE)
    }
}

/// Parsed fill/stroke pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub fill: Color,
    pub stroke: Color,
}

impl SeriesColors {
    #[must_use]
    pub fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }
}

impl Default for SeriesColors {
    fn default() -> Self {
        // Matches `ColorSpec::default()`.
        Self {
            fill: Color::from_rgb8(0xFF, 0xEB, 0xC5),
            stroke: Color::from_rgb8(0xFF, 0xB1, 0x19),
        }
    }
}

/// How fill/stroke move between the previous and the new colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorTransitionMode {
    /// Channel-wise RGB interpolation using the eased progress.
    #[default]
    Interpolate,
    /// Keep the previous colors until the transition completes.
    Snap,
}

impl ColorTransitionMode {
    #[must_use]
    pub fn blend(self, from: SeriesColors, to: SeriesColors, progress: f64) -> SeriesColors {
        if progress >= 1.0 {
            return to;
        }
        match self {
            Self::Interpolate => {
                let progress = progress.max(0.0);
                SeriesColors {
                    fill: from.fill.lerp(to.fill, progress),
                    stroke: from.stroke.lerp(to.stroke, progress),
                }
            }
            Self::Snap => from,
        }
    }
}
