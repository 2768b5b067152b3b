use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, unix_seconds_to_datetime};
use crate::error::ChartResult;

/// Pixel size of the chart drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rounds fractional container bounds (as reported by a resize observer)
    /// to whole pixels. Negative or non-finite bounds collapse to zero.
    #[must_use]
    pub fn from_bounds(width: f64, height: f64) -> Self {
        Self {
            width: round_bound(width),
            height: round_bound(height),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

fn round_bound(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX for oversized bounds.
    value.round() as u32
}

/// One price sample of the time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: f64) -> Self {
        Self { time, price }
    }

    /// Builds a sample from unix seconds. Returns `None` when the timestamp is
    /// outside the representable calendar range.
    #[must_use]
    pub fn from_unix_seconds(seconds: f64, price: f64) -> Option<Self> {
        unix_seconds_to_datetime(seconds).map(|time| Self { time, price })
    }

    pub fn from_decimal(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Ok(Self {
            time,
            price: decimal_to_f64(price, "price")?,
        })
    }
}

/// Sample projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

impl ScaledPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
