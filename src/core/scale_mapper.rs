use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{DataPoint, LinearScale, ScaledPoint, Viewport};
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Default gap between the highest price and the top edge of the chart.
pub const DEFAULT_PADDING_TOP_PX: f64 = 20.0;

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 8_192;

/// Price and time mappings fitted to one dataset and viewport.
///
/// `price_to_y` maps `[min(price), max(price)]` onto `[height, padding_top]`
/// so higher prices sit closer to the top edge. `time_to_x` maps
/// `[min(time), max(time)]` (unix seconds) onto `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    price: LinearScale,
    time: LinearScale,
}

impl ChartScales {
    #[must_use]
    pub fn price_scale(self) -> LinearScale {
        self.price
    }

    #[must_use]
    pub fn time_scale(self) -> LinearScale {
        self.time
    }

    #[must_use]
    pub fn price_to_y(self, price: f64) -> f64 {
        self.price.map(price)
    }

    #[must_use]
    pub fn y_to_price(self, y: f64) -> f64 {
        self.price.invert(y)
    }

    #[must_use]
    pub fn time_to_x(self, time: DateTime<Utc>) -> f64 {
        self.time.map(datetime_to_unix_seconds(time))
    }

    #[must_use]
    pub fn x_to_time(self, x: f64) -> Option<DateTime<Utc>> {
        unix_seconds_to_datetime(self.time.invert(x))
    }

    #[must_use]
    pub fn scale_point(self, point: &DataPoint) -> ScaledPoint {
        ScaledPoint::new(self.time_to_x(point.time), self.price_to_y(point.price))
    }

    /// Projects every point, preserving order and length.
    #[must_use]
    pub fn scale_points(self, points: &[DataPoint]) -> Vec<ScaledPoint> {
        #[cfg(feature = "parallel-projection")]
        {
            if points.len() >= PARALLEL_PROJECTION_THRESHOLD {
                return points
                    .par_iter()
                    .map(|point| self.scale_point(point))
                    .collect();
            }
        }

        points.iter().map(|point| self.scale_point(point)).collect()
    }
}

/// Fits price and time mappings for `points` inside `viewport`.
///
/// Callers are expected to skip empty sequences; an empty input (or one
/// without a single finite price) is reported as an error instead of
/// producing a meaningless mapping.
pub fn compute_scales(
    points: &[DataPoint],
    viewport: Viewport,
    padding_top: f64,
) -> ChartResult<ChartScales> {
    if points.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    if !padding_top.is_finite() {
        return Err(ChartError::InvalidData(
            "top padding must be finite".to_owned(),
        ));
    }

    let price = LinearScale::from_extent(
        points.iter().map(|point| point.price),
        (viewport.height_px(), padding_top),
    )
    .map_err(|err| match err {
        ChartError::EmptyInput => {
            ChartError::InvalidData("price extent has no finite values".to_owned())
        }
        other => other,
    })?;
    let time = LinearScale::from_extent(
        points.iter().map(|point| datetime_to_unix_seconds(point.time)),
        (0.0, viewport.width_px()),
    )?;

    Ok(ChartScales { price, time })
}

/// Projects `points` into pixel space using freshly fitted scales.
pub fn scale_data(
    points: &[DataPoint],
    viewport: Viewport,
    padding_top: f64,
) -> ChartResult<Vec<ScaledPoint>> {
    let scales = compute_scales(points, viewport, padding_top)?;
    Ok(scales.scale_points(points))
}
