use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartScales, DataPoint, Viewport, compute_scales};

/// Data sample nearest to a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverLocation {
    pub index: usize,
    pub value: DataPoint,
    /// Y of `value` under the chart's own price mapping; `0.0` when that
    /// mapping yields no finite coordinate.
    pub pixel_y: f64,
}

/// Inverts pointer X into the nearest data index.
///
/// The index is proportional to the pointer's share of the viewport width,
/// which matches the rendered curve for evenly spaced samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverMapper {
    padding_top: f64,
}

impl HoverMapper {
    #[must_use]
    pub fn new(padding_top: f64) -> Self {
        Self { padding_top }
    }

    #[must_use]
    pub fn padding_top(self) -> f64 {
        self.padding_top
    }

    /// Locates the sample under `pointer_x`, fitting the price mapping the
    /// same way the chart does.
    #[must_use]
    pub fn locate(
        self,
        pointer_x: f64,
        data: &[DataPoint],
        viewport: Viewport,
    ) -> Option<HoverLocation> {
        let scales = compute_scales(data, viewport, self.padding_top).ok();
        locate_index(pointer_x, data.len(), viewport)
            .map(|index| resolve(index, data[index], scales))
    }

    /// Locates the sample under `pointer_x` using already fitted `scales`.
    #[must_use]
    pub fn locate_with_scales(
        self,
        pointer_x: f64,
        data: &[DataPoint],
        viewport: Viewport,
        scales: ChartScales,
    ) -> Option<HoverLocation> {
        locate_index(pointer_x, data.len(), viewport)
            .map(|index| resolve(index, data[index], Some(scales)))
    }
}

/// `round(pointer_x / width * (len - 1))`, clamped to `[0, len - 1]`.
///
/// `None` for empty data, zero width, or a non-finite pointer.
#[must_use]
pub fn locate_index(pointer_x: f64, len: usize, viewport: Viewport) -> Option<usize> {
    if len == 0 || viewport.width == 0 || !pointer_x.is_finite() {
        return None;
    }

    let last = len - 1;
    let raw = (pointer_x / viewport.width_px() * last as f64).round();
    let index = if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(last)
    };
    trace!(pointer_x, index, len, "hover index");
    Some(index)
}

fn resolve(index: usize, value: DataPoint, scales: Option<ChartScales>) -> HoverLocation {
    let pixel_y = scales
        .map(|scales| scales.price_to_y(value.price))
        .filter(|y| y.is_finite())
        .unwrap_or(0.0);
    HoverLocation {
        index,
        value,
        pixel_y,
    }
}

/// Transient hover feedback exposed to the host's hover display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub active: bool,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub index: Option<usize>,
    pub value: Option<DataPoint>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            active: false,
            pixel_x: 0.0,
            pixel_y: 0.0,
            index: None,
            value: None,
        }
    }
}

/// Pointer bookkeeping behind [`HoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverTracker {
    inside: bool,
    state: HoverState,
}

impl HoverTracker {
    #[must_use]
    pub fn state(self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn is_pointer_inside(self) -> bool {
        self.inside
    }

    /// Records a pointer move and its located sample.
    ///
    /// A move with no sample (no data yet) keeps the hover inactive.
    pub fn on_pointer_move(&mut self, pointer_x: f64, location: Option<HoverLocation>) {
        self.inside = true;
        self.state = match location {
            Some(location) => HoverState {
                active: true,
                pixel_x: pointer_x,
                pixel_y: location.pixel_y,
                index: Some(location.index),
                value: Some(location.value),
            },
            None => HoverState {
                pixel_x: pointer_x,
                ..HoverState::default()
            },
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.inside = false;
        self.state = HoverState::default();
    }
}
