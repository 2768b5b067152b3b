use serde::{Deserialize, Serialize};

use crate::core::{
    ChartScales, DataPoint, PathDescription, ScaledPoint, Viewport, area_path, compute_scales,
    line_path,
};
use crate::error::{ChartError, ChartResult};

use super::color::{ColorTransitionMode, SeriesColors};
use super::path_interpolation::interpolate;

/// One data/viewport/color update handed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub data: Vec<DataPoint>,
    pub viewport: Viewport,
    pub color: SeriesColors,
}

impl ChartInput {
    #[must_use]
    pub fn new(data: Vec<DataPoint>, viewport: Viewport, color: SeriesColors) -> Self {
        Self {
            data,
            viewport,
            color,
        }
    }
}

/// Why an update left the chart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The incoming sequence was empty; the last rendering is kept.
    EmptyInput,
    /// Same data and viewport as the committed state.
    Unchanged,
    /// The target shape would contain non-finite coordinates.
    InvalidGeometry,
}

/// Committed chart value, replaced wholesale on every accepted update.
///
/// `previous_scaled_points` is the shape morphed from and lags
/// `current_scaled_points` by exactly one accepted update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    data: Vec<DataPoint>,
    viewport: Viewport,
    color: SeriesColors,
    previous_color: Option<SeriesColors>,
    previous_scaled_points: Vec<ScaledPoint>,
    current_scaled_points: Vec<ScaledPoint>,
    scales: Option<ChartScales>,
    skip_transition: bool,
}

impl ChartState {
    /// State before the first paint: no shape, nothing to morph from.
    #[must_use]
    pub fn empty(viewport: Viewport, color: SeriesColors) -> Self {
        Self {
            data: Vec::new(),
            viewport,
            color,
            previous_color: None,
            previous_scaled_points: Vec::new(),
            current_scaled_points: Vec::new(),
            scales: None,
            skip_transition: false,
        }
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn color(&self) -> SeriesColors {
        self.color
    }

    #[must_use]
    pub fn previous_color(&self) -> Option<SeriesColors> {
        self.previous_color
    }

    #[must_use]
    pub fn previous_scaled_points(&self) -> &[ScaledPoint] {
        &self.previous_scaled_points
    }

    #[must_use]
    pub fn current_scaled_points(&self) -> &[ScaledPoint] {
        &self.current_scaled_points
    }

    #[must_use]
    pub fn scales(&self) -> Option<ChartScales> {
        self.scales
    }

    #[must_use]
    pub fn skip_transition(&self) -> bool {
        self.skip_transition
    }

    #[must_use]
    pub fn has_shape(&self) -> bool {
        !self.current_scaled_points.is_empty()
    }

    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.viewport.height_px()
    }
}

/// Decides whether `next` warrants a new state.
pub fn should_accept(prev: &ChartState, next: &ChartInput) -> Result<(), RejectReason> {
    if next.data.is_empty() {
        return Err(RejectReason::EmptyInput);
    }
    if prev.has_shape() && prev.data == next.data && prev.viewport == next.viewport {
        return Err(RejectReason::Unchanged);
    }
    Ok(())
}

/// Builds the state that replaces `prev` for an accepted update.
///
/// `previous_viewport` is the viewport the controller saw last, which may
/// differ from `prev.viewport()` when the update carrying it was rejected.
pub fn compute_next_state(
    prev: &ChartState,
    next: &ChartInput,
    previous_viewport: Viewport,
    padding_top: f64,
) -> ChartResult<ChartState> {
    let scales = compute_scales(&next.data, next.viewport, padding_top)?;
    let next_scaled = scales.scale_points(&next.data);
    if let Some(index) = next_scaled.iter().position(|point| !point.is_finite()) {
        return Err(ChartError::InvalidGeometry(format!(
            "scaled point {index} has a non-finite coordinate"
        )));
    }

    let baseline = next.viewport.height_px();
    let previous_scaled_points = if prev.has_shape() {
        prev.current_scaled_points.clone()
    } else {
        next_scaled
            .iter()
            .map(|point| ScaledPoint::new(point.x, baseline))
            .collect()
    };
    let previous_color = if prev.has_shape() {
        prev.color
    } else {
        next.color
    };

    Ok(ChartState {
        data: next.data.clone(),
        viewport: next.viewport,
        color: next.color,
        previous_color: Some(previous_color),
        previous_scaled_points,
        current_scaled_points: next_scaled,
        scales: Some(scales),
        skip_transition: previous_viewport.width != next.viewport.width,
    })
}

/// Area and line outlines with their paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartShape {
    pub area: PathDescription,
    pub line: PathDescription,
    pub color: SeriesColors,
}

impl ChartShape {
    #[must_use]
    pub fn from_points(points: &[ScaledPoint], baseline_y: f64, color: SeriesColors) -> Self {
        Self {
            area: area_path(points, baseline_y),
            line: line_path(points),
            color,
        }
    }

    #[must_use]
    pub fn empty(color: SeriesColors) -> Self {
        Self {
            area: PathDescription::empty(),
            line: PathDescription::empty(),
            color,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.area.is_finite() && self.line.is_finite()
    }
}

/// Geometry consumed by the rendering surface for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub area: PathDescription,
    pub line: PathDescription,
    pub colors: SeriesColors,
    /// Linear transition progress in `[0, 1]`.
    pub progress: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn settled(shape: &ChartShape) -> Self {
        Self {
            area: shape.area.clone(),
            line: shape.line.clone(),
            colors: shape.color,
            progress: 1.0,
        }
    }

    #[must_use]
    pub fn to_shape(&self) -> ChartShape {
        ChartShape {
            area: self.area.clone(),
            line: self.line.clone(),
            color: self.colors,
        }
    }
}

/// Precomputed endpoints of one transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub from: ChartShape,
    pub to: ChartShape,
    /// Set when the morph is skipped and the target is shown at once.
    pub snap: bool,
}

impl TransitionPlan {
    /// Interpolated geometry at `eased` progress, reported with linear
    /// `progress`. A snapping plan always yields the target.
    #[must_use]
    pub fn frame_at(
        &self,
        progress: f64,
        eased: f64,
        color_mode: ColorTransitionMode,
    ) -> ChartGeometry {
        if self.snap || progress >= 1.0 {
            return ChartGeometry::settled(&self.to);
        }
        ChartGeometry {
            area: interpolate(&self.from.area, &self.to.area, eased),
            line: interpolate(&self.from.line, &self.to.line, eased),
            colors: color_mode.blend(self.from.color, self.to.color, eased),
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// Replaces the start shape, keeping snap semantics for invalid input.
    #[must_use]
    pub fn starting_from(mut self, from: ChartShape) -> Self {
        if from.is_finite() {
            self.from = from;
        } else {
            self.snap = true;
        }
        self
    }
}

/// Builds both outlines for the previous and current point sets.
///
/// Both areas close against the committed viewport height. A start shape
/// with non-finite coordinates turns the plan into an instant snap.
#[must_use]
pub fn plan_transition(state: &ChartState) -> TransitionPlan {
    let baseline = state.baseline_y();
    let from = ChartShape::from_points(
        &state.previous_scaled_points,
        baseline,
        state.previous_color.unwrap_or(state.color),
    );
    let to = ChartShape::from_points(&state.current_scaled_points, baseline, state.color);
    let snap = state.skip_transition || !from.is_finite();
    TransitionPlan { from, to, snap }
}

/// Geometry of `state` at linear `progress` using `ease` for the morph.
#[must_use]
pub fn render_frame(
    state: &ChartState,
    progress: f64,
    ease: impl Fn(f64) -> f64,
    color_mode: ColorTransitionMode,
) -> ChartGeometry {
    plan_transition(state).frame_at(progress, ease(progress), color_mode)
}
