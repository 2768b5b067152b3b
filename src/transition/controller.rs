use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DEFAULT_PADDING_TOP_PX, Viewport};
use crate::error::{ChartError, ChartResult};

use super::color::{ColorTransitionMode, SeriesColors};
use super::easing::Easing;
use super::state::{
    ChartGeometry, ChartInput, ChartShape, ChartState, RejectReason, TransitionPlan,
    compute_next_state, plan_transition, should_accept,
};

pub const DEFAULT_TRANSITION_DURATION_MS: f64 = 250.0;

/// Start shape used when an update supersedes a transition still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupersedePolicy {
    /// Morph from whatever is on screen right now; rapid updates never jump.
    #[default]
    ContinueFromDisplayed,
    /// Morph from the last committed shape, jumping away from the
    /// displayed intermediate frame.
    RestartFromCommitted,
}

/// Timing and blending options of the transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub supersede_policy: SupersedePolicy,
    #[serde(default)]
    pub color_mode: ColorTransitionMode,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            easing: Easing::default(),
            supersede_policy: SupersedePolicy::default(),
            color_mode: ColorTransitionMode::default(),
        }
    }
}

impl TransitionConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_duration_ms() -> f64 {
    DEFAULT_TRANSITION_DURATION_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionPhase {
    Idle,
    Transitioning { elapsed_ms: f64, duration_ms: f64 },
}

impl TransitionPhase {
    #[must_use]
    pub fn progress(self) -> f64 {
        match self {
            Self::Idle => 1.0,
            Self::Transitioning {
                elapsed_ms,
                duration_ms,
            } => {
                if duration_ms <= 0.0 {
                    1.0
                } else {
                    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// Result of handing one update to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpdateOutcome {
    Accepted {
        skip_transition: bool,
        duration_ms: f64,
    },
    Rejected(RejectReason),
}

impl UpdateOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Owns the committed [`ChartState`] and the animation state machine.
///
/// `Idle -> Transitioning -> Idle`. An accepted update always replaces the
/// in-flight transition; the start shape of the replacement follows the
/// configured [`SupersedePolicy`]. Time is driven from outside through
/// [`advance`](Self::advance), so any frame scheduler (or a test stepping
/// progress by hand) can drive it.
#[derive(Debug, Clone)]
pub struct TransitionController {
    config: TransitionConfig,
    padding_top: f64,
    state: ChartState,
    observed_viewport: Viewport,
    plan: Option<TransitionPlan>,
    phase: TransitionPhase,
    generation: u64,
}

impl TransitionController {
    pub fn new(
        viewport: Viewport,
        color: SeriesColors,
        padding_top: f64,
        config: TransitionConfig,
    ) -> ChartResult<Self> {
        if !padding_top.is_finite() || padding_top < 0.0 {
            return Err(ChartError::InvalidConfig(
                "top padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            config: config.validate()?,
            padding_top,
            state: ChartState::empty(viewport, color),
            observed_viewport: viewport,
            plan: None,
            phase: TransitionPhase::Idle,
            generation: 0,
        })
    }

    /// Controller with default padding and timing.
    #[must_use]
    pub fn with_defaults(viewport: Viewport) -> Self {
        Self {
            config: TransitionConfig::default(),
            padding_top: DEFAULT_PADDING_TOP_PX,
            state: ChartState::empty(viewport, SeriesColors::default()),
            observed_viewport: viewport,
            plan: None,
            phase: TransitionPhase::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TransitionConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn padding_top(&self) -> f64 {
        self.padding_top
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[must_use]
    pub fn plan(&self) -> Option<&TransitionPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Transitioning { .. })
    }

    /// Number of accepted updates so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn observed_viewport(&self) -> Viewport {
        self.observed_viewport
    }

    /// Applies one data/viewport change.
    pub fn update(&mut self, input: ChartInput) -> UpdateOutcome {
        let previous_viewport = self.observed_viewport;
        self.observed_viewport = input.viewport;

        if let Err(reason) = should_accept(&self.state, &input) {
            debug!(?reason, points = input.data.len(), "chart update rejected");
            return UpdateOutcome::Rejected(reason);
        }

        let next_state =
            match compute_next_state(&self.state, &input, previous_viewport, self.padding_top) {
                Ok(state) => state,
                Err(err) => {
                    warn!(error = %err, "keeping last rendering after invalid update");
                    return UpdateOutcome::Rejected(RejectReason::InvalidGeometry);
                }
            };

        let displayed = match (self.config.supersede_policy, self.is_transitioning()) {
            (SupersedePolicy::ContinueFromDisplayed, true) => Some(self.frame().to_shape()),
            _ => None,
        };
        if displayed.is_some() {
            debug!(generation = self.generation, "superseding in-flight transition");
        }

        let mut plan = plan_transition(&next_state);
        if let Some(shape) = displayed {
            plan = plan.starting_from(shape);
        }
        if plan.snap && !next_state.skip_transition() {
            warn!("start geometry is not finite; snapping to target shape");
        }

        let skip_transition = plan.snap;
        let duration_ms = if skip_transition {
            0.0
        } else {
            self.config.duration_ms
        };
        self.phase = if duration_ms > 0.0 {
            TransitionPhase::Transitioning {
                elapsed_ms: 0.0,
                duration_ms,
            }
        } else {
            TransitionPhase::Idle
        };
        self.state = next_state;
        self.plan = Some(plan);
        self.generation += 1;

        debug!(
            generation = self.generation,
            points = self.state.data().len(),
            skip_transition,
            duration_ms,
            "chart update accepted"
        );

        UpdateOutcome::Accepted {
            skip_transition,
            duration_ms,
        }
    }

    /// Advances the running transition by `delta_ms`.
    ///
    /// Returns `true` while the transition is still in flight afterwards.
    /// Non-finite or negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        let TransitionPhase::Transitioning {
            elapsed_ms,
            duration_ms,
        } = self.phase
        else {
            return false;
        };
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return true;
        }

        let elapsed_ms = elapsed_ms + delta_ms;
        trace!(elapsed_ms, duration_ms, "transition tick");
        if elapsed_ms >= duration_ms {
            self.finish();
            return false;
        }
        self.phase = TransitionPhase::Transitioning {
            elapsed_ms,
            duration_ms,
        };
        true
    }

    /// Jumps the running transition to linear `progress`.
    pub fn seek(&mut self, progress: f64) {
        if let TransitionPhase::Transitioning { duration_ms, .. } = self.phase {
            let progress = if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            };
            if progress >= 1.0 {
                self.finish();
            } else {
                self.phase = TransitionPhase::Transitioning {
                    elapsed_ms: duration_ms * progress,
                    duration_ms,
                };
            }
        }
    }

    /// Completes the running transition immediately.
    pub fn finish(&mut self) {
        if self.is_transitioning() {
            debug!(generation = self.generation, "transition finished");
        }
        self.phase = TransitionPhase::Idle;
    }

    /// Geometry to display right now.
    #[must_use]
    pub fn frame(&self) -> ChartGeometry {
        let Some(plan) = &self.plan else {
            return ChartGeometry::settled(&ChartShape::empty(self.state.color()));
        };
        let progress = self.phase.progress();
        plan.frame_at(
            progress,
            self.config.easing.apply(progress),
            self.config.color_mode,
        )
    }
}
