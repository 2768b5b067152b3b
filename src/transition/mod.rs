//! Transition engine: committed chart state plus the animation that morphs
//! the previous shape into the current one.

pub mod color;
pub mod controller;
pub mod easing;
pub mod path_interpolation;
pub mod state;

pub use color::{ColorSpec, ColorTransitionMode, SeriesColors};
pub use controller::{
    DEFAULT_TRANSITION_DURATION_MS, SupersedePolicy, TransitionConfig, TransitionController,
    TransitionPhase, UpdateOutcome,
};
pub use easing::Easing;
pub use path_interpolation::{extend_vertices, interpolate};
pub use state::{
    ChartGeometry, ChartInput, ChartShape, ChartState, RejectReason, TransitionPlan,
    compute_next_state, plan_transition, render_frame, should_accept,
};
