use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PADDING_TOP_PX, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::transition::{
    ColorSpec, ColorTransitionMode, Easing, SeriesColors, SupersedePolicy, TransitionConfig,
};

pub const DEFAULT_LINE_WIDTH_PX: f64 = 1.5;

/// Public surface bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSurfaceConfig {
    pub viewport: Viewport,
    #[serde(default = "default_padding_top_px")]
    pub padding_top_px: f64,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
    #[serde(default)]
    pub color: ColorSpec,
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl ChartSurfaceConfig {
    /// Creates a config with default padding, colors and timing.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding_top_px: default_padding_top_px(),
            line_width_px: default_line_width_px(),
            color: ColorSpec::default(),
            transition: TransitionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_padding_top(mut self, padding_top_px: f64) -> Self {
        self.padding_top_px = padding_top_px;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width_px: f64) -> Self {
        self.line_width_px = line_width_px;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorSpec) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_transition_duration(mut self, duration_ms: f64) -> Self {
        self.transition.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    #[must_use]
    pub fn with_supersede_policy(mut self, policy: SupersedePolicy) -> Self {
        self.transition.supersede_policy = policy;
        self
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorTransitionMode) -> Self {
        self.transition.color_mode = mode;
        self
    }

    /// Checks numeric fields and resolves the configured colors.
    pub fn validate(&self) -> ChartResult<SeriesColors> {
        if !self.padding_top_px.is_finite() || self.padding_top_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "top padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.transition.validate()?;
        self.color.resolve()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse surface config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize surface config: {e}"))
        })
    }
}

fn default_padding_top_px() -> f64 {
    DEFAULT_PADDING_TOP_PX
}

fn default_line_width_px() -> f64 {
    DEFAULT_LINE_WIDTH_PX
}
