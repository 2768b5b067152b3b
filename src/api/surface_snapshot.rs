use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::Renderer;
use crate::transition::TransitionPhase;

use super::ChartSurface;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub viewport: Viewport,
    pub points_len: usize,
    pub generation: u64,
    pub phase: TransitionPhase,
    pub area_path: String,
    pub line_path: String,
    pub fill: String,
    pub stroke: String,
    pub hover: HoverState,
}

impl<R: Renderer> ChartSurface<R> {
    /// Captures the currently displayed frame.
    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let geometry = self.controller.frame();
        let state = self.controller.state();
        SurfaceSnapshot {
            viewport: state.viewport(),
            points_len: state.data().len(),
            generation: self.controller.generation(),
            phase: self.controller.phase(),
            area_path: geometry.area.to_string(),
            line_path: geometry.line.to_string(),
            fill: geometry.colors.fill.to_css(),
            stroke: geometry.colors.stroke.to_css(),
            hover: self.hover.state(),
        }
    }

    /// Snapshot wrapped in the versioned JSON contract.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
