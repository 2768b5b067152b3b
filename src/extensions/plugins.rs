use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Viewport};
use crate::interaction::HoverState;
use crate::transition::{RejectReason, TransitionPhase};

/// Read-only surface snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub points_len: usize,
    pub generation: u64,
    pub phase: TransitionPhase,
    pub hover: HoverState,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataAccepted {
        points_len: usize,
        skip_transition: bool,
    },
    UpdateRejected {
        reason: RejectReason,
    },
    TransitionFinished,
    HoverMoved {
        pixel_x: f64,
        pixel_y: f64,
        index: usize,
        value: DataPoint,
    },
    HoverLeft,
    Rendered,
}

/// Observer interface for hosts (hover read-outs, analytics, debugging).
///
/// Plugins see events and read surface context without mutating chart
/// internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
