use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{AreaPrimitive, CursorPrimitive, LinePathPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub area: AreaPrimitive,
    pub line: LinePathPrimitive,
    pub cursor: Option<CursorPrimitive>,
    /// Linear transition progress in `[0, 1]`; `1.0` once settled.
    pub progress: f64,
}

impl RenderFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.progress.is_finite() || !(0.0..=1.0).contains(&self.progress) {
            return Err(ChartError::InvalidGeometry(
                "frame progress must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.area.validate()?;
        self.line.validate()?;
        if let Some(cursor) = self.cursor {
            cursor.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area.path.is_empty() && self.line.path.is_empty() && self.cursor.is_none()
    }
}
