use serde::{Deserialize, Serialize};

/// Progress curve applied to linear elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    CubicIn,
    CubicOut,
    /// Symmetric cubic ease; slow at both ends.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) onto eased progress.
    ///
    /// Every curve satisfies `apply(0) == 0` and `apply(1) == 1` exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let inverse = 1.0 - t;
                1.0 - inverse * inverse * inverse
            }
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
        }
    }
}
