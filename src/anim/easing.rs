use serde::{Deserialize, Serialize};

/// Interpolation curve applied to the normalized animation progress.
///
/// Every variant is monotonically non-decreasing on `[0, 1]` and maps the
/// endpoints exactly: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`. Settled
/// bars therefore land on their targets without overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the tween shape used for bar entrances.
    #[default]
    EaseInOutCubic,
    /// Hermite smoothstep, a slightly gentler in-out alternative.
    SmoothStep,
}

impl Easing {
    /// Maps normalized progress to eased progress, clamping input to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
