#![forbid(unsafe_code)]

//! Easing curves handed to the animation engine.
//!
//! The controller never interpolates frames itself; it tells the host which
//! curve to run. Imperative transitions use a symmetric curve, finishing moves
//! after a drag use a decelerating one so the motion reads as a continuation
//! of the user's momentum.

/// Easing function for panel transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Decelerating cubic, used for post-gesture finishing moves.
    EaseOut,
    /// Accelerating cubic.
    EaseIn,
    /// Cubic S-curve, used for imperative transitions.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a time fraction in [0.0, 1.0].
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }

    /// Interpolate between `from` and `to` at time fraction `t`.
    #[must_use]
    pub fn interpolate(self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.apply(t)
    }
}
