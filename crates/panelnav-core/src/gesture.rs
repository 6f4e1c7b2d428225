#![forbid(unsafe_code)]

//! Pointer-drag samples as reported by the platform's pan recognizer.
//!
//! The recognizer itself lives outside this workspace. It reports one
//! [`GestureSample`] per touch phase change: translation is the signed
//! distance along `axis` since the gesture began, velocity is signed
//! distance per second.

use crate::geometry::Axis;

/// Phase of a single-pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer went down and the recognizer started tracking.
    Began,
    /// Pointer moved.
    Changed,
    /// Pointer lifted.
    Ended,
    /// The platform aborted the gesture (focus loss, incoming call, ...).
    Cancelled,
}

impl GesturePhase {
    /// Whether this phase terminates the gesture.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// An instantaneous reading of the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Touch phase.
    pub phase: GesturePhase,
    /// Signed distance along `axis` since the gesture began, in points.
    pub translation: f64,
    /// Signed velocity along `axis`, in points per second.
    pub velocity: f64,
    /// Axis the recognizer measured along.
    pub axis: Axis,
}

impl GestureSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(phase: GesturePhase, translation: f64, velocity: f64, axis: Axis) -> Self {
        Self {
            phase,
            translation,
            velocity,
            axis,
        }
    }

    /// A `Began` sample at zero translation.
    #[must_use]
    pub const fn began(axis: Axis) -> Self {
        Self::new(GesturePhase::Began, 0.0, 0.0, axis)
    }

    /// A `Changed` sample.
    #[must_use]
    pub const fn changed(translation: f64, velocity: f64, axis: Axis) -> Self {
        Self::new(GesturePhase::Changed, translation, velocity, axis)
    }

    /// An `Ended` sample.
    #[must_use]
    pub const fn ended(translation: f64, velocity: f64, axis: Axis) -> Self {
        Self::new(GesturePhase::Ended, translation, velocity, axis)
    }

    /// A `Cancelled` sample.
    #[must_use]
    pub const fn cancelled(translation: f64, axis: Axis) -> Self {
        Self::new(GesturePhase::Cancelled, translation, 0.0, axis)
    }

    /// Whether translation and velocity are usable numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.velocity.is_finite()
    }
}
