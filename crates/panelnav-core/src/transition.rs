#![forbid(unsafe_code)]

//! Transition records.
//!
//! A [`Transition`] describes the in-flight movement between two adjacent
//! panels. It is owned by whichever component drives it (the gesture state
//! machine or the imperative driver); at most one exists at a time.

use crate::geometry::{Axis, NavDirection};
use crate::panel::PanelId;

/// Who is driving a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOrigin {
    /// Driven by a pointer drag; may be cancelled at release.
    Interactive,
    /// Driven by a push/pop call; always completes.
    Imperative,
}

/// Movement from one panel to an adjacent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Panel being left.
    pub from: PanelId,
    /// Panel being revealed.
    pub to: PanelId,
    /// Navigation axis.
    pub axis: Axis,
    /// Forward (push) or backward (pop).
    pub direction: NavDirection,
    /// 0.0 = fully at `from`, 1.0 = fully at `to`.
    pub progress: f64,
    /// Interactive or imperative.
    pub origin: TransitionOrigin,
}

impl Transition {
    /// Create a transition at progress 0.
    #[must_use]
    pub const fn new(
        from: PanelId,
        to: PanelId,
        axis: Axis,
        direction: NavDirection,
        origin: TransitionOrigin,
    ) -> Self {
        Self {
            from,
            to,
            axis,
            direction,
            progress: 0.0,
            origin,
        }
    }

    /// Set progress, clamped to [0.0, 1.0]. Non-finite values are ignored.
    pub fn set_progress(&mut self, progress: f64) {
        if progress.is_finite() {
            self.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Progress implied by a drag `translation` across a container of
    /// `extent`, in this transition's frame.
    #[must_use]
    pub fn progress_for_translation(&self, translation: f64, extent: f64) -> f64 {
        if extent <= 0.0 {
            return 0.0;
        }
        (translation * self.direction.sign() / extent).clamp(0.0, 1.0)
    }

    /// Whether this transition can be cancelled by a release decision.
    #[inline]
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.origin, TransitionOrigin::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward() -> Transition {
        Transition::new(
            PanelId(1),
            PanelId(2),
            Axis::Horizontal,
            NavDirection::Forward,
            TransitionOrigin::Interactive,
        )
    }

    #[test]
    fn progress_follows_direction_frame() {
        let t = forward();
        assert_eq!(t.progress_for_translation(-50.0, 200.0), 0.25);
        assert_eq!(t.progress_for_translation(50.0, 200.0), 0.0);
        assert_eq!(t.progress_for_translation(-500.0, 200.0), 1.0);
    }

    #[test]
    fn degenerate_extent_yields_zero() {
        assert_eq!(forward().progress_for_translation(-50.0, 0.0), 0.0);
    }

    #[test]
    fn set_progress_clamps_and_skips_nan() {
        let mut t = forward();
        t.set_progress(1.4);
        assert_eq!(t.progress, 1.0);
        t.set_progress(f64::NAN);
        assert_eq!(t.progress, 1.0);
        t.set_progress(-0.2);
        assert_eq!(t.progress, 0.0);
        assert!(t.is_interactive());
    }
}
