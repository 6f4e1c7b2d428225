#![forbid(unsafe_code)]

//! Navigation axis and direction primitives.
//!
//! Offsets are signed distances along the navigation axis, measured from the
//! container's rest position. A negative translation drags content toward the
//! leading edge and reveals the forward neighbor; a positive translation
//! reveals the backward neighbor.

/// The axis along which panels are laid out and dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Panels sit side by side; drags are horizontal.
    #[default]
    Horizontal,
    /// Panels are stacked top to bottom; drags are vertical.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Which way a transition moves through the panel history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward a newer panel (push).
    Forward,
    /// Toward an older panel (pop).
    Backward,
}

impl NavDirection {
    /// Sign of a translation that moves a transition in this direction.
    ///
    /// Forward paging drags content toward the leading edge (negative).
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Backward => 1.0,
        }
    }

    /// Direction implied by a signed translation, or `None` at exactly zero.
    #[must_use]
    pub fn from_translation(translation: f64) -> Option<Self> {
        if translation < 0.0 {
            Some(Self::Forward)
        } else if translation > 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Rest offset of a neighbor staged in this direction, for a container
    /// of the given extent.
    #[inline]
    #[must_use]
    pub fn neighbor_rest_offset(self, extent: f64) -> f64 {
        -self.sign() * extent
    }

    /// Offsets of the current and staged views at `progress`.
    ///
    /// At progress 0 the current view rests at 0 and the neighbor sits just
    /// offscreen; at progress 1 the neighbor rests at 0.
    #[must_use]
    pub fn view_offsets(self, progress: f64, extent: f64) -> (f64, f64) {
        let s = self.sign();
        let p = progress.clamp(0.0, 1.0);
        (s * p * extent, s * (p - 1.0) * extent)
    }

    /// Short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl std::fmt::Display for NavDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_translation_sign() {
        assert_eq!(
            NavDirection::from_translation(-3.0),
            Some(NavDirection::Forward)
        );
        assert_eq!(
            NavDirection::from_translation(3.0),
            Some(NavDirection::Backward)
        );
        assert_eq!(NavDirection::from_translation(0.0), None);
    }

    #[test]
    fn forward_offsets_slide_toward_leading_edge() {
        let (current, staged) = NavDirection::Forward.view_offsets(0.25, 400.0);
        assert_eq!(current, -100.0);
        assert_eq!(staged, 300.0);
    }

    #[test]
    fn backward_offsets_slide_toward_trailing_edge() {
        let (current, staged) = NavDirection::Backward.view_offsets(0.25, 400.0);
        assert_eq!(current, 100.0);
        assert_eq!(staged, -300.0);
    }

    #[test]
    fn endpoints_match_rest_positions() {
        for dir in [NavDirection::Forward, NavDirection::Backward] {
            let (current, staged) = dir.view_offsets(0.0, 320.0);
            assert_eq!(current, 0.0);
            assert_eq!(staged, dir.neighbor_rest_offset(320.0));

            let (current, staged) = dir.view_offsets(1.0, 320.0);
            assert_eq!(current, -dir.neighbor_rest_offset(320.0));
            assert_eq!(staged, 0.0);
        }
    }

    #[test]
    fn offsets_clamp_progress() {
        let over = NavDirection::Forward.view_offsets(1.7, 100.0);
        let full = NavDirection::Forward.view_offsets(1.0, 100.0);
        assert_eq!(over, full);
    }

    #[test]
    fn opposite_round_trips() {
        assert_eq!(NavDirection::Forward.opposite(), NavDirection::Backward);
        assert_eq!(NavDirection::Backward.opposite().opposite(), NavDirection::Backward);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }
}
