#![forbid(unsafe_code)]

//! Collaborator traits: the boundary between the controller and the host.
//!
//! The controller never draws and never runs frames. It asks a [`ViewHost`]
//! to materialize, position and release panel views, and asks an [`Animator`]
//! to move views between offsets over time. Animation completion comes back
//! later through [`NavigationController::animation_finished`], on the same
//! control thread.
//!
//! [`NavigationController::animation_finished`]: crate::NavigationController::animation_finished

use std::time::Duration;

use panelnav_core::{Axis, Easing, Panel};

/// Opaque handle to a materialized panel view, minted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(pub u64);

/// Opaque handle to a running animation, minted by the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Rendering/layout half of the host boundary.
pub trait ViewHost {
    /// Create a view for `panel` and insert it into the container.
    fn materialize_view(&mut self, panel: &dyn Panel) -> ViewHandle;

    /// Remove a view from the container and free it.
    fn release_view(&mut self, view: ViewHandle);

    /// Place a view at `offset` points from rest along `axis`.
    fn position_view(&mut self, view: ViewHandle, axis: Axis, offset: f64);
}

/// One view's motion within an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTrack {
    /// The view to move.
    pub view: ViewHandle,
    /// Offset at the start of the animation.
    pub from_offset: f64,
    /// Offset at the end of the animation.
    pub to_offset: f64,
}

impl ViewTrack {
    /// Offset at eased time fraction `t`.
    #[must_use]
    pub fn offset_at(&self, easing: Easing, t: f64) -> f64 {
        easing.interpolate(self.from_offset, self.to_offset, t)
    }
}

/// A request to animate transition progress from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// Wall-clock length of the animation.
    pub duration: Duration,
    /// Interpolation curve.
    pub easing: Easing,
    /// Starting progress.
    pub from: f64,
    /// Final progress.
    pub to: f64,
    /// Axis the tracks move along.
    pub axis: Axis,
    /// Views to move.
    pub tracks: Vec<ViewTrack>,
}

/// Animation half of the host boundary.
pub trait Animator {
    /// Start an animation. The host must later report completion through
    /// `animation_finished` with the returned id.
    fn animate(&mut self, request: AnimationRequest) -> AnimationId;

    /// Stop an animation without reporting completion.
    fn cancel(&mut self, id: AnimationId);
}

impl<T: ViewHost + ?Sized> ViewHost for &mut T {
    fn materialize_view(&mut self, panel: &dyn Panel) -> ViewHandle {
        (**self).materialize_view(panel)
    }

    fn release_view(&mut self, view: ViewHandle) {
        (**self).release_view(view);
    }

    fn position_view(&mut self, view: ViewHandle, axis: Axis, offset: f64) {
        (**self).position_view(view, axis, offset);
    }
}

impl<T: Animator + ?Sized> Animator for &mut T {
    fn animate(&mut self, request: AnimationRequest) -> AnimationId {
        (**self).animate(request)
    }

    fn cancel(&mut self, id: AnimationId) {
        (**self).cancel(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_interpolates_offsets() {
        let track = ViewTrack {
            view: ViewHandle(1),
            from_offset: -100.0,
            to_offset: -400.0,
        };
        assert_eq!(track.offset_at(Easing::Linear, 0.0), -100.0);
        assert_eq!(track.offset_at(Easing::Linear, 1.0), -400.0);
        assert_eq!(track.offset_at(Easing::Linear, 0.5), -250.0);
    }
}
