#![forbid(unsafe_code)]

//! panelnav public facade crate.
//!
//! Re-exports the stable surface of `panelnav-core` and `panelnav-runtime`
//! and offers a prelude for hosts embedding a navigation controller.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use panelnav::prelude::*;
//!
//! struct Page(u64);
//!
//! impl Panel for Page {
//!     fn id(&self) -> PanelId {
//!         PanelId(self.0)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Views(u64);
//!
//! impl ViewHost for Views {
//!     fn materialize_view(&mut self, _panel: &dyn Panel) -> ViewHandle {
//!         self.0 += 1;
//!         ViewHandle(self.0)
//!     }
//!     fn release_view(&mut self, _view: ViewHandle) {}
//!     fn position_view(&mut self, _view: ViewHandle, _axis: Axis, _offset: f64) {}
//! }
//!
//! #[derive(Default)]
//! struct Frames(u64);
//!
//! impl Animator for Frames {
//!     fn animate(&mut self, _request: AnimationRequest) -> AnimationId {
//!         self.0 += 1;
//!         AnimationId(self.0)
//!     }
//!     fn cancel(&mut self, _id: AnimationId) {}
//! }
//!
//! let mut nav = NavigationController::new(
//!     NavigationConfig::default(),
//!     Rc::new(Page(1)),
//!     Views::default(),
//!     Frames::default(),
//! );
//! nav.set_container_extent(320.0);
//!
//! let NavOutcome::Animating(id) = nav.push(Rc::new(Page(2)), true, true)? else {
//!     unreachable!("animated push starts a transition");
//! };
//! assert!(nav.is_busy());
//! assert!(nav.animation_finished(id));
//! assert_eq!(nav.current_panel().id(), PanelId(2));
//! # Ok::<(), panelnav::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use panelnav_core::{
    Axis, Easing, GesturePhase, GestureSample, NavDirection, NavigationConfig, Panel, PanelId,
    PanelRef, PanelStack, ScrollableContent, Transition, TransitionOrigin,
};

// --- Runtime re-exports ----------------------------------------------------

pub use panelnav_runtime::{
    AnimationId, AnimationRequest, Animator, FinishPlan, IgnoreReason, NavOutcome, NavPhase,
    NavigationController, NavigationEvent, Outcome, ViewHandle, ViewHost, ViewTrack,
};

// --- Errors ---------------------------------------------------------------

/// Error returned by navigation calls.
pub use panelnav_core::NavError as Error;

/// Standard result type for panelnav APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnimationId, AnimationRequest, Animator, Axis, Error, GesturePhase, GestureSample,
        NavDirection, NavOutcome, NavPhase, NavigationConfig, NavigationController,
        NavigationEvent, Panel, PanelId, PanelRef, Result, ViewHandle, ViewHost,
    };

    pub use crate::{core, runtime};
}

pub use panelnav_core as core;
pub use panelnav_runtime as runtime;
