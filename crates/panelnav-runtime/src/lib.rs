#![forbid(unsafe_code)]

//! panelnav runtime
//!
//! The interactive transition engine and the controller that owns it.
//!
//! # Key Components
//!
//! - [`NavigationController`] - single owner of navigation state and the public API
//! - [`GestureStateMachine`] - turns drag samples into reversible transitions
//! - [`TilingManager`] - keeps exactly the current and staged views alive
//! - [`ImperativeDriver`] - push/pop/set-stack as non-interruptible transitions
//! - [`LifecycleCleaner`] - releases what fell out of the tiling window
//! - [`ViewHost`] / [`Animator`] - the host boundary
//!
//! # Role in panelnav
//! `panelnav-runtime` is the orchestrator. It consumes gesture samples and
//! imperative calls, edits the `panelnav-core` stack when transitions
//! resolve, and delegates drawing and frame-by-frame animation to the host.
//!
//! # How it fits in the system
//! Everything runs on one control thread. The host feeds
//! [`NavigationController::handle_gesture`], starts the animations the
//! controller requests, and reports completion through
//! [`NavigationController::animation_finished`].

pub mod backend;
pub mod cleaner;
pub mod controller;
pub mod driver;
pub mod event;
pub mod gesture;
pub mod tiling;

pub use backend::{AnimationId, AnimationRequest, Animator, ViewHandle, ViewHost, ViewTrack};
pub use cleaner::{LifecycleCleaner, SweepReport};
pub use controller::{NavOutcome, NavigationController};
pub use driver::{ImperativeDriver, StackEdit};
pub use event::NavigationEvent;
pub use gesture::{
    Availability, FinishPlan, GestureAction, GestureContext, GestureStateMachine, IgnoreReason,
    NavPhase, Outcome,
};
pub use tiling::{Tile, TilingManager};
