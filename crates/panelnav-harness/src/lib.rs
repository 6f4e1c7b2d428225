#![forbid(unsafe_code)]

//! panelnav test harness
//!
//! Deterministic collaborators and fixtures for exercising the navigation
//! controller without a renderer or a frame clock.
//!
//! # Key Components
//!
//! - [`RecordingHost`] - view host that logs every materialize/position/release
//! - [`ManualAnimator`] - animations finish only when a test reports them
//! - [`TestPanel`] - panel with optional scroll content and navigation vetoes
//! - [`DragScript`] - builder for gesture sample sequences
//! - [`assert_invariants`] - cross-component consistency checks
//! - [`log_capture`] - tracing capture for asserting on logs

pub mod animator;
pub mod fixture;
pub mod host;
pub mod invariants;
pub mod log_capture;
pub mod panel;
pub mod script;

pub use animator::ManualAnimator;
pub use fixture::{EXTENT, TestController, controller, controller_with, finish_animations, play};
pub use host::{HostOp, RecordingHost};
pub use invariants::{assert_invariants, check_invariants};
pub use log_capture::{CapturedEvent, CapturedLogs, CapturedSpan, with_captured_logs};
pub use panel::{TestPanel, TestScroll, panel, panels};
pub use script::DragScript;
