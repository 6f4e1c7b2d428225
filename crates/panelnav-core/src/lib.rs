#![forbid(unsafe_code)]

//! Core: panel identity, the panel stack, transition records, and configuration.
//!
//! # Role in panelnav
//! `panelnav-core` is the data layer. It owns the navigation history
//! ([`stack::PanelStack`]), the vocabulary shared by every other crate
//! (axis, direction, gesture samples, easing curves), and the tunables that
//! shape interactive paging ([`config::NavigationConfig`]).
//!
//! # How it fits in the system
//! The runtime (`panelnav-runtime`) drives a [`stack::PanelStack`] from
//! gesture samples and imperative calls, and hands view positioning to the
//! host. Nothing in this crate talks to a renderer or an animation engine,
//! so everything here is deterministic and unit-testable on its own.

pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod panel;
pub mod stack;
pub mod transition;

pub use config::NavigationConfig;
pub use easing::Easing;
pub use error::{NavError, NavResult};
pub use geometry::{Axis, NavDirection};
pub use gesture::{GesturePhase, GestureSample};
pub use panel::{Panel, PanelId, PanelRef, ScrollableContent};
pub use stack::PanelStack;
pub use transition::{Transition, TransitionOrigin};
