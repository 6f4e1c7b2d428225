#![forbid(unsafe_code)]

//! Navigation error model.
//!
//! Every variant is recoverable: a failed call leaves the panel stack and the
//! tiling window exactly as they were. Popping the root is not an error; it
//! is reported as a no-op outcome by the caller-facing API.
//!
//! Gesture-path conditions (no neighbor to page to, near-zero release
//! velocity) never surface here. They are steady-state policy, absorbed by
//! the gesture state machine.

use std::fmt;

use crate::panel::PanelId;

/// Errors returned by navigation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A transition is live and its commit/cancel decision is not applied yet.
    Busy,
    /// The target panel is not in the stack.
    NotFound(PanelId),
    /// The argument can never be valid (e.g. an empty replacement stack, or
    /// pushing the panel that is already on top).
    InvalidArgument(&'static str),
    /// The operation conflicts with a decided transition that has not
    /// committed yet (e.g. pushing while the finishing move runs).
    InvalidOperation(&'static str),
}

/// Standard result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

impl NavError {
    /// Error label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::NotFound(_) => "not_found",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::InvalidOperation(_) => "invalid_operation",
        }
    }

    /// Whether retrying the same call later may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a transition is in progress"),
            Self::NotFound(id) => write!(f, "{id} is not in the panel stack"),
            Self::InvalidArgument(detail) => write!(f, "invalid argument: {detail}"),
            Self::InvalidOperation(detail) => write!(f, "invalid operation: {detail}"),
        }
    }
}

impl std::error::Error for NavError {}
