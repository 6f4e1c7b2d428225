#![forbid(unsafe_code)]

//! Navigation events queued for the host.
//!
//! The controller records what happened during each call; the host drains
//! the queue with [`NavigationController::drain_events`] whenever it likes.
//!
//! [`NavigationController::drain_events`]: crate::NavigationController::drain_events

use panelnav_core::{PanelId, Transition};

use crate::gesture::IgnoreReason;

/// Something observable the controller did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationEvent {
    /// A neighbor was staged and a transition is live.
    TransitionBegan(Transition),
    /// A transition completed and the stack edit was applied.
    TransitionCommitted(Transition),
    /// A transition was abandoned; the stack is unchanged.
    TransitionCancelled(Transition),
    /// A panel left the stack and its trail for good.
    PanelDiscarded(PanelId),
    /// Gesture input was dropped.
    GestureIgnored {
        /// Why.
        reason: IgnoreReason,
    },
}

impl NavigationEvent {
    /// Label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TransitionBegan(_) => "transition_began",
            Self::TransitionCommitted(_) => "transition_committed",
            Self::TransitionCancelled(_) => "transition_cancelled",
            Self::PanelDiscarded(_) => "panel_discarded",
            Self::GestureIgnored { .. } => "gesture_ignored",
        }
    }

    /// The transition this event refers to, if any.
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        match self {
            Self::TransitionBegan(t) | Self::TransitionCommitted(t) | Self::TransitionCancelled(t) => {
                Some(t)
            }
            Self::PanelDiscarded(_) | Self::GestureIgnored { .. } => None,
        }
    }
}
