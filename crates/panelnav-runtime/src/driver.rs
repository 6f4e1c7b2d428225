#![forbid(unsafe_code)]

//! Imperative transition driver.
//!
//! Push, pop, pop-to, pop-to-root and set-stack run as one non-interruptible
//! transition built from the same primitives as a drag: the destination is
//! staged next to the current view and progress animates from 0 to 1. There
//! is no deciding phase; the outcome is always completion, and the stack
//! edit is applied only when the animation reports back.
//!
//! # Invariants
//!
//! 1. At most one imperative transition is pending.
//! 2. A [`StackEdit`] is validated against the stack before anything is
//!    staged, so applying it at completion cannot fail while the stack is
//!    frozen.
//! 3. Edits that do not change the current panel never stage a view.

use std::fmt;

use tracing::debug;

use panelnav_core::{
    NavDirection, NavError, NavResult, NavigationConfig, Panel, PanelId, PanelRef, PanelStack,
    Transition, TransitionOrigin,
};

use crate::backend::{AnimationId, AnimationRequest, Animator, ViewHost};
use crate::tiling::TilingManager;

// ---------------------------------------------------------------------------
// Stack edits
// ---------------------------------------------------------------------------

/// A change to the panel stack requested through the imperative API.
#[derive(Clone)]
pub enum StackEdit {
    /// Push a panel and make it current.
    Push(PanelRef),
    /// Retain a panel as the forward neighbor without showing it.
    PushUnfocused(PanelRef),
    /// Pop the current panel.
    Pop,
    /// Drop the forward neighbor without changing the current panel.
    DiscardForward,
    /// Pop every panel above the given one.
    PopTo(PanelId),
    /// Pop every panel above the root.
    PopToRoot,
    /// Replace the stack. Unfocused replacements keep the last panel as the
    /// forward neighbor instead of showing it.
    Replace {
        /// The new stack, root first.
        panels: Vec<PanelRef>,
        /// Whether the last panel becomes current.
        focused: bool,
    },
}

impl fmt::Debug for StackEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(p) => f.debug_tuple("Push").field(&p.id()).finish(),
            Self::PushUnfocused(p) => f.debug_tuple("PushUnfocused").field(&p.id()).finish(),
            Self::Pop => f.write_str("Pop"),
            Self::DiscardForward => f.write_str("DiscardForward"),
            Self::PopTo(id) => f.debug_tuple("PopTo").field(id).finish(),
            Self::PopToRoot => f.write_str("PopToRoot"),
            Self::Replace { panels, focused } => f
                .debug_struct("Replace")
                .field("panels", &panels.iter().map(|p| p.id()).collect::<Vec<_>>())
                .field("focused", focused)
                .finish(),
        }
    }
}

impl StackEdit {
    /// Label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::PushUnfocused(_) => "push_unfocused",
            Self::Pop => "pop",
            Self::DiscardForward => "discard_forward",
            Self::PopTo(_) => "pop_to",
            Self::PopToRoot => "pop_to_root",
            Self::Replace { .. } => "set_stack",
        }
    }

    /// Whether the edit adds a panel on top.
    #[must_use]
    pub const fn is_push(&self) -> bool {
        matches!(self, Self::Push(_) | Self::PushUnfocused(_))
    }

    /// Apply the edit to `stack`.
    pub fn apply(self, stack: &mut PanelStack) -> NavResult<()> {
        match self {
            Self::Push(panel) => stack.push(panel),
            Self::PushUnfocused(panel) => stack.push_unfocused(panel),
            Self::Pop => {
                stack.pop();
                Ok(())
            }
            Self::DiscardForward => {
                stack.discard_forward();
                Ok(())
            }
            Self::PopTo(id) => stack.pop_to(id).map(drop),
            Self::PopToRoot => {
                stack.pop_to_root();
                Ok(())
            }
            Self::Replace { panels, focused } => {
                stack.set_stack(panels)?;
                if !focused {
                    stack.pop();
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// A validated edit that changes the current panel.
#[derive(Clone)]
pub struct DrivePlan {
    /// The edit to apply at completion.
    pub edit: StackEdit,
    /// The panel that becomes current.
    pub destination: PanelRef,
    /// Direction of the visual transition.
    pub direction: NavDirection,
}

impl fmt::Debug for DrivePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrivePlan")
            .field("edit", &self.edit)
            .field("destination", &self.destination.id())
            .field("direction", &self.direction)
            .finish()
    }
}

/// What a validated edit needs from the controller.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Nothing to do.
    NoOp,
    /// Apply at once; the current panel does not change.
    Immediate(StackEdit),
    /// The current panel changes; run a transition.
    Transition(DrivePlan),
}

/// Validate `edit` against `stack` and work out how to carry it out.
///
/// Nothing is mutated; a returned error leaves everything as it was.
pub fn resolve(edit: StackEdit, stack: &PanelStack) -> NavResult<Resolution> {
    let current = stack.current_id();
    let (destination, direction) = match &edit {
        StackEdit::Push(panel) => {
            stack.check_push(panel.as_ref())?;
            (panel.clone(), NavDirection::Forward)
        }
        StackEdit::PushUnfocused(panel) => {
            stack.check_push(panel.as_ref())?;
            return Ok(Resolution::Immediate(edit));
        }
        StackEdit::Pop => match stack.previous() {
            Some(previous) => (previous.clone(), NavDirection::Backward),
            None => return Ok(Resolution::NoOp),
        },
        StackEdit::DiscardForward => {
            if stack.forward().is_none() {
                return Ok(Resolution::NoOp);
            }
            return Ok(Resolution::Immediate(edit));
        }
        StackEdit::PopTo(id) => match stack.check_pop_to(*id)? {
            Some(index) => (stack.panels()[index].clone(), NavDirection::Backward),
            None => return Ok(Resolution::NoOp),
        },
        StackEdit::PopToRoot => {
            if stack.depth() <= 1 {
                return Ok(Resolution::NoOp);
            }
            (stack.root().clone(), NavDirection::Backward)
        }
        StackEdit::Replace { panels, focused } => {
            PanelStack::validate_replacement(panels)?;
            let shown = if *focused {
                panels.last()
            } else {
                panels.len().checked_sub(2).and_then(|i| panels.get(i))
            };
            let Some(shown) = shown else {
                return Err(NavError::InvalidArgument(
                    "an unfocused replacement needs a panel to show",
                ));
            };
            let below_current = stack
                .index_of(shown.id())
                .is_some_and(|i| i + 1 < stack.depth());
            let direction = if below_current {
                NavDirection::Backward
            } else {
                NavDirection::Forward
            };
            (shown.clone(), direction)
        }
    };
    if destination.id() == current {
        return Ok(Resolution::Immediate(edit));
    }
    Ok(Resolution::Transition(DrivePlan {
        edit,
        destination,
        direction,
    }))
}

/// Scroll the outgoing panel to its trailing edge and the incoming one to
/// its leading edge, when they expose scrollable content.
pub fn reset_scroll_views(outgoing: &dyn Panel, incoming: &dyn Panel) {
    if let Some(content) = outgoing.scrollable() {
        content.scroll_to_trailing_edge();
    }
    if let Some(content) = incoming.scrollable() {
        content.scroll_to_leading_edge();
    }
}

// ---------------------------------------------------------------------------
// ImperativeDriver
// ---------------------------------------------------------------------------

/// An imperative transition waiting for its animation.
#[derive(Debug)]
pub struct Pending {
    /// The animation carrying the transition.
    pub animation: AnimationId,
    /// The transition record.
    pub transition: Transition,
    /// The validated plan.
    pub plan: DrivePlan,
}

/// Runs imperative transitions; holds at most one pending edit.
#[derive(Debug, Default)]
pub struct ImperativeDriver {
    pending: Option<Pending>,
    started: u64,
}

impl ImperativeDriver {
    /// Create an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition is waiting for its animation.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending transition record.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.pending.as_ref().map(|p| &p.transition)
    }

    /// The pending animation.
    #[must_use]
    pub fn animation(&self) -> Option<AnimationId> {
        self.pending.as_ref().map(|p| p.animation)
    }

    /// Number of animated transitions started.
    #[must_use]
    pub fn started(&self) -> u64 {
        self.started
    }

    /// Stage the destination and start the animation.
    ///
    /// Returns `None` if a transition is already pending or the tiling
    /// window refuses to stage; nothing is touched in that case.
    #[allow(clippy::too_many_arguments)]
    pub fn begin<H, A>(
        &mut self,
        plan: DrivePlan,
        stack: &PanelStack,
        tiling: &mut TilingManager,
        host: &mut H,
        animator: &mut A,
        config: &NavigationConfig,
        extent: f64,
    ) -> Option<AnimationId>
    where
        H: ViewHost + ?Sized,
        A: Animator + ?Sized,
    {
        if self.pending.is_some() {
            return None;
        }
        let current = stack.current();
        if config.should_reset_scroll_views {
            reset_scroll_views(current.as_ref(), plan.destination.as_ref());
        }
        if !tiling.begin_staging(plan.destination.clone(), plan.direction, extent, host) {
            return None;
        }
        let transition = Transition::new(
            current.id(),
            plan.destination.id(),
            tiling.axis(),
            plan.direction,
            TransitionOrigin::Imperative,
        );
        let request = AnimationRequest {
            duration: config.base_navigation_duration,
            easing: config.imperative_easing,
            from: 0.0,
            to: 1.0,
            axis: tiling.axis(),
            tracks: tiling.tracks(1.0, extent),
        };
        let animation = animator.animate(request);
        debug!(
            edit = plan.edit.kind(),
            from = %transition.from,
            to = %transition.to,
            direction = %plan.direction,
            ?animation,
            "imperative transition started"
        );
        self.started += 1;
        self.pending = Some(Pending {
            animation,
            transition,
            plan,
        });
        Some(animation)
    }

    /// Take the pending transition if `animation` is its animation.
    pub fn finish(&mut self, animation: AnimationId) -> Option<Pending> {
        if self.animation() != Some(animation) {
            return None;
        }
        self.pending.take()
    }

    /// Take the pending transition regardless of its animation.
    pub fn take(&mut self) -> Option<Pending> {
        self.pending.take()
    }
}
