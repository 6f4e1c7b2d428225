#![forbid(unsafe_code)]

//! Gesture state machine: turns a drag into a reversible transition.
//!
//! [`GestureStateMachine`] consumes [`GestureSample`]s and emits
//! [`GestureAction`]s for the controller to apply to the tiling window and
//! the animator. It never touches the host itself, so every transition of
//! the machine is deterministic and testable in isolation.
//!
//! # State Machine
//!
//! ```text
//!            drag ≥ min distance, neighbor
//!   Idle ──► Armed ──────────────────────────► Tracking ──Ended──► Deciding
//!    ▲         │ no neighbor, bounces             ▲ │flip                │
//!    │         ▼                                  └─┘                    ▼
//!    │    Overscrolling ──Ended──► Settling                         Finishing
//!    │                               │ animation done                    │
//!    └───────────────────────────────┴────────────── animation done ◄────┘
//! ```
//!
//! `Armed`, `Overscrolling`, `Settling` and `Rejected` carry no transition
//! and are reported as [`NavPhase::Idle`].
//!
//! # Invariants
//!
//! 1. A transition is staged only in `Tracking`, `Deciding` and `Finishing`.
//! 2. Every `Stage` action is balanced by exactly one `Unstage` or one
//!    resolved `Release` before the next `Stage`.
//! 3. Input is ignored while `Deciding`, `Finishing` or `Settling`. A
//!    gesture that begins then stays refused until its terminal sample, even
//!    after the machine returns to `Idle`.
//! 4. A release always produces exactly one [`FinishPlan`].
//!
//! # Failure Modes
//!
//! - Non-finite samples are dropped; a non-finite terminal sample ends the
//!   gesture as a cancellation.
//! - A zero or negative container extent rejects the whole gesture.

pub mod decision;

use std::fmt;

use tracing::{debug, trace};

use panelnav_core::{GesturePhase, GestureSample, NavDirection, NavigationConfig};

pub use decision::{FinishPlan, Outcome};

// ---------------------------------------------------------------------------
// Public vocabulary
// ---------------------------------------------------------------------------

/// Phase of the navigation controller as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPhase {
    /// No transition is live.
    #[default]
    Idle,
    /// A drag is driving a staged transition.
    Tracking,
    /// The pointer lifted; the outcome is decided but not yet animating.
    Deciding,
    /// The finishing move (or an imperative transition) is animating.
    Finishing,
}

impl NavPhase {
    /// Label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Tracking => "tracking",
            Self::Deciding => "deciding",
            Self::Finishing => "finishing",
        }
    }
}

impl fmt::Display for NavPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a gesture (or part of one) did not move anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Interactive navigation is switched off.
    Disabled,
    /// The sample's axis is not the navigation axis.
    WrongAxis,
    /// The container has no usable extent.
    NoExtent,
    /// A transition or settle animation is still running.
    Busy,
    /// The pointer lifted before moving the minimum drag distance.
    Tap,
    /// There is no panel to page to in the drag's direction.
    NoNeighbor,
    /// A panel refused interactive navigation in the drag's direction.
    Vetoed,
}

impl IgnoreReason {
    /// Label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::WrongAxis => "wrong_axis",
            Self::NoExtent => "no_extent",
            Self::Busy => "busy",
            Self::Tap => "tap",
            Self::NoNeighbor => "no_neighbor",
            Self::Vetoed => "vetoed",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a drag may page in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// A neighbor exists and navigation is permitted.
    Available,
    /// No neighbor exists.
    #[default]
    Missing,
    /// A neighbor exists but a panel vetoed the navigation.
    Vetoed,
}

/// What the machine needs to know about the world for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureContext {
    /// Container extent along the navigation axis.
    pub extent: f64,
    /// Whether a forward drag can page.
    pub forward: Availability,
    /// Whether a backward drag can page.
    pub backward: Availability,
}

impl GestureContext {
    /// Availability in `direction`.
    #[must_use]
    pub const fn availability(&self, direction: NavDirection) -> Availability {
        match direction {
            NavDirection::Forward => self.forward,
            NavDirection::Backward => self.backward,
        }
    }
}

/// An effect the controller must apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Stage the neighbor in `direction` and start an interactive transition.
    Stage(NavDirection),
    /// Release the staged neighbor; the transition is abandoned.
    Unstage,
    /// Move the staged transition to this progress.
    Progress(f64),
    /// Displace the lone current view by this offset (bounce).
    Overscroll(f64),
    /// Animate the finishing move described by the plan.
    Release(FinishPlan),
    /// Spring the displaced current view back to rest.
    Settle,
    /// Report that input was dropped.
    Ignored(IgnoreReason),
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    /// Pointer down, not yet past the minimum drag distance.
    Armed { reported: bool },
    /// Rubber-banding at a boundary.
    Overscrolling,
    Tracking {
        direction: NavDirection,
        progress: f64,
    },
    Deciding {
        plan: FinishPlan,
    },
    Finishing {
        plan: FinishPlan,
    },
    /// Bounce spring-back animating.
    Settling,
    /// Gesture refused at its start; swallow input until it ends.
    Rejected,
}

// ---------------------------------------------------------------------------
// GestureStateMachine
// ---------------------------------------------------------------------------

/// Drives interactive transitions from drag samples.
pub struct GestureStateMachine {
    config: NavigationConfig,
    state: State,
    gestures: u64,
    /// The pointer interaction under way was refused as busy.
    refused: bool,
}

impl fmt::Debug for GestureStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureStateMachine")
            .field("state", &self.state)
            .field("gestures", &self.gestures)
            .field("refused", &self.refused)
            .finish()
    }
}

impl GestureStateMachine {
    /// Create an idle machine.
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            gestures: 0,
            refused: false,
        }
    }

    /// The tunables in effect.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Replace the tunables. Takes effect from the next gesture.
    pub fn set_config(&mut self, config: NavigationConfig) {
        self.config = config;
    }

    /// Externally visible phase.
    #[must_use]
    pub fn phase(&self) -> NavPhase {
        match self.state {
            State::Tracking { .. } => NavPhase::Tracking,
            State::Deciding { .. } => NavPhase::Deciding,
            State::Finishing { .. } => NavPhase::Finishing,
            State::Idle
            | State::Armed { .. }
            | State::Overscrolling
            | State::Settling
            | State::Rejected => NavPhase::Idle,
        }
    }

    /// Whether a pointer interaction or its settle animation is under way.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Whether a transition is staged.
    #[must_use]
    pub fn has_transition(&self) -> bool {
        !matches!(self.phase(), NavPhase::Idle)
    }

    /// Whether the lone current view is displaced or springing back.
    #[must_use]
    pub fn is_bouncing(&self) -> bool {
        matches!(self.state, State::Overscrolling | State::Settling)
    }

    /// Direction of the tracked transition.
    #[must_use]
    pub fn direction(&self) -> Option<NavDirection> {
        match self.state {
            State::Tracking { direction, .. } => Some(direction),
            _ => None,
        }
    }

    /// Progress of the tracked transition.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        match self.state {
            State::Tracking { progress, .. } => Some(progress),
            State::Deciding { plan } | State::Finishing { plan } => Some(plan.from),
            _ => None,
        }
    }

    /// The recorded finishing plan, once decided.
    #[must_use]
    pub fn plan(&self) -> Option<FinishPlan> {
        match self.state {
            State::Deciding { plan } | State::Finishing { plan } => Some(plan),
            _ => None,
        }
    }

    /// Number of gestures that started tracking.
    #[must_use]
    pub fn gestures(&self) -> u64 {
        self.gestures
    }

    /// Feed one sample.
    pub fn process(&mut self, sample: &GestureSample, ctx: &GestureContext) -> Vec<GestureAction> {
        trace!(
            phase = ?sample.phase,
            translation = sample.translation,
            velocity = sample.velocity,
            state = ?self.state,
            "gesture sample"
        );
        let mut out = Vec::new();
        if self.refused {
            if sample.phase != GesturePhase::Began {
                if sample.phase.is_terminal() {
                    self.pointer_lifted();
                }
                return out;
            }
            // A new pointer interaction supersedes the refused one.
            self.refused = false;
        }
        match self.state {
            State::Idle => self.on_idle(sample, ctx, &mut out),
            State::Armed { reported } => self.on_armed(sample, ctx, reported, &mut out),
            State::Overscrolling => self.on_overscroll(sample, ctx, &mut out),
            State::Tracking {
                direction,
                progress,
            } => self.on_tracking(sample, ctx, direction, progress, &mut out),
            State::Deciding { .. } | State::Finishing { .. } | State::Settling => {
                if sample.phase == GesturePhase::Began {
                    out.push(GestureAction::Ignored(IgnoreReason::Busy));
                    self.refuse_pointer();
                }
            }
            State::Rejected => {
                if sample.phase.is_terminal() {
                    self.transition_to(State::Idle);
                }
            }
        }
        out
    }

    /// Deciding → Finishing, once the finishing animation is running.
    pub fn begin_finishing(&mut self) -> Option<FinishPlan> {
        let State::Deciding { plan } = self.state else {
            return None;
        };
        self.transition_to(State::Finishing { plan });
        Some(plan)
    }

    /// Finishing → Idle when the finishing animation completes.
    pub fn complete(&mut self) -> Option<FinishPlan> {
        let State::Finishing { plan } = self.state else {
            return None;
        };
        self.transition_to(State::Idle);
        Some(plan)
    }

    /// Settling → Idle when the spring-back completes.
    pub fn settled(&mut self) -> bool {
        if self.state != State::Settling {
            return false;
        }
        self.transition_to(State::Idle);
        true
    }

    /// Stop listening to the pointer until the current gesture ends.
    ///
    /// Used when an imperative call interrupts a drag that had not staged
    /// anything yet.
    pub fn interrupt(&mut self) {
        if matches!(self.state, State::Armed { .. } | State::Overscrolling) {
            self.transition_to(State::Rejected);
        }
    }

    /// Ignore the rest of the current pointer interaction, up to and
    /// including its terminal sample.
    pub fn refuse_pointer(&mut self) {
        self.refused = true;
    }

    /// Whether the current pointer interaction was refused as busy.
    #[must_use]
    pub fn is_refused(&self) -> bool {
        self.refused
    }

    /// The pointer lifted without reaching [`process`](Self::process).
    pub fn pointer_lifted(&mut self) {
        self.refused = false;
        if self.state == State::Rejected {
            self.transition_to(State::Idle);
        }
    }

    /// Return to `Idle` unconditionally.
    pub fn reset(&mut self) {
        self.refused = false;
        self.transition_to(State::Idle);
    }

    // -----------------------------------------------------------------------
    // Per-state handlers
    // -----------------------------------------------------------------------

    fn on_idle(&mut self, sample: &GestureSample, ctx: &GestureContext, out: &mut Vec<GestureAction>) {
        if sample.phase.is_terminal() {
            return;
        }
        let refusal = if !self.config.gestures_enabled {
            Some(IgnoreReason::Disabled)
        } else if sample.axis != self.config.axis {
            Some(IgnoreReason::WrongAxis)
        } else if !(ctx.extent > 0.0) {
            Some(IgnoreReason::NoExtent)
        } else {
            None
        };
        if let Some(reason) = refusal {
            debug!(%reason, "gesture rejected");
            out.push(GestureAction::Ignored(reason));
            self.transition_to(State::Rejected);
            return;
        }
        self.transition_to(State::Armed { reported: false });
        if sample.phase == GesturePhase::Changed {
            self.on_armed(sample, ctx, false, out);
        }
    }

    fn on_armed(
        &mut self,
        sample: &GestureSample,
        ctx: &GestureContext,
        reported: bool,
        out: &mut Vec<GestureAction>,
    ) {
        if sample.phase.is_terminal() {
            if !reported {
                out.push(GestureAction::Ignored(IgnoreReason::Tap));
            }
            self.transition_to(State::Idle);
            return;
        }
        if !self.accepts(sample) {
            return;
        }
        let t = sample.translation;
        if t.abs() < self.config.minimum_drag_distance {
            return;
        }
        let Some(direction) = NavDirection::from_translation(t) else {
            return;
        };
        match ctx.availability(direction) {
            Availability::Available => self.start_tracking(direction, t, ctx, out),
            Availability::Missing if self.config.bounces => {
                self.transition_to(State::Overscrolling);
                out.push(GestureAction::Overscroll(self.rubber_band(t)));
            }
            Availability::Missing | Availability::Vetoed => {
                if !reported {
                    let reason = if ctx.availability(direction) == Availability::Vetoed {
                        IgnoreReason::Vetoed
                    } else {
                        IgnoreReason::NoNeighbor
                    };
                    debug!(%direction, %reason, "drag cannot page");
                    out.push(GestureAction::Ignored(reason));
                }
                self.state = State::Armed { reported: true };
            }
        }
    }

    fn on_overscroll(
        &mut self,
        sample: &GestureSample,
        ctx: &GestureContext,
        out: &mut Vec<GestureAction>,
    ) {
        if sample.phase.is_terminal() {
            self.transition_to(State::Settling);
            out.push(GestureAction::Settle);
            return;
        }
        if !self.accepts(sample) {
            return;
        }
        let t = sample.translation;
        if let Some(direction) = NavDirection::from_translation(t)
            && t.abs() >= self.config.minimum_drag_distance
            && ctx.availability(direction) == Availability::Available
        {
            out.push(GestureAction::Overscroll(0.0));
            self.start_tracking(direction, t, ctx, out);
            return;
        }
        out.push(GestureAction::Overscroll(self.rubber_band(t)));
    }

    fn on_tracking(
        &mut self,
        sample: &GestureSample,
        ctx: &GestureContext,
        direction: NavDirection,
        progress: f64,
        out: &mut Vec<GestureAction>,
    ) {
        if sample.phase.is_terminal() {
            let usable = self.accepts(sample);
            let progress = if usable {
                progress_in(direction, sample.translation, ctx.extent)
            } else {
                progress
            };
            let cancelled = sample.phase == GesturePhase::Cancelled || !usable;
            let velocity = if usable { sample.velocity } else { 0.0 };
            if usable {
                out.push(GestureAction::Progress(progress));
            }
            let plan = decision::plan(
                progress,
                velocity,
                direction,
                ctx.extent,
                &self.config,
                cancelled,
            );
            debug!(
                %direction,
                progress,
                velocity,
                outcome = plan.outcome.as_str(),
                duration_ms = plan.duration.as_millis() as u64,
                cancelled,
                "gesture released"
            );
            self.transition_to(State::Deciding { plan });
            out.push(GestureAction::Release(plan));
            return;
        }
        if !self.accepts(sample) {
            return;
        }

        let t = sample.translation;
        if let Some(flipped) = NavDirection::from_translation(t)
            && flipped != direction
            && ctx.availability(flipped) == Availability::Available
        {
            debug!(from = %direction, to = %flipped, "gesture direction flip");
            out.push(GestureAction::Unstage);
            out.push(GestureAction::Stage(flipped));
            let progress = progress_in(flipped, t, ctx.extent);
            out.push(GestureAction::Progress(progress));
            self.state = State::Tracking {
                direction: flipped,
                progress,
            };
            return;
        }

        let next = progress_in(direction, t, ctx.extent);
        if next != progress {
            out.push(GestureAction::Progress(next));
        }
        self.state = State::Tracking {
            direction,
            progress: next,
        };
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn start_tracking(
        &mut self,
        direction: NavDirection,
        translation: f64,
        ctx: &GestureContext,
        out: &mut Vec<GestureAction>,
    ) {
        self.gestures += 1;
        let progress = progress_in(direction, translation, ctx.extent);
        self.transition_to(State::Tracking {
            direction,
            progress,
        });
        out.push(GestureAction::Stage(direction));
        out.push(GestureAction::Progress(progress));
    }

    /// Whether a mid-gesture sample can move anything.
    fn accepts(&self, sample: &GestureSample) -> bool {
        sample.is_finite() && sample.axis == self.config.axis
    }

    fn rubber_band(&self, translation: f64) -> f64 {
        translation * self.config.bounce_resistance.clamp(0.0, 1.0)
    }

    fn transition_to(&mut self, next: State) {
        let from = self.phase();
        self.state = next;
        let to = self.phase();
        if from != to {
            debug!(%from, %to, "gesture phase");
        }
    }
}

/// Progress for `translation` in `direction`'s frame.
fn progress_in(direction: NavDirection, translation: f64, extent: f64) -> f64 {
    if !(extent > 0.0) {
        return 0.0;
    }
    (translation * direction.sign() / extent).clamp(0.0, 1.0)
}
