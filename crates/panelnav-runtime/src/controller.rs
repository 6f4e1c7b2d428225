#![forbid(unsafe_code)]

//! Navigation controller: the single owner of navigation state.
//!
//! [`NavigationController`] composes the panel stack, the tiling window, the
//! gesture state machine, the imperative driver and the lifecycle cleaner
//! with the host's [`ViewHost`] and [`Animator`]. Every public operation
//! runs to completion on the calling thread; animations report back later
//! through [`NavigationController::animation_finished`].
//!
//! # Invariants
//!
//! 1. At most one transition is live: interactive or imperative, never both.
//! 2. The stack is only edited when a transition resolves (or synchronously,
//!    for non-animated calls), never while one is live.
//! 3. The tiling window holds one view when idle and two while a transition
//!    is live.
//! 4. The lifecycle cleaner runs after every committed edit and never while
//!    a transition is live.
//!
//! # Failure Modes
//!
//! - Imperative calls during a live transition fail with [`NavError::Busy`]
//!   and change nothing. A push while a decided transition is finishing
//!   fails with [`NavError::InvalidOperation`] instead.
//! - Stale or unknown animation ids are logged and ignored.

use std::fmt;

use tracing::{debug, debug_span, info, warn};

use panelnav_core::{
    Easing, GesturePhase, GestureSample, NavDirection, NavError, NavResult, NavigationConfig,
    PanelId, PanelRef, PanelStack, Transition, TransitionOrigin,
};

use crate::backend::{AnimationId, AnimationRequest, Animator, ViewHost};
use crate::cleaner::LifecycleCleaner;
use crate::driver::{self, DrivePlan, ImperativeDriver, Pending, Resolution, StackEdit};
use crate::event::NavigationEvent;
use crate::gesture::{
    Availability, FinishPlan, GestureAction, GestureContext, GestureStateMachine, IgnoreReason,
    NavPhase, Outcome,
};
use crate::tiling::TilingManager;

/// Curve for finishing moves and bounce spring-back.
const FINISH_EASING: Easing = Easing::EaseOut;

/// Successful result of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The stack edit was applied synchronously.
    Committed,
    /// A transition is animating; the edit applies when it finishes.
    Animating(AnimationId),
    /// Nothing to do (e.g. popping the root).
    NoOp,
}

/// The live interactive transition.
struct Interactive {
    transition: Transition,
    neighbor: PanelRef,
    animation: Option<AnimationId>,
}

/// Interactive navigation controller over a host view container.
pub struct NavigationController<H: ViewHost, A: Animator> {
    config: NavigationConfig,
    stack: PanelStack,
    tiling: TilingManager,
    gesture: GestureStateMachine,
    driver: ImperativeDriver,
    cleaner: LifecycleCleaner,
    interactive: Option<Interactive>,
    settle: Option<AnimationId>,
    extent: f64,
    events: Vec<NavigationEvent>,
    host: H,
    animator: A,
}

impl<H: ViewHost, A: Animator> fmt::Debug for NavigationController<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("stack", &self.stack)
            .field("phase", &self.phase())
            .field("transition", &self.transition())
            .field("views", &self.tiling.materialized_count())
            .field("extent", &self.extent)
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl<H: ViewHost, A: Animator> NavigationController<H, A> {
    /// Create a controller showing `root`.
    ///
    /// The container extent starts at zero; call
    /// [`set_container_extent`](Self::set_container_extent) once layout is
    /// known.
    pub fn new(config: NavigationConfig, root: PanelRef, mut host: H, animator: A) -> Self {
        for problem in config.validate() {
            warn!(%problem, "navigation config");
        }
        let tiling = TilingManager::install(config.axis, root.clone(), &mut host);
        debug!(root = %root.id(), axis = ?config.axis, "navigation controller created");
        Self {
            gesture: GestureStateMachine::new(config.clone()),
            config,
            stack: PanelStack::new(root),
            tiling,
            driver: ImperativeDriver::new(),
            cleaner: LifecycleCleaner::new(),
            interactive: None,
            settle: None,
            extent: 0.0,
            events: Vec::new(),
            host,
            animator,
        }
    }

    /// Create a controller over an initial stack, showing its last panel.
    pub fn with_stack(
        config: NavigationConfig,
        panels: Vec<PanelRef>,
        host: H,
        animator: A,
    ) -> NavResult<Self> {
        let stack = PanelStack::from_panels(panels)?;
        let mut controller = Self::new(config, stack.current().clone(), host, animator);
        controller.stack = stack;
        Ok(controller)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The current panel.
    #[must_use]
    pub fn current_panel(&self) -> &PanelRef {
        self.stack.current()
    }

    /// The stack, root first.
    #[must_use]
    pub fn panels(&self) -> &[PanelRef] {
        self.stack.panels()
    }

    /// The underlying panel stack.
    #[must_use]
    pub fn stack(&self) -> &PanelStack {
        &self.stack
    }

    /// Externally visible phase.
    #[must_use]
    pub fn phase(&self) -> NavPhase {
        if self.driver.is_pending() {
            NavPhase::Finishing
        } else {
            self.gesture.phase()
        }
    }

    /// The live transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.interactive
            .as_ref()
            .map(|i| i.transition)
            .or_else(|| self.driver.transition().copied())
    }

    /// Whether imperative calls would be rejected with [`NavError::Busy`].
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.interactive.is_some() || self.driver.is_pending() || self.settle.is_some()
    }

    /// Number of materialized views.
    #[must_use]
    pub fn materialized_views(&self) -> usize {
        self.tiling.materialized_count()
    }

    /// The tiling window.
    #[must_use]
    pub fn tiling(&self) -> &TilingManager {
        &self.tiling
    }

    /// The finishing plan recorded at the last release, while it animates.
    #[must_use]
    pub fn finish_plan(&self) -> Option<FinishPlan> {
        self.gesture.plan()
    }

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.events)
    }

    /// The tunables in effect.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Container extent along the navigation axis.
    #[must_use]
    pub fn container_extent(&self) -> f64 {
        self.extent
    }

    /// The view host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The view host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The animator, mutably.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Update the container extent and re-position live views.
    ///
    /// Non-finite or negative extents are treated as zero, which makes
    /// gestures no-ops.
    pub fn set_container_extent(&mut self, extent: f64) {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        if extent == self.extent {
            return;
        }
        debug!(from = self.extent, to = extent, "container extent");
        self.extent = extent;
        self.tiling.relayout(extent, &mut self.host);
    }

    /// Switch interactive navigation on or off. Takes effect from the next
    /// gesture.
    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        self.config.gestures_enabled = enabled;
        self.gesture.set_config(self.config.clone());
    }

    // -----------------------------------------------------------------------
    // Imperative API
    // -----------------------------------------------------------------------

    /// Push `panel`. Unfocused pushes retain it as the forward neighbor.
    pub fn push(&mut self, panel: PanelRef, animated: bool, focused: bool) -> NavResult<NavOutcome> {
        let edit = if focused {
            StackEdit::Push(panel)
        } else {
            StackEdit::PushUnfocused(panel)
        };
        self.run(edit, animated)
    }

    /// Pop the current panel. Unfocused pops drop the forward neighbor.
    pub fn pop(&mut self, animated: bool, focused: bool) -> NavResult<NavOutcome> {
        let edit = if focused {
            StackEdit::Pop
        } else {
            StackEdit::DiscardForward
        };
        self.run(edit, animated)
    }

    /// Pop every panel above `id`.
    pub fn pop_to(&mut self, id: PanelId, animated: bool) -> NavResult<NavOutcome> {
        self.run(StackEdit::PopTo(id), animated)
    }

    /// Pop every panel above the root.
    pub fn pop_to_root(&mut self, animated: bool) -> NavResult<NavOutcome> {
        self.run(StackEdit::PopToRoot, animated)
    }

    /// Replace the whole stack.
    ///
    /// Unfocused replacements keep the last panel as the forward neighbor
    /// and show the one before it.
    pub fn set_stack(
        &mut self,
        panels: Vec<PanelRef>,
        animated: bool,
        focused: bool,
    ) -> NavResult<NavOutcome> {
        self.run(StackEdit::Replace { panels, focused }, animated)
    }

    fn run(&mut self, edit: StackEdit, animated: bool) -> NavResult<NavOutcome> {
        let command = edit.kind();
        let _span = debug_span!("navigation.command", command, animated).entered();
        if self.is_busy() {
            let phase = self.phase();
            warn!(command, %phase, "navigation rejected: transition in progress");
            // A push cannot stack onto a decided transition whose commit is pending.
            if edit.is_push() && phase == NavPhase::Finishing {
                return Err(NavError::InvalidOperation(
                    "transition decided but not yet committed",
                ));
            }
            return Err(NavError::Busy);
        }
        let resolution = match driver::resolve(edit, &self.stack) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(command, kind = err.kind(), error = %err, "navigation rejected");
                return Err(err);
            }
        };
        match resolution {
            Resolution::NoOp => {
                debug!(command, "navigation no-op");
                Ok(NavOutcome::NoOp)
            }
            Resolution::Immediate(edit) => {
                self.interrupt_pointer();
                edit.apply(&mut self.stack)?;
                self.sweep();
                Ok(NavOutcome::Committed)
            }
            Resolution::Transition(plan) => {
                self.interrupt_pointer();
                if animated {
                    self.begin_imperative(plan)
                } else {
                    self.commit_synchronously(plan)
                }
            }
        }
    }

    fn begin_imperative(&mut self, plan: DrivePlan) -> NavResult<NavOutcome> {
        let id = self.driver.begin(
            plan,
            &self.stack,
            &mut self.tiling,
            &mut self.host,
            &mut self.animator,
            &self.config,
            self.extent,
        );
        match (id, self.driver.transition()) {
            (Some(id), Some(transition)) => {
                self.events.push(NavigationEvent::TransitionBegan(*transition));
                Ok(NavOutcome::Animating(id))
            }
            _ => Err(NavError::Busy),
        }
    }

    fn commit_synchronously(&mut self, plan: DrivePlan) -> NavResult<NavOutcome> {
        let current = self.stack.current().clone();
        if self.config.should_reset_scroll_views {
            driver::reset_scroll_views(current.as_ref(), plan.destination.as_ref());
        }
        let mut transition = Transition::new(
            current.id(),
            plan.destination.id(),
            self.tiling.axis(),
            plan.direction,
            TransitionOrigin::Imperative,
        );
        plan.edit.apply(&mut self.stack)?;
        if let Some(retired) = self.tiling.replace_current(plan.destination, &mut self.host) {
            self.cleaner.retire(retired);
        }
        transition.set_progress(1.0);
        self.committed(transition);
        Ok(NavOutcome::Committed)
    }

    /// Abandon a drag that has not staged anything yet.
    fn interrupt_pointer(&mut self) {
        if self.gesture.is_engaged() && !self.gesture.has_transition() {
            self.tiling.offset_current(0.0, &mut self.host);
            self.gesture.interrupt();
        }
    }

    // -----------------------------------------------------------------------
    // Gesture input
    // -----------------------------------------------------------------------

    /// Feed one drag sample.
    pub fn handle_gesture(&mut self, sample: GestureSample) {
        if self.driver.is_pending() {
            if sample.phase == GesturePhase::Began {
                debug!("gesture ignored: transition in progress");
                self.gesture.refuse_pointer();
                self.events.push(NavigationEvent::GestureIgnored {
                    reason: IgnoreReason::Busy,
                });
            } else if sample.phase.is_terminal() {
                self.gesture.pointer_lifted();
            }
            return;
        }
        let ctx = GestureContext {
            extent: self.extent,
            forward: self.availability(NavDirection::Forward),
            backward: self.availability(NavDirection::Backward),
        };
        for action in self.gesture.process(&sample, &ctx) {
            self.apply(action);
        }
    }

    fn availability(&self, direction: NavDirection) -> Availability {
        let Some(neighbor) = self.stack.neighbor(direction) else {
            return Availability::Missing;
        };
        let gate = match direction {
            NavDirection::Forward => self.stack.current(),
            NavDirection::Backward => neighbor,
        };
        if gate.allows_interactive_navigation(direction) {
            Availability::Available
        } else {
            Availability::Vetoed
        }
    }

    fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::Stage(direction) => self.stage(direction),
            GestureAction::Unstage => {
                self.tiling.cancel_staging(&mut self.host);
                if let Some(interactive) = self.interactive.take() {
                    self.events
                        .push(NavigationEvent::TransitionCancelled(interactive.transition));
                }
            }
            GestureAction::Progress(progress) => {
                self.tiling.set_progress(progress, self.extent, &mut self.host);
                if let Some(interactive) = self.interactive.as_mut() {
                    interactive.transition.set_progress(progress);
                }
            }
            GestureAction::Overscroll(offset) => {
                self.tiling.offset_current(offset, &mut self.host);
            }
            GestureAction::Release(plan) => self.release(plan),
            GestureAction::Settle => {
                let request = AnimationRequest {
                    duration: self.config.finish_transition_duration_minimum,
                    easing: FINISH_EASING,
                    from: 0.0,
                    to: 0.0,
                    axis: self.tiling.axis(),
                    tracks: self.tiling.tracks(0.0, self.extent),
                };
                let id = self.animator.animate(request);
                debug!(animation = ?id, offset = self.tiling.current_offset(), "bounce settle");
                self.settle = Some(id);
            }
            GestureAction::Ignored(reason) => {
                debug!(%reason, "gesture ignored");
                self.events.push(NavigationEvent::GestureIgnored { reason });
            }
        }
    }

    fn stage(&mut self, direction: NavDirection) {
        let Some(neighbor) = self.stack.neighbor(direction).cloned() else {
            debug_assert!(false, "staging without a neighbor");
            return;
        };
        if !self
            .tiling
            .begin_staging(neighbor.clone(), direction, self.extent, &mut self.host)
        {
            return;
        }
        let transition = Transition::new(
            self.stack.current_id(),
            neighbor.id(),
            self.tiling.axis(),
            direction,
            TransitionOrigin::Interactive,
        );
        debug!(from = %transition.from, to = %transition.to, %direction, "interactive transition began");
        self.events.push(NavigationEvent::TransitionBegan(transition));
        self.interactive = Some(Interactive {
            transition,
            neighbor,
            animation: None,
        });
    }

    fn release(&mut self, plan: FinishPlan) {
        let request = AnimationRequest {
            duration: plan.duration,
            easing: FINISH_EASING,
            from: plan.from,
            to: plan.target,
            axis: self.tiling.axis(),
            tracks: self.tiling.tracks(plan.target, self.extent),
        };
        let id = self.animator.animate(request);
        self.gesture.begin_finishing();
        if let Some(interactive) = self.interactive.as_mut() {
            interactive.animation = Some(id);
        }
        debug!(
            animation = ?id,
            outcome = plan.outcome.as_str(),
            duration_ms = plan.duration.as_millis() as u64,
            "finishing move started"
        );
    }

    // -----------------------------------------------------------------------
    // Animation completion
    // -----------------------------------------------------------------------

    /// Report that an animation finished.
    ///
    /// Returns `false` (and changes nothing) for unknown or stale ids.
    pub fn animation_finished(&mut self, id: AnimationId) -> bool {
        if self.interactive.as_ref().and_then(|i| i.animation) == Some(id) {
            self.finish_interactive();
            return true;
        }
        if self.settle == Some(id) {
            self.settle = None;
            self.tiling.offset_current(0.0, &mut self.host);
            self.gesture.settled();
            debug!(animation = ?id, "bounce settled");
            return true;
        }
        if let Some(pending) = self.driver.finish(id) {
            self.commit_imperative(pending);
            return true;
        }
        warn!(animation = ?id, "ignoring unknown or stale animation");
        false
    }

    fn finish_interactive(&mut self) {
        let Some(interactive) = self.interactive.take() else {
            return;
        };
        let Some(plan) = self.gesture.complete() else {
            debug_assert!(false, "finishing animation without a plan");
            return;
        };
        let mut transition = interactive.transition;
        let _span = debug_span!(
            "navigation.transition",
            from = %transition.from,
            to = %transition.to,
            direction = %transition.direction,
            origin = "interactive",
            outcome = plan.outcome.as_str(),
        )
        .entered();
        match plan.outcome {
            Outcome::Complete => {
                if let Some(retired) = self.tiling.commit_staging(&mut self.host) {
                    self.cleaner.retire(retired);
                }
                match transition.direction {
                    NavDirection::Forward => {
                        if let Err(err) = self.stack.push(interactive.neighbor) {
                            warn!(error = %err, "stack push after interactive commit");
                        }
                    }
                    NavDirection::Backward => {
                        self.stack.pop();
                    }
                }
                transition.set_progress(1.0);
                self.committed(transition);
            }
            Outcome::Revert => {
                self.tiling.cancel_staging(&mut self.host);
                transition.set_progress(0.0);
                debug!("interactive transition reverted");
                self.events
                    .push(NavigationEvent::TransitionCancelled(transition));
            }
        }
    }

    fn commit_imperative(&mut self, pending: Pending) {
        let Pending {
            mut transition,
            plan,
            ..
        } = pending;
        let _span = debug_span!(
            "navigation.transition",
            from = %transition.from,
            to = %transition.to,
            direction = %transition.direction,
            origin = "imperative",
            edit = plan.edit.kind(),
        )
        .entered();
        if let Some(retired) = self.tiling.commit_staging(&mut self.host) {
            self.cleaner.retire(retired);
        }
        if let Err(err) = plan.edit.apply(&mut self.stack) {
            warn!(error = %err, "stack edit after imperative transition");
        }
        transition.set_progress(1.0);
        self.committed(transition);
    }

    fn committed(&mut self, transition: Transition) {
        info!(
            target: "panelnav.nav",
            from = %transition.from,
            to = %transition.to,
            direction = %transition.direction,
            origin = ?transition.origin,
            depth = self.stack.depth(),
            "transition committed"
        );
        self.events.push(NavigationEvent::TransitionCommitted(transition));
        self.sweep();
    }

    fn sweep(&mut self) {
        let report = self.cleaner.sweep(&mut self.stack, &mut self.host);
        self.events.extend(
            report
                .discarded_panels
                .into_iter()
                .map(NavigationEvent::PanelDiscarded),
        );
    }

    // -----------------------------------------------------------------------
    // Teardown
    // -----------------------------------------------------------------------

    /// Resolve everything in flight at once.
    ///
    /// Interactive transitions revert, imperative ones complete, bounce
    /// displacement snaps back. Running animations are cancelled.
    pub fn teardown(&mut self) {
        let _span = debug_span!("navigation.teardown", phase = %self.phase()).entered();
        if let Some(interactive) = self.interactive.take() {
            if let Some(id) = interactive.animation {
                self.animator.cancel(id);
            }
            self.tiling.cancel_staging(&mut self.host);
            let mut transition = interactive.transition;
            transition.set_progress(0.0);
            self.events
                .push(NavigationEvent::TransitionCancelled(transition));
        }
        if let Some(id) = self.settle.take() {
            self.animator.cancel(id);
        }
        if !self.tiling.is_staging() && self.tiling.current_offset() != 0.0 {
            self.tiling.offset_current(0.0, &mut self.host);
        }
        self.gesture.reset();
        if let Some(pending) = self.driver.take() {
            self.animator.cancel(pending.animation);
            self.commit_imperative(pending);
        }
        debug!(current = %self.stack.current_id(), depth = self.stack.depth(), "teardown complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ViewHandle;
    use panelnav_core::{Axis, Panel};
    use std::rc::Rc;

    struct P(u64);

    impl Panel for P {
        fn id(&self) -> PanelId {
            PanelId(self.0)
        }
    }

    fn panel(id: u64) -> PanelRef {
        Rc::new(P(id))
    }

    #[derive(Default)]
    struct Host {
        next: u64,
        live: Vec<ViewHandle>,
    }

    impl ViewHost for Host {
        fn materialize_view(&mut self, _panel: &dyn Panel) -> ViewHandle {
            self.next += 1;
            self.live.push(ViewHandle(self.next));
            ViewHandle(self.next)
        }

        fn release_view(&mut self, view: ViewHandle) {
            self.live.retain(|v| *v != view);
        }

        fn position_view(&mut self, _view: ViewHandle, _axis: Axis, _offset: f64) {}
    }

    #[derive(Default)]
    struct Anim {
        next: u64,
        requests: Vec<AnimationRequest>,
        cancelled: Vec<AnimationId>,
    }

    impl Animator for Anim {
        fn animate(&mut self, request: AnimationRequest) -> AnimationId {
            self.next += 1;
            self.requests.push(request);
            AnimationId(self.next)
        }

        fn cancel(&mut self, id: AnimationId) {
            self.cancelled.push(id);
        }
    }

    fn controller() -> NavigationController<Host, Anim> {
        let mut c = NavigationController::new(
            NavigationConfig::default(),
            panel(1),
            Host::default(),
            Anim::default(),
        );
        c.set_container_extent(400.0);
        c
    }

    fn ids(c: &NavigationController<Host, Anim>) -> Vec<PanelId> {
        c.stack().ids()
    }

    #[test]
    fn animated_push_commits_on_completion() {
        let mut c = controller();
        let NavOutcome::Animating(id) = c.push(panel(2), true, true).unwrap() else {
            panic!("expected animation");
        };
        assert_eq!(ids(&c), vec![PanelId(1)]);
        assert_eq!(c.phase(), NavPhase::Finishing);
        assert_eq!(c.materialized_views(), 2);
        assert!(c.animation_finished(id));
        assert_eq!(ids(&c), vec![PanelId(1), PanelId(2)]);
        assert_eq!(c.materialized_views(), 1);
        assert_eq!(c.host().live.len(), 1);
        let request = &c.animator().requests[0];
        assert_eq!(request.duration, c.config().base_navigation_duration);
        assert_eq!(request.easing, Easing::EaseInOut);
    }

    #[test]
    fn push_while_busy_is_rejected() {
        let mut c = controller();
        c.push(panel(2), true, true).unwrap();
        assert!(matches!(
            c.push(panel(3), true, true),
            Err(NavError::InvalidOperation(_))
        ));
        assert_eq!(c.pop(false, true), Err(NavError::Busy));
    }

    #[test]
    fn pop_at_root_is_noop() {
        let mut c = controller();
        assert_eq!(c.pop(true, true), Ok(NavOutcome::NoOp));
        assert!(c.drain_events().is_empty());
    }

    #[test]
    fn non_animated_push_commits_at_once() {
        let mut c = controller();
        assert_eq!(c.push(panel(2), false, true), Ok(NavOutcome::Committed));
        assert_eq!(c.current_panel().id(), PanelId(2));
        assert_eq!(c.host().live.len(), 1);
        assert!(c.animator().requests.is_empty());
    }

    #[test]
    fn drag_forward_past_half_completes() {
        let mut c = controller();
        c.push(panel(2), false, true).unwrap();
        c.pop(false, true).unwrap();
        c.drain_events();

        c.handle_gesture(GestureSample::began(Axis::Horizontal));
        c.handle_gesture(GestureSample::changed(-240.0, -100.0, Axis::Horizontal));
        assert_eq!(c.phase(), NavPhase::Tracking);
        assert_eq!(c.materialized_views(), 2);
        c.handle_gesture(GestureSample::ended(-240.0, -100.0, Axis::Horizontal));
        assert_eq!(c.phase(), NavPhase::Finishing);
        let id = AnimationId(c.animator().next);
        assert!(c.animation_finished(id));
        assert_eq!(ids(&c), vec![PanelId(1), PanelId(2)]);
        assert_eq!(c.phase(), NavPhase::Idle);
        assert_eq!(c.materialized_views(), 1);
    }

    #[test]
    fn stale_animation_id_is_ignored() {
        let mut c = controller();
        assert!(!c.animation_finished(AnimationId(42)));
    }

    #[test]
    fn teardown_completes_imperative_transition() {
        let mut c = controller();
        let NavOutcome::Animating(id) = c.push(panel(2), true, true).unwrap() else {
            panic!("expected animation");
        };
        c.teardown();
        assert_eq!(c.current_panel().id(), PanelId(2));
        assert_eq!(c.animator().cancelled, vec![id]);
        assert!(!c.is_busy());
        assert!(!c.animation_finished(id));
    }
}
