#![forbid(unsafe_code)]

//! Manual animator: animations finish only when the test says so.

use std::collections::VecDeque;

use panelnav_runtime::{AnimationId, AnimationRequest, Animator};

/// An [`Animator`] that queues requests until a test completes them.
#[derive(Debug, Default)]
pub struct ManualAnimator {
    next: u64,
    running: VecDeque<(AnimationId, AnimationRequest)>,
    history: Vec<(AnimationId, AnimationRequest)>,
    cancelled: Vec<AnimationId>,
}

impl ManualAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Animations started and not yet finished or cancelled, oldest first.
    #[must_use]
    pub fn running(&self) -> Vec<AnimationId> {
        self.running.iter().map(|(id, _)| *id).collect()
    }

    /// Whether anything is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<&AnimationRequest> {
        self.history.last().map(|(_, r)| r)
    }

    /// Every request ever made.
    #[must_use]
    pub fn history(&self) -> &[(AnimationId, AnimationRequest)] {
        &self.history
    }

    /// Animations the controller cancelled.
    #[must_use]
    pub fn cancelled(&self) -> &[AnimationId] {
        &self.cancelled
    }

    /// Remove the oldest running animation, to be reported finished.
    pub fn pop_running(&mut self) -> Option<AnimationId> {
        self.running.pop_front().map(|(id, _)| id)
    }
}

impl Animator for ManualAnimator {
    fn animate(&mut self, request: AnimationRequest) -> AnimationId {
        self.next += 1;
        let id = AnimationId(self.next);
        self.running.push_back((id, request.clone()));
        self.history.push((id, request));
        id
    }

    fn cancel(&mut self, id: AnimationId) {
        self.running.retain(|(running, _)| *running != id);
        self.cancelled.push(id);
    }
}
