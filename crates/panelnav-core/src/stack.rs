#![forbid(unsafe_code)]

//! The panel stack: ordered navigation history.
//!
//! Panels are kept back to front; the last entry is the current panel.
//! Panels popped off the top are not forgotten right away: they move onto a
//! forward trail (nearest first) so a forward drag can page back to them.
//! Panels that leave both the stack and the trail are parked in a release
//! queue until the lifecycle cleaner drains it.
//!
//! # Invariants
//!
//! 1. The stack is never empty.
//! 2. No entry has the same identity as the entry directly below it.
//! 3. Mutation only happens at the top: push appends, pop removes the top,
//!    pop-to removes a contiguous suffix, set-stack replaces wholesale.
//! 4. The trail head is never the current panel.
//!
//! # Failure Modes
//!
//! - Every rejected call leaves entries, trail and release queue untouched.

use std::fmt;

use tracing::debug;

use crate::error::{NavError, NavResult};
use crate::geometry::NavDirection;
use crate::panel::{Panel, PanelId, PanelLabel, PanelRef};

/// Ordered navigation history with a forward trail.
pub struct PanelStack {
    entries: Vec<PanelRef>,
    trail: Vec<PanelRef>,
    released: Vec<PanelRef>,
}

impl fmt::Debug for PanelStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<_> = self.entries.iter().map(|p| PanelLabel(p.as_ref())).collect();
        let trail: Vec<_> = self.trail.iter().map(|p| PanelLabel(p.as_ref())).collect();
        f.debug_struct("PanelStack")
            .field("entries", &entries)
            .field("trail", &trail)
            .field("pending_release", &self.released.len())
            .finish()
    }
}

impl PanelStack {
    /// Create a stack holding only `root`.
    #[must_use]
    pub fn new(root: PanelRef) -> Self {
        Self {
            entries: vec![root],
            trail: Vec::new(),
            released: Vec::new(),
        }
    }

    /// Create a stack from a back-to-front list.
    pub fn from_panels(panels: Vec<PanelRef>) -> NavResult<Self> {
        Self::validate_replacement(&panels)?;
        Ok(Self {
            entries: panels,
            trail: Vec::new(),
            released: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The current (top) panel.
    #[must_use]
    pub fn current(&self) -> &PanelRef {
        // Invariant 1: entries is never empty.
        &self.entries[self.entries.len() - 1]
    }

    /// Identity of the current panel.
    #[must_use]
    pub fn current_id(&self) -> PanelId {
        self.current().id()
    }

    /// The panel directly below the current one.
    #[must_use]
    pub fn previous(&self) -> Option<&PanelRef> {
        let len = self.entries.len();
        if len > 1 {
            Some(&self.entries[len - 2])
        } else {
            None
        }
    }

    /// The bottom panel.
    #[must_use]
    pub fn root(&self) -> &PanelRef {
        &self.entries[0]
    }

    /// The forward trail head: the panel a forward drag would reveal.
    #[must_use]
    pub fn forward(&self) -> Option<&PanelRef> {
        self.trail.first()
    }

    /// The neighbor of the current panel in `direction`.
    #[must_use]
    pub fn neighbor(&self, direction: NavDirection) -> Option<&PanelRef> {
        match direction {
            NavDirection::Forward => self.forward(),
            NavDirection::Backward => self.previous(),
        }
    }

    /// Number of panels in the stack (the trail is not counted).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Back-to-front panels.
    #[must_use]
    pub fn panels(&self) -> &[PanelRef] {
        &self.entries
    }

    /// Retained forward panels, nearest first.
    #[must_use]
    pub fn trail(&self) -> &[PanelRef] {
        &self.trail
    }

    /// Back-to-front identities.
    #[must_use]
    pub fn ids(&self) -> Vec<PanelId> {
        self.entries.iter().map(|p| p.id()).collect()
    }

    /// Whether a panel with `id` is in the stack.
    #[must_use]
    pub fn contains(&self, id: PanelId) -> bool {
        self.index_of(id).is_some()
    }

    /// Topmost index of the panel with `id`.
    #[must_use]
    pub fn index_of(&self, id: PanelId) -> Option<usize> {
        self.entries.iter().rposition(|p| p.id() == id)
    }

    /// Number of panels waiting for the lifecycle cleaner.
    #[must_use]
    pub fn pending_release(&self) -> usize {
        self.released.len()
    }

    // ------------------------------------------------------------------
    // Validation (no mutation)
    // ------------------------------------------------------------------

    /// Check that `panel` may become the new top.
    pub fn check_push(&self, panel: &dyn Panel) -> NavResult<()> {
        if panel.id() == self.current_id() {
            return Err(NavError::InvalidArgument("panel is already the current panel"));
        }
        Ok(())
    }

    /// Resolve the index a pop-to would stop at.
    ///
    /// Returns `Ok(None)` when `id` is already the top.
    pub fn check_pop_to(&self, id: PanelId) -> NavResult<Option<usize>> {
        let index = self.index_of(id).ok_or(NavError::NotFound(id))?;
        if index + 1 == self.entries.len() {
            Ok(None)
        } else {
            Ok(Some(index))
        }
    }

    /// Check that `panels` is a valid replacement stack.
    pub fn validate_replacement(panels: &[PanelRef]) -> NavResult<()> {
        if panels.is_empty() {
            return Err(NavError::InvalidArgument("panel stack cannot be empty"));
        }
        if panels.windows(2).any(|w| w[0].id() == w[1].id()) {
            return Err(NavError::InvalidArgument(
                "adjacent panels cannot share an identity",
            ));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append `panel` as the new top.
    ///
    /// Pushing the trail head consumes it; pushing anything else abandons
    /// the trail, except that the pushed panel itself is never released.
    pub fn push(&mut self, panel: PanelRef) -> NavResult<()> {
        self.check_push(panel.as_ref())?;
        if self.forward().is_some_and(|head| head.id() == panel.id()) {
            self.trail.remove(0);
        } else {
            self.release_trail(panel.id());
        }
        debug!(panel = %panel.id(), depth = self.entries.len() + 1, "stack push");
        self.entries.push(panel);
        Ok(())
    }

    /// Remove the top panel and retain it as the trail head.
    ///
    /// Returns `None` (a no-op) at depth 1.
    pub fn pop(&mut self) -> Option<PanelRef> {
        if self.entries.len() <= 1 {
            return None;
        }
        let popped = self.entries.pop()?;
        debug!(panel = %popped.id(), depth = self.entries.len(), "stack pop");
        self.trail.insert(0, popped.clone());
        Some(popped)
    }

    /// Remove every panel above `id`.
    ///
    /// Removed panels move onto the trail, nearest first. Returns the removed
    /// panels; an empty list means `id` was already on top.
    pub fn pop_to(&mut self, id: PanelId) -> NavResult<Vec<PanelRef>> {
        let Some(index) = self.check_pop_to(id)? else {
            return Ok(Vec::new());
        };
        Ok(self.pop_to_index(index, id))
    }

    /// Remove every panel above the root.
    pub fn pop_to_root(&mut self) -> Vec<PanelRef> {
        let root = self.root().id();
        self.pop_to_index(0, root)
    }

    fn pop_to_index(&mut self, index: usize, id: PanelId) -> Vec<PanelRef> {
        if index + 1 >= self.entries.len() {
            return Vec::new();
        }
        let removed: Vec<PanelRef> = self.entries.drain(index + 1..).collect();
        debug!(target_panel = %id, removed = removed.len(), "stack pop_to");
        let mut trail = removed.clone();
        trail.append(&mut self.trail);
        self.trail = trail;
        removed
    }

    /// Replace the whole stack. The trail is abandoned.
    pub fn set_stack(&mut self, panels: Vec<PanelRef>) -> NavResult<()> {
        Self::validate_replacement(&panels)?;
        let old_entries = std::mem::take(&mut self.entries);
        let old_trail = std::mem::take(&mut self.trail);
        for panel in old_entries.into_iter().chain(old_trail) {
            if !panels.iter().any(|p| p.id() == panel.id()) {
                self.released.push(panel);
            }
        }
        debug!(depth = panels.len(), "stack replaced");
        self.entries = panels;
        Ok(())
    }

    /// Retain `panel` as the trail head without changing the current panel.
    pub fn push_unfocused(&mut self, panel: PanelRef) -> NavResult<()> {
        self.check_push(panel.as_ref())?;
        if self.forward().is_some_and(|head| head.id() == panel.id()) {
            return Ok(());
        }
        debug!(panel = %panel.id(), "stack push (unfocused)");
        self.trail.insert(0, panel);
        Ok(())
    }

    /// Drop the trail head. Returns `None` (a no-op) when the trail is empty.
    pub fn discard_forward(&mut self) -> Option<PanelId> {
        if self.trail.is_empty() {
            return None;
        }
        let head = self.trail.remove(0);
        let id = head.id();
        debug!(panel = %id, "stack discard forward");
        self.released.push(head);
        // Invariant 4: an older trail entry may be the current panel again.
        let current = self.current_id();
        while self.trail.first().is_some_and(|p| p.id() == current) {
            let stale = self.trail.remove(0);
            self.released.push(stale);
        }
        Some(id)
    }

    /// Keep at most `keep` trail entries; the rest are queued for release.
    pub fn trim_trail(&mut self, keep: usize) {
        if self.trail.len() > keep {
            let dropped = self.trail.split_off(keep);
            self.released.extend(dropped);
        }
    }

    /// Take every panel queued for release.
    pub fn take_released(&mut self) -> Vec<PanelRef> {
        std::mem::take(&mut self.released)
    }

    fn release_trail(&mut self, keep: PanelId) {
        let trail = std::mem::take(&mut self.trail);
        self.released
            .extend(trail.into_iter().filter(|panel| panel.id() != keep));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct P(u64);

    impl Panel for P {
        fn id(&self) -> PanelId {
            PanelId(self.0)
        }
    }

    fn p(id: u64) -> PanelRef {
        Rc::new(P(id))
    }

    fn stack(ids: &[u64]) -> PanelStack {
        match PanelStack::from_panels(ids.iter().map(|&i| p(i)).collect()) {
            Ok(s) => s,
            Err(e) => panic!("bad fixture: {e}"),
        }
    }

    fn ids(s: &PanelStack) -> Vec<u64> {
        s.ids().into_iter().map(|id| id.0).collect()
    }

    fn trail(s: &PanelStack) -> Vec<u64> {
        s.trail().iter().map(|p| p.id().0).collect()
    }

    #[test]
    fn push_appends_top() {
        let mut s = PanelStack::new(p(1));
        s.push(p(2)).unwrap();
        assert_eq!(ids(&s), vec![1, 2]);
        assert_eq!(s.current_id(), PanelId(2));
        assert_eq!(s.previous().map(|p| p.id()), Some(PanelId(1)));
    }

    #[test]
    fn push_of_current_is_invalid() {
        let mut s = stack(&[1, 2]);
        let err = s.push(p(2)).unwrap_err();
        assert!(matches!(err, NavError::InvalidArgument(_)));
        assert_eq!(ids(&s), vec![1, 2]);
    }

    #[test]
    fn pop_at_root_is_noop() {
        let mut s = PanelStack::new(p(1));
        assert!(s.pop().is_none());
        assert_eq!(s.depth(), 1);
        assert!(s.forward().is_none());
    }

    #[test]
    fn pop_moves_top_to_trail() {
        let mut s = stack(&[1, 2, 3]);
        let popped = s.pop().unwrap();
        assert_eq!(popped.id(), PanelId(3));
        assert_eq!(ids(&s), vec![1, 2]);
        assert_eq!(trail(&s), vec![3]);
        assert_eq!(
            s.neighbor(NavDirection::Forward).map(|p| p.id()),
            Some(PanelId(3))
        );
    }

    #[test]
    fn pushing_trail_head_consumes_it() {
        let mut s = stack(&[1, 2]);
        let popped = s.pop().unwrap();
        s.push(popped).unwrap();
        assert_eq!(ids(&s), vec![1, 2]);
        assert!(s.trail().is_empty());
        assert_eq!(s.pending_release(), 0);
    }

    #[test]
    fn pushing_other_panel_abandons_trail() {
        let mut s = stack(&[1, 2]);
        s.pop();
        s.push(p(9)).unwrap();
        assert_eq!(ids(&s), vec![1, 9]);
        assert!(s.trail().is_empty());
        let released: Vec<_> = s.take_released().iter().map(|p| p.id().0).collect();
        assert_eq!(released, vec![2]);
    }

    #[test]
    fn pushing_deeper_trail_panel_keeps_it_live() {
        let mut s = stack(&[1]);
        s.push_unfocused(p(3)).unwrap();
        s.push_unfocused(p(4)).unwrap();
        assert_eq!(trail(&s), vec![4, 3]);

        s.push(p(3)).unwrap();
        assert_eq!(ids(&s), vec![1, 3]);
        assert!(s.trail().is_empty());
        let released: Vec<_> = s.take_released().iter().map(|p| p.id().0).collect();
        assert_eq!(released, vec![4]);
    }

    #[test]
    fn pop_to_removes_suffix_nearest_first() {
        let mut s = stack(&[1, 2, 3, 4]);
        let removed = s.pop_to(PanelId(2)).unwrap();
        let removed: Vec<_> = removed.iter().map(|p| p.id().0).collect();
        assert_eq!(removed, vec![3, 4]);
        assert_eq!(ids(&s), vec![1, 2]);
        assert_eq!(trail(&s), vec![3, 4]);
    }

    #[test]
    fn pop_to_missing_is_not_found() {
        let mut s = stack(&[1, 2, 3]);
        match s.pop_to(PanelId(8)) {
            Err(err) => assert_eq!(err, NavError::NotFound(PanelId(8))),
            Ok(_) => panic!("pop_to of a missing panel succeeded"),
        }
        assert_eq!(ids(&s), vec![1, 2, 3]);
    }

    #[test]
    fn pop_to_current_is_empty() {
        let mut s = stack(&[1, 2]);
        assert!(s.pop_to(PanelId(2)).unwrap().is_empty());
        assert_eq!(ids(&s), vec![1, 2]);
    }

    #[test]
    fn pop_to_root_keeps_root() {
        let mut s = stack(&[1, 2, 3]);
        assert_eq!(s.pop_to_root().len(), 2);
        assert_eq!(ids(&s), vec![1]);
        assert!(s.pop_to_root().is_empty());
    }

    #[test]
    fn set_stack_rejects_empty() {
        let mut s = stack(&[1, 2]);
        let err = s.set_stack(Vec::new()).unwrap_err();
        assert!(matches!(err, NavError::InvalidArgument(_)));
        assert_eq!(ids(&s), vec![1, 2]);
    }

    #[test]
    fn set_stack_rejects_adjacent_duplicates() {
        let mut s = stack(&[1]);
        assert!(s.set_stack(vec![p(2), p(2)]).is_err());
        assert_eq!(ids(&s), vec![1]);
    }

    #[test]
    fn set_stack_releases_only_dropped_panels() {
        let mut s = stack(&[1, 2, 3]);
        s.set_stack(vec![p(1), p(5)]).unwrap();
        assert_eq!(ids(&s), vec![1, 5]);
        let mut released: Vec<_> = s.take_released().iter().map(|p| p.id().0).collect();
        released.sort_unstable();
        assert_eq!(released, vec![2, 3]);
    }

    #[test]
    fn unfocused_push_and_discard() {
        let mut s = stack(&[1]);
        s.push_unfocused(p(2)).unwrap();
        assert_eq!(ids(&s), vec![1]);
        assert_eq!(trail(&s), vec![2]);
        assert_eq!(s.discard_forward(), Some(PanelId(2)));
        assert_eq!(s.discard_forward(), None);
        assert_eq!(s.pending_release(), 1);
    }

    #[test]
    fn trim_trail_queues_release() {
        let mut s = stack(&[1, 2, 3, 4]);
        s.pop_to(PanelId(1)).unwrap();
        s.trim_trail(1);
        assert_eq!(trail(&s), vec![2]);
        assert_eq!(s.take_released().len(), 2);
        assert_eq!(s.pending_release(), 0);
    }

    #[test]
    fn index_of_finds_topmost() {
        let s = stack(&[1, 2, 1]);
        assert_eq!(s.index_of(PanelId(1)), Some(2));
        assert!(s.contains(PanelId(2)));
        assert!(!s.contains(PanelId(3)));
    }

    #[test]
    fn debug_lists_entries() {
        let s = stack(&[1, 2]);
        let out = format!("{s:?}");
        assert!(out.contains("panel#1"));
        assert!(out.contains("panel#2"));
    }
}
