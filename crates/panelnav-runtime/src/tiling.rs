#![forbid(unsafe_code)]

//! Tiling manager: the set of live panel views.
//!
//! The container holds a view for the current panel at all times and, only
//! while a transition is live, one more view for the neighbor being staged.
//!
//! # Invariants
//!
//! 1. At most two views are materialized; exactly one when nothing is staged.
//! 2. Each staging cycle performs exactly one materialize and one release:
//!    `commit_staging` retires the old current tile (for the lifecycle
//!    cleaner), `cancel_staging` releases the staged tile.
//! 3. `begin_staging` never stages over an existing staged tile.
//!
//! # Failure Modes
//!
//! - A non-positive extent positions everything at rest (progress cannot be
//!   expressed), but staging still pairs correctly.

use std::fmt;

use tracing::{debug, trace};

use panelnav_core::{Axis, NavDirection, PanelId, PanelRef};

use crate::backend::{ViewHandle, ViewHost, ViewTrack};

/// A panel together with its materialized view.
#[derive(Clone)]
pub struct Tile {
    panel: PanelRef,
    view: ViewHandle,
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("panel", &self.panel.id())
            .field("view", &self.view)
            .finish()
    }
}

impl Tile {
    /// The panel shown by this tile.
    #[must_use]
    pub fn panel(&self) -> &PanelRef {
        &self.panel
    }

    /// The panel's identity.
    #[must_use]
    pub fn id(&self) -> PanelId {
        self.panel.id()
    }

    /// The host view handle.
    #[must_use]
    pub fn view(&self) -> ViewHandle {
        self.view
    }
}

#[derive(Debug)]
struct Staged {
    tile: Tile,
    direction: NavDirection,
    progress: f64,
}

/// Keeps the container's live views consistent with the transition state.
#[derive(Debug)]
pub struct TilingManager {
    axis: Axis,
    current: Tile,
    staged: Option<Staged>,
    current_offset: f64,
}

impl TilingManager {
    /// Materialize `panel` as the current view, at rest.
    pub fn install<H: ViewHost + ?Sized>(axis: Axis, panel: PanelRef, host: &mut H) -> Self {
        let view = host.materialize_view(panel.as_ref());
        host.position_view(view, axis, 0.0);
        debug!(panel = %panel.id(), ?view, "tiling install");
        Self {
            axis,
            current: Tile { panel, view },
            staged: None,
            current_offset: 0.0,
        }
    }

    /// Navigation axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The current tile.
    #[must_use]
    pub fn current(&self) -> &Tile {
        &self.current
    }

    /// The staged neighbor tile, if a transition is live.
    #[must_use]
    pub fn staged(&self) -> Option<&Tile> {
        self.staged.as_ref().map(|s| &s.tile)
    }

    /// Direction of the staged neighbor.
    #[must_use]
    pub fn staged_direction(&self) -> Option<NavDirection> {
        self.staged.as_ref().map(|s| s.direction)
    }

    /// Whether a neighbor is staged.
    #[must_use]
    pub fn is_staging(&self) -> bool {
        self.staged.is_some()
    }

    /// Progress of the staged transition (0.0 when nothing is staged).
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.staged.as_ref().map_or(0.0, |s| s.progress)
    }

    /// Offset of the current view from rest.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Number of materialized views.
    #[must_use]
    pub fn materialized_count(&self) -> usize {
        1 + usize::from(self.staged.is_some())
    }

    /// Handles of all materialized views, current first.
    #[must_use]
    pub fn views(&self) -> Vec<ViewHandle> {
        let mut views = vec![self.current.view];
        if let Some(staged) = &self.staged {
            views.push(staged.tile.view);
        }
        views
    }

    /// Materialize `neighbor` just offscreen in `direction`.
    ///
    /// Returns `false` without touching the host if something is already
    /// staged.
    pub fn begin_staging<H: ViewHost + ?Sized>(
        &mut self,
        neighbor: PanelRef,
        direction: NavDirection,
        extent: f64,
        host: &mut H,
    ) -> bool {
        if self.staged.is_some() {
            debug!(panel = %neighbor.id(), "staging refused: already staging");
            return false;
        }
        let view = host.materialize_view(neighbor.as_ref());
        debug!(panel = %neighbor.id(), ?view, %direction, "tiling begin staging");
        self.staged = Some(Staged {
            tile: Tile {
                panel: neighbor,
                view,
            },
            direction,
            progress: 0.0,
        });
        self.set_progress(0.0, extent, host);
        true
    }

    /// Position both views for `progress` along the staged direction.
    pub fn set_progress<H: ViewHost + ?Sized>(&mut self, progress: f64, extent: f64, host: &mut H) {
        let Some(staged) = self.staged.as_mut() else {
            return;
        };
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            staged.progress
        };
        staged.progress = progress;
        let extent = extent.max(0.0);
        let (current, neighbor) = staged.direction.view_offsets(progress, extent);
        trace!(progress, current, neighbor, "tiling progress");
        host.position_view(self.current.view, self.axis, current);
        host.position_view(staged.tile.view, self.axis, neighbor);
        self.current_offset = current;
    }

    /// Tracks that move both views from the current progress to `to_progress`.
    #[must_use]
    pub fn tracks(&self, to_progress: f64, extent: f64) -> Vec<ViewTrack> {
        let Some(staged) = &self.staged else {
            return vec![ViewTrack {
                view: self.current.view,
                from_offset: self.current_offset,
                to_offset: 0.0,
            }];
        };
        let extent = extent.max(0.0);
        let (from_current, from_neighbor) = staged.direction.view_offsets(staged.progress, extent);
        let (to_current, to_neighbor) = staged.direction.view_offsets(to_progress, extent);
        vec![
            ViewTrack {
                view: self.current.view,
                from_offset: from_current,
                to_offset: to_current,
            },
            ViewTrack {
                view: staged.tile.view,
                from_offset: from_neighbor,
                to_offset: to_neighbor,
            },
        ]
    }

    /// Promote the staged neighbor to current.
    ///
    /// The new current view is placed at rest. The old current tile is
    /// returned, still materialized, for the lifecycle cleaner.
    pub fn commit_staging<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> Option<Tile> {
        let staged = self.staged.take()?;
        let retired = std::mem::replace(&mut self.current, staged.tile);
        host.position_view(self.current.view, self.axis, 0.0);
        self.current_offset = 0.0;
        debug!(
            from = %retired.id(),
            to = %self.current.id(),
            direction = %staged.direction,
            "tiling commit staging"
        );
        Some(retired)
    }

    /// Release the staged neighbor and put the current view back at rest.
    ///
    /// Returns `false` if nothing was staged.
    pub fn cancel_staging<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(staged) = self.staged.take() else {
            return false;
        };
        host.release_view(staged.tile.view);
        host.position_view(self.current.view, self.axis, 0.0);
        self.current_offset = 0.0;
        debug!(panel = %staged.tile.id(), direction = %staged.direction, "tiling cancel staging");
        true
    }

    /// Displace the lone current view (boundary overscroll).
    ///
    /// Ignored while a neighbor is staged.
    pub fn offset_current<H: ViewHost + ?Sized>(&mut self, offset: f64, host: &mut H) {
        if self.staged.is_some() || !offset.is_finite() {
            return;
        }
        self.current_offset = offset;
        host.position_view(self.current.view, self.axis, offset);
    }

    /// Swap the current view for `panel` without a transition.
    ///
    /// Returns the retired tile, still materialized, for the lifecycle
    /// cleaner. Returns `None` (and does nothing) while staging or when
    /// `panel` is already current.
    pub fn replace_current<H: ViewHost + ?Sized>(
        &mut self,
        panel: PanelRef,
        host: &mut H,
    ) -> Option<Tile> {
        if self.staged.is_some() || panel.id() == self.current.id() {
            return None;
        }
        let view = host.materialize_view(panel.as_ref());
        host.position_view(view, self.axis, 0.0);
        self.current_offset = 0.0;
        let retired = std::mem::replace(&mut self.current, Tile { panel, view });
        debug!(from = %retired.id(), to = %self.current.id(), "tiling replace current");
        Some(retired)
    }

    /// Re-apply positions after the container extent changed.
    pub fn relayout<H: ViewHost + ?Sized>(&mut self, extent: f64, host: &mut H) {
        if let Some(progress) = self.staged.as_ref().map(|s| s.progress) {
            self.set_progress(progress, extent, host);
        } else {
            host.position_view(self.current.view, self.axis, self.current_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelnav_core::{Panel, PanelId};
    use std::rc::Rc;

    struct P(u64);

    impl Panel for P {
        fn id(&self) -> PanelId {
            PanelId(self.0)
        }
    }

    #[derive(Default)]
    struct Host {
        next: u64,
        live: Vec<ViewHandle>,
        positions: Vec<(ViewHandle, f64)>,
        materialized: usize,
        released: usize,
    }

    impl ViewHost for Host {
        fn materialize_view(&mut self, _panel: &dyn Panel) -> ViewHandle {
            self.next += 1;
            self.materialized += 1;
            let view = ViewHandle(self.next);
            self.live.push(view);
            view
        }

        fn release_view(&mut self, view: ViewHandle) {
            self.released += 1;
            self.live.retain(|v| *v != view);
        }

        fn position_view(&mut self, view: ViewHandle, _axis: Axis, offset: f64) {
            self.positions.push((view, offset));
        }
    }

    impl Host {
        fn last_offset(&self, view: ViewHandle) -> Option<f64> {
            self.positions
                .iter()
                .rev()
                .find(|(v, _)| *v == view)
                .map(|(_, o)| *o)
        }
    }

    fn panel(id: u64) -> PanelRef {
        Rc::new(P(id))
    }

    #[test]
    fn install_materializes_one_view_at_rest() {
        let mut host = Host::default();
        let tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        assert_eq!(tiling.materialized_count(), 1);
        assert_eq!(host.last_offset(tiling.current().view()), Some(0.0));
    }

    #[test]
    fn staging_positions_neighbor_offscreen() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        assert!(tiling.begin_staging(panel(2), NavDirection::Forward, 300.0, &mut host));
        let staged = tiling.staged().map(Tile::view).unwrap();
        assert_eq!(host.last_offset(staged), Some(300.0));
        assert_eq!(tiling.materialized_count(), 2);
    }

    #[test]
    fn staging_twice_is_refused() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        assert!(tiling.begin_staging(panel(2), NavDirection::Forward, 300.0, &mut host));
        assert!(!tiling.begin_staging(panel(3), NavDirection::Backward, 300.0, &mut host));
        assert_eq!(host.materialized, 2);
        assert_eq!(tiling.staged().map(Tile::id), Some(PanelId(2)));
    }

    #[test]
    fn progress_moves_both_views() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        tiling.begin_staging(panel(2), NavDirection::Backward, 400.0, &mut host);
        tiling.set_progress(0.5, 400.0, &mut host);
        let current = tiling.current().view();
        let staged = tiling.staged().map(Tile::view).unwrap();
        assert_eq!(host.last_offset(current), Some(200.0));
        assert_eq!(host.last_offset(staged), Some(-200.0));
        assert_eq!(tiling.progress(), 0.5);
    }

    #[test]
    fn cancel_releases_staged_and_restores_current() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        tiling.begin_staging(panel(2), NavDirection::Forward, 400.0, &mut host);
        tiling.set_progress(0.3, 400.0, &mut host);
        assert!(tiling.cancel_staging(&mut host));
        assert_eq!(host.live.len(), 1);
        assert_eq!(host.last_offset(tiling.current().view()), Some(0.0));
        assert!(!tiling.cancel_staging(&mut host));
        assert_eq!(host.released, 1);
    }

    #[test]
    fn commit_retires_old_current_without_releasing() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        tiling.begin_staging(panel(2), NavDirection::Forward, 400.0, &mut host);
        let retired = tiling.commit_staging(&mut host).unwrap();
        assert_eq!(retired.id(), PanelId(1));
        assert_eq!(tiling.current().id(), PanelId(2));
        assert_eq!(host.released, 0, "release belongs to the cleaner");
        assert_eq!(tiling.materialized_count(), 1);
    }

    #[test]
    fn tracks_cover_remaining_distance() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        tiling.begin_staging(panel(2), NavDirection::Forward, 100.0, &mut host);
        tiling.set_progress(0.25, 100.0, &mut host);
        let tracks = tiling.tracks(1.0, 100.0);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].from_offset, -25.0);
        assert_eq!(tracks[0].to_offset, -100.0);
        assert_eq!(tracks[1].from_offset, 75.0);
        assert_eq!(tracks[1].to_offset, 0.0);
    }

    #[test]
    fn overscroll_only_when_idle() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Vertical, panel(1), &mut host);
        tiling.offset_current(12.0, &mut host);
        assert_eq!(tiling.current_offset(), 12.0);
        let tracks = tiling.tracks(0.0, 100.0);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].from_offset, 12.0);
        tiling.begin_staging(panel(2), NavDirection::Forward, 100.0, &mut host);
        tiling.offset_current(40.0, &mut host);
        assert_eq!(tiling.current_offset(), 0.0);
    }

    #[test]
    fn replace_current_swaps_view() {
        let mut host = Host::default();
        let mut tiling = TilingManager::install(Axis::Horizontal, panel(1), &mut host);
        assert!(tiling.replace_current(panel(1), &mut host).is_none());
        let retired = tiling.replace_current(panel(5), &mut host).unwrap();
        assert_eq!(retired.id(), PanelId(1));
        assert_eq!(tiling.current().id(), PanelId(5));
    }
}
