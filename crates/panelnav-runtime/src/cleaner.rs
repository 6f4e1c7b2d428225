#![forbid(unsafe_code)]

//! Lifecycle cleaner: releases what fell out of the tiling window.
//!
//! After a committed transition the old current view is retired, and the
//! stack may have parked panels for release (abandoned trail entries,
//! replaced stack entries). The cleaner frees all of it in one sweep.
//!
//! The controller only calls [`LifecycleCleaner::sweep`] once a transition
//! has fully resolved, never while one is live.

use tracing::debug;

use panelnav_core::{PanelId, PanelStack};

use crate::backend::ViewHost;
use crate::tiling::Tile;

/// Trail entries kept after a sweep: only the panel adjacent to the current
/// one can be staged by a forward drag.
const RETAINED_TRAIL: usize = 1;

/// Collects retired tiles and releases them at a safe point.
#[derive(Debug, Default)]
pub struct LifecycleCleaner {
    retired: Vec<Tile>,
    sweeps: u64,
}

/// What a sweep freed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Panels whose views were released.
    pub released_views: Vec<PanelId>,
    /// Panels dropped from the stack and trail entirely.
    pub discarded_panels: Vec<PanelId>,
}

impl SweepReport {
    /// Whether the sweep freed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.released_views.is_empty() && self.discarded_panels.is_empty()
    }
}

impl LifecycleCleaner {
    /// Create an empty cleaner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over a tile that left the tiling window.
    pub fn retire(&mut self, tile: Tile) {
        self.retired.push(tile);
    }

    /// Number of tiles waiting for release.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.retired.len()
    }

    /// Number of sweeps performed.
    #[must_use]
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// Release retired views and trim the stack's trail.
    pub fn sweep<H: ViewHost + ?Sized>(&mut self, stack: &mut PanelStack, host: &mut H) -> SweepReport {
        self.sweeps += 1;
        let mut report = SweepReport::default();

        for tile in self.retired.drain(..) {
            host.release_view(tile.view());
            report.released_views.push(tile.id());
        }

        stack.trim_trail(RETAINED_TRAIL);
        for panel in stack.take_released() {
            report.discarded_panels.push(panel.id());
        }

        if !report.is_empty() {
            debug!(
                released_views = report.released_views.len(),
                discarded_panels = report.discarded_panels.len(),
                depth = stack.depth(),
                "lifecycle sweep"
            );
        }
        report
    }
}
