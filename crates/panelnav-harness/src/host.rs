#![forbid(unsafe_code)]

//! Recording view host.
//!
//! Mints sequential view handles, tracks which views are live and where they
//! sit, and keeps a full operation log so tests can assert on pairing.

use std::collections::BTreeMap;

use panelnav_core::{Axis, Panel, PanelId};
use panelnav_runtime::{ViewHandle, ViewHost};

/// One call the controller made on the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostOp {
    /// A view was created for a panel.
    Materialize(ViewHandle, PanelId),
    /// A view was freed.
    Release(ViewHandle),
    /// A view was placed.
    Position(ViewHandle, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LiveView {
    panel: PanelId,
    offset: f64,
}

/// A [`ViewHost`] that remembers everything.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next: u64,
    live: BTreeMap<ViewHandle, LiveView>,
    ops: Vec<HostOp>,
    double_releases: usize,
}

impl RecordingHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live views.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Panels with a live view, in handle order.
    #[must_use]
    pub fn live_panels(&self) -> Vec<PanelId> {
        self.live.values().map(|v| v.panel).collect()
    }

    /// Whether `panel` has a live view.
    #[must_use]
    pub fn is_live(&self, panel: PanelId) -> bool {
        self.live.values().any(|v| v.panel == panel)
    }

    /// Last offset of the live view showing `panel`.
    #[must_use]
    pub fn offset_of(&self, panel: PanelId) -> Option<f64> {
        self.live
            .values()
            .find(|v| v.panel == panel)
            .map(|v| v.offset)
    }

    /// Every call so far.
    #[must_use]
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Number of views ever materialized.
    #[must_use]
    pub fn materialized_total(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Materialize(..)))
            .count()
    }

    /// Number of views ever released.
    #[must_use]
    pub fn released_total(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Release(_)))
            .count()
    }

    /// Releases of views that were not live.
    #[must_use]
    pub fn double_releases(&self) -> usize {
        self.double_releases
    }

    /// Forget the operation log, keeping live views.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl ViewHost for RecordingHost {
    fn materialize_view(&mut self, panel: &dyn Panel) -> ViewHandle {
        self.next += 1;
        let view = ViewHandle(self.next);
        self.live.insert(
            view,
            LiveView {
                panel: panel.id(),
                offset: 0.0,
            },
        );
        self.ops.push(HostOp::Materialize(view, panel.id()));
        view
    }

    fn release_view(&mut self, view: ViewHandle) {
        if self.live.remove(&view).is_none() {
            self.double_releases += 1;
        }
        self.ops.push(HostOp::Release(view));
    }

    fn position_view(&mut self, view: ViewHandle, _axis: Axis, offset: f64) {
        if let Some(live) = self.live.get_mut(&view) {
            live.offset = offset;
        }
        self.ops.push(HostOp::Position(view, offset));
    }
}
