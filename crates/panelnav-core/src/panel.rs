#![forbid(unsafe_code)]

//! Panel identity and optional capabilities.
//!
//! Panels are built and owned by the host. The controller only ever holds
//! shared [`PanelRef`] clones while a panel is in the stack, and asks for
//! optional behavior through capability queries instead of requiring a
//! common base type.

use std::fmt;
use std::rc::Rc;

use crate::geometry::NavDirection;

/// Stable identity of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Scrollable-content capability.
///
/// Methods take `&self`; panels keep their scroll state behind interior
/// mutability since the controller only holds shared references.
pub trait ScrollableContent {
    /// Current scroll offset along the content's scroll axis.
    fn scroll_offset(&self) -> f64;

    /// Scroll to the leading edge (top or start).
    fn scroll_to_leading_edge(&self);

    /// Scroll to the trailing edge (bottom or end).
    fn scroll_to_trailing_edge(&self);
}

/// A navigable content unit.
pub trait Panel {
    /// Stable identity. Two panels with the same id are the same panel.
    fn id(&self) -> PanelId;

    /// Human-readable label for logs.
    fn title(&self) -> Option<&str> {
        None
    }

    /// The scrollable-content capability, if the panel embeds one.
    fn scrollable(&self) -> Option<&dyn ScrollableContent> {
        None
    }

    /// Whether a drag may navigate away in `direction`.
    ///
    /// Forward drags ask the current panel; backward drags ask the panel
    /// being revealed.
    fn allows_interactive_navigation(&self, _direction: NavDirection) -> bool {
        true
    }
}

/// Shared handle to a host-owned panel.
pub type PanelRef = Rc<dyn Panel>;

/// Debug adapter for panel handles, which carry no `Debug` bound.
pub(crate) struct PanelLabel<'a>(pub &'a dyn Panel);

impl fmt::Debug for PanelLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.title() {
            Some(title) => write!(f, "{}({title})", self.0.id()),
            None => write!(f, "{}", self.0.id()),
        }
    }
}
