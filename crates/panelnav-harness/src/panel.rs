#![forbid(unsafe_code)]

//! Test panels with optional scroll content and navigation vetoes.

use std::cell::Cell;
use std::rc::Rc;

use panelnav_core::{NavDirection, Panel, PanelId, PanelRef, ScrollableContent};

/// Scroll content with a fixed length; the offset lives in a `Cell`.
#[derive(Debug)]
pub struct TestScroll {
    offset: Cell<f64>,
    content_length: f64,
}

impl TestScroll {
    /// Content of `content_length` points, scrolled to `offset`.
    #[must_use]
    pub fn new(content_length: f64, offset: f64) -> Self {
        Self {
            offset: Cell::new(offset),
            content_length,
        }
    }

    /// Move the offset directly.
    pub fn set_offset(&self, offset: f64) {
        self.offset.set(offset);
    }
}

impl ScrollableContent for TestScroll {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn scroll_to_leading_edge(&self) {
        self.offset.set(0.0);
    }

    fn scroll_to_trailing_edge(&self) {
        self.offset.set(self.content_length);
    }
}

/// A panel for tests.
#[derive(Debug)]
pub struct TestPanel {
    id: PanelId,
    title: String,
    scroll: Option<TestScroll>,
    veto_forward: Cell<bool>,
    veto_backward: Cell<bool>,
}

impl TestPanel {
    /// A plain panel.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id: PanelId(id),
            title: format!("panel-{id}"),
            scroll: None,
            veto_forward: Cell::new(false),
            veto_backward: Cell::new(false),
        }
    }

    /// Attach scroll content.
    #[must_use]
    pub fn with_scroll(mut self, content_length: f64, offset: f64) -> Self {
        self.scroll = Some(TestScroll::new(content_length, offset));
        self
    }

    /// Refuse interactive navigation in `direction`.
    #[must_use]
    pub fn vetoing(self, direction: NavDirection) -> Self {
        self.set_veto(direction, true);
        self
    }

    /// Toggle the veto for `direction`.
    pub fn set_veto(&self, direction: NavDirection, veto: bool) {
        match direction {
            NavDirection::Forward => self.veto_forward.set(veto),
            NavDirection::Backward => self.veto_backward.set(veto),
        }
    }

    /// The scroll content, if any.
    #[must_use]
    pub fn scroll(&self) -> Option<&TestScroll> {
        self.scroll.as_ref()
    }

    /// Share as a [`PanelRef`], keeping a typed handle.
    #[must_use]
    pub fn shared(self) -> (Rc<Self>, PanelRef) {
        let typed = Rc::new(self);
        let erased: PanelRef = typed.clone();
        (typed, erased)
    }
}

impl Panel for TestPanel {
    fn id(&self) -> PanelId {
        self.id
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn scrollable(&self) -> Option<&dyn ScrollableContent> {
        self.scroll.as_ref().map(|s| s as &dyn ScrollableContent)
    }

    fn allows_interactive_navigation(&self, direction: NavDirection) -> bool {
        match direction {
            NavDirection::Forward => !self.veto_forward.get(),
            NavDirection::Backward => !self.veto_backward.get(),
        }
    }
}

/// A plain panel as a [`PanelRef`].
#[must_use]
pub fn panel(id: u64) -> PanelRef {
    Rc::new(TestPanel::new(id))
}

/// Plain panels for each id.
#[must_use]
pub fn panels(ids: &[u64]) -> Vec<PanelRef> {
    ids.iter().map(|&id| panel(id)).collect()
}
