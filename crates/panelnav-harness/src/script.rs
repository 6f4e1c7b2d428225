#![forbid(unsafe_code)]

//! Drag scripts: gesture sample sequences built step by step.
//!
//! ```
//! use panelnav_harness::DragScript;
//!
//! let samples = DragScript::horizontal().glide(-240.0, 4).end(-300.0);
//! assert_eq!(samples.len(), 6);
//! ```

use panelnav_core::{Axis, GesturePhase, GestureSample};

/// Builder for one drag gesture.
#[derive(Debug, Clone)]
pub struct DragScript {
    axis: Axis,
    translation: f64,
    samples: Vec<GestureSample>,
}

impl DragScript {
    /// A drag along `axis`, starting with a `Began` sample.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            translation: 0.0,
            samples: vec![GestureSample::began(axis)],
        }
    }

    /// A horizontal drag.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Jump to `translation` with the given instantaneous velocity.
    #[must_use]
    pub fn move_to(mut self, translation: f64, velocity: f64) -> Self {
        self.translation = translation;
        self.samples
            .push(GestureSample::changed(translation, velocity, self.axis));
        self
    }

    /// Move to `translation` in `steps` evenly spaced samples.
    #[must_use]
    pub fn glide(mut self, translation: f64, steps: usize) -> Self {
        let steps = steps.max(1);
        let start = self.translation;
        for i in 1..=steps {
            let t = start + (translation - start) * (i as f64 / steps as f64);
            self.samples.push(GestureSample::changed(t, 0.0, self.axis));
        }
        self.translation = translation;
        self
    }

    /// Lift the pointer with `velocity`.
    #[must_use]
    pub fn end(mut self, velocity: f64) -> Vec<GestureSample> {
        self.samples
            .push(GestureSample::ended(self.translation, velocity, self.axis));
        self.samples
    }

    /// Let the platform cancel the gesture.
    #[must_use]
    pub fn cancel(mut self) -> Vec<GestureSample> {
        self.samples
            .push(GestureSample::cancelled(self.translation, self.axis));
        self.samples
    }

    /// Samples so far, without a terminal one.
    #[must_use]
    pub fn samples(&self) -> &[GestureSample] {
        &self.samples
    }

    /// Samples so far, without a terminal one.
    #[must_use]
    pub fn into_samples(self) -> Vec<GestureSample> {
        self.samples
    }
}

/// Whether `samples` ends the gesture.
#[must_use]
pub fn is_complete(samples: &[GestureSample]) -> bool {
    samples
        .last()
        .is_some_and(|s| matches!(s.phase, GesturePhase::Ended | GesturePhase::Cancelled))
}
