#![forbid(unsafe_code)]

//! Release decision and finishing-move timing.
//!
//! When the pointer lifts, the transition either completes or reverts:
//!
//! - A release velocity at or past the flick threshold toward completion
//!   completes, whatever the progress.
//! - A release velocity past the threshold away from completion reverts,
//!   whatever the progress.
//! - Otherwise the transition completes iff progress is at least one half.
//!
//! Ties resolve toward completion.
//!
//! The finishing move then continues the drag's momentum:
//!
//! ```text
//! remaining = 1 - p (complete) | p (revert)
//! speed     = max(|v| / extent, minimum_finish_speed)
//! duration  = max(remaining / speed * factor, minimum)
//! ```
//!
//! With paging enabled the pace is fixed instead:
//! `duration = max(remaining * base_navigation_duration, minimum)`.

use std::time::Duration;

use panelnav_core::{NavDirection, NavigationConfig};

/// Progress at or past which a slow release completes.
pub const COMPLETION_THRESHOLD: f64 = 0.5;

/// Release speed floor, in container extents per second, used when the
/// configured one is unusable.
pub const MIN_FINISH_SPEED: f64 = 0.01;

/// How a released transition resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Move on to the neighbor and commit the stack edit.
    Complete,
    /// Snap back to the panel the gesture started on.
    Revert,
}

impl Outcome {
    /// Progress the finishing move animates to.
    #[must_use]
    pub const fn target_progress(self) -> f64 {
        match self {
            Self::Complete => 1.0,
            Self::Revert => 0.0,
        }
    }

    /// Label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Revert => "revert",
        }
    }
}

/// The finishing move computed in the deciding phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishPlan {
    /// Complete or revert.
    pub outcome: Outcome,
    /// Progress at release.
    pub from: f64,
    /// Progress at the end of the move.
    pub target: f64,
    /// Length of the finishing animation.
    pub duration: Duration,
}

/// Decide the outcome of a release.
///
/// `directed_velocity` is positive toward completion. `threshold` is the
/// flick velocity magnitude.
#[must_use]
pub fn decide(progress: f64, directed_velocity: f64, threshold: f64) -> Outcome {
    let threshold = threshold.abs();
    let v = if directed_velocity.is_finite() {
        directed_velocity
    } else {
        0.0
    };
    if v >= threshold {
        Outcome::Complete
    } else if v < -threshold {
        Outcome::Revert
    } else if progress >= COMPLETION_THRESHOLD {
        Outcome::Complete
    } else {
        Outcome::Revert
    }
}

/// Duration of the finishing move for `outcome` from `progress`.
#[must_use]
pub fn finish_duration(
    outcome: Outcome,
    progress: f64,
    velocity: f64,
    extent: f64,
    config: &NavigationConfig,
) -> Duration {
    let progress = progress.clamp(0.0, 1.0);
    let remaining = match outcome {
        Outcome::Complete => 1.0 - progress,
        Outcome::Revert => progress,
    };
    let minimum = config.finish_transition_duration_minimum;

    if config.paging_enabled {
        let paced = remaining * config.base_navigation_duration.as_secs_f64();
        return at_least(paced, minimum);
    }

    let floor = if config.minimum_finish_speed.is_finite() && config.minimum_finish_speed > 0.0 {
        config.minimum_finish_speed
    } else {
        MIN_FINISH_SPEED
    };
    let speed = if extent > 0.0 && velocity.is_finite() {
        (velocity.abs() / extent).max(floor)
    } else {
        floor
    };
    let raw = remaining / speed;
    let factor = if config.finish_transition_duration_factor.is_finite() {
        config.finish_transition_duration_factor.max(0.0)
    } else {
        1.0
    };
    at_least(raw * factor, minimum)
}

/// `max(secs, minimum)` as a duration; `minimum` is returned exactly when it
/// wins.
fn at_least(secs: f64, minimum: Duration) -> Duration {
    if !(secs > minimum.as_secs_f64()) {
        minimum
    } else {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Decide and time a release in one step.
///
/// `velocity` is the raw signed sample velocity; `force_revert` is set when
/// the platform cancelled the gesture.
#[must_use]
pub fn plan(
    progress: f64,
    velocity: f64,
    direction: NavDirection,
    extent: f64,
    config: &NavigationConfig,
    force_revert: bool,
) -> FinishPlan {
    let outcome = if force_revert {
        Outcome::Revert
    } else {
        decide(
            progress,
            velocity * direction.sign(),
            config.flick_velocity_threshold,
        )
    };
    FinishPlan {
        outcome,
        from: progress,
        target: outcome.target_progress(),
        duration: finish_duration(outcome, progress, velocity, extent, config),
    }
}
