#![forbid(unsafe_code)]

//! Navigation controller configuration.
//!
//! [`NavigationConfig`] groups every tunable of the controller. It can be
//! built in code with the builder setters, or (with the `config` feature)
//! loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # panelnav.toml
//! axis = "horizontal"
//! base_navigation_duration = 0.8
//! finish_transition_duration_factor = 2.0
//! finish_transition_duration_minimum = 0.4
//! flick_velocity_threshold = 500.0
//! ```
//!
//! ```rust,ignore
//! let config = NavigationConfig::from_toml_file("panelnav.toml")?;
//! ```
//!
//! Durations are written as seconds. Missing keys take their defaults.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::geometry::Axis;

/// Tunables for the navigation controller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct NavigationConfig {
    /// Axis panels are laid out and dragged along.
    pub axis: Axis,

    /// Duration of an imperative (non-gesture) transition.
    #[cfg_attr(feature = "config", serde(with = "duration_secs"))]
    pub base_navigation_duration: Duration,

    /// Rubber-band the current panel when dragged past a boundary.
    pub bounces: bool,

    /// Finish released drags with a fixed page-snap pace instead of
    /// carrying the release momentum.
    pub paging_enabled: bool,

    /// Multiplier applied to the momentum-derived finishing duration.
    pub finish_transition_duration_factor: f64,

    /// Floor for the finishing duration.
    #[cfg_attr(feature = "config", serde(with = "duration_secs"))]
    pub finish_transition_duration_minimum: Duration,

    /// Reset embedded scrollable content before imperative transitions.
    pub should_reset_scroll_views: bool,

    /// Release velocity (points/sec) that decides the outcome on its own.
    pub flick_velocity_threshold: f64,

    /// Floor for the release speed (container extents/sec) used to time the
    /// finishing move. Bounds how long a near-motionless release can take.
    pub minimum_finish_speed: f64,

    /// Distance (points) a drag must travel before it can start a transition.
    pub minimum_drag_distance: f64,

    /// Fraction of the overscroll translation applied when bouncing.
    pub bounce_resistance: f64,

    /// Whether drag input is processed at all.
    pub gestures_enabled: bool,

    /// Curve for imperative transitions.
    pub imperative_easing: Easing,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            base_navigation_duration: Duration::from_millis(800),
            bounces: true,
            paging_enabled: false,
            finish_transition_duration_factor: 2.0,
            finish_transition_duration_minimum: Duration::from_millis(400),
            should_reset_scroll_views: false,
            flick_velocity_threshold: 500.0,
            minimum_finish_speed: 0.5,
            minimum_drag_distance: 10.0,
            bounce_resistance: 0.35,
            gestures_enabled: true,
            imperative_easing: Easing::EaseInOut,
        }
    }
}

impl NavigationConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the navigation axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the imperative transition duration.
    #[must_use]
    pub fn base_navigation_duration(mut self, duration: Duration) -> Self {
        self.base_navigation_duration = duration;
        self
    }

    /// Enable or disable boundary bounce.
    #[must_use]
    pub fn bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    /// Enable or disable fixed-pace page snapping.
    #[must_use]
    pub fn paging_enabled(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }

    /// Set the finishing duration multiplier.
    #[must_use]
    pub fn finish_transition_duration_factor(mut self, factor: f64) -> Self {
        self.finish_transition_duration_factor = factor;
        self
    }

    /// Set the finishing duration floor.
    #[must_use]
    pub fn finish_transition_duration_minimum(mut self, minimum: Duration) -> Self {
        self.finish_transition_duration_minimum = minimum;
        self
    }

    /// Enable or disable scroll reset before imperative transitions.
    #[must_use]
    pub fn should_reset_scroll_views(mut self, reset: bool) -> Self {
        self.should_reset_scroll_views = reset;
        self
    }

    /// Set the flick velocity threshold (points/sec).
    #[must_use]
    pub fn flick_velocity_threshold(mut self, threshold: f64) -> Self {
        self.flick_velocity_threshold = threshold.abs();
        self
    }

    /// Set the release speed floor (extents/sec).
    #[must_use]
    pub fn minimum_finish_speed(mut self, speed: f64) -> Self {
        self.minimum_finish_speed = speed.abs();
        self
    }

    /// Set the minimum drag distance (points).
    #[must_use]
    pub fn minimum_drag_distance(mut self, distance: f64) -> Self {
        self.minimum_drag_distance = distance.abs();
        self
    }

    /// Set the bounce resistance, clamped to [0.0, 1.0].
    #[must_use]
    pub fn bounce_resistance(mut self, resistance: f64) -> Self {
        self.bounce_resistance = resistance.clamp(0.0, 1.0);
        self
    }

    /// Enable or disable drag input.
    #[must_use]
    pub fn gestures_enabled(mut self, enabled: bool) -> Self {
        self.gestures_enabled = enabled;
        self
    }

    /// Set the imperative transition curve.
    #[must_use]
    pub fn imperative_easing(mut self, easing: Easing) -> Self {
        self.imperative_easing = easing;
        self
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.finish_transition_duration_factor.is_finite()
            && self.finish_transition_duration_factor > 0.0)
        {
            errors.push(format!(
                "finish_transition_duration_factor must be > 0, got {}",
                self.finish_transition_duration_factor
            ));
        }

        if !self.flick_velocity_threshold.is_finite() || self.flick_velocity_threshold < 0.0 {
            errors.push(format!(
                "flick_velocity_threshold must be >= 0, got {}",
                self.flick_velocity_threshold
            ));
        }

        if !(self.minimum_finish_speed.is_finite() && self.minimum_finish_speed > 0.0) {
            errors.push(format!(
                "minimum_finish_speed must be > 0, got {}",
                self.minimum_finish_speed
            ));
        }

        if !self.minimum_drag_distance.is_finite() || self.minimum_drag_distance < 0.0 {
            errors.push(format!(
                "minimum_drag_distance must be >= 0, got {}",
                self.minimum_drag_distance
            ));
        }

        if !(0.0..=1.0).contains(&self.bounce_resistance) {
            errors.push(format!(
                "bounce_resistance must be in [0, 1], got {}",
                self.bounce_resistance
            ));
        }

        if self.base_navigation_duration.is_zero() {
            errors.push("base_navigation_duration must be > 0".into());
        }

        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a navigation configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    TomlSerialize(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::TomlSerialize(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::TomlSerialize(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for Duration (seconds as f64)
// ---------------------------------------------------------------------------

#[cfg(feature = "config")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
