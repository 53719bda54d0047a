// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob configuration: value range, angular sweep and snapping.

use crate::angle::FULL_TURN;
use crate::error::ConfigError;

/// Numeric bounds of a knob's output value.
///
/// `end` may be smaller than `start`, which gives a knob whose value falls as
/// it turns clockwise. A zero span is invalid; see [`ConfigError::InvalidRange`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    /// Value at the start of the sweep.
    pub start: f64,
    /// Value at the end of the sweep.
    pub end: f64,
}

impl ValueRange {
    /// Creates a value range.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed distance from `start` to `end`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Smaller of the two bounds.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Larger of the two bounds.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Clamps `value` into the range, whichever way round it is.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min()).min(self.max())
    }

    /// Returns `true` when the span is zero and no mapping is possible.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 12.0)
    }
}

/// Angular sweep of a knob in degrees, `0°` at 12 o'clock, clockwise positive.
///
/// The sweep may be shorter than a full turn (the knob stops at both ends),
/// exactly a full turn (both ends meet at a seam), or longer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleRange {
    /// Angle of the indicator at the start value.
    pub start: f64,
    /// Angle of the indicator at the end value.
    pub end: f64,
}

impl AngleRange {
    /// Creates a sweep from `start` to `end` degrees.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A full turn starting at `start`.
    #[must_use]
    pub const fn from_start(start: f64) -> Self {
        Self {
            start,
            end: start + FULL_TURN,
        }
    }

    /// Angular length of the sweep.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Clamps `angle` into `[start, end]`.
    #[must_use]
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.start).min(self.end)
    }

    /// Returns `true` if the sweep covers at least a full turn.
    #[must_use]
    pub fn is_full_turn(&self) -> bool {
        self.span() >= FULL_TURN
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::from_start(-180.0)
    }
}

/// Immutable configuration of one knob.
///
/// Build it with the consuming `with_*` methods:
///
/// ```
/// use understory_knob::{AngleRange, KnobConfig, ValueRange};
///
/// let config = KnobConfig::new(ValueRange::new(0.0, 100.0))
///     .with_arc(AngleRange::new(-135.0, 135.0))
///     .with_snap(5.0)
///     .with_default_value(50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnobConfig {
    /// Output value bounds.
    pub range: ValueRange,
    /// Angular sweep over which the whole range is mapped.
    pub arc: AngleRange,
    /// Quantization interval, measured from `range.start`.
    pub step: f64,
    /// Whether output values snap to multiples of `step`.
    pub snap: bool,
    /// Value shown before the first interaction; `range.start` when unset.
    pub default_value: Option<f64>,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            range: ValueRange::default(),
            arc: AngleRange::default(),
            step: 1.0,
            snap: false,
            default_value: None,
        }
    }
}

impl KnobConfig {
    /// Configuration over `range` with the default full-turn sweep.
    #[must_use]
    pub fn new(range: ValueRange) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Sets the angular sweep.
    #[must_use]
    pub fn with_arc(mut self, arc: AngleRange) -> Self {
        self.arc = arc;
        self
    }

    /// Enables snapping to multiples of `step`.
    #[must_use]
    pub fn with_snap(mut self, step: f64) -> Self {
        self.step = step;
        self.snap = true;
        self
    }

    /// Turns snapping on or off without touching the step.
    #[must_use]
    pub fn with_snap_enabled(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    /// Sets the value used before the first interaction.
    #[must_use]
    pub fn with_default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// The initial value, clamped into the range.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        let value = self.default_value.unwrap_or(self.range.start);
        if value.is_finite() {
            self.range.clamp(value)
        } else {
            self.range.start
        }
    }

    /// Checks the configuration, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFinite`] if any range or arc bound is NaN or infinite.
    /// - [`ConfigError::InvalidRange`] if the value range has zero span.
    /// - [`ConfigError::InvalidArc`] if the arc does not end after it starts.
    /// - [`ConfigError::InvalidStep`] if snapping is on with a non-positive step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [self.range.start, self.range.end, self.arc.start, self.arc.end];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if self.range.is_degenerate() {
            return Err(ConfigError::InvalidRange {
                value: self.range.start,
            });
        }
        if self.arc.end <= self.arc.start {
            return Err(ConfigError::InvalidArc {
                start: self.arc.start,
                end: self.arc.end,
            });
        }
        if self.snap && !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep { step: self.step });
        }
        Ok(())
    }

    /// Returns a copy with every misconfiguration resolved locally.
    ///
    /// - Non-finite range bounds fall back to the default range.
    /// - A non-finite arc start falls back to the default sweep.
    /// - An arc that does not end after it starts becomes a full turn.
    /// - Snapping with an unusable step is turned off.
    /// - A zero-span range is kept: the mapper then produces a constant.
    ///
    /// Each correction is reported through `log::warn!`.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut config = *self;

        if !(config.range.start.is_finite() && config.range.end.is_finite()) {
            log::warn!(
                "knob value range {:?} is not finite, using {:?}",
                config.range,
                ValueRange::default()
            );
            config.range = ValueRange::default();
        }
        if config.range.is_degenerate() {
            log::warn!(
                "knob value range has zero span at {}, output is constant",
                config.range.start
            );
        }

        if !config.arc.start.is_finite() {
            log::warn!(
                "knob arc start {} is not finite, using {:?}",
                config.arc.start,
                AngleRange::default()
            );
            config.arc = AngleRange::default();
        } else if !(config.arc.end.is_finite() && config.arc.end > config.arc.start) {
            let arc = AngleRange::from_start(config.arc.start);
            log::warn!(
                "knob arc end {} does not lie after start {}, using {}",
                config.arc.end,
                config.arc.start,
                arc.end
            );
            config.arc = arc;
        }

        if config.snap && !(config.step.is_finite() && config.step > 0.0) {
            log::warn!(
                "knob snap step {} is not a positive finite number, snapping disabled",
                config.step
            );
            config.snap = false;
        }

        config
    }
}
