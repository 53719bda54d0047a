// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle/value mapping: pure conversions between the value range and the sweep.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::KnobConfig;

/// Bidirectional mapping between a knob's value range and its angular sweep.
///
/// A `Mapper` always holds a [sanitized](KnobConfig::sanitized) configuration,
/// so every conversion is total: a zero-span range maps everything to
/// `range.start` / `arc.start` instead of dividing by zero.
///
/// ```
/// use understory_knob::{AngleRange, KnobConfig, Mapper, ValueRange};
///
/// let mapper = Mapper::new(
///     KnobConfig::new(ValueRange::new(0.0, 100.0)).with_arc(AngleRange::new(0.0, 180.0)),
/// );
/// assert_eq!(mapper.value_to_angle(50.0), 90.0);
/// assert_eq!(mapper.angle_to_value(90.0), 50.0);
/// // Angles past the sweep clamp to its ends.
/// assert_eq!(mapper.angle_to_value(270.0), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    config: KnobConfig,
}

impl Mapper {
    /// Creates a mapper, sanitizing `config` first.
    #[must_use]
    pub fn new(config: KnobConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    /// The sanitized configuration in use.
    #[must_use]
    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Angle of the indicator for `value`.
    ///
    /// No clamping is applied; values outside the range extrapolate past the
    /// ends of the sweep.
    #[must_use]
    pub fn value_to_angle(&self, value: f64) -> f64 {
        let KnobConfig { range, arc, .. } = self.config;
        if range.is_degenerate() {
            return arc.start;
        }
        arc.start + (value - range.start) / range.span() * arc.span()
    }

    /// Value for a final, already resolved `angle`.
    ///
    /// The angle is clamped into the sweep, mapped into the range, snapped
    /// when snapping is enabled, and clamped into the range again. Boundary
    /// crossing must be resolved by the caller beforehand: an angle of `359°`
    /// on a `0°..180°` sweep clamps to `180°` here.
    #[must_use]
    pub fn angle_to_value(&self, angle: f64) -> f64 {
        let KnobConfig { range, arc, .. } = self.config;
        if range.is_degenerate() || !angle.is_finite() {
            return range.start;
        }
        let angle = arc.clamp(angle);
        let value = range.start + (angle - arc.start) / arc.span() * range.span();
        self.snap_value(value)
    }

    /// Quantizes `value` to the nearest multiple of the step, measured from
    /// `range.start`, then clamps it into the range.
    ///
    /// Without snapping this only clamps. Applying it twice gives the same
    /// result as applying it once.
    #[must_use]
    pub fn snap_value(&self, value: f64) -> f64 {
        let KnobConfig {
            range, step, snap, ..
        } = self.config;
        let value = if snap {
            range.start + ((value - range.start) / step).round() * step
        } else {
            value
        };
        range.clamp(value)
    }

    /// Clamps `angle` into the sweep.
    #[must_use]
    pub fn clamp_angle(&self, angle: f64) -> f64 {
        self.config.arc.clamp(angle)
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp_value(&self, value: f64) -> f64 {
        self.config.range.clamp(value)
    }

    /// Position of `value` along the range as a fraction in `[0, 1]`.
    ///
    /// Useful for renderers that fill an arc up to the current value.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let range = self.config.range;
        if range.is_degenerate() || !value.is_finite() {
            return 0.0;
        }
        ((value - range.start) / range.span()).clamp(0.0, 1.0)
    }
}
