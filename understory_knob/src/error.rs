// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// A knob configuration problem reported by [`KnobConfig::validate`].
///
/// Runtime angle math never fails; these errors only describe configuration.
/// Knobs built from an invalid configuration still work, because
/// [`KnobConfig::sanitized`] resolves each problem with a safe default.
///
/// [`KnobConfig::validate`]: crate::KnobConfig::validate
/// [`KnobConfig::sanitized`]: crate::KnobConfig::sanitized
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The value range has zero span, so no angle can be mapped to it.
    InvalidRange {
        /// The shared start and end value.
        value: f64,
    },
    /// The arc end does not lie after the arc start.
    InvalidArc {
        /// Configured start angle in degrees.
        start: f64,
        /// Configured end angle in degrees.
        end: f64,
    },
    /// Snapping is enabled with a step that is not a positive finite number.
    InvalidStep {
        /// The configured step.
        step: f64,
    },
    /// A bound is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { value } => {
                write!(f, "value range starts and ends at {value}")
            }
            Self::InvalidArc { start, end } => {
                write!(f, "arc end {end}° does not lie after arc start {start}°")
            }
            Self::InvalidStep { step } => {
                write!(f, "snap step {step} is not a positive finite number")
            }
            Self::NonFinite => f.write_str("knob bounds must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
