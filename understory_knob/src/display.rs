// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text formatting of knob values.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::KnobConfig;

/// Most decimals [`DisplayValue::for_config`] will pick for a fine step.
const MAX_PRECISION: usize = 6;

/// A knob value paired with the number of decimals to show.
///
/// ```
/// use understory_knob::{DisplayValue, KnobConfig, ValueRange};
///
/// let smooth = KnobConfig::new(ValueRange::new(0.0, 1.0));
/// assert_eq!(DisplayValue::for_config(0.4, &smooth).to_string(), "0.4");
///
/// let stepped = KnobConfig::new(ValueRange::new(0.0, 1.0)).with_snap(0.25);
/// assert_eq!(DisplayValue::for_config(0.75, &stepped).to_string(), "0.75");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayValue {
    value: f64,
    precision: usize,
}

impl DisplayValue {
    /// Formats `value` with exactly `precision` decimals.
    #[must_use]
    pub fn new(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }

    /// Picks the precision from the configuration.
    ///
    /// Continuous knobs show one decimal. Snapping knobs show as many decimals
    /// as the step needs: none for an integral step, two for `0.25`.
    #[must_use]
    pub fn for_config(value: f64, config: &KnobConfig) -> Self {
        let precision = if config.snap && config.step.is_finite() && config.step > 0.0 {
            step_precision(config.step)
        } else {
            1
        };
        Self::new(value, precision)
    }

    /// The value being shown.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of decimals shown.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing "-0".
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{:.*}", self.precision, value)
    }
}

fn step_precision(step: f64) -> usize {
    let mut scaled = step;
    for precision in 0..MAX_PRECISION {
        if (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs() {
            return precision;
        }
        scaled *= 10.0;
    }
    MAX_PRECISION
}
