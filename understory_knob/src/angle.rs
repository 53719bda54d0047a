// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degree helpers shared by the mapper and the drag tracker.
//!
//! All knob angles are expressed in degrees in screen space: `0°` points at
//! 12 o'clock and angles grow clockwise (the y axis grows downward). Only
//! [`pointer_angle`] touches trigonometry; everything else is plain degree
//! arithmetic.
//!
//! Rust's `%` is a remainder, not a modulo, so `-1.0 % 360.0` is `-1.0`.
//! [`normalize_degrees`] folds the result back into `[0, 360)`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Folds any finite angle into `[0, 360)`.
///
/// ```
/// use understory_knob::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-1.0), 359.0);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN;
    // `-1e-20 % 360 + 360` rounds to exactly 360.
    if folded >= FULL_TURN { 0.0 } else { folded }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
#[must_use]
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let delta = normalize_degrees(to - from);
    if delta > FULL_TURN / 2.0 {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// Returns the representative of `raw` (modulo 360) closest to `reference`.
///
/// This is continuous unwrapping: an angle just below a seam stays just below
/// it instead of jumping a full turn.
///
/// ```
/// use understory_knob::angle::unwrap_near;
///
/// // 350° seen from 0° is 10° counter-clockwise, not deep into the turn.
/// assert_eq!(unwrap_near(350.0, 0.0), -10.0);
/// // -170° seen from 170° continues past 180°.
/// assert_eq!(unwrap_near(-170.0, 170.0), 190.0);
/// ```
#[must_use]
pub fn unwrap_near(raw: f64, reference: f64) -> f64 {
    reference + shortest_delta(reference, raw)
}

/// Angle of `point` around `center`, in `[0, 360)`.
///
/// 12 o'clock maps to `0°`, 3 o'clock to `90°` and so on clockwise. Returns
/// `None` when the direction is undefined: the point sits exactly on the
/// center, or either coordinate is not finite.
///
/// ```
/// use kurbo::Point;
/// use understory_knob::angle::pointer_angle;
///
/// let center = Point::new(50.0, 50.0);
/// assert_eq!(pointer_angle(center, Point::new(50.0, 0.0)), Some(0.0));
/// assert_eq!(pointer_angle(center, Point::new(100.0, 50.0)), Some(90.0));
/// assert_eq!(pointer_angle(center, center), None);
/// ```
#[must_use]
pub fn pointer_angle(center: Point, point: Point) -> Option<f64> {
    let delta = point - center;
    if !delta.is_finite() || (delta.x == 0.0 && delta.y == 0.0) {
        return None;
    }
    let degrees = delta.y.atan2(delta.x).to_degrees() + 90.0;
    Some(normalize_degrees(degrees))
}

/// Converts a knob angle into radians, for renderers that rotate an indicator.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}
