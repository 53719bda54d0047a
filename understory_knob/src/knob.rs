// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The knob widget model: configuration, drag tracking and the current value.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect};

use crate::capture::{NoCapture, PointerCapture};
use crate::config::KnobConfig;
use crate::display::DisplayValue;
use crate::mapper::Mapper;
use crate::tracker::{DragTracker, TrackingMode};

type ChangeHandler = Box<dyn FnMut(f64)>;

/// A headless rotary knob.
///
/// The host feeds it layout ([`set_bounds`](Self::set_bounds)) and pointer
/// events ([`pointer_down`](Self::pointer_down),
/// [`pointer_move`](Self::pointer_move), [`pointer_up`](Self::pointer_up),
/// [`cancel`](Self::cancel)) and reads back the value and the
/// [`indicator_angle`](Self::indicator_angle) to draw.
///
/// The value is conceptually owned by the host. While idle, the host may
/// write it at any time with [`set_value`](Self::set_value). While a drag is
/// in progress the drag is the only writer.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_knob::{AngleRange, Knob, KnobConfig, ValueRange};
///
/// let config = KnobConfig::new(ValueRange::new(0.0, 100.0))
///     .with_arc(AngleRange::new(0.0, 180.0))
///     .with_snap(10.0);
/// let mut knob = Knob::new(config);
/// knob.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
///
/// assert!(knob.pointer_down(Point::new(50.0, 10.0)));
/// // 3 o'clock is 90°, half of the sweep.
/// assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), Some(50.0));
/// // Past the end of the sweep the knob pegs at its maximum.
/// assert_eq!(knob.pointer_move(Point::new(40.0, 90.0)), Some(100.0));
/// assert_eq!(knob.indicator_angle(), 180.0);
/// knob.pointer_up();
/// ```
pub struct Knob<C = NoCapture> {
    tracker: DragTracker,
    value: f64,
    indicator_angle: f64,
    bounds: Option<Rect>,
    disabled: bool,
    capture: C,
    on_change: Option<ChangeHandler>,
}

impl Knob<NoCapture> {
    /// Creates an idle knob showing the configuration's initial value.
    ///
    /// The configuration is [sanitized](KnobConfig::sanitized) first.
    #[must_use]
    pub fn new(config: KnobConfig) -> Self {
        let mapper = Mapper::new(config);
        let value = mapper.config().initial_value();
        Self {
            tracker: DragTracker::new(mapper),
            value,
            indicator_angle: mapper.value_to_angle(value),
            bounds: None,
            disabled: false,
            capture: NoCapture,
            on_change: None,
        }
    }
}

impl<C: PointerCapture> Knob<C> {
    /// Replaces the pointer capture capability.
    ///
    /// During a drag the old capture is released and the new one acquired,
    /// so each capture sees balanced `acquire`/`release` calls.
    #[must_use]
    pub fn with_capture<D: PointerCapture>(mut self, mut capture: D) -> Knob<D> {
        if self.is_dragging() {
            self.capture.release();
            capture.acquire();
        }
        Knob {
            tracker: self.tracker,
            value: self.value,
            indicator_angle: self.indicator_angle,
            bounds: self.bounds,
            disabled: self.disabled,
            capture,
            on_change: self.on_change,
        }
    }

    /// Sets how pointer motion drives the knob.
    #[must_use]
    pub fn with_tracking_mode(mut self, mode: TrackingMode) -> Self {
        self.tracker = self.tracker.with_mode(mode);
        self
    }

    /// Sets the change callback, see [`set_on_change`](Self::set_on_change).
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(f64) + 'static) -> Self {
        self.set_on_change(on_change);
        self
    }

    /// Sets the callback invoked with the value of every resolved drag move.
    ///
    /// It fires for each move the tracker accepts, including moves that
    /// resolve to the same (snapped or pegged) value as before. It is never
    /// called for [`set_value`](Self::set_value), pointer up or cancellation.
    pub fn set_on_change(&mut self, on_change: impl FnMut(f64) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Removes the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// The sanitized configuration.
    #[must_use]
    pub fn config(&self) -> &KnobConfig {
        self.tracker.mapper().config()
    }

    /// The angle/value mapper.
    #[must_use]
    pub fn mapper(&self) -> &Mapper {
        self.tracker.mapper()
    }

    /// The drag tracker.
    #[must_use]
    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    /// The current tracking mode.
    #[must_use]
    pub fn tracking_mode(&self) -> TrackingMode {
        self.tracker.mode()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Angle in degrees at which to draw the indicator.
    ///
    /// During a drag this is the resolved angle; otherwise it is derived
    /// from the current value.
    #[must_use]
    pub fn indicator_angle(&self) -> f64 {
        self.indicator_angle
    }

    /// Position of the current value along the range, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.mapper().fraction(self.value)
    }

    /// The current value formatted for display.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        DisplayValue::for_config(self.value, self.config())
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Returns `true` if the knob ignores presses.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The knob's on-screen bounds, if laid out.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The pointer capture capability.
    #[must_use]
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Mutable access to the pointer capture capability.
    pub fn capture_mut(&mut self) -> &mut C {
        &mut self.capture
    }

    /// Updates the knob's on-screen bounds from the host's layout.
    ///
    /// The knob turns around the center of these bounds. A drag in progress
    /// keeps the center it started with.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Enables or disables the knob. Disabling during a drag cancels it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.cancel();
        }
    }

    /// Returns `true` if `point` falls on the knob's face.
    ///
    /// The face is the ellipse inscribed in the bounds. Without bounds the
    /// host is trusted to have hit tested already and every point counts.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let Some(bounds) = self.bounds else {
            return true;
        };
        let rx = bounds.width() * 0.5;
        let ry = bounds.height() * 0.5;
        if !(rx > 0.0 && ry > 0.0) {
            return false;
        }
        let d = point - bounds.center();
        let (nx, ny) = (d.x / rx, d.y / ry);
        nx * nx + ny * ny <= 1.0
    }

    /// Writes the value from outside a drag, for example after the host's
    /// state changed.
    ///
    /// The value is clamped into the range and the indicator follows it.
    /// Returns `false` and leaves the knob untouched while a drag is in
    /// progress or if `value` is not finite.
    pub fn set_value(&mut self, value: f64) -> bool {
        if self.is_dragging() {
            log::debug!("ignoring external knob value {value} during a drag");
            return false;
        }
        if !value.is_finite() {
            return false;
        }
        self.value = self.mapper().clamp_value(value);
        self.indicator_angle = self.mapper().value_to_angle(self.value);
        true
    }

    /// Handles a press. Returns `true` if a drag started.
    ///
    /// Presses are ignored when the knob is disabled, already dragging, or
    /// the point is off the knob's face. The press itself never changes the
    /// value.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.disabled || self.is_dragging() || !self.contains(point) {
            return false;
        }
        let center = self.bounds.map(|b| b.center());
        self.tracker.begin(point, center, self.value);
        self.capture.acquire();
        true
    }

    /// Handles a pointer move, wherever the pointer is.
    ///
    /// Returns the resolved value after invoking the change callback. Moves
    /// while idle, moves without geometry and moves exactly on the center
    /// return `None`.
    pub fn pointer_move(&mut self, point: Point) -> Option<f64> {
        let center = self.bounds.map(|b| b.center());
        let resolved = self.tracker.update(point, center)?;
        self.indicator_angle = resolved.angle;
        self.value = resolved.value;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(resolved.value);
        }
        Some(resolved.value)
    }

    /// Handles the pointer being released. Returns `true` if a drag ended.
    ///
    /// The indicator settles on the angle of the final (possibly snapped)
    /// value.
    pub fn pointer_up(&mut self) -> bool {
        if !self.tracker.end() {
            return false;
        }
        self.finish_gesture();
        true
    }

    /// Abandons a drag without reporting a value, for example on focus loss
    /// or when the platform revokes pointer capture. Returns `true` if a drag
    /// was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.tracker.cancel() {
            return false;
        }
        self.finish_gesture();
        true
    }

    fn finish_gesture(&mut self) {
        self.capture.release();
        self.indicator_angle = self.mapper().value_to_angle(self.value);
    }
}

impl<C: fmt::Debug> fmt::Debug for Knob<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Knob")
            .field("tracker", &self.tracker)
            .field("value", &self.value)
            .field("indicator_angle", &self.indicator_angle)
            .field("bounds", &self.bounds)
            .field("disabled", &self.disabled)
            .field("capture", &self.capture)
            .field(
                "on_change",
                &self.on_change.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Rect};

    use super::*;
    use crate::capture::CaptureFlag;
    use crate::config::{AngleRange, ValueRange};

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn half_turn() -> KnobConfig {
        KnobConfig::new(ValueRange::new(0.0, 100.0)).with_arc(AngleRange::new(0.0, 180.0))
    }

    fn laid_out(config: KnobConfig) -> Knob {
        let mut knob = Knob::new(config);
        knob.set_bounds(Some(BOUNDS));
        knob
    }

    #[test]
    fn new_knob_shows_default_value() {
        let knob = Knob::new(half_turn().with_default_value(25.0));
        assert_eq!(knob.value(), 25.0);
        assert_eq!(knob.indicator_angle(), 45.0);
        assert_eq!(knob.fraction(), 0.25);
        assert!(!knob.is_dragging());
    }

    #[test]
    fn press_does_not_change_value() {
        let mut knob = laid_out(half_turn().with_default_value(50.0));
        assert!(knob.pointer_down(Point::new(50.0, 5.0)));
        assert!(knob.is_dragging());
        assert_eq!(knob.value(), 50.0);
        assert_eq!(knob.indicator_angle(), 90.0);
    }

    #[test]
    fn press_off_face_is_ignored() {
        let mut knob = laid_out(half_turn());
        // Corner of the bounding box, outside the inscribed circle.
        assert!(!knob.pointer_down(Point::new(2.0, 2.0)));
        assert!(!knob.is_dragging());
    }

    #[test]
    fn press_without_bounds_is_accepted_and_moves_wait_for_geometry() {
        let mut knob = Knob::new(half_turn());
        assert!(knob.pointer_down(Point::new(0.0, 0.0)));
        assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), None);

        knob.set_bounds(Some(BOUNDS));
        assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), Some(50.0));
    }

    #[test]
    fn every_resolved_move_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut knob = laid_out(half_turn()).with_on_change(move |v| sink.borrow_mut().push(v));

        knob.pointer_down(Point::new(50.0, 5.0));
        assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), Some(50.0));
        // Same direction further out: same value, still reported.
        assert_eq!(knob.pointer_move(Point::new(95.0, 50.0)), Some(50.0));
        assert_eq!(knob.pointer_move(Point::new(40.0, 90.0)), Some(100.0));
        // Pegged at the end: the value repeats and is still reported.
        assert_eq!(knob.pointer_move(Point::new(30.0, 80.0)), Some(100.0));
        // Exactly on the center nothing resolves.
        assert_eq!(knob.pointer_move(Point::new(50.0, 50.0)), None);
        knob.pointer_up();

        assert_eq!(*seen.borrow(), [50.0, 50.0, 100.0, 100.0]);
    }

    #[test]
    fn snapped_moves_within_one_step_still_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut knob = laid_out(half_turn().with_snap(10.0))
            .with_on_change(move |v| sink.borrow_mut().push(v));

        knob.pointer_down(Point::new(50.0, 5.0));
        // 3 o'clock, then a little below it (still value 50), then past the end.
        for p in [
            Point::new(90.0, 50.0),
            Point::new(90.0, 51.0),
            Point::new(90.0, 52.0),
            Point::new(40.0, 90.0),
            Point::new(10.0, 60.0),
        ] {
            assert!(knob.pointer_move(p).is_some(), "no value for {p:?}");
        }
        knob.pointer_up();

        assert_eq!(*seen.borrow(), [50.0, 50.0, 50.0, 100.0, 100.0]);
    }

    #[test]
    fn swapping_capture_mid_drag_keeps_calls_balanced() {
        let mut first = CaptureFlag::new();
        let mut second = CaptureFlag::new();
        {
            let mut knob = laid_out(half_turn()).with_capture(&mut first);
            knob.pointer_down(Point::new(50.0, 5.0));
            let mut knob = knob.with_capture(&mut second);
            assert!(knob.capture().is_captured());
            assert!(knob.pointer_up());
        }
        assert!(!first.is_captured());
        assert_eq!(first.acquisitions(), 1);
        assert!(!second.is_captured());
        assert_eq!(second.acquisitions(), 1);
    }

    #[test]
    fn swapping_capture_while_idle_does_not_acquire() {
        let knob = laid_out(half_turn()).with_capture(CaptureFlag::new());
        assert!(!knob.capture().is_captured());
        assert_eq!(knob.capture().acquisitions(), 0);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut knob = laid_out(half_turn());
        assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), None);
        assert_eq!(knob.value(), 0.0);
    }

    #[test]
    fn pointer_up_settles_indicator_on_snapped_value() {
        let mut knob = laid_out(half_turn().with_snap(10.0));
        knob.pointer_down(Point::new(50.0, 5.0));
        // 3 o'clock is value 50; nudge a little past it.
        let p = Point::new(90.0, 52.0);
        assert_eq!(knob.pointer_move(p), Some(50.0));
        assert!(knob.indicator_angle() > 90.0);

        assert!(knob.pointer_up());
        assert_eq!(knob.indicator_angle(), 90.0);
        assert!(!knob.pointer_up());
    }

    #[test]
    fn cancel_keeps_last_value_without_notifying() {
        let calls = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&calls);
        let mut knob = laid_out(half_turn()).with_on_change(move |_| *counter.borrow_mut() += 1);

        knob.pointer_down(Point::new(50.0, 5.0));
        knob.pointer_move(Point::new(90.0, 50.0));
        assert!(knob.cancel());
        assert!(!knob.cancel());

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(knob.value(), 50.0);
        assert_eq!(knob.pointer_move(Point::new(50.0, 90.0)), None);
    }

    #[test]
    fn set_value_is_ignored_mid_drag() {
        let mut knob = laid_out(half_turn());
        knob.pointer_down(Point::new(50.0, 5.0));
        knob.pointer_move(Point::new(90.0, 50.0));

        assert!(!knob.set_value(10.0));
        assert_eq!(knob.value(), 50.0);

        knob.pointer_up();
        assert!(knob.set_value(10.0));
        assert_eq!(knob.value(), 10.0);
        assert_eq!(knob.indicator_angle(), 18.0);
    }

    #[test]
    fn set_value_clamps_and_rejects_nan() {
        let mut knob = laid_out(half_turn());
        assert!(knob.set_value(150.0));
        assert_eq!(knob.value(), 100.0);
        assert_eq!(knob.indicator_angle(), 180.0);
        assert!(!knob.set_value(f64::NAN));
        assert_eq!(knob.value(), 100.0);
    }

    #[test]
    fn disabled_knob_ignores_press_and_cancels_drag() {
        let mut knob = laid_out(half_turn()).with_capture(CaptureFlag::new());
        knob.set_disabled(true);
        assert!(!knob.pointer_down(Point::new(50.0, 5.0)));

        knob.set_disabled(false);
        assert!(knob.pointer_down(Point::new(50.0, 5.0)));
        assert!(knob.capture().is_captured());

        knob.set_disabled(true);
        assert!(!knob.is_dragging());
        assert!(!knob.capture().is_captured());
    }

    #[test]
    fn capture_is_held_for_the_gesture() {
        let mut knob = laid_out(half_turn()).with_capture(CaptureFlag::new());
        assert!(!knob.capture().is_captured());

        knob.pointer_down(Point::new(50.0, 5.0));
        assert!(knob.capture().is_captured());
        // A second press while dragging neither restarts nor re-acquires.
        assert!(!knob.pointer_down(Point::new(50.0, 5.0)));
        assert_eq!(knob.capture().acquisitions(), 1);

        knob.pointer_up();
        assert!(!knob.capture().is_captured());
    }

    #[test]
    fn display_value_follows_snap_step() {
        let mut knob = laid_out(half_turn().with_snap(0.5));
        knob.set_value(12.5);
        assert_eq!(alloc::format!("{}", knob.display_value()), "12.5");
    }

    #[test]
    fn debug_hides_callback() {
        let knob = Knob::new(half_turn()).with_on_change(|_| {});
        let text = alloc::format!("{knob:?}");
        assert!(text.contains("<function>"), "{text}");
    }
}
