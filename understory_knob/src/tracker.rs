// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: turn pointer positions into resolved knob angles.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragTracker::begin`], passing the knob's current
//!    value. The tracker anchors itself to where the indicator is drawn, not to
//!    where the pointer went down.
//! 2) On each move, call [`DragTracker::update`]. It returns a [`Resolved`]
//!    angle and value, or `None` when the move cannot be interpreted (missing
//!    geometry, pointer exactly on the center).
//! 3) Finish with [`DragTracker::end`] or [`DragTracker::cancel`].
//!
//! ## Boundary resolution
//!
//! A pointer angle is only known modulo 360°. Each raw angle is unwrapped to
//! the representative closest to the previous resolved angle, so moving just
//! below the start of the sweep reads as "slightly below the start" rather
//! than "almost a full turn later". Anything below the start then pegs at the
//! start, anything above the end pegs at the end: the side the pointer
//! overshot decides, never the numerically nearer bound.
//!
//! A pegged knob keeps unwrapping from the pegged angle. If the pointer keeps
//! going the wrong way round, through the dead zone and into the far side of
//! the sweep, the knob stays pegged until the pointer comes within half a turn
//! of the pegged end by the short way. It then jumps straight to the pointer.
//!
//! ```
//! use kurbo::Point;
//! use understory_knob::{AngleRange, DragTracker, KnobConfig, Mapper, ValueRange};
//!
//! let mapper = Mapper::new(
//!     KnobConfig::new(ValueRange::new(0.0, 100.0)).with_arc(AngleRange::new(0.0, 180.0)),
//! );
//! let mut tracker = DragTracker::new(mapper);
//! let center = Point::new(0.0, 0.0);
//!
//! tracker.begin(Point::new(0.0, -10.0), Some(center), 0.0);
//!
//! // 3 o'clock is 90°, half way.
//! let r = tracker.update(Point::new(10.0, 0.0), None).unwrap();
//! assert_eq!(r.value, 50.0);
//!
//! // Back past 12 o'clock into the dead zone: pegs at the start, not the end.
//! tracker.update(Point::new(0.0, -10.0), None);
//! let r = tracker.update(Point::new(-1.0, -10.0), None).unwrap();
//! assert_eq!(r.angle, 0.0);
//! assert_eq!(r.value, 0.0);
//!
//! assert!(tracker.end());
//! assert!(!tracker.is_dragging());
//! ```

use kurbo::Point;

use crate::angle::{pointer_angle, shortest_delta};
use crate::mapper::Mapper;

/// How pointer motion drives the knob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingMode {
    /// The indicator follows the pointer's angle around the center.
    ///
    /// Pressing never changes the value; the first move turns the knob to the
    /// pointer's direction (unwrapped near the current indicator).
    #[default]
    Absolute,
    /// The indicator turns by the pointer's angular motion since the previous
    /// event, wherever on the face the gesture started.
    Relative,
}

/// Which end of the sweep a resolved angle is pegged at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The start of the sweep (minimum position).
    Start,
    /// The end of the sweep (maximum position).
    End,
}

/// Transient state of one drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Knob center used for the whole gesture, once known.
    pub center: Option<Point>,
    /// Angle accepted on the previous event.
    pub last_angle: f64,
    /// Raw pointer angle on the previous event, for relative tracking.
    pub last_raw: Option<f64>,
}

/// Whether a gesture is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TrackerState {
    /// No gesture; pointer moves are ignored.
    #[default]
    Idle,
    /// A gesture is in progress.
    Dragging(DragSession),
}

/// Result of resolving one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// Pointer angle in `[0, 360)`, as measured.
    pub raw: f64,
    /// Candidate angle after unwrapping, before boundary resolution.
    pub unwrapped: f64,
    /// Final angle, inside the sweep.
    pub angle: f64,
    /// Value for `angle`, snapped when snapping is enabled.
    pub value: f64,
    /// Set when the candidate overshot an end of the sweep.
    pub pegged: Option<Bound>,
}

/// State machine for knob drag gestures.
#[derive(Clone, Copy, Debug)]
pub struct DragTracker {
    mapper: Mapper,
    mode: TrackingMode,
    state: TrackerState,
}

impl DragTracker {
    /// Creates an idle tracker using absolute tracking.
    #[must_use]
    pub fn new(mapper: Mapper) -> Self {
        Self {
            mapper,
            mode: TrackingMode::default(),
            state: TrackerState::Idle,
        }
    }

    /// Sets the tracking mode.
    #[must_use]
    pub fn with_mode(mut self, mode: TrackingMode) -> Self {
        self.mode = mode;
        self
    }

    /// The mapper used to convert resolved angles into values.
    #[must_use]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// The tracking mode.
    #[must_use]
    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// The active session, if dragging.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            TrackerState::Dragging(session) => Some(session),
            TrackerState::Idle => None,
        }
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging(_))
    }

    /// Starts a gesture at `press` with the knob currently showing `value`.
    ///
    /// `center` may be `None` if the knob's geometry is not known yet; it is
    /// then taken from the first [`update`](Self::update) that provides one.
    /// Starting while already dragging restarts the gesture.
    pub fn begin(&mut self, press: Point, center: Option<Point>, value: f64) {
        let value = self.mapper.clamp_value(value);
        let last_angle = self.mapper.clamp_angle(self.mapper.value_to_angle(value));
        let last_raw = center.and_then(|c| pointer_angle(c, press));
        log::debug!("knob drag began at {last_angle}° (value {value})");
        self.state = TrackerState::Dragging(DragSession {
            center,
            last_angle,
            last_raw,
        });
    }

    /// Resolves a pointer move.
    ///
    /// `center` is the knob's current center from the host's layout. It is
    /// only consulted while the session has no center yet; after that the
    /// gesture keeps the center it started with.
    ///
    /// Returns `None` when idle, when no center is known, when the pointer
    /// sits exactly on the center, or for the first move of a relative drag
    /// that began without geometry.
    pub fn update(&mut self, point: Point, center: Option<Point>) -> Option<Resolved> {
        let TrackerState::Dragging(session) = &mut self.state else {
            return None;
        };
        if session.center.is_none() {
            session.center = center;
        }
        let raw = pointer_angle(session.center?, point)?;
        let arc = self.mapper.config().arc;

        let unwrapped = match self.mode {
            TrackingMode::Absolute => {
                let delta = shortest_delta(session.last_angle, raw);
                // Half a turn away from a pegged start is ambiguous; stay pegged.
                if delta == 180.0 && session.last_angle <= arc.start {
                    session.last_angle - delta
                } else {
                    session.last_angle + delta
                }
            }
            TrackingMode::Relative => {
                let previous = session.last_raw.replace(raw)?;
                session.last_angle + shortest_delta(previous, raw)
            }
        };

        let (angle, pegged) = if unwrapped < arc.start {
            (arc.start, Some(Bound::Start))
        } else if unwrapped > arc.end {
            (arc.end, Some(Bound::End))
        } else {
            (unwrapped, None)
        };
        session.last_angle = angle;

        let value = self.mapper.angle_to_value(angle);
        log::trace!("knob move: raw {raw}°, unwrapped {unwrapped}°, resolved {angle}° -> {value}");
        Some(Resolved {
            raw,
            unwrapped,
            angle,
            value,
            pegged,
        })
    }

    /// Ends the gesture normally. Returns `true` if a gesture was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            log::debug!("knob drag ended");
        }
        self.state = TrackerState::Idle;
        was_dragging
    }

    /// Abandons the gesture without producing a value.
    ///
    /// Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            log::debug!("knob drag cancelled");
        }
        self.state = TrackerState::Idle;
        was_dragging
    }
}
