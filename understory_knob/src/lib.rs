// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Knob: a headless rotary knob.
//!
//! This crate turns pointer drags around a circular control into a bounded,
//! optionally quantized value, and keeps an indicator angle in sync with that
//! value. It focuses on:
//! - Converting between a value range and an angular sweep ([`Mapper`]).
//! - Resolving pointer angles against the sweep while dragging
//!   ([`DragTracker`]), including the wrap-around cases where naive
//!   modular arithmetic sends the knob to the wrong end.
//! - A small widget model ([`Knob`]) that owns the drag state, the current
//!   value and the change callback.
//!
//! It does **not** draw anything. Callers are expected to:
//! - Lay the knob out and pass its bounds to [`Knob::set_bounds`].
//! - Route pointer events into the knob, and keep routing moves while a drag
//!   is active even once the pointer leaves the knob ([`PointerCapture`]).
//! - Rotate their indicator by [`Knob::indicator_angle`].
//!
//! ## Angles
//!
//! Angles are in degrees, `0°` at 12 o'clock, growing clockwise in screen
//! space. A sweep such as `-135°..135°` leaves a dead zone at the bottom; a
//! sweep of exactly `360°` has a seam where both ends meet.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_knob::{AngleRange, Knob, KnobConfig, ValueRange};
//!
//! let config = KnobConfig::new(ValueRange::new(0.0, 100.0))
//!     .with_arc(AngleRange::new(0.0, 180.0));
//! let mut knob = Knob::new(config);
//! knob.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! knob.pointer_down(Point::new(50.0, 10.0));
//! // Pointer at 3 o'clock: half way through the sweep.
//! assert_eq!(knob.pointer_move(Point::new(90.0, 50.0)), Some(50.0));
//! // Back past 12 o'clock: the knob pegs at its minimum, never its maximum.
//! knob.pointer_move(Point::new(50.0, 10.0));
//! knob.pointer_move(Point::new(45.0, 10.0));
//! assert_eq!(knob.value(), 0.0);
//! knob.pointer_up();
//! ```
//!
//! ## Misconfiguration
//!
//! A UI control should not fail while rendering, so configuration problems
//! are resolved locally: [`KnobConfig::sanitized`] turns an inverted sweep
//! into a full turn and disables snapping with an unusable step, logging a
//! warning through the `log` facade. [`KnobConfig::validate`] reports the
//! same problems as a [`ConfigError`] for callers that prefer to reject them.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//! - `ui_events_adapter`: `Knob::handle_pointer_event` for `ui-events` pointer events.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod angle;
mod capture;
mod config;
mod display;
mod error;
mod knob;
mod mapper;
pub mod tracker;

pub use capture::{CaptureFlag, NoCapture, PointerCapture};
pub use config::{AngleRange, KnobConfig, ValueRange};
pub use display::DisplayValue;
pub use error::ConfigError;
pub use knob::Knob;
pub use mapper::Mapper;
pub use tracker::{Bound, DragSession, DragTracker, Resolved, TrackerState, TrackingMode};
