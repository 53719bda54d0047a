// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for `ui-events` pointer events.
//!
//! ## Feature
//!
//! Enable with `ui_events_adapter`.
//!
//! ## Notes
//!
//! Mouse, pen and touch all arrive as [`PointerEvent`]s, so one mapping
//! covers them. Positions are taken in logical coordinates, which must match
//! the space of the bounds passed to [`Knob::set_bounds`].

use ui_events::pointer::PointerEvent;

use crate::capture::PointerCapture;
use crate::knob::Knob;

impl<C: PointerCapture> Knob<C> {
    /// Feeds one pointer event to the knob.
    ///
    /// - `Down` starts a drag if it lands on the knob.
    /// - `Move` resolves a new angle while dragging.
    /// - `Up` ends the drag.
    /// - `Cancel` abandons the drag without a final value.
    ///
    /// Returns the resolved value for a `Move` during a drag, `None` otherwise.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Option<f64> {
        match event {
            PointerEvent::Down(e) => {
                self.pointer_down(e.state.logical_point());
                None
            }
            PointerEvent::Move(e) => self.pointer_move(e.current.logical_point()),
            PointerEvent::Up(_) => {
                self.pointer_up();
                None
            }
            PointerEvent::Cancel(_) => {
                self.cancel();
                None
            }
            _ => None,
        }
    }
}
