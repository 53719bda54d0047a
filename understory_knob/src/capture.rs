// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture: the host capability that keeps move events flowing.
//!
//! While a knob is dragged it needs every pointer move, even once the pointer
//! has left the knob's bounds, until the pointer is released. How that is
//! arranged is up to the host: a full-window transparent overlay, a
//! platform pointer-capture API, or window-level listeners. The knob only
//! tells the host when to start and stop.

/// Host capability for routing all pointer moves to a dragged knob.
///
/// [`Knob`](crate::Knob) calls [`acquire`](Self::acquire) when a drag starts
/// and [`release`](Self::release) exactly once when it ends, whether by
/// pointer up, cancellation or the knob being disabled.
pub trait PointerCapture {
    /// Start delivering every pointer move and the final pointer up.
    fn acquire(&mut self);

    /// Stop the delivery started by [`acquire`](Self::acquire).
    fn release(&mut self);
}

/// Capture that does nothing, for hosts that already route events globally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

/// Capture that records whether it is held.
///
/// Hosts that poll (for example to size an overlay each frame) can read
/// [`is_captured`](Self::is_captured) instead of implementing the trait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureFlag {
    captured: bool,
    acquisitions: u32,
}

impl CaptureFlag {
    /// Creates a released flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a drag holds the capture.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Number of times the capture has been acquired.
    #[must_use]
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions
    }
}

impl PointerCapture for CaptureFlag {
    fn acquire(&mut self) {
        self.captured = true;
        self.acquisitions = self.acquisitions.saturating_add(1);
    }

    fn release(&mut self) {
        self.captured = false;
    }
}

impl<C: PointerCapture + ?Sized> PointerCapture for &mut C {
    fn acquire(&mut self) {
        (**self).acquire();
    }

    fn release(&mut self) {
        (**self).release();
    }
}
