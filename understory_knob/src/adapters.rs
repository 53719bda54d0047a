// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for event sources.
//!
//! Modules in this file are behind feature flags so `understory_knob` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`ui_events`] (`ui_events_adapter` feature): drive a [`crate::Knob`]
//!   from `ui-events` pointer events.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
