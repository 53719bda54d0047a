// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-turn knob and the seam.
//!
//! A 12-position knob sweeping a full turn from 6 o'clock has both ends of its
//! range at the same screen angle. Crossing that seam must peg the knob on the
//! side it came from instead of jumping to the opposite end. The same path is
//! replayed with absolute and relative tracking, with drag logging enabled.
//!
//! Run:
//! - `cargo run -p understory_knob_demos --example knob_full_turn`

use kurbo::{Point, Rect};
use tracing_subscriber::filter::LevelFilter;
use understory_knob::{DragTracker, Knob, KnobConfig, Mapper, TrackingMode, ValueRange};

fn around(center: Point, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + 30.0 * radians.sin(),
        center.y - 30.0 * radians.cos(),
    )
}

fn replay(mode: TrackingMode, bounds: Rect, path: &[f64]) {
    println!("== {mode:?} tracking ==");
    let config = KnobConfig::new(ValueRange::new(0.0, 12.0)).with_snap(1.0);
    let mut knob = Knob::new(config).with_tracking_mode(mode);
    knob.set_bounds(Some(bounds));
    knob.set_value(11.0);

    let center = bounds.center();
    knob.pointer_down(around(center, 150.0));
    for &degrees in path {
        knob.pointer_move(around(center, degrees));
        println!(
            "  pointer {degrees:>6.1}°  ->  value {:>4}  indicator {:>7.2}°",
            knob.display_value(),
            knob.indicator_angle()
        );
    }
    knob.pointer_up();
    println!("  released at {}", knob.display_value());
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let bounds = Rect::new(0.0, 0.0, 80.0, 80.0);
    // Walk clockwise towards 6 o'clock and keep going across it.
    let path = [150.0, 165.0, 175.0, 179.0, 185.0, 200.0, 240.0, 300.0];
    replay(TrackingMode::Absolute, bounds, &path);
    replay(TrackingMode::Relative, bounds, &path);

    // The tracker on its own, reporting which end a move pegged at.
    println!("== Resolver details ==");
    let mut tracker = DragTracker::new(Mapper::new(KnobConfig::new(ValueRange::new(0.0, 12.0))));
    let center = bounds.center();
    tracker.begin(around(center, 170.0), Some(center), 11.5);
    for degrees in [175.0, 190.0, 120.0, -175.0] {
        if let Some(r) = tracker.update(around(center, degrees), None) {
            println!(
                "  raw {:>6.1}°  unwrapped {:>7.1}°  angle {:>6.1}°  value {:>5.2}  pegged {:?}",
                r.raw, r.unwrapped, r.angle, r.value, r.pegged
            );
        }
    }
    tracker.end();
}
