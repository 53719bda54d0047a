// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob basics.
//!
//! Drive a half-turn volume knob with a scripted pointer drag and print what
//! the host would see: values, indicator angles and the change callback.
//!
//! Run:
//! - `cargo run -p understory_knob_demos --example knob_basics`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_knob::{AngleRange, CaptureFlag, Knob, KnobConfig, ValueRange};

/// Pointer position `degrees` clockwise from 12 o'clock, `radius` from `center`.
fn around(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = KnobConfig::new(ValueRange::new(0.0, 100.0))
        .with_arc(AngleRange::new(0.0, 180.0))
        .with_snap(10.0)
        .with_default_value(30.0);
    if let Err(err) = config.validate() {
        log::error!("bad knob configuration: {err}");
        return;
    }

    let changes = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&changes);
    let mut knob = Knob::new(config)
        .with_capture(CaptureFlag::new())
        .with_on_change(move |value| {
            counter.set(counter.get() + 1);
            println!("  on_change({value})");
        });

    let bounds = Rect::new(0.0, 0.0, 120.0, 120.0);
    knob.set_bounds(Some(bounds));
    let center = bounds.center();

    println!(
        "Initial: value={} indicator={}° shown as \"{}\"",
        knob.value(),
        knob.indicator_angle(),
        knob.display_value()
    );

    // Press near the top of the face. The value does not jump.
    let press = around(center, 40.0, 10.0);
    log::info!("pressing at {press:?}");
    knob.pointer_down(press);
    println!(
        "Pressed: dragging={} captured={} value={}",
        knob.is_dragging(),
        knob.capture().is_captured(),
        knob.value()
    );

    // Sweep clockwise past the end of the arc, then back past its start.
    for degrees in [60.0, 90.0, 135.0, 200.0, 150.0, 45.0, 0.0, -30.0] {
        let point = around(center, 40.0, degrees);
        let reported = knob.pointer_move(point);
        println!(
            "Move to {degrees:>5}°: value={:>5} indicator={:>6.1}° reported={reported:?}",
            knob.value(),
            knob.indicator_angle()
        );
    }

    // The drag keeps working far outside the knob.
    knob.pointer_move(Point::new(center.x + 500.0, center.y));
    println!("Outside the bounds at 3 o'clock: value={}", knob.value());

    knob.pointer_up();
    println!(
        "Released: value={} indicator={}° captured={} shown as \"{}\"",
        knob.value(),
        knob.indicator_angle(),
        knob.capture().is_captured(),
        knob.display_value()
    );
    println!("Change notifications: {}", changes.get());

    // The host may write the value while idle.
    knob.set_value(75.0);
    println!(
        "External set_value(75): value={} indicator={}°",
        knob.value(),
        knob.indicator_angle()
    );
}
