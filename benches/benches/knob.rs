// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use understory_knob::{
    AngleRange, DragTracker, Knob, KnobConfig, Mapper, TrackingMode, ValueRange,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

/// A pointer path circling the knob `turns` times in `steps_per_turn` moves
/// per turn, alternating direction each turn.
fn circling_path(turns: usize, steps_per_turn: usize) -> Vec<Point> {
    let center = BOUNDS.center();
    let step = 360.0 / steps_per_turn as f64;
    let mut points = Vec::with_capacity(turns * steps_per_turn);
    for turn in 0..turns {
        let sign = if turn % 2 == 0 { 1.0 } else { -1.0 };
        for i in 0..steps_per_turn {
            let radians = (sign * step * i as f64).to_radians();
            points.push(Point::new(
                center.x + 80.0 * radians.sin(),
                center.y - 80.0 * radians.cos(),
            ));
        }
    }
    points
}

fn configs() -> [(&'static str, KnobConfig); 3] {
    [
        (
            "continuous",
            KnobConfig::new(ValueRange::new(0.0, 1.0)).with_arc(AngleRange::new(-135.0, 135.0)),
        ),
        (
            "snapped",
            KnobConfig::new(ValueRange::new(0.0, 100.0))
                .with_arc(AngleRange::new(0.0, 180.0))
                .with_snap(10.0),
        ),
        ("full_turn", KnobConfig::new(ValueRange::new(0.0, 12.0))),
    ]
}

fn bench_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("knob/mapper");
    let angles: Vec<f64> = (0..1_024).map(|i| -200.0 + f64::from(i) * 0.4).collect();
    group.throughput(Throughput::Elements(angles.len() as u64));

    for (name, config) in configs() {
        let mapper = Mapper::new(config);
        group.bench_with_input(BenchmarkId::new("angle_to_value", name), &angles, |b, angles| {
            b.iter(|| {
                for &angle in angles {
                    black_box(mapper.angle_to_value(black_box(angle)));
                }
            });
        });
    }

    group.finish();
}

fn bench_tracker_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("knob/tracker_update");
    let path = circling_path(4, 256);
    group.throughput(Throughput::Elements(path.len() as u64));

    for mode in [TrackingMode::Absolute, TrackingMode::Relative] {
        for (name, config) in configs() {
            let tracker = DragTracker::new(Mapper::new(config)).with_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), name),
                &path,
                |b, path| {
                    b.iter_batched(
                        || {
                            let mut tracker = tracker;
                            tracker.begin(path[0], Some(BOUNDS.center()), 0.0);
                            tracker
                        },
                        |mut tracker| {
                            for &point in path {
                                black_box(tracker.update(point, None));
                            }
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_knob_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("knob/drag");
    let path = circling_path(4, 256);
    group.throughput(Throughput::Elements(path.len() as u64));

    for (name, config) in configs() {
        group.bench_with_input(BenchmarkId::new("pointer_move", name), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut knob = Knob::new(config).with_on_change(|v| {
                        black_box(v);
                    });
                    knob.set_bounds(Some(BOUNDS));
                    knob.pointer_down(path[0]);
                    knob
                },
                |mut knob| {
                    for &point in path {
                        black_box(knob.pointer_move(point));
                    }
                    knob.pointer_up();
                    black_box(knob.value());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mapper, bench_tracker_update, bench_knob_drag);
criterion_main!(benches);
