//! Benchmarks for the drag pipeline.
//!
//! Run with: cargo bench -p panelnav-runtime --bench gesture_bench
//!
//! Covers the pure state machine on its own, the release decision, and a
//! full controller round trip (drag, release, finish) against the recording
//! host.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use panelnav_core::{Axis, GestureSample, NavDirection, NavigationConfig};
use panelnav_harness::{DragScript, controller, finish_animations, play};
use panelnav_runtime::gesture::decision;
use panelnav_runtime::{Availability, GestureContext, GestureStateMachine};

const EXTENT: f64 = 400.0;

fn drag(steps: usize, translation: f64) -> Vec<GestureSample> {
    DragScript::new(Axis::Horizontal)
        .glide(translation, steps)
        .end(0.0)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_state_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/state_machine");
    let ctx = GestureContext {
        extent: EXTENT,
        forward: Availability::Available,
        backward: Availability::Available,
    };

    for steps in [16usize, 128, 1024] {
        let samples = drag(steps, -300.0);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::new("drag", steps), &samples, |b, samples| {
            b.iter(|| {
                let mut machine = GestureStateMachine::new(NavigationConfig::default());
                let mut actions = 0usize;
                for sample in samples {
                    actions += machine.process(black_box(sample), &ctx).len();
                }
                machine.reset();
                black_box(actions)
            })
        });
    }

    // Alternating direction flips restage the neighbor on every sample.
    let flips: Vec<GestureSample> = std::iter::once(GestureSample::began(Axis::Horizontal))
        .chain((0..256).map(|i| {
            let t = if i % 2 == 0 { 120.0 } else { -120.0 };
            GestureSample::changed(t, 0.0, Axis::Horizontal)
        }))
        .collect();
    group.bench_function("direction_flips", |b| {
        b.iter(|| {
            let mut machine = GestureStateMachine::new(NavigationConfig::default());
            for sample in &flips {
                black_box(machine.process(sample, &ctx));
            }
        })
    });

    group.finish();
}

fn bench_release_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/release_plan");
    let momentum = NavigationConfig::default();
    let paging = NavigationConfig::default().paging_enabled(true);

    group.bench_function("momentum", |b| {
        b.iter(|| {
            decision::plan(
                black_box(0.42),
                black_box(-730.0),
                NavDirection::Forward,
                EXTENT,
                &momentum,
                false,
            )
        })
    });
    group.bench_function("paging", |b| {
        b.iter(|| {
            decision::plan(
                black_box(0.42),
                black_box(-730.0),
                NavDirection::Forward,
                EXTENT,
                &paging,
                false,
            )
        })
    });

    group.finish();
}

fn bench_controller_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/round_trip");
    let back = drag(32, 300.0);

    group.bench_function("interactive_pop", |b| {
        b.iter(|| {
            let mut nav = controller(&[1, 2, 3, 4]);
            play(&mut nav, &back);
            black_box(finish_animations(&mut nav));
            black_box(nav.drain_events().len())
        })
    });

    group.bench_function("imperative_push_pop", |b| {
        b.iter(|| {
            let mut nav = controller(&[1]);
            for id in 2..18u64 {
                let _ = nav.push(panelnav_harness::panel(id), true, true);
                finish_animations(&mut nav);
            }
            let _ = nav.pop_to_root(true);
            black_box(finish_animations(&mut nav))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_state_machine,
    bench_release_plan,
    bench_controller_round_trip
);
criterion_main!(benches);
