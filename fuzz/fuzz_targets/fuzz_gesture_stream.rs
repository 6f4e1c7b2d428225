#![no_main]

use libfuzzer_sys::fuzz_target;
use panelnav_core::{Axis, GesturePhase, GestureSample, NavigationConfig};
use panelnav_runtime::{Availability, GestureAction, GestureContext, GestureStateMachine};

const EXTENT: f64 = 400.0;

fn availability(byte: u8) -> Availability {
    match byte % 3 {
        0 => Availability::Available,
        1 => Availability::Missing,
        _ => Availability::Vetoed,
    }
}

fn phase(byte: u8) -> GesturePhase {
    match byte % 8 {
        0 => GesturePhase::Began,
        1 => GesturePhase::Ended,
        2 => GesturePhase::Cancelled,
        _ => GesturePhase::Changed,
    }
}

fn value(byte: u8, scale: f64) -> f64 {
    match byte {
        255 => f64::NAN,
        254 => f64::INFINITY,
        b => (f64::from(b) - 127.0) * scale,
    }
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the neighbors and the bounce setting.
    let Some((&head, body)) = data.split_first() else {
        return;
    };
    let ctx = GestureContext {
        extent: EXTENT,
        forward: availability(head),
        backward: availability(head / 3),
    };
    let config = NavigationConfig::default().bounces(head & 0x80 != 0);
    let mut machine = GestureStateMachine::new(config);
    let mut staged = false;

    // Each sample is four bytes: phase, translation, velocity, completion hint.
    for chunk in body.chunks_exact(4) {
        let axis = if chunk[0] & 0x40 != 0 {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let sample = GestureSample::new(
            phase(chunk[0]),
            value(chunk[1], 5.0),
            value(chunk[2], 40.0),
            axis,
        );
        for action in machine.process(&sample, &ctx) {
            match action {
                GestureAction::Stage(_) => {
                    assert!(!staged, "staged twice");
                    staged = true;
                }
                GestureAction::Unstage => {
                    assert!(staged, "unstage without stage");
                    staged = false;
                }
                GestureAction::Progress(p) => {
                    assert!(staged, "progress without stage");
                    assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
                }
                GestureAction::Overscroll(offset) => {
                    assert!(!staged, "overscroll while staged");
                    assert!(offset.is_finite(), "non-finite overscroll");
                }
                GestureAction::Release(plan) => {
                    assert!(staged, "release without stage");
                    assert_eq!(plan.target, plan.outcome.target_progress());
                    assert!(machine.begin_finishing().is_some());
                }
                GestureAction::Settle | GestureAction::Ignored(_) => {}
            }
        }
        // Animations finish at arbitrary points in the stream.
        if chunk[3] & 1 != 0 && machine.complete().is_some() {
            staged = false;
        }
        if chunk[3] & 2 != 0 {
            machine.settled();
        }
        assert_eq!(staged, machine.has_transition());
        if let Some(p) = machine.progress() {
            assert!((0.0..=1.0).contains(&p));
        }
    }
});
