//! Structured logging emitted by the navigation controller.

use panelnav_core::NavigationConfig;
use panelnav_harness::{
    DragScript, ManualAnimator, RecordingHost, controller, finish_animations, panel, play,
    with_captured_logs,
};
use panelnav_runtime::{AnimationId, NavigationController};
use tracing::Level;

#[test]
fn committed_transition_logs_info_in_transition_span() {
    let ((), logs) = with_captured_logs(|| {
        let mut c = controller(&[1]);
        c.push(panel(2), true, true).expect("push starts");
        finish_animations(&mut c);
    });

    let committed = logs.events_with_message("transition committed");
    assert_eq!(committed.len(), 1);
    let event = committed[0];
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.target, "panelnav.nav");
    assert_eq!(event.fields.get("from").map(String::as_str), Some("panel#1"));
    assert_eq!(event.fields.get("to").map(String::as_str), Some("panel#2"));
    assert_eq!(event.span.as_deref(), Some("navigation.transition"));

    let spans = logs.spans_named("navigation.transition");
    assert_eq!(spans.len(), 1);
    assert_eq!(
        spans[0].fields.get("origin").map(String::as_str),
        Some("imperative")
    );
    assert_eq!(logs.spans_named("navigation.command").len(), 1);
}

#[test]
fn interactive_commit_records_outcome() {
    let ((), logs) = with_captured_logs(|| {
        let mut c = controller(&[1, 2]);
        play(&mut c, &DragScript::horizontal().glide(300.0, 4).end(0.0));
        finish_animations(&mut c);
        assert_eq!(c.stack().current_id().0, 1);
    });

    let spans = logs.spans_named("navigation.transition");
    assert_eq!(spans.len(), 1);
    assert_eq!(
        spans[0].fields.get("origin").map(String::as_str),
        Some("interactive")
    );
    assert_eq!(
        spans[0].fields.get("outcome").map(String::as_str),
        Some("complete")
    );
    assert_eq!(logs.events_with_message("transition committed").len(), 1);
}

#[test]
fn busy_rejection_warns_with_command() {
    let ((), logs) = with_captured_logs(|| {
        let mut c = controller(&[1]);
        c.push(panel(2), true, true).expect("push starts");
        assert!(c.pop(true, true).is_err());
    });

    let rejected = logs.events_with_message("navigation rejected: transition in progress");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].level, Level::WARN);
    assert_eq!(rejected[0].fields.get("command").map(String::as_str), Some("pop"));
    assert_eq!(rejected[0].span.as_deref(), Some("navigation.command"));
}

#[test]
fn invalid_argument_warns_with_kind() {
    let ((), logs) = with_captured_logs(|| {
        let mut c = controller(&[1, 2]);
        assert!(c.set_stack(Vec::new(), false, true).is_err());
    });

    let rejected = logs.events_with_message("navigation rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected[0].fields.get("command").map(String::as_str),
        Some("set_stack")
    );
    assert_eq!(rejected[0].span.as_deref(), Some("navigation.command"));
    assert!(rejected[0].fields.contains_key("kind"));
}

#[test]
fn stale_animation_id_warns() {
    let (handled, logs) = with_captured_logs(|| {
        let mut c = controller(&[1]);
        c.animation_finished(AnimationId(9_999))
    });
    assert!(!handled);
    let stale = logs.events_with_message("ignoring unknown or stale animation");
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].level, Level::WARN);
}

#[test]
fn invalid_config_is_reported_once_per_problem() {
    let ((), logs) = with_captured_logs(|| {
        let mut config = NavigationConfig::default();
        config.bounce_resistance = 2.0;
        config.flick_velocity_threshold = -1.0;
        let _c = NavigationController::new(
            config,
            panel(1),
            RecordingHost::new(),
            ManualAnimator::new(),
        );
    });
    assert_eq!(logs.events_with_message("navigation config").len(), 2);
}

#[test]
fn teardown_opens_its_span() {
    let ((), logs) = with_captured_logs(|| {
        let mut c = controller(&[1, 2]);
        play(&mut c, &DragScript::horizontal().glide(120.0, 3).into_samples());
        c.teardown();
    });
    let spans = logs.spans_named("navigation.teardown");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].fields.get("phase").map(String::as_str), Some("tracking"));
    assert_eq!(logs.events_with_message("teardown complete").len(), 1);
}
