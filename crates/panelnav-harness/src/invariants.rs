#![forbid(unsafe_code)]

//! Consistency checks between the stack, the tiling window and the host.

use crate::fixture::TestController;

/// Check every cross-component invariant. Returns the first violation.
pub fn check_invariants(c: &TestController) -> Result<(), String> {
    let stack = c.stack();
    if stack.panels().is_empty() {
        return Err("panel stack is empty".into());
    }
    if let Some(w) = stack.panels().windows(2).find(|w| w[0].id() == w[1].id()) {
        return Err(format!("adjacent duplicate {}", w[0].id()));
    }
    if stack.forward().is_some_and(|f| f.id() == stack.current_id()) {
        return Err(format!("trail head {} is the current panel", stack.current_id()));
    }
    if stack.trail().len() > 1 {
        return Err(format!("trail holds {} panels", stack.trail().len()));
    }

    let expected_views = 1 + usize::from(c.transition().is_some());
    if c.materialized_views() != expected_views {
        return Err(format!(
            "{} views materialized, expected {expected_views}",
            c.materialized_views()
        ));
    }
    if c.host().live_count() != c.materialized_views() {
        return Err(format!(
            "host has {} live views, tiling window has {}",
            c.host().live_count(),
            c.materialized_views()
        ));
    }
    if c.host().double_releases() != 0 {
        return Err(format!("{} views released twice", c.host().double_releases()));
    }
    if c.tiling().current().id() != stack.current_id() {
        return Err(format!(
            "tiling shows {}, stack top is {}",
            c.tiling().current().id(),
            stack.current_id()
        ));
    }
    if let Some(t) = c.transition() {
        if t.from != stack.current_id() {
            return Err(format!("transition leaves {} but top is {}", t.from, stack.current_id()));
        }
        if !(0.0..=1.0).contains(&t.progress) {
            return Err(format!("progress {} out of range", t.progress));
        }
    }
    Ok(())
}

/// Panic with the first violated invariant.
#[track_caller]
pub fn assert_invariants(c: &TestController) {
    if let Err(violation) = check_invariants(c) {
        panic!("invariant violated: {violation}\n{c:#?}");
    }
}
