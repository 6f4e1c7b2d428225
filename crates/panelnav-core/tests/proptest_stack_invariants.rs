//! Property-based invariant tests for the panel stack.
//!
//! ## Invariants
//!
//! 1. The stack is never empty, whatever sequence of operations runs.
//! 2. No entry shares an identity with the entry directly below it.
//! 3. The trail head is never the current panel.
//! 4. Rejected operations leave the stack untouched.
//! 5. Trimming to one entry bounds the trail.

use std::rc::Rc;

use panelnav_core::{NavError, Panel, PanelId, PanelRef, PanelStack};
use proptest::prelude::*;

struct P(u64);

impl Panel for P {
    fn id(&self) -> PanelId {
        PanelId(self.0)
    }
}

fn panel(id: u64) -> PanelRef {
    Rc::new(P(id))
}

#[derive(Debug, Clone)]
enum Op {
    Push(u64),
    PushUnfocused(u64),
    Pop,
    PopTo(u64),
    PopToRoot,
    SetStack(Vec<u64>),
    DiscardForward,
    Trim,
}

// ── Strategies ────────────────────────────────────────────────────────────

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..8).prop_map(Op::Push),
        1 => (0u64..8).prop_map(Op::PushUnfocused),
        3 => Just(Op::Pop),
        1 => (0u64..8).prop_map(Op::PopTo),
        1 => Just(Op::PopToRoot),
        1 => prop::collection::vec(0u64..8, 0..5).prop_map(Op::SetStack),
        1 => Just(Op::DiscardForward),
        1 => Just(Op::Trim),
    ]
}

fn snapshot(stack: &PanelStack) -> (Vec<PanelId>, Vec<PanelId>) {
    (
        stack.ids(),
        stack.trail().iter().map(|p| p.id()).collect(),
    )
}

fn apply(stack: &mut PanelStack, op: &Op) -> Result<(), NavError> {
    match op {
        Op::Push(id) => stack.push(panel(*id)),
        Op::PushUnfocused(id) => stack.push_unfocused(panel(*id)),
        Op::Pop => {
            stack.pop();
            Ok(())
        }
        Op::PopTo(id) => stack.pop_to(PanelId(*id)).map(|_| ()),
        Op::PopToRoot => {
            stack.pop_to_root();
            Ok(())
        }
        Op::SetStack(ids) => stack.set_stack(ids.iter().map(|&i| panel(i)).collect()),
        Op::DiscardForward => {
            stack.discard_forward();
            Ok(())
        }
        Op::Trim => {
            stack.trim_trail(1);
            Ok(())
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn stack_is_never_empty(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut stack = PanelStack::new(panel(100));
        for op in &ops {
            let _ = apply(&mut stack, op);
            prop_assert!(stack.depth() >= 1, "empty after {op:?}");
        }
    }

    #[test]
    fn no_adjacent_duplicates(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut stack = PanelStack::new(panel(100));
        for op in &ops {
            let _ = apply(&mut stack, op);
            let ids = stack.ids();
            for w in ids.windows(2) {
                prop_assert_ne!(w[0], w[1], "adjacent duplicate after {:?}", op);
            }
        }
    }

    #[test]
    fn trail_head_is_not_current(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut stack = PanelStack::new(panel(100));
        for op in &ops {
            let _ = apply(&mut stack, op);
            if let Some(head) = stack.forward() {
                prop_assert_ne!(head.id(), stack.current_id(), "after {:?}", op);
            }
        }
    }

    #[test]
    fn rejected_ops_leave_stack_untouched(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut stack = PanelStack::new(panel(100));
        for op in &ops {
            let before = snapshot(&stack);
            if apply(&mut stack, op).is_err() {
                prop_assert_eq!(snapshot(&stack), before, "mutated by rejected {:?}", op);
            }
        }
    }

    #[test]
    fn trim_bounds_trail(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut stack = PanelStack::new(panel(100));
        for op in &ops {
            let _ = apply(&mut stack, op);
        }
        stack.trim_trail(1);
        prop_assert!(stack.trail().len() <= 1);
    }
}
