#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use panelnav_core::{Axis, GesturePhase, GestureSample, PanelId};
use panelnav_harness::{check_invariants, controller, panel, panels};

#[derive(Debug, Arbitrary)]
enum Op {
    Push { id: u8, animated: bool, focused: bool },
    Pop { animated: bool, focused: bool },
    PopTo { id: u8, animated: bool },
    PopToRoot { animated: bool },
    SetStack { ids: Vec<u8>, animated: bool, focused: bool },
    Drag { phase: u8, translation: i16, velocity: i16 },
    Finish,
    Teardown,
    Extent(u16),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut c = controller(&[1, 2]);
    for op in ops.iter().take(256) {
        match op {
            Op::Push { id, animated, focused } => {
                let _ = c.push(panel(u64::from(id % 8)), *animated, *focused);
            }
            Op::Pop { animated, focused } => {
                let _ = c.pop(*animated, *focused);
            }
            Op::PopTo { id, animated } => {
                let _ = c.pop_to(PanelId(u64::from(id % 8)), *animated);
            }
            Op::PopToRoot { animated } => {
                let _ = c.pop_to_root(*animated);
            }
            Op::SetStack { ids, animated, focused } => {
                let ids: Vec<u64> = ids.iter().take(6).map(|i| u64::from(i % 8)).collect();
                let _ = c.set_stack(panels(&ids), *animated, *focused);
            }
            Op::Drag { phase, translation, velocity } => {
                let phase = match phase % 6 {
                    0 => GesturePhase::Began,
                    1 => GesturePhase::Ended,
                    2 => GesturePhase::Cancelled,
                    _ => GesturePhase::Changed,
                };
                c.handle_gesture(GestureSample::new(
                    phase,
                    f64::from(*translation) / 32.0,
                    f64::from(*velocity),
                    Axis::Horizontal,
                ));
            }
            Op::Finish => {
                if let Some(id) = c.animator_mut().pop_running() {
                    c.animation_finished(id);
                }
            }
            Op::Teardown => c.teardown(),
            Op::Extent(extent) => c.set_container_extent(f64::from(*extent)),
        }
        if let Err(violation) = check_invariants(&c) {
            panic!("{op:?}: {violation}");
        }
    }
});
