#![forbid(unsafe_code)]

//! Ready-made controllers over the recording host and manual animator.

use panelnav_core::{GestureSample, NavigationConfig};
use panelnav_runtime::NavigationController;

use crate::animator::ManualAnimator;
use crate::host::RecordingHost;
use crate::panel::panels;

/// Controller type used throughout the tests.
pub type TestController = NavigationController<RecordingHost, ManualAnimator>;

/// Container extent fixtures use.
pub const EXTENT: f64 = 400.0;

/// Upper bound on animations finished by [`finish_animations`].
const MAX_FINISHED: usize = 64;

/// A controller over plain panels `ids` (root first), laid out at [`EXTENT`].
#[must_use]
pub fn controller(ids: &[u64]) -> TestController {
    controller_with(NavigationConfig::default(), ids)
}

/// Like [`controller`], with explicit tunables.
#[must_use]
pub fn controller_with(config: NavigationConfig, ids: &[u64]) -> TestController {
    let mut c = NavigationController::with_stack(
        config,
        panels(ids),
        RecordingHost::new(),
        ManualAnimator::new(),
    )
    .unwrap_or_else(|err| panic!("invalid fixture stack {ids:?}: {err}"));
    c.set_container_extent(EXTENT);
    c
}

/// Feed every sample in order.
pub fn play(c: &mut TestController, samples: &[GestureSample]) {
    for sample in samples {
        c.handle_gesture(*sample);
    }
}

/// Report running animations finished, oldest first, until none remain.
///
/// Returns how many were reported.
pub fn finish_animations(c: &mut TestController) -> usize {
    let mut finished = 0;
    while finished < MAX_FINISHED {
        let Some(id) = c.animator_mut().pop_running() else {
            break;
        };
        c.animation_finished(id);
        finished += 1;
    }
    finished
}
