//! Timer driving the rotator.
//!
//! One tokio task per active rotator. The task sleeps until the next
//! deadline, applies a single tick and pushes the new frame to the surface.
//! The state sits behind a mutex with an `active` flag: a tick checks the
//! flag under the lock before mutating, and `deactivate()` clears it under
//! the same lock, so no frame reaches the surface once `deactivate()`
//! has returned.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::motion::MotionPreference;
use crate::ui::mvi::Reducer;

use super::intent::RotatorIntent;
use super::reducer::RotatorReducer;
use super::state::{Phase, RotationState};
use super::timings::RotationTimings;

/// What the surface should display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleFrame {
    pub text: String,
    pub caret_visible: bool,
}

impl TitleFrame {
    fn animated(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret_visible: true,
        }
    }

    fn still(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret_visible: false,
        }
    }
}

/// Rendering surface for rotator frames.
///
/// `present` is called with the rotator's lock held; implementations must
/// not call back into the rotator.
pub trait TitleSurface: Send + Sync + 'static {
    fn present(&self, frame: TitleFrame);
}

struct Shared {
    state: RotationState,
    active: bool,
}

pub struct TitleRotator {
    shared: Arc<Mutex<Shared>>,
    surface: Arc<dyn TitleSurface>,
    timings: RotationTimings,
    task: Option<JoinHandle<()>>,
}

impl TitleRotator {
    pub fn new(
        state: RotationState,
        timings: RotationTimings,
        surface: Arc<dyn TitleSurface>,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state,
                active: false,
            })),
            surface,
            timings,
            task: None,
        }
    }

    /// Start animating on `runtime`.
    ///
    /// The motion preference is sampled once here. With reduced motion the
    /// full current title is presented without a caret and no timer is
    /// scheduled. Calling `activate` on an active rotator does nothing.
    pub fn activate(&mut self, runtime: &Handle, motion: &dyn MotionPreference) {
        let mut shared = self.shared.lock();
        if shared.active {
            return;
        }
        shared.active = true;

        if motion.prefers_reduced_motion() {
            shared.state = std::mem::take(&mut shared.state).pinned();
            self.surface.present(TitleFrame::still(shared.state.displayed()));
            tracing::info!(
                title = shared.state.current_title(),
                "Reduced motion requested, title rotation disabled"
            );
            return;
        }

        self.surface
            .present(TitleFrame::animated(shared.state.displayed()));
        let phase = shared.state.phase();
        drop(shared);

        let task = runtime.spawn(run_rotation(
            Arc::clone(&self.shared),
            Arc::clone(&self.surface),
            self.timings,
            phase,
            Instant::now(),
        ));
        self.task = Some(task);
        tracing::debug!("Title rotator activated");
    }

    /// Stop animating and cancel the pending timer.
    pub fn deactivate(&mut self) {
        let was_active = {
            let mut shared = self.shared.lock();
            std::mem::replace(&mut shared.active, false)
        };
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if was_active {
            tracing::debug!("Title rotator deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.shared.lock().active
    }

    /// Copy of the current rotation state.
    pub fn snapshot(&self) -> RotationState {
        self.shared.lock().state.clone()
    }
}

impl Drop for TitleRotator {
    fn drop(&mut self) {
        self.deactivate();
    }
}

async fn run_rotation(
    shared: Arc<Mutex<Shared>>,
    surface: Arc<dyn TitleSurface>,
    timings: RotationTimings,
    mut phase: Phase,
    start: Instant,
) {
    let mut deadline = start;
    loop {
        deadline += timings.delay_for(phase);
        sleep_until(deadline).await;
        match apply_tick(&shared, surface.as_ref()) {
            Some(next) => phase = next,
            None => return,
        }
    }
}

/// Apply one tick. Returns the new phase, or `None` once deactivated.
fn apply_tick(shared: &Mutex<Shared>, surface: &dyn TitleSurface) -> Option<Phase> {
    let mut shared = shared.lock();
    if !shared.active {
        return None;
    }
    shared.state = RotatorReducer::reduce(std::mem::take(&mut shared.state), RotatorIntent::Tick);
    surface.present(TitleFrame::animated(shared.state.displayed()));
    Some(shared.state.phase())
}
