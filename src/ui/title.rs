//! Bridge between the title rotator and the render loop.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::events::AppEvent;
use crate::ui::rotator::{TitleFrame, TitleSurface};

/// Latest rotator frame, shared with the renderer.
#[derive(Clone, Default)]
pub struct SharedTitle {
    frame: Arc<Mutex<TitleFrame>>,
}

impl SharedTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> TitleFrame {
        self.frame.lock().clone()
    }

    fn store(&self, frame: TitleFrame) -> bool {
        let mut current = self.frame.lock();
        if *current == frame {
            return false;
        }
        *current = frame;
        true
    }
}

impl TitleSurface for SharedTitle {
    fn present(&self, frame: TitleFrame) {
        self.store(frame);
    }
}

/// Stores frames and wakes the event loop when the title changes.
pub struct RedrawSurface {
    title: SharedTitle,
    events: Sender<AppEvent>,
}

impl RedrawSurface {
    pub fn new(title: SharedTitle, events: Sender<AppEvent>) -> Self {
        Self { title, events }
    }
}

impl TitleSurface for RedrawSurface {
    fn present(&self, frame: TitleFrame) {
        if self.title.store(frame) {
            let _ = self.events.send(AppEvent::TitleChanged);
        }
    }
}
